use crate::libs::{config::Config, messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

pub fn cmd(config: &Config) -> Result<()> {
    msg_print!(Message::ConfigHeader);
    View::config(config);
    Ok(())
}
