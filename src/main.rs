use choo_choo::commands::Cli;
use choo_choo::libs::messages::macros::is_debug_mode;
use choo_choo::msg_error;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("choo_choo=debug"));
        tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
