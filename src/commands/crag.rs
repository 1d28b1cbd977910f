use super::delete_record;
use crate::{
    db::{crags::Crag, db::Db},
    libs::{messages::Message, view::View},
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct CragArgs {
    #[command(subcommand)]
    command: CragCommand,
}

#[derive(Debug, Subcommand)]
enum CragCommand {
    /// Add a new crag
    Add {
        /// Crag name
        name: String,
        /// Where the crag is, e.g. "North Bend, WA"
        #[arg(short, long, default_value = "")]
        location: String,
    },
    /// List all crags
    List,
    /// Delete a crag that has no areas left
    Delete {
        /// Crag ID
        id: i64,
    },
}

pub fn cmd(db: &Db, args: CragArgs) -> Result<()> {
    match args.command {
        CragCommand::Add { name, location } => {
            let mut crag = Crag::new(&name, &location);
            let id = db.insert(&mut crag)?;
            msg_success!(Message::CragCreated(crag.name, id));
            Ok(())
        }
        CragCommand::List => {
            let crags = db.get_all_crags()?;
            if crags.is_empty() {
                msg_info!(Message::NoCragsFound);
                return Ok(());
            }
            msg_print!(Message::CragsHeader);
            View::crags(&crags);
            Ok(())
        }
        CragCommand::Delete { id } => {
            let crag = db.get_crag(id)?.ok_or_else(|| msg_error_anyhow!(Message::CragNotFound(id)))?;
            delete_record(db, &crag)
        }
    }
}
