use super::delete_record;
use crate::{
    db::{areas::Area, db::Db},
    libs::{messages::Message, view::View},
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct AreaArgs {
    #[command(subcommand)]
    command: AreaCommand,
}

#[derive(Debug, Subcommand)]
enum AreaCommand {
    /// Add an area to a crag
    Add {
        /// Area name
        name: String,
        /// ID of the crag the area belongs to
        #[arg(short, long)]
        crag: i64,
    },
    /// List areas, optionally only those of one crag
    List {
        #[arg(short, long)]
        crag: Option<i64>,
    },
    /// Delete an area that has no routes left
    Delete {
        /// Area ID
        id: i64,
    },
}

pub fn cmd(db: &Db, args: AreaArgs) -> Result<()> {
    match args.command {
        AreaCommand::Add { name, crag } => {
            let crag = db.get_crag(crag)?.ok_or_else(|| msg_error_anyhow!(Message::CragNotFound(crag)))?;
            let mut area = Area {
                name,
                ..Area::default()
            };
            let id = db.insert_child(&crag, &mut area)?;
            msg_success!(Message::AreaCreated(area.name, id));
            Ok(())
        }
        AreaCommand::List { crag } => {
            let areas = match crag {
                Some(crag_id) => db.get_areas(crag_id)?,
                None => db.get_all_areas()?,
            };
            if areas.is_empty() {
                msg_info!(Message::NoAreasFound);
                return Ok(());
            }
            msg_print!(Message::AreasHeader);
            View::areas(&areas);
            Ok(())
        }
        AreaCommand::Delete { id } => {
            let area = db.get_area(id)?.ok_or_else(|| msg_error_anyhow!(Message::AreaNotFound(id)))?;
            delete_record(db, &area)
        }
    }
}
