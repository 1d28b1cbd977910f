pub mod area;
pub mod config;
pub mod crag;
pub mod route;
pub mod tick;

use crate::db::{db::Db, entity::Entity};
use crate::libs::{config::Config, messages::Message};
use crate::{msg_error_anyhow, msg_success};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Manage crags")]
    Crag(crag::CragArgs),
    #[command(about = "Manage areas within a crag")]
    Area(area::AreaArgs),
    #[command(about = "Manage routes within an area")]
    Route(route::RouteArgs),
    #[command(about = "Log and review ticks")]
    Tick(tick::TickArgs),
    #[command(about = "Show the resolved configuration")]
    Config,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::load().map_err(|e| msg_error_anyhow!(Message::ConfigLoadFailed(e.to_string())))?;

        if let Commands::Config = cli.command {
            return config::cmd(&config);
        }

        let db = Db::from_config(&config).map_err(|e| msg_error_anyhow!(Message::DatabaseOpenFailed(e.to_string())))?;
        match cli.command {
            Commands::Crag(args) => crag::cmd(&db, args),
            Commands::Area(args) => area::cmd(&db, args),
            Commands::Route(args) => route::cmd(&db, args),
            Commands::Tick(args) => tick::cmd(&db, args),
            Commands::Config => config::cmd(&config),
        }
    }
}

/// Deletes `record`, turning a foreign-key refusal into a message that tells
/// the user to remove the dependent records first.
pub(crate) fn delete_record<T: Entity>(db: &Db, record: &T) -> Result<()> {
    match db.delete(record) {
        Ok(()) => {
            msg_success!(Message::RecordDeleted(T::TABLE, record.id()));
            Ok(())
        }
        Err(e) if e.is_constraint_violation() => Err(msg_error_anyhow!(Message::RecordHasChildren(T::TABLE, record.id()))),
        Err(e) => Err(e).context(Message::RecordDeleteFailed(T::TABLE, record.id())),
    }
}
