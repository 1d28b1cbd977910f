use super::delete_record;
use crate::{
    db::{db::Db, routes::Route},
    libs::{messages::Message, view::View},
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct RouteArgs {
    #[command(subcommand)]
    command: RouteCommand,
}

#[derive(Debug, Subcommand)]
enum RouteCommand {
    /// Add a route to an area
    Add {
        /// Route name
        name: String,
        /// ID of the area the route is in
        #[arg(short, long)]
        area: i64,
        /// Grade, e.g. 5.10a or V4
        #[arg(short, long)]
        grade: String,
        /// Length in meters
        #[arg(long, default_value_t = 0)]
        length: u32,
        #[arg(long, default_value_t = 1)]
        pitches: u32,
        /// Quality rating, 0 to 4
        #[arg(long, default_value_t = 0)]
        stars: u32,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// List routes of an area, a crag, or all of them
    List {
        #[arg(short, long, conflicts_with = "crag")]
        area: Option<i64>,
        #[arg(short, long)]
        crag: Option<i64>,
    },
    /// Delete a route that has no ticks left
    Delete {
        /// Route ID
        id: i64,
    },
}

pub fn cmd(db: &Db, args: RouteArgs) -> Result<()> {
    match args.command {
        RouteCommand::Add {
            name,
            area,
            grade,
            length,
            pitches,
            stars,
            url,
            comment,
        } => {
            let area = db.get_area(area)?.ok_or_else(|| msg_error_anyhow!(Message::AreaNotFound(area)))?;
            let mut route = Route::new(&area, &name, &grade);
            route.length = length;
            route.pitches = pitches;
            route.stars = stars;
            route.url = url;
            route.comment = comment;

            let id = db.insert(&mut route)?;
            msg_success!(Message::RouteCreated(route.name, id));
            Ok(())
        }
        RouteCommand::List { area, crag } => {
            let routes = match (area, crag) {
                (Some(area_id), _) => db.get_routes(area_id)?,
                (None, Some(crag_id)) => db.get_crag_routes(crag_id)?,
                (None, None) => db.get_all_routes()?,
            };
            if routes.is_empty() {
                msg_info!(Message::NoRoutesFound);
                return Ok(());
            }
            msg_print!(Message::RoutesHeader);
            View::routes(&routes);
            Ok(())
        }
        RouteCommand::Delete { id } => {
            let route = db.get_route(id)?.ok_or_else(|| msg_error_anyhow!(Message::RouteNotFound(id)))?;
            delete_record(db, &route)
        }
    }
}
