//! Tick logging command.
//!
//! `tick add` records an attempt on a route; the area and crag are taken from
//! the route so the tick can later be listed at any level of the hierarchy.
//! `tick edit` rewrites only the fields given on the command line.

use super::delete_record;
use crate::{
    db::{db::Db, ticks::Tick},
    libs::{
        messages::Message,
        view::{View, DATE_FORMAT},
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TickArgs {
    #[command(subcommand)]
    command: TickCommand,
}

#[derive(Debug, Subcommand)]
enum TickCommand {
    /// Log a tick on a route
    Add {
        /// ID of the ticked route
        #[arg(short, long)]
        route: i64,
        #[command(flatten)]
        fields: TickFields,
    },
    /// List ticks of a route, an area, a crag, or the whole log
    List {
        #[arg(short, long, conflicts_with_all = ["area", "crag"])]
        route: Option<i64>,
        #[arg(short, long, conflicts_with = "crag")]
        area: Option<i64>,
        #[arg(short, long)]
        crag: Option<i64>,
    },
    /// Show a single tick in detail
    Show {
        /// Tick ID
        id: i64,
    },
    /// Change fields of an existing tick
    Edit {
        /// Tick ID
        id: i64,
        #[command(flatten)]
        fields: TickFields,
    },
    /// Delete a tick
    Delete {
        /// Tick ID
        id: i64,
    },
}

/// Tick attributes settable from the command line. Unset fields keep their
/// current value (or the default for a new tick).
#[derive(Debug, Args)]
struct TickFields {
    /// Date of the attempt, YYYY-MM-DD (defaults to today for new ticks)
    #[arg(short, long)]
    date: Option<String>,
    #[arg(long)]
    attempts: Option<u32>,
    #[arg(long)]
    sessions: Option<u32>,
    #[arg(long)]
    falls: Option<u32>,
    #[arg(long)]
    hangs: Option<u32>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    redpoint: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    flash: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    onsight: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    lead: Option<bool>,
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    comment: Option<String>,
}

impl TickFields {
    fn apply(self, tick: &mut Tick) -> Result<()> {
        if let Some(date) = self.date {
            tick.date = parse_date(&date)?;
        }
        let counts = [
            (&mut tick.attempts, self.attempts),
            (&mut tick.sessions, self.sessions),
            (&mut tick.falls, self.falls),
            (&mut tick.hangs, self.hangs),
        ];
        for (field, value) in counts {
            if let Some(value) = value {
                *field = value;
            }
        }
        let flags = [
            (&mut tick.redpoint, self.redpoint),
            (&mut tick.flash, self.flash),
            (&mut tick.onsight, self.onsight),
            (&mut tick.lead, self.lead),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(url) = self.url {
            tick.url = url;
        }
        if let Some(comment) = self.comment {
            tick.comment = comment;
        }
        Ok(())
    }
}

pub fn cmd(db: &Db, args: TickArgs) -> Result<()> {
    match args.command {
        TickCommand::Add { route, fields } => {
            let route = db.get_route(route)?.ok_or_else(|| msg_error_anyhow!(Message::RouteNotFound(route)))?;
            let mut tick = Tick::new(&route, today());
            tick.attempts = 1;
            tick.sessions = 1;
            fields.apply(&mut tick)?;

            let id = db.insert(&mut tick)?;
            msg_success!(Message::TickCreated(route.name, id));
            Ok(())
        }
        TickCommand::List { route, area, crag } => {
            let ticks = match (route, area, crag) {
                (Some(route_id), _, _) => db.get_ticks(route_id)?,
                (None, Some(area_id), _) => db.get_area_ticks(area_id)?,
                (None, None, Some(crag_id)) => db.get_crag_ticks(crag_id)?,
                (None, None, None) => db.get_all_ticks()?,
            };
            if ticks.is_empty() {
                msg_info!(Message::NoTicksFound);
                return Ok(());
            }
            msg_print!(Message::TicksHeader);
            View::ticks(&ticks);
            Ok(())
        }
        TickCommand::Show { id } => {
            let tick = db.get_tick(id)?.ok_or_else(|| msg_error_anyhow!(Message::TickNotFound(id)))?;
            let route = db.get_route(tick.route_id)?.ok_or_else(|| msg_error_anyhow!(Message::RouteNotFound(tick.route_id)))?;
            msg_print!(View::tick(&route.name, &tick));
            Ok(())
        }
        TickCommand::Edit { id, fields } => {
            let mut tick = db.get_tick(id)?.ok_or_else(|| msg_error_anyhow!(Message::TickNotFound(id)))?;
            fields.apply(&mut tick)?;
            db.update(&tick)?;
            msg_success!(Message::TickUpdated(id));
            Ok(())
        }
        TickCommand::Delete { id } => {
            let tick = db.get_tick(id)?.ok_or_else(|| msg_error_anyhow!(Message::TickNotFound(id)))?;
            delete_record(db, &tick)
        }
    }
}

/// Midnight UTC of the given calendar day.
fn parse_date(date: &str) -> Result<DateTime<Utc>> {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(day) => Ok(day.and_time(chrono::NaiveTime::MIN).and_utc()),
        Err(_) => msg_bail_anyhow!(Message::InvalidDate(date.to_string())),
    }
}

fn today() -> DateTime<Utc> {
    calendar_day(Local::now())
}

/// The user's calendar day at `now`, stored like a parsed `--date`.
fn calendar_day(now: DateTime<Local>) -> DateTime<Utc> {
    now.date_naive().and_time(chrono::NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::routes::Route;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2023-05-01").unwrap(), Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());
        assert!(parse_date("05/01/2023").is_err());
    }

    #[test]
    fn test_calendar_day_follows_local_date() {
        let evening = Local.with_ymd_and_hms(2023, 5, 1, 23, 30, 0).unwrap();
        assert_eq!(calendar_day(evening), parse_date("2023-05-01").unwrap());

        let morning = Local.with_ymd_and_hms(2023, 5, 2, 0, 15, 0).unwrap();
        assert_eq!(calendar_day(morning), parse_date("2023-05-02").unwrap());
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut tick = Tick::new(&Route::default(), Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());
        tick.comment = "dry rock".to_string();
        let fields = TickFields {
            date: None,
            attempts: Some(4),
            sessions: None,
            falls: None,
            hangs: Some(2),
            redpoint: Some(true),
            flash: None,
            onsight: None,
            lead: Some(true),
            url: None,
            comment: None,
        };
        fields.apply(&mut tick).unwrap();

        assert_eq!(tick.attempts, 4);
        assert_eq!(tick.hangs, 2);
        assert!(tick.redpoint && tick.lead);
        assert!(!tick.flash);
        assert_eq!(tick.comment, "dry rock");
    }
}
