//! Ticks: one logged attempt or ascent of a route on a given day.
//!
//! A tick carries the ids of its whole ancestry (route, area and crag) so that
//! the log can be filtered at any level without joins. The ascent-style flags
//! are stored independently; the store accepts any combination of them.

use super::db::Db;
use super::entity::Entity;
use super::error::Result;
use super::routes::Route;
use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::Row;

pub const SCHEMA_TICKS: &str = "CREATE TABLE IF NOT EXISTS ticks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    crag_id INTEGER NOT NULL,
    area_id INTEGER NOT NULL,
    route_id INTEGER NOT NULL,
    date DATE NOT NULL,
    lead BOOLEAN NOT NULL,
    redpoint BOOLEAN NOT NULL,
    flash BOOLEAN NOT NULL,
    onsight BOOLEAN NOT NULL,
    falls INTEGER NOT NULL,
    hangs INTEGER NOT NULL,
    attempts INTEGER NOT NULL,
    sessions INTEGER NOT NULL,
    url TEXT,
    comment TEXT,
    FOREIGN KEY (route_id) REFERENCES routes (id),
    FOREIGN KEY (area_id) REFERENCES areas (id),
    FOREIGN KEY (crag_id) REFERENCES crags (id)
)";

const KEYS: &[&str] = &[
    "crag_id", "area_id", "route_id", "date", "lead", "redpoint", "flash", "onsight", "falls", "hangs", "attempts", "sessions", "url", "comment",
];

/// Column index of `date` in a `SELECT *` row.
const DATE_COLUMN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub id: i64,
    pub crag_id: i64,
    pub area_id: i64,
    pub route_id: i64,
    /// Stored as whole seconds since the Unix epoch.
    pub date: DateTime<Utc>,
    pub lead: bool,
    pub redpoint: bool,
    pub flash: bool,
    pub onsight: bool,
    pub falls: u32,
    pub hangs: u32,
    pub attempts: u32,
    pub sessions: u32,
    pub url: String,
    pub comment: String,
}

impl Tick {
    /// An empty tick of `route` on `date`, linked to the route's area and crag.
    pub fn new(route: &Route, date: DateTime<Utc>) -> Self {
        Tick {
            id: 0,
            crag_id: route.crag_id,
            area_id: route.area_id,
            route_id: route.id,
            date,
            lead: false,
            redpoint: false,
            flash: false,
            onsight: false,
            falls: 0,
            hangs: 0,
            attempts: 0,
            sessions: 0,
            url: String::new(),
            comment: String::new(),
        }
    }
}

impl Entity for Tick {
    const TABLE: &'static str = "ticks";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn set_parent_id(&mut self, id: i64) {
        self.route_id = id;
    }

    fn keys() -> &'static [&'static str] {
        KEYS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.crag_id),
            Value::Integer(self.area_id),
            Value::Integer(self.route_id),
            Value::Integer(self.date.timestamp()),
            Value::Integer(self.lead.into()),
            Value::Integer(self.redpoint.into()),
            Value::Integer(self.flash.into()),
            Value::Integer(self.onsight.into()),
            Value::Integer(self.falls.into()),
            Value::Integer(self.hangs.into()),
            Value::Integer(self.attempts.into()),
            Value::Integer(self.sessions.into()),
            Value::Text(self.url.clone()),
            Value::Text(self.comment.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let seconds: i64 = row.get(DATE_COLUMN)?;
        let date = DateTime::from_timestamp(seconds, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(DATE_COLUMN, seconds))?;

        Ok(Tick {
            id: row.get(0)?,
            crag_id: row.get(1)?,
            area_id: row.get(2)?,
            route_id: row.get(3)?,
            date,
            lead: row.get(5)?,
            redpoint: row.get(6)?,
            flash: row.get(7)?,
            onsight: row.get(8)?,
            falls: row.get(9)?,
            hangs: row.get(10)?,
            attempts: row.get(11)?,
            sessions: row.get(12)?,
            url: row.get::<_, Option<String>>(13)?.unwrap_or_default(),
            comment: row.get::<_, Option<String>>(14)?.unwrap_or_default(),
        })
    }
}

impl Db {
    pub fn get_tick(&self, id: i64) -> Result<Option<Tick>> {
        self.get_by_id(id)
    }

    /// Ticks of a single route.
    pub fn get_ticks(&self, route_id: i64) -> Result<Vec<Tick>> {
        self.query_by_parent("route_id", route_id)
    }

    pub fn get_area_ticks(&self, area_id: i64) -> Result<Vec<Tick>> {
        self.query_by_parent("area_id", area_id)
    }

    pub fn get_crag_ticks(&self, crag_id: i64) -> Result<Vec<Tick>> {
        self.query_by_parent("crag_id", crag_id)
    }

    pub fn get_all_ticks(&self) -> Result<Vec<Tick>> {
        self.query_all()
    }
}
