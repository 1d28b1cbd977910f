//! Routes: a graded line within an area, with optional length, pitch and star metadata.

use super::areas::Area;
use super::db::Db;
use super::entity::Entity;
use super::error::Result;
use rusqlite::types::Value;
use rusqlite::Row;

pub const SCHEMA_ROUTES: &str = "CREATE TABLE IF NOT EXISTS routes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    crag_id INTEGER NOT NULL,
    area_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    grade TEXT NOT NULL,
    length INTEGER NOT NULL,
    pitches INTEGER NOT NULL,
    stars INTEGER NOT NULL,
    url TEXT,
    comment TEXT,
    FOREIGN KEY (area_id) REFERENCES areas (id),
    FOREIGN KEY (crag_id) REFERENCES crags (id)
)";

const KEYS: &[&str] = &["crag_id", "area_id", "name", "grade", "length", "pitches", "stars", "url", "comment"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub id: i64,
    pub crag_id: i64,
    pub area_id: i64,
    pub name: String,
    pub grade: String,
    /// Length in meters, `0` when unknown.
    pub length: u32,
    pub pitches: u32,
    pub stars: u32,
    pub url: String,
    pub comment: String,
}

impl Route {
    /// A single-pitch route in `area`; the crag is taken from the area.
    pub fn new(area: &Area, name: &str, grade: &str) -> Self {
        Route {
            id: 0,
            crag_id: area.crag_id,
            area_id: area.id,
            name: name.to_string(),
            grade: grade.to_string(),
            length: 0,
            pitches: 1,
            stars: 0,
            url: String::new(),
            comment: String::new(),
        }
    }
}

impl Entity for Route {
    const TABLE: &'static str = "routes";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn set_parent_id(&mut self, id: i64) {
        self.area_id = id;
    }

    fn keys() -> &'static [&'static str] {
        KEYS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.crag_id),
            Value::Integer(self.area_id),
            Value::Text(self.name.clone()),
            Value::Text(self.grade.clone()),
            Value::Integer(self.length.into()),
            Value::Integer(self.pitches.into()),
            Value::Integer(self.stars.into()),
            Value::Text(self.url.clone()),
            Value::Text(self.comment.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Route {
            id: row.get(0)?,
            crag_id: row.get(1)?,
            area_id: row.get(2)?,
            name: row.get(3)?,
            grade: row.get(4)?,
            length: row.get(5)?,
            pitches: row.get(6)?,
            stars: row.get(7)?,
            url: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
            comment: row.get::<_, Option<String>>(9)?.unwrap_or_default(),
        })
    }
}

impl Db {
    pub fn get_route(&self, id: i64) -> Result<Option<Route>> {
        self.get_by_id(id)
    }

    /// Routes in an area.
    pub fn get_routes(&self, area_id: i64) -> Result<Vec<Route>> {
        self.query_by_parent("area_id", area_id)
    }

    pub fn get_crag_routes(&self, crag_id: i64) -> Result<Vec<Route>> {
        self.query_by_parent("crag_id", crag_id)
    }

    pub fn get_all_routes(&self) -> Result<Vec<Route>> {
        self.query_all()
    }
}
