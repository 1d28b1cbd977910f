//! Crags: the top of the hierarchy, a named climbing destination.

use super::db::Db;
use super::entity::Entity;
use super::error::Result;
use rusqlite::types::Value;
use rusqlite::Row;

pub const SCHEMA_CRAGS: &str = "CREATE TABLE IF NOT EXISTS crags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    location TEXT NOT NULL
)";

const KEYS: &[&str] = &["name", "location"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Crag {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl Crag {
    pub fn new(name: &str, location: &str) -> Self {
        Crag {
            id: 0,
            name: name.to_string(),
            location: location.to_string(),
        }
    }
}

impl Entity for Crag {
    const TABLE: &'static str = "crags";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn keys() -> &'static [&'static str] {
        KEYS
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::Text(self.name.clone()), Value::Text(self.location.clone())]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Crag {
            id: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
        })
    }
}

impl Db {
    pub fn get_crag(&self, id: i64) -> Result<Option<Crag>> {
        self.get_by_id(id)
    }

    pub fn get_all_crags(&self) -> Result<Vec<Crag>> {
        self.query_all()
    }
}
