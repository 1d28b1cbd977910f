//! Areas: a wall or sector within a crag.

use super::crags::Crag;
use super::db::Db;
use super::entity::Entity;
use super::error::Result;
use rusqlite::types::Value;
use rusqlite::Row;

pub const SCHEMA_AREAS: &str = "CREATE TABLE IF NOT EXISTS areas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    crag_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    FOREIGN KEY (crag_id) REFERENCES crags (id)
)";

const KEYS: &[&str] = &["crag_id", "name"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Area {
    pub id: i64,
    pub crag_id: i64,
    pub name: String,
}

impl Area {
    pub fn new(crag: &Crag, name: &str) -> Self {
        Area {
            id: 0,
            crag_id: crag.id,
            name: name.to_string(),
        }
    }
}

impl Entity for Area {
    const TABLE: &'static str = "areas";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn set_parent_id(&mut self, id: i64) {
        self.crag_id = id;
    }

    fn keys() -> &'static [&'static str] {
        KEYS
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::Integer(self.crag_id), Value::Text(self.name.clone())]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Area {
            id: row.get(0)?,
            crag_id: row.get(1)?,
            name: row.get(2)?,
        })
    }
}

impl Db {
    pub fn get_area(&self, id: i64) -> Result<Option<Area>> {
        self.get_by_id(id)
    }

    /// Areas belonging to a crag.
    pub fn get_areas(&self, crag_id: i64) -> Result<Vec<Area>> {
        self.query_by_parent("crag_id", crag_id)
    }

    pub fn get_all_areas(&self) -> Result<Vec<Area>> {
        self.query_all()
    }
}
