use super::areas::SCHEMA_AREAS;
use super::crags::SCHEMA_CRAGS;
use super::entity::Entity;
use super::error::{DbError, Result};
use super::routes::SCHEMA_ROUTES;
use super::ticks::SCHEMA_TICKS;
use crate::libs::config::Config;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DB_FILE_NAME: &str = "choo-choo.db";

/// Table DDL in dependency order: every table comes after the ones it
/// references.
pub const SCHEMAS: [&str; 4] = [SCHEMA_CRAGS, SCHEMA_AREAS, SCHEMA_ROUTES, SCHEMA_TICKS];

/// The single open connection to the climbing log.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database file inside `dir`, creating the
    /// directory if needed, and applies the schema.
    pub fn open(dir: impl AsRef<Path>) -> Result<Db> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let db_file_path = dir.join(DB_FILE_NAME);
        debug!(path = %db_file_path.display(), "opening database");

        Self::init(Connection::open(db_file_path)?)
    }

    pub fn open_in_memory() -> Result<Db> {
        Self::init(Connection::open_in_memory()?)
    }

    pub fn from_config(config: &Config) -> Result<Db> {
        Self::open(&config.database)
    }

    fn init(conn: Connection) -> Result<Db> {
        // SQLite leaves foreign keys unenforced unless asked, per connection.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Db { conn };
        db.apply_schema()?;
        Ok(db)
    }

    /// Creates any missing table. Existing tables and their rows are left
    /// untouched, so this can run on every start.
    pub fn apply_schema(&self) -> Result<()> {
        for schema in SCHEMAS {
            self.conn.execute(schema, [])?;
        }
        Ok(())
    }

    /// Runs `sql` with `args` bound to its placeholders and scans every row
    /// into a new `T`. The statement and its cursor are released before this
    /// returns.
    pub fn query<T: Entity>(&self, sql: &str, args: &[Value]) -> Result<Vec<T>> {
        debug!(table = T::TABLE, "{}", sql);
        let mut stmt = self.conn.prepare(sql)?;

        let expected = T::keys().len() + 1;
        let found = stmt.column_count();
        if found != expected {
            return Err(DbError::RowShape {
                table: T::TABLE,
                expected,
                found,
            });
        }

        let record_iter = stmt.query_map(params_from_iter(args.iter()), |row| T::from_row(row))?;
        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }

        Ok(records)
    }
}
