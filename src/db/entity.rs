//! Generic data-mapper shared by every record type.
//!
//! A record type describes itself through [`Entity`]: its table, its column
//! list and how to turn itself into SQL values and back. The operations on
//! [`Db`] below build the statement text from those constants once, so crags,
//! areas, routes and ticks all go through the same insert/update/delete and
//! query code. Every value is bound through a numbered placeholder.
//!
//! ```rust,no_run
//! use choo_choo::db::{crags::Crag, db::Db};
//!
//! let db = Db::open_in_memory()?;
//! let mut crag = Crag::new("Little Si", "North Bend, WA");
//! let id = db.insert(&mut crag)?;
//! assert_eq!(crag.id, id);
//! # Ok::<(), choo_choo::db::error::DbError>(())
//! ```

use super::db::Db;
use super::error::{DbError, Result};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Row};
use tracing::debug;

/// Capabilities a record needs to be stored by the generic mapper.
pub trait Entity: Sized {
    /// Table holding records of this type.
    const TABLE: &'static str;

    /// Store-assigned identity, `0` until the record is inserted.
    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Links the record to its direct parent. Top-level records ignore it.
    fn set_parent_id(&mut self, _id: i64) {}

    /// Column names in schema order, identity excluded.
    fn keys() -> &'static [&'static str];

    /// Column values in the same order as [`Entity::keys`].
    fn values(&self) -> Vec<Value>;

    /// Builds a record from a `SELECT *` row, reading columns positionally
    /// with the identity at index 0.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

pub(crate) fn insert_sql(table: &str, keys: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=keys.len()).map(|i| format!("?{}", i)).collect();
    format!("INSERT INTO {} ({}) VALUES ({})", table, keys.join(", "), placeholders.join(", "))
}

pub(crate) fn update_sql(table: &str, keys: &[&str]) -> String {
    let assignments: Vec<String> = keys.iter().enumerate().map(|(i, key)| format!("{} = ?{}", key, i + 1)).collect();
    format!("UPDATE {} SET {} WHERE id = ?{}", table, assignments.join(", "), keys.len() + 1)
}

pub(crate) fn delete_sql(table: &str) -> String {
    format!("DELETE FROM {} WHERE id = ?1", table)
}

pub(crate) fn select_sql(table: &str, column: Option<&str>) -> String {
    match column {
        Some(column) => format!("SELECT * FROM {} WHERE {} = ?1", table, column),
        None => format!("SELECT * FROM {}", table),
    }
}

impl Db {
    /// Inserts `record`, stores the assigned identity back into it and
    /// returns that identity.
    pub fn insert<T: Entity>(&self, record: &mut T) -> Result<i64> {
        let sql = insert_sql(T::TABLE, T::keys());
        debug!(table = T::TABLE, "{}", sql);
        self.conn.execute(&sql, params_from_iter(record.values()))?;

        let id = self.conn.last_insert_rowid();
        record.set_id(id);
        Ok(id)
    }

    /// Points `record` at `parent` and inserts it.
    pub fn insert_child<P: Entity, T: Entity>(&self, parent: &P, record: &mut T) -> Result<i64> {
        if parent.id() == 0 {
            return Err(DbError::MissingId { table: P::TABLE });
        }
        record.set_parent_id(parent.id());
        self.insert(record)
    }

    /// Rewrites every column of an already inserted record.
    pub fn update<T: Entity>(&self, record: &T) -> Result<()> {
        let id = Self::require_id(record)?;
        let sql = update_sql(T::TABLE, T::keys());
        debug!(table = T::TABLE, id, "{}", sql);

        let mut values = record.values();
        values.push(Value::Integer(id));
        let affected = self.conn.execute(&sql, params_from_iter(values))?;
        if affected == 0 {
            return Err(DbError::NotFound { table: T::TABLE, id });
        }
        Ok(())
    }

    /// Removes `record`. Fails while other records still reference it.
    pub fn delete<T: Entity>(&self, record: &T) -> Result<()> {
        let id = Self::require_id(record)?;
        let sql = delete_sql(T::TABLE);
        debug!(table = T::TABLE, id, "{}", sql);

        let affected = self.conn.execute(&sql, [id])?;
        if affected == 0 {
            return Err(DbError::NotFound { table: T::TABLE, id });
        }
        Ok(())
    }

    /// All records whose `parent_column` equals `parent_id`, in the order
    /// SQLite returns them.
    pub fn query_by_parent<T: Entity>(&self, parent_column: &str, parent_id: i64) -> Result<Vec<T>> {
        if !T::keys().iter().any(|key| *key == parent_column) {
            return Err(DbError::UnknownColumn {
                table: T::TABLE,
                column: parent_column.to_string(),
            });
        }
        self.query(&select_sql(T::TABLE, Some(parent_column)), &[Value::Integer(parent_id)])
    }

    pub fn query_all<T: Entity>(&self) -> Result<Vec<T>> {
        self.query(&select_sql(T::TABLE, None), &[])
    }

    pub fn get_by_id<T: Entity>(&self, id: i64) -> Result<Option<T>> {
        let mut records = self.query(&select_sql(T::TABLE, Some("id")), &[Value::Integer(id)])?;
        Ok(records.pop())
    }

    fn require_id<T: Entity>(record: &T) -> Result<i64> {
        match record.id() {
            0 => Err(DbError::MissingId { table: T::TABLE }),
            id => Ok(id),
        }
    }
}
