//! Error type for the persistence layer.
//!
//! Query and constraint failures are propagated unchanged from SQLite. The
//! remaining variants cover caller mistakes (operating on a record that was
//! never inserted) and schema-consistency bugs detected while scanning rows.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("cannot prepare storage directory: {0}")]
    Io(#[from] std::io::Error),

    /// Update or delete issued for a record whose identity was never assigned.
    #[error("{table} record has no id; insert it first")]
    MissingId { table: &'static str },

    #[error("no {table} record with id {id}")]
    NotFound { table: &'static str, id: i64 },

    #[error("{table} has no column named '{column}'")]
    UnknownColumn { table: &'static str, column: String },

    /// A row returned by `SELECT *` did not match the declared column list.
    #[error("{table} row has {found} columns, expected {expected}")]
    RowShape {
        table: &'static str,
        expected: usize,
        found: usize,
    },
}

impl DbError {
    /// True when SQLite rejected the statement because of a constraint, such
    /// as a dangling foreign key or an empty NOT NULL column.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DbError::Sqlite(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

pub type Result<T, E = DbError> = std::result::Result<T, E>;
