//! Database layer for the choo-choo climbing log.
//!
//! Persists crags, areas, routes and ticks in a single SQLite file. The four
//! tables form a foreign-key hierarchy (crag → area → route → tick) which
//! SQLite enforces on every connection opened through [`db::Db`].
//!
//! ## Features
//!
//! - **Connection Handle**: One explicitly owned connection per process
//! - **Idempotent Schema**: `CREATE TABLE IF NOT EXISTS` applied on every open
//! - **Generic Mapping**: Insert, update, delete and scans shared by all records
//! - **Hierarchy Queries**: Lookups by route, area, crag or across the whole log
//!
//! ## Usage
//!
//! ```rust,no_run
//! use choo_choo::db::{areas::Area, crags::Crag, db::Db, routes::Route, ticks::Tick};
//! use chrono::Utc;
//!
//! let db = Db::open_in_memory()?;
//! let mut crag = Crag::new("Little Si", "North Bend, WA");
//! db.insert(&mut crag)?;
//! let mut area = Area::new(&crag, "Boulders");
//! db.insert(&mut area)?;
//! let mut route = Route::new(&area, "Cobra Crack", "5.10a");
//! db.insert(&mut route)?;
//! let mut tick = Tick::new(&route, Utc::now());
//! tick.redpoint = true;
//! db.insert(&mut tick)?;
//!
//! let ticks = db.get_crag_ticks(crag.id)?;
//! # Ok::<(), choo_choo::db::error::DbError>(())
//! ```
//!
//! ## Deleting
//!
//! Deletes never cascade. Removing a crag, area or route that still has
//! children fails with a foreign-key error; remove the children first.

/// Connection handle, schema application and the row-scanning primitive.
pub mod db;

/// The `Entity` trait and the generic insert/update/delete/query operations.
pub mod entity;

/// Persistence error type.
pub mod error;

pub mod areas;
pub mod crags;
pub mod routes;

/// Logged attempts and ascents, with lookups at every level of the hierarchy.
pub mod ticks;
