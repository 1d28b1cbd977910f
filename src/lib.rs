//! # Choo-Choo - Climbing Log
//!
//! A command-line climbing log that keeps crags, areas, routes and ticks in a
//! local SQLite database.
//!
//! ## Features
//!
//! - **Hierarchical Log**: crag → area → route → tick, with foreign keys enforced
//! - **Generic Persistence**: one data-mapper shared by every record type
//! - **Layered Configuration**: environment, YAML file and built-in defaults
//!
//! ## Usage
//!
//! ```rust,no_run
//! use choo_choo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
