//! Supporting modules for the choo-choo application.
//!
//! - **Configuration**: layered resolution of environment, YAML file and defaults
//! - **Messages**: user-facing text and the `msg_*` output macros
//! - **View**: terminal tables for records and configuration

pub mod config;
pub mod messages;
pub mod view;
