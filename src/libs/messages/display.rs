//! Display implementation for choo-choo application messages.
//!
//! Keeps all user-facing text in one match so wording stays consistent
//! across commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CRAG MESSAGES ===
            Message::CragCreated(name, id) => format!("Crag '{}' created with ID {}", name, id),
            Message::CragNotFound(id) => format!("Crag with ID {} not found.", id),
            Message::CragsHeader => "Crags:".to_string(),
            Message::NoCragsFound => "No crags found.".to_string(),

            // === AREA MESSAGES ===
            Message::AreaCreated(name, id) => format!("Area '{}' created with ID {}", name, id),
            Message::AreaNotFound(id) => format!("Area with ID {} not found.", id),
            Message::AreasHeader => "Areas:".to_string(),
            Message::NoAreasFound => "No areas found.".to_string(),

            // === ROUTE MESSAGES ===
            Message::RouteCreated(name, id) => format!("Route '{}' created with ID {}", name, id),
            Message::RouteNotFound(id) => format!("Route with ID {} not found.", id),
            Message::RoutesHeader => "Routes:".to_string(),
            Message::NoRoutesFound => "No routes found.".to_string(),

            // === TICK MESSAGES ===
            Message::TickCreated(route, id) => format!("Ticked '{}' (tick ID {})", route, id),
            Message::TickUpdated(id) => format!("Tick {} updated successfully.", id),
            Message::TickNotFound(id) => format!("Tick with ID {} not found.", id),
            Message::TicksHeader => "Ticks:".to_string(),
            Message::NoTicksFound => "No ticks found.".to_string(),
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD", date),

            // === GENERIC RECORD MESSAGES ===
            Message::RecordDeleted(table, id) => format!("Deleted {} record {}.", table, id),
            Message::RecordDeleteFailed(table, id) => format!("Failed to delete {} record {}", table, id),
            Message::RecordHasChildren(table, id) => {
                format!("Cannot delete {} record {}: other records still reference it. Delete them first.", table, id)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigHeader => "Configuration:".to_string(),
            Message::ConfigLoadFailed(error) => format!("Failed to load configuration: {}", error),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpenFailed(error) => format!("Failed to open database: {}", error),
        };
        write!(f, "{}", text)
    }
}
