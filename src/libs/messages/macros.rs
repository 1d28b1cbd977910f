//! Convenient macros for application messaging and logging.
//!
//! Each macro picks its output at runtime: when debug mode is on, messages go
//! through `tracing` so they share the subscriber installed in `main`;
//! otherwise they are printed plainly (errors to stderr).
//!
//! ## Debug Mode Detection
//!
//! Debug mode is enabled when either variable is set:
//! - **`CHOO_CHOO_DEBUG`**: application-specific switch
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! ## Usage Examples
//!
//! ```rust
//! use choo_choo::{msg_error, msg_success};
//! use choo_choo::libs::messages::Message;
//!
//! msg_success!(Message::TickUpdated(7));
//! msg_error!(Message::CragNotFound(3));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should be routed through `tracing`. Cached after the
/// first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("CHOO_CHOO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix, to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}

#[cfg(test)]
mod tests {
    use crate::libs::messages::Message;

    #[test]
    fn test_print_macros_accept_messages_and_strings() {
        msg_print!(Message::TicksHeader);
        msg_print!(format!("{} ticks", 2));
        msg_info!(Message::NoTicksFound);
    }
}
