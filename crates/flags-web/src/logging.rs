//! Browser console logging
//!
//! `tracing` events from every crate are forwarded to the `log` facade (the
//! `log` feature) and printed by `console_log`.

use log::Level;

/// Install the console logger. Safe to call more than once.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };

    if console_log::init_with_level(level).is_err() {
        return;
    }

    tracing::info!(
        "World Flags v{} starting (log level {})",
        env!("CARGO_PKG_VERSION"),
        level
    );
}
