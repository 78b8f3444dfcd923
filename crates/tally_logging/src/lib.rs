#![deny(missing_docs)]
//! Shared logging setup for the wordtally workspace.
//!
//! All crates log through the `log` facade; this crate owns the `simplelog`
//! backend configuration so embedding programs and tests initialize it the
//! same way.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Initializes a terminal logger at the given level.
///
/// Silently does nothing if a global logger has already been installed.
pub fn initialize(level: LevelFilter) {
    let _ = TermLogger::init(level, build_config(), TerminalMode::Mixed, ColorChoice::Auto);
}

/// Initializes a terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized, so
/// every test may call it without coordinating.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    initialize(level);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
