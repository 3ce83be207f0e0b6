//! Logger setup
//!
//! The library logs through the `log` facade; the binary installs a
//! `simplelog` terminal logger on stderr so stdout stays reserved for results.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Map the `-v` count and `--debug` flag to a level filter
///
/// | input              | level |
/// |--------------------|-------|
/// | none               | Warn  |
/// | `-v`               | Info  |
/// | `-vv` / `--debug`  | Debug |
/// | `-vvv`             | Trace |
pub fn level_for(verbosity: u8, debug: bool) -> LevelFilter {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if debug {
        level.max(LevelFilter::Debug)
    } else {
        level
    }
}

/// Install the terminal logger
///
/// Returns an error if a global logger is already set.
pub fn init(verbosity: u8, debug: bool) -> anyhow::Result<()> {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Debug)
        .build();

    TermLogger::init(
        level_for(verbosity, debug),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))
}

/// Initializes a terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
#[cfg(test)]
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
