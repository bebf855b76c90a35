//! Logging setup
//!
//! The library only emits through the `log` facade; the binary installs an
//! `env_logger` backend here.

use log::LevelFilter;

/// Initialize logging for the CLI.
///
/// Uses `Debug` level if `verbose` is set, `Warn` otherwise. `RUST_LOG`
/// overrides both when present. Safe to call more than once: later calls are
/// ignored.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
