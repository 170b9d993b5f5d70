//! Logging setup for the ngv CLI.
//!
//! Events from the ngv crates go through `tracing` to a compact formatter on
//! stderr, so JSON printed on stdout stays clean.
//!
//! # Example
//!
//! ```rust,no_run
//! use ngv_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("discovering files");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "ngv_cli=debug,ngv_analysis=debug,ngv_config=debug,ngv_graph=debug";

/// Filter used with `--quiet`.
pub const QUIET_FILTER: &str = "error";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "ngv_cli=info,ngv_analysis=info,ngv_config=info";

/// Initialize the tracing subscriber.
///
/// The level is chosen in this order:
/// 1. `--verbose`: debug for the ngv crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. info for the ngv crates
///
/// Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    init_logger_with_filter(filter, no_color || !should_use_colors());
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether colored output should be enabled on stderr.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
