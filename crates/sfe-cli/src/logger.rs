//! Logging infrastructure for the sfe CLI.
//!
//! Structured logging via `tracing`. `--verbose` turns on debug events for
//! the sfe crates, `--quiet` keeps errors only, and otherwise `RUST_LOG`
//! (falling back to info) decides.
//!
//! # Example
//!
//! ```rust,no_run
//! use sfe_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, true);
//! info!("writing webpack.config.js");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "sfe=debug,sfe_cli=debug,sfe_config=debug";
const QUIET_FILTER: &str = "sfe=error,sfe_cli=error,sfe_config=error";
const DEFAULT_FILTER: &str = "sfe=info,sfe_cli=info,sfe_config=info";

/// Pick the filter directives for the given flags.
///
/// `None` means "defer to `RUST_LOG`, else [`DEFAULT_FILTER`]".
fn filter_directives(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_FILTER)
    } else if quiet {
        Some(QUIET_FILTER)
    } else {
        None
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so rendered configs on stdout stay clean. `use_color`
/// is the decision made by [`crate::ui::init_colors`].
pub fn init_logger(verbose: bool, quiet: bool, use_color: bool) {
    let filter = match filter_directives(verbose, quiet) {
        Some(directives) => EnvFilter::new(directives),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(use_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(filter_directives(true, true), Some(VERBOSE_FILTER));
    }

    #[test]
    fn quiet_keeps_errors_only() {
        assert_eq!(filter_directives(false, true), Some(QUIET_FILTER));
    }

    #[test]
    fn default_defers_to_environment() {
        assert_eq!(filter_directives(false, false), None);
    }

    #[test]
    fn directives_parse() {
        for directives in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok());
        }
    }
}
