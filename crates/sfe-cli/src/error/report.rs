//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, surfacing its hint as help text
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint.to_string(), "Configuration error: {}", err),
        None => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_hint_becomes_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::UnknownMode {
            value: "qa".to_string(),
        }));
        let help = report.help().map(|h| h.to_string());
        assert!(help.is_some_and(|h| h.contains("drop --strict")));
        assert!(report.to_string().contains("unknown build mode 'qa'"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::Custom("bad".to_string()));
        assert_eq!(report.to_string(), "bad");
    }
}
