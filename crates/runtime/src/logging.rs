//! Logger setup.
//!
//! A terminal game owns stdout and stderr, so log records go to a file or
//! nowhere.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::RuntimeConfig;

/// Install the global logger if a log file is configured.
///
/// Returns `Ok(false)` when logging stays off.
pub fn init_logging(config: &RuntimeConfig) -> Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::new()
        .parse_filters(&config.log_filter)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to install logger")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_means_no_logger() {
        let config = RuntimeConfig::default();
        assert!(!init_logging(&config).unwrap());
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let config = RuntimeConfig {
            log_file: Some("/nonexistent-dir/tetris.log".into()),
            ..RuntimeConfig::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
