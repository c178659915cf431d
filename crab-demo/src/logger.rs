//! Logging Infrastructure
//!
//! Console logging on stderr so stdout carries only the transcript.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logger
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_format("info", false)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Default filter (e.g., "info", "debug", "shared=debug"); `RUST_LOG` wins when set
/// * `json_format` - Emit JSON lines instead of the human format
pub fn init_logger_with_format(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr);
        subscriber.with(console_layer).try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);
        subscriber.with(console_layer).try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_subscriber_installs_once() {
        let _ = init_logger();
        assert!(init_logger_with_format("debug", true).is_err());
    }
}
