//! Demo configuration
//!
//! Settings come from environment variables, optionally seeded from `.env`.

use std::str::FromStr;

/// Transcript output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable status lines
    #[default]
    Text,
    /// Pretty JSON snapshot of the branch and order
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Demo configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | Default log filter |
/// | LOG_JSON | false | JSON log lines |
/// | OUTPUT_FORMAT | text | `text` transcript or `json` snapshot |
/// | CURRENCY_SYMBOL | $ | Money prefix in the transcript |
/// | RESERVATION_OFFSET_DAYS | 1 | Reservation day = today + N |
/// | WAIT_FOR_EXIT | true | Show the exit prompt and wait for Enter |
///
/// # Example
///
/// ```ignore
/// OUTPUT_FORMAT=json WAIT_FOR_EXIT=false cargo run -p crab-demo
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    pub output_format: OutputFormat,
    pub currency_symbol: String,
    pub reservation_offset_days: i64,
    pub wait_for_exit: bool,
}

impl Config {
    /// Exit prompt is part of the text transcript only
    pub fn prompts_on_exit(&self) -> bool {
        self.wait_for_exit && self.output_format == OutputFormat::Text
    }

    /// Load configuration from the environment
    ///
    /// Unset or unparseable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Used by tests to avoid touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
            output_format: lookup("OUTPUT_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.output_format),
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            reservation_offset_days: lookup("RESERVATION_OFFSET_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.reservation_offset_days),
            wait_for_exit: lookup("WAIT_FOR_EXIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.wait_for_exit),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_json: false,
            output_format: OutputFormat::Text,
            currency_symbol: "$".into(),
            reservation_offset_days: 1,
            wait_for_exit: true,
        }
    }
}
