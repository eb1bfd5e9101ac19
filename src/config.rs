//! Configuration for jobwire.
//!
//! Only presentation is configurable; job data always comes from the
//! console. Priority: CLI flag > env var (including `.env`) > default.

use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub report: ReportOptions,
    /// Wait for a key press after the report (terminals only).
    pub pause_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: ReportOptions::default(),
            pause_on_exit: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// Load an explicit env file first, then read the environment.
    ///
    /// Unlike the implicit `.env`, a missing or malformed file is an error.
    /// Variables already set in the process win over the file.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(path).map_err(|e| {
            ConfigError::ParseError(format!("failed to load {}: {e}", path.display()))
        })?;
        Self::from_process_env()
    }

    fn from_process_env() -> Result<Self, ConfigError> {
        Ok(Self {
            report: ReportOptions::from_env()?,
            pause_on_exit: parse_bool_env("JOBWIRE_PAUSE_ON_EXIT", true)?,
        })
    }
}

/// How the job schedule is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Use the detailed wiring schema wording.
    pub detailed_schema: bool,
    /// Append the building-specific task note to each summary line.
    pub task_notes: bool,
}

impl ReportOptions {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            format: parse_optional_env("JOBWIRE_REPORT_FORMAT", ReportFormat::default())?,
            detailed_schema: parse_bool_env("JOBWIRE_DETAILED_SCHEMA", false)?,
            task_notes: parse_bool_env("JOBWIRE_TASK_NOTES", false)?,
        })
    }
}

/// Output format of the job schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Workflow lines and one summary per job
    #[default]
    Text,
    /// Pretty-printed JSON array with masked card numbers
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "invalid report format '{}', expected 'text' or 'json'",
                s
            )),
        }
    }
}

// Helper functions

/// Read an env var, treating an empty value the same as an unset one.
pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to read {key}: {e}"
        ))),
    }
}

/// Parse an env var with `FromStr`, falling back to `default` when unset.
pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|opt| opt.unwrap_or(default))
}

/// Like [`parse_optional_env`] but also accepts `1`/`0`, `yes`/`no`, `on`/`off`.
pub(crate) fn parse_bool_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = optional_env(key)? else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{raw}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global, so serialize tests that mutate them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn optional_env_returns_none_for_missing_var() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::remove_var("_TEST_JOBWIRE_MISSING_42") };
        let result = optional_env("_TEST_JOBWIRE_MISSING_42").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn optional_env_returns_none_for_empty_string() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("_TEST_JOBWIRE_EMPTY_42", "") };
        let result = optional_env("_TEST_JOBWIRE_EMPTY_42").unwrap();
        assert!(result.is_none());
        unsafe { std::env::remove_var("_TEST_JOBWIRE_EMPTY_42") };
    }

    #[test]
    fn parse_optional_env_parses_report_format() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("_TEST_JOBWIRE_FORMAT_42", "JSON") };
        let format: ReportFormat =
            parse_optional_env("_TEST_JOBWIRE_FORMAT_42", ReportFormat::Text).unwrap();
        assert_eq!(format, ReportFormat::Json);
        unsafe { std::env::remove_var("_TEST_JOBWIRE_FORMAT_42") };
    }

    #[test]
    fn parse_optional_env_returns_error_for_invalid_value() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("_TEST_JOBWIRE_FORMAT_BAD_42", "xml") };
        let result: Result<ReportFormat, _> =
            parse_optional_env("_TEST_JOBWIRE_FORMAT_BAD_42", ReportFormat::Text);
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("xml"));
        unsafe { std::env::remove_var("_TEST_JOBWIRE_FORMAT_BAD_42") };
    }

    #[test]
    fn parse_bool_env_accepts_common_spellings() {
        let _lock = ENV_LOCK.lock();
        for (raw, expected) in [("1", true), ("YES", true), ("off", false), ("false", false)] {
            unsafe { std::env::set_var("_TEST_JOBWIRE_BOOL_42", raw) };
            assert_eq!(parse_bool_env("_TEST_JOBWIRE_BOOL_42", !expected).unwrap(), expected);
        }
        unsafe { std::env::remove_var("_TEST_JOBWIRE_BOOL_42") };
        assert!(parse_bool_env("_TEST_JOBWIRE_BOOL_42", true).unwrap());
    }

    #[test]
    fn parse_bool_env_rejects_garbage() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("_TEST_JOBWIRE_BOOL_BAD_42", "maybe") };
        let err = parse_bool_env("_TEST_JOBWIRE_BOOL_BAD_42", false).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "_TEST_JOBWIRE_BOOL_BAD_42"));
        unsafe { std::env::remove_var("_TEST_JOBWIRE_BOOL_BAD_42") };
    }

    #[test]
    fn report_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("Plain".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn defaults_pause_and_plain_text() {
        let config = Config::default();
        assert!(config.pause_on_exit);
        assert_eq!(config.report.format, ReportFormat::Text);
        assert!(!config.report.detailed_schema);
        assert!(!config.report.task_notes);
    }
}
