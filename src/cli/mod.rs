//! Command-line surface for jobwire.

mod completion;
pub mod pause;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use completion::Completion;

use crate::config::{Config, ReportFormat};

#[derive(Parser, Debug)]
#[command(
    name = "jobwire",
    version,
    about = "Book electrician jobs at the console and print the work schedule"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate shell completion scripts
    Completion(Completion),
}

/// Flags for the intake session. Each one overrides its env var.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Report format (env: JOBWIRE_REPORT_FORMAT)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Print the detailed wiring schema step (env: JOBWIRE_DETAILED_SCHEMA)
    #[arg(long)]
    pub detailed_schema: bool,

    /// Append the building-specific task note to each summary (env: JOBWIRE_TASK_NOTES)
    #[arg(long)]
    pub task_notes: bool,

    /// Exit right after the report instead of waiting for a key press
    #[arg(long)]
    pub no_pause: bool,

    /// Load settings from this env file instead of ./.env
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

impl RunArgs {
    /// Load config from the environment, then apply these flags on top.
    pub fn load_config(&self) -> Result<Config, crate::error::ConfigError> {
        let mut config = match &self.env_file {
            Some(path) => Config::from_env_file(path)?,
            None => Config::from_env()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Flags only ever switch features on (or the pause off).
    pub fn apply(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if self.detailed_schema {
            config.report.detailed_schema = true;
        }
        if self.task_notes {
            config.report.task_notes = true;
        }
        if self.no_pause {
            config.pause_on_exit = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_runs_intake() {
        let cli = Cli::try_parse_from(["jobwire"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.run.no_pause);
        assert!(cli.run.format.is_none());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "jobwire",
            "--format",
            "json",
            "--detailed-schema",
            "--task-notes",
            "--no-pause",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.run.apply(&mut config);
        assert_eq!(config.report.format, ReportFormat::Json);
        assert!(config.report.detailed_schema);
        assert!(config.report.task_notes);
        assert!(!config.pause_on_exit);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let mut config = Config::default();
        config.report.task_notes = true;
        RunArgs::default().apply(&mut config);
        assert!(config.report.task_notes);
        assert!(config.pause_on_exit);
    }

    #[test]
    fn completion_subcommand_parses() {
        let cli = Cli::try_parse_from(["jobwire", "completion", "--shell", "bash"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Completion(_))));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["jobwire", "--format", "xml"]).is_err());
    }
}
