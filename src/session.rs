//! One full run: intake, then the schedule report, then the closing line.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::Error;
use crate::intake::Intake;
use crate::jobs::JobList;
use crate::report;

/// Run intake to completion and print the schedule.
///
/// `pausing` only changes the closing line; waiting for the key press is
/// left to the caller since it needs a real terminal.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &Config,
    pausing: bool,
) -> Result<JobList, Error> {
    tracing::info!(format = ?config.report.format, "intake session started");

    let jobs = Intake::new(input, &mut output).run()?;
    report::write_report(&jobs, &config.report, &mut output)?;
    writeln!(output, "{}", closing_line(pausing))?;
    output.flush()?;

    tracing::info!(jobs = jobs.len(), "schedule printed");
    Ok(jobs)
}

pub fn closing_line(pausing: bool) -> &'static str {
    if pausing {
        "Job schedule complete. Press any key to exit."
    } else {
        "Job schedule complete."
    }
}
