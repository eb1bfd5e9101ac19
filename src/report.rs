//! Job schedule report.
//!
//! Walks the job list in intake order and prints the fixed workflow for each
//! job: wiring schema, parts purchase, the building-specific task, then the
//! one-line summary with the card masked.

use std::io::Write;

use crate::config::{ReportFormat, ReportOptions};
use crate::error::Error;
use crate::jobs::{BuildingType, JobList, JobRecord};

pub const SCHEDULE_HEADING: &str = "----- Job Schedule -----";

/// Write the schedule for every job in `jobs`.
pub fn write_report<W: Write>(
    jobs: &JobList,
    options: &ReportOptions,
    out: &mut W,
) -> Result<(), Error> {
    match options.format {
        ReportFormat::Text => write_text(jobs, options, out),
        ReportFormat::Json => write_json(jobs, out),
    }
}

fn write_text<W: Write>(
    jobs: &JobList,
    options: &ReportOptions,
    out: &mut W,
) -> Result<(), Error> {
    writeln!(out)?;
    writeln!(out, "{SCHEDULE_HEADING}")?;
    for job in jobs {
        write_job(job, options, out)?;
    }
    Ok(())
}

/// The four workflow steps for one job, followed by a blank line.
pub fn write_job<W: Write>(
    job: &JobRecord,
    options: &ReportOptions,
    out: &mut W,
) -> Result<(), Error> {
    let building = job.building_type();
    writeln!(out, "{}", wiring_schema_line(building, options.detailed_schema))?;
    writeln!(out, "{}", parts_purchase_line(building))?;
    writeln!(out, "{}", building.supplementary_task())?;
    if options.task_notes {
        writeln!(out, "{} ({})", job.summary(), building.task_note())?;
    } else {
        writeln!(out, "{}", job.summary())?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn wiring_schema_line(building: BuildingType, detailed: bool) -> String {
    if detailed {
        format!("Creating a detailed wiring schema for {building}...")
    } else {
        format!("Creating wiring schema for {building}...")
    }
}

pub fn parts_purchase_line(building: BuildingType) -> String {
    format!("Purchasing parts for {building} project...")
}

fn write_json<W: Write>(jobs: &JobList, out: &mut W) -> Result<(), Error> {
    writeln!(out)?;
    serde_json::to_writer_pretty(&mut *out, jobs)?;
    writeln!(out)?;
    Ok(())
}
