//! Interactive job intake.
//!
//! Reads one field at a time from a line-oriented console. A rejected field
//! prints its diagnostic and asks again, with no attempt limit. The session
//! ends on the `exit` building type or when input runs out; a record that
//! was only partly entered at that point is dropped.

pub mod validate;

use std::io::{self, BufRead, Write};

use crate::error::{Error, FieldError};
use crate::jobs::{JobList, JobRecord};

use self::validate::BuildingChoice;

pub const BUILDING_PROMPT: &str =
    "Enter Building Type (House/Barn/Garage) or 'exit' to finish: ";
pub const SIZE_PROMPT: &str = "Enter size in sq.ft (between 1000 and 50000): ";
pub const BULBS_PROMPT: &str = "Enter number of light bulbs (up to 20): ";
pub const OUTLETS_PROMPT: &str = "Enter number of outlets (up to 50): ";
pub const CARD_PROMPT: &str = "Enter 16-digit credit card number: ";

/// Prompt/response session over any line source and output sink.
pub struct Intake<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Intake<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print the banner and collect jobs until `exit` or end of input.
    pub fn run(&mut self) -> Result<JobList, Error> {
        writeln!(self.output, "Electrician Job Scheduler")?;
        writeln!(
            self.output,
            "Enter job details. Type 'exit' for Building Type to finish."
        )?;
        writeln!(self.output)?;

        let mut jobs = JobList::new();
        while let Some(job) = self.next_job()? {
            tracing::debug!(
                building = %job.building_type(),
                size = job.size(),
                position = jobs.len() + 1,
                "job accepted"
            );
            jobs.push(job);
            writeln!(self.output, "Job added successfully.")?;
            writeln!(self.output)?;
        }

        tracing::info!(jobs = jobs.len(), "intake finished");
        Ok(jobs)
    }

    /// Hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one complete job. `None` means intake is over.
    fn next_job(&mut self) -> Result<Option<JobRecord>, Error> {
        let building = loop {
            let Some(line) = self.read_line(BUILDING_PROMPT)? else {
                return Ok(None);
            };
            match validate::parse_building_choice(&line) {
                Ok(BuildingChoice::Exit) => return Ok(None),
                Ok(BuildingChoice::Building(building)) => break building,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        };

        let Some(size) = self.prompt_until(SIZE_PROMPT, validate::parse_size)? else {
            return Ok(self.discard_partial());
        };
        let Some(bulbs) = self.prompt_until(BULBS_PROMPT, validate::parse_bulbs)? else {
            return Ok(self.discard_partial());
        };
        let Some(outlets) = self.prompt_until(OUTLETS_PROMPT, validate::parse_outlets)? else {
            return Ok(self.discard_partial());
        };
        let Some(card) = self.prompt_until(CARD_PROMPT, validate::parse_card)? else {
            return Ok(self.discard_partial());
        };

        Ok(Some(JobRecord::new(building, size, bulbs, outlets, card)?))
    }

    /// Ask until `parse` accepts the answer. `None` on end of input.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, FieldError>,
    ) -> Result<Option<T>, Error> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Write the prompt and read one line without its terminator.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// so such a line reaches the validator and is rejected like any other.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn discard_partial(&self) -> Option<JobRecord> {
        tracing::info!("input closed mid-job, discarding the partial record");
        None
    }
}
