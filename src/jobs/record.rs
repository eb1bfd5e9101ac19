//! Job records and the ordered job list.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{Field, FieldError};
use crate::jobs::building::BuildingType;
use crate::jobs::card::CardNumber;

/// Accepted building sizes in square feet.
pub const SIZE_RANGE: RangeInclusive<u32> = 1000..=50000;
/// Accepted number of light bulbs.
pub const BULB_RANGE: RangeInclusive<u32> = 0..=20;
/// Accepted number of outlets.
pub const OUTLET_RANGE: RangeInclusive<u32> = 0..=50;

/// One booked job. Immutable once constructed.
#[derive(Debug, Serialize)]
pub struct JobRecord {
    building_type: BuildingType,
    size: u32,
    bulb_count: u32,
    outlet_count: u32,
    card: CardNumber,
}

impl JobRecord {
    /// Build a record, checking every range invariant.
    ///
    /// The card number is already validated by its type.
    pub fn new(
        building_type: BuildingType,
        size: u32,
        bulb_count: u32,
        outlet_count: u32,
        card: CardNumber,
    ) -> Result<Self, FieldError> {
        check_range(Field::Size, size, &SIZE_RANGE)?;
        check_range(Field::Bulbs, bulb_count, &BULB_RANGE)?;
        check_range(Field::Outlets, outlet_count, &OUTLET_RANGE)?;

        Ok(Self {
            building_type,
            size,
            bulb_count,
            outlet_count,
            card,
        })
    }

    pub fn building_type(&self) -> BuildingType {
        self.building_type
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn bulb_count(&self) -> u32 {
        self.bulb_count
    }

    pub fn outlet_count(&self) -> u32 {
        self.outlet_count
    }

    pub fn card(&self) -> &CardNumber {
        &self.card
    }

    /// One-line summary with the card number masked.
    pub fn summary(&self) -> String {
        format!(
            "Building: {}, Size: {} sq.ft, Bulbs: {}, Outlets: {}, Credit Card: {}",
            self.building_type,
            self.size,
            self.bulb_count,
            self.outlet_count,
            self.card.masked()
        )
    }
}

fn check_range(
    field: Field,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), FieldError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(FieldError::OutOfRange {
            field,
            value: i64::from(value),
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Jobs in the order they were entered, which is also the report order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct JobList {
    jobs: Vec<JobRecord>,
}

impl JobList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: JobRecord) {
        self.jobs.push(job);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobRecord> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl<'a> IntoIterator for &'a JobList {
    type Item = &'a JobRecord;
    type IntoIter = std::slice::Iter<'a, JobRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
