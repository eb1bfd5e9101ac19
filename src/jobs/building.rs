//! Building categories and their building-specific task.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FieldError;

/// The kind of building a job is booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildingType {
    House,
    Barn,
    Garage,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [
        BuildingType::House,
        BuildingType::Barn,
        BuildingType::Garage,
    ];

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingType::House => "House",
            BuildingType::Barn => "Barn",
            BuildingType::Garage => "Garage",
        }
    }

    /// The extra task performed only for this kind of building.
    pub fn supplementary_task(&self) -> &'static str {
        match self {
            BuildingType::House => "Installing fire alarms in the house...",
            BuildingType::Barn => "Wiring milking equipment in the barn...",
            BuildingType::Garage => "Installing automatic doors in the garage...",
        }
    }

    /// Suffix appended to the job summary when task notes are enabled.
    pub fn task_note(&self) -> &'static str {
        match self {
            BuildingType::House => "House specific task: Fire Alarms installed",
            BuildingType::Barn => "Barn specific task: Milking Equipment wired",
            BuildingType::Garage => "Garage specific task: Automatic Doors installed",
        }
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildingType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildingType::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldError::UnknownBuildingType(s.to_string()))
    }
}
