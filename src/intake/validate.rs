//! Per-field validators for operator input.
//!
//! Each validator takes one raw input line and either returns the accepted
//! value or the [`FieldError`] to show before re-prompting. They hold no
//! state, so the prompt loop decides how often to retry.

use std::ops::RangeInclusive;

use crate::error::{Field, FieldError};
use crate::jobs::{BULB_RANGE, BuildingType, CardNumber, OUTLET_RANGE, SIZE_RANGE};

/// Token that ends intake when entered as the building type.
pub const EXIT_TOKEN: &str = "exit";

/// Outcome of the building-type prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingChoice {
    Building(BuildingType),
    Exit,
}

pub fn parse_building_choice(input: &str) -> Result<BuildingChoice, FieldError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(EXIT_TOKEN) {
        return Ok(BuildingChoice::Exit);
    }
    input.parse().map(BuildingChoice::Building)
}

pub fn parse_size(input: &str) -> Result<u32, FieldError> {
    parse_bounded(Field::Size, input, &SIZE_RANGE)
}

pub fn parse_bulbs(input: &str) -> Result<u32, FieldError> {
    parse_bounded(Field::Bulbs, input, &BULB_RANGE)
}

pub fn parse_outlets(input: &str) -> Result<u32, FieldError> {
    parse_bounded(Field::Outlets, input, &OUTLET_RANGE)
}

pub fn parse_card(input: &str) -> Result<CardNumber, FieldError> {
    CardNumber::parse(input.trim())
}

/// Parse an integer and check it against an inclusive range.
///
/// Parses as `i64` first so negative input is reported as out of range
/// rather than as not-a-number.
fn parse_bounded(
    field: Field,
    input: &str,
    range: &RangeInclusive<u32>,
) -> Result<u32, FieldError> {
    let input = input.trim();
    let value: i64 = input.parse().map_err(|_| FieldError::NotANumber {
        field,
        input: input.to_string(),
        min: *range.start(),
        max: *range.end(),
    })?;

    match u32::try_from(value) {
        Ok(v) if range.contains(&v) => Ok(v),
        _ => Err(FieldError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_choice_accepts_any_case() {
        assert_eq!(
            parse_building_choice("house").unwrap(),
            BuildingChoice::Building(BuildingType::House)
        );
        assert_eq!(
            parse_building_choice("  Barn ").unwrap(),
            BuildingChoice::Building(BuildingType::Barn)
        );
        assert_eq!(parse_building_choice("EXIT").unwrap(), BuildingChoice::Exit);
        assert_eq!(parse_building_choice("Exit").unwrap(), BuildingChoice::Exit);
    }

    #[test]
    fn building_choice_rejects_unknown() {
        assert!(matches!(
            parse_building_choice("warehouse"),
            Err(FieldError::UnknownBuildingType(_))
        ));
        assert!(parse_building_choice("").is_err());
    }

    #[test]
    fn size_bounds() {
        assert!(parse_size("999").is_err());
        assert_eq!(parse_size("1000").unwrap(), 1000);
        assert_eq!(parse_size("50000").unwrap(), 50000);
        assert!(parse_size("50001").is_err());
    }

    #[test]
    fn size_rejects_non_integers() {
        assert!(matches!(
            parse_size("big"),
            Err(FieldError::NotANumber {
                field: Field::Size,
                ..
            })
        ));
        assert!(parse_size("1500.5").is_err());
        assert!(parse_size("").is_err());
        assert!(parse_size("99999999999999999999999").is_err());
    }

    #[test]
    fn counts_accept_zero_and_upper_bound() {
        assert_eq!(parse_bulbs("0").unwrap(), 0);
        assert_eq!(parse_bulbs("20").unwrap(), 20);
        assert!(parse_bulbs("21").is_err());
        assert_eq!(parse_outlets("0").unwrap(), 0);
        assert_eq!(parse_outlets("50").unwrap(), 50);
        assert!(parse_outlets("51").is_err());
    }

    #[test]
    fn negative_counts_are_out_of_range() {
        assert!(matches!(
            parse_bulbs("-1"),
            Err(FieldError::OutOfRange {
                field: Field::Bulbs,
                value: -1,
                ..
            })
        ));
        assert!(matches!(
            parse_outlets("-5"),
            Err(FieldError::OutOfRange {
                field: Field::Outlets,
                ..
            })
        ));
    }

    #[test]
    fn padded_integers_are_accepted() {
        assert_eq!(parse_size(" 2000 ").unwrap(), 2000);
        assert_eq!(parse_bulbs("+7").unwrap(), 7);
    }

    #[test]
    fn card_is_trimmed_then_validated() {
        let card = parse_card(" 1234567890123456\t").unwrap();
        assert_eq!(card.expose(), "1234567890123456");
        assert!(parse_card("123").is_err());
        assert!(parse_card("12345678901234567").is_err());
    }
}
