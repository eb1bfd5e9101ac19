//! Job domain model: building categories, card numbers, records.

mod building;
mod card;
mod record;

pub use building::BuildingType;
pub use card::{CARD_DIGITS, CardNumber};
pub use record::{BULB_RANGE, JobList, JobRecord, OUTLET_RANGE, SIZE_RANGE};
