//! Payment card number held for a job.
//!
//! The number is only stored and redacted for display; nothing here
//! processes payments. The raw digits live in a [`SecretString`] so they
//! cannot leak through `Debug` output or logs.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

use crate::error::FieldError;

/// Number of digits a card number must have.
pub const CARD_DIGITS: usize = 16;

/// A validated 16-digit card number.
pub struct CardNumber(SecretString);

impl CardNumber {
    /// Validate and wrap a card number.
    ///
    /// Accepts exactly 16 ASCII decimal digits. Leading zeros are kept since
    /// the value is never treated as a number.
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        if input.len() != CARD_DIGITS || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::InvalidCard);
        }
        Ok(Self(SecretString::from(input.to_string())))
    }

    /// Redacted form: first four digits, two masked groups, last four digits.
    pub fn masked(&self) -> String {
        let digits = self.0.expose_secret();
        // Length and ASCII-ness are guaranteed by `parse`.
        format!("{} XXXX XXXX {}", &digits[..4], &digits[12..])
    }

    /// The raw digits.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardNumber").field(&self.masked()).finish()
    }
}

impl Serialize for CardNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.masked())
    }
}
