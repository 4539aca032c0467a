//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a non-digit character.
    #[error("phone number can only contain digits")]
    NonDigit,
    /// The input is not exactly ten digits.
    #[error("phone number must be exactly {expected} digits")]
    WrongLength {
        /// Required digit count.
        expected: usize,
    },
}

/// A ten-digit Indian mobile number, digits only.
///
/// Forms strip formatting before submission, so the stored representation
/// is always the bare digit string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Required number of digits.
    pub const DIGITS: usize = 10;

    /// Parse a `Phone` from a string of exactly ten ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains non-digits, or is
    /// not exactly ten digits long.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NonDigit);
        }

        if s.len() != Self::DIGITS {
            return Err(PhoneError::WrongLength {
                expected: Self::DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
