//! Newtype IDs for type-safe entity references.
//!
//! Numeric IDs use the `define_id!` macro; they are generated from the
//! clock (epoch milliseconds), which is the only uniqueness guarantee the
//! store offers. Token IDs (`BookingId`, `ContactId`, `UserId`) are
//! prefixed strings with the same clock-based generation.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Ord`
/// - Conversion methods: `new()`, `as_i64()`
/// - `from_timestamp()` for clock-based generation
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use unlock_style_core::define_id;
/// define_id!(StaffId);
/// define_id!(CustomerId);
///
/// let staff_id = StaffId::new(1);
/// let customer_id = CustomerId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: StaffId = customer_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Generate an ID from a timestamp (epoch milliseconds).
            #[must_use]
            pub fn from_timestamp(at: ::chrono::DateTime<::chrono::Utc>) -> Self {
                Self(at.timestamp_millis())
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Numeric entity IDs
define_id!(ItemId);
define_id!(StaffId);
define_id!(CustomerId);
define_id!(NotificationId);

/// Macro for prefixed string-token IDs (`"BK1700000000000"` and friends).
macro_rules! define_token_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a token from the clock, e.g. `"BK1700000000000"`.
            #[must_use]
            pub fn generate(at: DateTime<Utc>) -> Self {
                Self(format!(concat!($prefix, "{}"), at.timestamp_millis()))
            }

            /// Wrap an existing token without validation.
            #[must_use]
            pub fn from_raw(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// Returns the token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_token_id!(BookingId, "BK");
define_token_id!(ContactId, "CT");

/// A user account ID: `user_{millis}_{random suffix}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Length of the random suffix appended to the timestamp.
    const SUFFIX_LEN: usize = 9;

    /// Generate a fresh user ID from the clock plus a random suffix.
    ///
    /// The suffix keeps two signups within the same millisecond distinct.
    #[must_use]
    pub fn generate(at: DateTime<Utc>, rng: &mut impl Rng) -> Self {
        let suffix: String = (0..Self::SUFFIX_LEN)
            .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
            .collect();
        Self(format!("user_{}_{suffix}", at.timestamp_millis()))
    }

    /// Wrap an existing ID without validation.
    #[must_use]
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_numeric_id_roundtrip() {
        let id = StaffId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(StaffId::from(42), id);
    }

    #[test]
    fn test_numeric_id_from_timestamp() {
        let id = ItemId::from_timestamp(at());
        assert_eq!(id.as_i64(), at().timestamp_millis());
    }

    #[test]
    fn test_booking_id_prefix() {
        let id = BookingId::generate(at());
        assert!(id.as_str().starts_with("BK"));
        assert_eq!(id.as_str(), format!("BK{}", at().timestamp_millis()));
    }

    #[test]
    fn test_contact_id_prefix() {
        let id = ContactId::generate(at());
        assert!(id.as_str().starts_with("CT"));
    }

    #[test]
    fn test_user_id_shape() {
        let mut rng = rand::rng();
        let id = UserId::generate(at(), &mut rng);
        let mut parts = id.as_str().splitn(3, '_');
        assert_eq!(parts.next(), Some("user"));
        assert_eq!(parts.next(), Some(at().timestamp_millis().to_string().as_str()));
        let suffix = parts.next().unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_user_ids_distinct_within_same_millisecond() {
        let mut rng = rand::rng();
        let a = UserId::generate(at(), &mut rng);
        let b = UserId::generate(at(), &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = BookingId::from_raw("BK123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"BK123\"");
        let back: BookingId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
