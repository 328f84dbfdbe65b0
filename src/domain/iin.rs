//! Individual Identification Number.
//!
//! [`Iin`] wraps the 12-digit personal identifier supplied by the client.
//! It is kept as text so leading zeros survive storage and transport.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits in a valid IIN.
pub const IIN_LENGTH: usize = 12;

/// A validated Individual Identification Number: exactly 12 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iin(String);

/// Reason an IIN was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("IIN must be exactly {IIN_LENGTH} digits")]
pub struct InvalidIin;

impl Iin {
    /// Validates `raw` as an IIN.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIin`] unless `raw` is exactly 12 ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, InvalidIin> {
        if raw.len() == IIN_LENGTH && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidIin)
        }
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Iin {
    type Error = InvalidIin;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Iin> for String {
    fn from(iin: Iin) -> Self {
        iin.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn accepts_twelve_digits() {
        let Ok(iin) = Iin::parse("123456789012") else {
            panic!("valid IIN rejected");
        };
        assert_eq!(iin.as_str(), "123456789012");
    }

    #[test]
    fn keeps_leading_zeros() {
        let Ok(iin) = Iin::parse("000000000042") else {
            panic!("valid IIN rejected");
        };
        assert_eq!(iin.to_string(), "000000000042");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(Iin::parse("12345678901"), Err(InvalidIin));
        assert_eq!(Iin::parse("1234567890123"), Err(InvalidIin));
        assert_eq!(Iin::parse(""), Err(InvalidIin));
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(Iin::parse("12345678901a"), Err(InvalidIin));
        assert_eq!(Iin::parse("+23456789012"), Err(InvalidIin));
        // twelve bytes, but not twelve ASCII digits
        assert_eq!(Iin::parse("١٢٣٤٥٦"), Err(InvalidIin));
    }

    #[test]
    fn error_message_is_descriptive() {
        assert_eq!(InvalidIin.to_string(), "IIN must be exactly 12 digits");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<Iin, _> = serde_json::from_str("\"123456789012\"");
        assert!(ok.is_ok());
        let bad: Result<Iin, _> = serde_json::from_str("\"123\"");
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let Ok(iin) = Iin::parse("123456789012") else {
            panic!("valid IIN rejected");
        };
        let json = serde_json::to_string(&iin).ok();
        assert_eq!(json.as_deref(), Some("\"123456789012\""));
    }
}
