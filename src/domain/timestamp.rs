//! Wire formats for ticket timestamps.
//!
//! Flight times travel as `YYYY-MM-DD HH:MM` (no seconds, no zone) and the
//! creation stamp as `YYYY-MM-DD HH:MM:SS` in UTC. The submodules plug into
//! `#[serde(with = "...")]`.

use chrono::NaiveDateTime;

/// `chrono` format string for flight times.
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `chrono` format string for the creation timestamp.
pub const SECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A flight time that is not exactly `YYYY-MM-DD HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a time formatted as YYYY-MM-DD HH:MM, got {0:?}")]
pub struct InvalidTime(String);

/// Parses a flight time at minute precision.
///
/// Only the zero-padded `YYYY-MM-DD HH:MM` shape is accepted: seconds,
/// zone suffixes, unpadded fields, sign prefixes and stray whitespace are
/// all rejected.
///
/// # Errors
///
/// Returns [`InvalidTime`] when `raw` is not `YYYY-MM-DD HH:MM` or names
/// an impossible date or time.
pub fn parse_minute(raw: &str) -> Result<NaiveDateTime, InvalidTime> {
    let invalid = || InvalidTime(raw.to_string());
    let parsed = NaiveDateTime::parse_from_str(raw, MINUTE_FORMAT).map_err(|_| invalid())?;
    // chrono is lenient about padding and whitespace; the canonical
    // rendering must reproduce the input.
    if parsed.format(MINUTE_FORMAT).to_string() == raw {
        Ok(parsed)
    } else {
        Err(invalid())
    }
}

/// Serde adapter for [`NaiveDateTime`] as `YYYY-MM-DD HH:MM`.
pub mod minute {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::MINUTE_FORMAT;

    /// Serializes at minute precision.
    ///
    /// # Errors
    ///
    /// Propagates the serializer's error.
    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&value.format(MINUTE_FORMAT))
    }

    /// Deserializes from `YYYY-MM-DD HH:MM`.
    ///
    /// # Errors
    ///
    /// Fails when the input is not a string in the expected format.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_minute(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for [`DateTime<Utc>`](chrono::DateTime) as
/// `YYYY-MM-DD HH:MM:SS`.
pub mod second {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::SECOND_FORMAT;

    /// Serializes in UTC at second precision.
    ///
    /// # Errors
    ///
    /// Propagates the serializer's error.
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&value.format(SECOND_FORMAT))
    }

    /// Deserializes a UTC `YYYY-MM-DD HH:MM:SS` string.
    ///
    /// # Errors
    ///
    /// Fails when the input is not a string in the expected format.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, SECOND_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_minute_precision() {
        let Ok(parsed) = parse_minute("2024-05-01 10:05") else {
            panic!("valid time rejected");
        };
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.minute(), 5);
        assert_eq!(parsed.second(), 0);
    }

    #[test]
    fn rejects_seconds() {
        assert!(parse_minute("2024-05-01 10:05:30").is_err());
    }

    #[test]
    fn rejects_iso_t_separator() {
        assert!(parse_minute("2024-05-01T10:05").is_err());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_minute("2024-02-30 10:00").is_err());
        assert!(parse_minute("2024-05-01 25:00").is_err());
        assert!(parse_minute("").is_err());
    }

    #[test]
    fn rejects_loose_shapes() {
        for raw in [
            "2024-5-1 9:0",
            "2024-05-01 9:05",
            "2024-05-0110:00",
            " 2024-05-01 10:00",
            "2024-05-01 10:00 ",
            "2024-05-01  10:00",
            "+2024-05-01 10:00",
        ] {
            assert_eq!(
                parse_minute(raw),
                Err(InvalidTime(raw.to_string())),
                "accepted {raw:?}"
            );
        }
    }
}
