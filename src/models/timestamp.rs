//! Timestamp parsing for clinic API payloads.
//!
//! The API mixes offset-aware RFC 3339 strings, naive Postgres timestamps
//! and bare dates. Everything is normalised to a naive local date-time so
//! calendar-day comparisons happen in the viewer's local calendar.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

use super::ModelError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const SERIALIZE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a timestamp from any of the shapes the clinic API emits.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ModelError> {
    let raw = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| ModelError::InvalidTimestamp(raw.to_string()))
}

/// Parse a wall-clock time, with or without seconds.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, ModelError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| ModelError::InvalidTimestamp(raw.to_string()))
}

pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.format(SERIALIZE_FORMAT).to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// `Option<NaiveDateTime>` variant. `null` and blank strings decode to `None`.
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

/// `Option<NaiveTime>` accepting `HH:MM` as well as `HH:MM:SS`.
pub mod clock_option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&v.format("%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_clock_time(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
