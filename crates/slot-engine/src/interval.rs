//! Wall-clock intervals and the free slots derived from them.
//!
//! Calendar files describe open hours and booked sessions as `"HH:MM"` pairs
//! without a date. Every comparison and every emitted value is made on absolute
//! instants instead: a time-of-day is anchored on the query date with [`at`]
//! before any arithmetic happens, so no string round-trips are involved.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A `(start, end)` pair of wall-clock times on an implicit date.
///
/// `start < end` is expected but not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl Interval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Build an interval from two `"HH:MM"` strings.
    ///
    /// Returns `None` if either side is not a valid 24-hour time.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: hhmm::parse(start)?,
            end: hhmm::parse(end)?,
        })
    }

    /// Anchor both ends on `date`.
    pub fn on(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        (at(date, self.start), at(date, self.end))
    }
}

/// A free interval left after removing booked sessions from open hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl FreeSlot {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// Anchor a wall-clock time on `date` in the engine's single implicit zone.
pub fn at(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Serde adapter for `"HH:MM"` wall-clock strings.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn parse(raw: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(raw.trim(), FORMAT).ok()
    }

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            de::Error::custom(format!("invalid time '{}', expected HH:MM", raw))
        })
    }
}
