//! Per-calendar configuration and the engine entry point for a single day.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::conflict::resolve_conflicts;
use crate::error::{Result, SlotError};
use crate::interval::{FreeSlot, Interval};
use crate::packer::{pack_slots, BookableUnit, Buffers};

/// A calendar day written as `DD-MM-YYYY`.
///
/// Parsing is strict: exactly two day digits, two month digits and four year
/// digits separated by `-`, and the result must be a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for CalendarDate {
    type Err = SlotError;

    fn from_str(raw: &str) -> Result<Self> {
        let bytes = raw.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[2] == b'-'
            && bytes[5] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !shaped {
            return Err(SlotError::InvalidDate(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, "%d-%m-%Y")
            .map(Self)
            .map_err(|_| SlotError::InvalidDate(raw.to_string()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Everything the engine needs to know about one calendar.
///
/// Mirrors the on-disk calendar file: `durationBefore`/`durationAfter` buffers in
/// minutes, open hours per day under `slots` and booked sessions per day under
/// `sessions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    #[serde(default)]
    pub duration_before: i64,
    #[serde(default)]
    pub duration_after: i64,
    #[serde(default)]
    pub slots: BTreeMap<CalendarDate, Vec<Interval>>,
    #[serde(default)]
    pub sessions: BTreeMap<CalendarDate, Vec<Interval>>,
}

impl CalendarConfig {
    /// Parse a calendar file, rejecting negative buffers.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Lead and trail buffers must not be negative.
    pub fn validate(&self) -> Result<()> {
        if self.buffers().is_valid() {
            Ok(())
        } else {
            Err(SlotError::InvalidBuffers {
                before: self.duration_before,
                after: self.duration_after,
            })
        }
    }

    pub fn buffers(&self) -> Buffers {
        Buffers::new(self.duration_before, self.duration_after)
    }

    /// Open hours for `date`; a day without a template has none.
    pub fn day_template(&self, date: CalendarDate) -> &[Interval] {
        self.slots.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Booked sessions for `date`, or `None` if the day has no entry at all.
    pub fn sessions_on(&self, date: CalendarDate) -> Option<&[Interval]> {
        self.sessions.get(&date).map(Vec::as_slice)
    }

    /// Free intervals of `date` after removing booked sessions.
    pub fn free_slots(&self, date: CalendarDate) -> Vec<FreeSlot> {
        resolve_conflicts(self.day_template(date), self.sessions_on(date), date.date())
    }

    /// Bookable units of `duration_minutes` on `date`, buffers included.
    pub fn available_spots(&self, date: CalendarDate, duration_minutes: i64) -> Vec<BookableUnit> {
        pack_slots(&self.free_slots(date), duration_minutes, self.buffers())
    }
}
