//! Slice free intervals into fixed-size bookable units.
//!
//! A unit spans `before + duration + after` minutes. Units are packed greedily
//! from the start of each free interval, back to back, until the next one would
//! run past the interval end. A unit ending exactly on the interval end fits.
//!
//! All instant arithmetic is checked: a span that overflows, or a unit that would
//! land outside the representable date range, ends packing instead of panicking.

use std::iter;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::interval::FreeSlot;

/// Lead and trail buffers wrapped around every unit, in minutes.
///
/// Both must be `>= 0`; [`pack_slots`] packs nothing when either is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buffers {
    pub before_minutes: i64,
    pub after_minutes: i64,
}

impl Buffers {
    pub fn new(before_minutes: i64, after_minutes: i64) -> Self {
        Self {
            before_minutes,
            after_minutes,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.before_minutes >= 0 && self.after_minutes >= 0
    }
}

/// One bookable appointment, buffers included.
///
/// `start_hour..end_hour` is the full reserved span; `client_start_hour..client_end_hour`
/// is the part shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookableUnit {
    pub start_hour: DateTime<Utc>,
    pub end_hour: DateTime<Utc>,
    pub client_start_hour: DateTime<Utc>,
    pub client_end_hour: DateTime<Utc>,
}

/// Validated unit geometry: every offset is known to fit in a `Duration`.
#[derive(Debug, Clone, Copy)]
struct UnitShape {
    before: Duration,
    duration: Duration,
    span: Duration,
}

impl UnitShape {
    fn new(duration_minutes: i64, buffers: Buffers) -> Option<Self> {
        if duration_minutes <= 0 || !buffers.is_valid() {
            return None;
        }
        let span = unit_span_minutes(duration_minutes, buffers)?;
        Some(Self {
            before: Duration::try_minutes(buffers.before_minutes)?,
            duration: Duration::try_minutes(duration_minutes)?,
            span: Duration::try_minutes(span)?,
        })
    }

    /// The unit starting at `cursor`, if it ends within `end`.
    fn unit_at(&self, cursor: DateTime<Utc>, end: DateTime<Utc>) -> Option<BookableUnit> {
        let end_hour = cursor.checked_add_signed(self.span)?;
        if end_hour > end {
            return None;
        }
        let client_start_hour = cursor.checked_add_signed(self.before)?;
        let client_end_hour = client_start_hour.checked_add_signed(self.duration)?;
        Some(BookableUnit {
            start_hour: cursor,
            end_hour,
            client_start_hour,
            client_end_hour,
        })
    }
}

/// Total minutes one unit occupies: `before + duration + after`, or `None` on overflow.
pub fn unit_span_minutes(duration_minutes: i64, buffers: Buffers) -> Option<i64> {
    buffers
        .before_minutes
        .checked_add(duration_minutes)?
        .checked_add(buffers.after_minutes)
}

/// Pack every free interval into bookable units, preserving input order.
///
/// A non-positive duration, a negative buffer, or a span too large to place on
/// the calendar yields no units at all.
pub fn pack_slots(free: &[FreeSlot], duration_minutes: i64, buffers: Buffers) -> Vec<BookableUnit> {
    let Some(shape) = UnitShape::new(duration_minutes, buffers) else {
        warn!(
            duration_minutes,
            before = buffers.before_minutes,
            after = buffers.after_minutes,
            "unit span is not a positive representable duration, no units packed"
        );
        return Vec::new();
    };

    let units: Vec<BookableUnit> = free
        .iter()
        .flat_map(|slot| pack_interval(slot, shape))
        .collect();

    debug!(
        free = free.len(),
        units = units.len(),
        span = shape.span.num_minutes(),
        "packed slots"
    );
    units
}

fn pack_interval(slot: &FreeSlot, shape: UnitShape) -> Vec<BookableUnit> {
    iter::successors(shape.unit_at(slot.start, slot.end), |prev| {
        shape.unit_at(prev.end_hour, slot.end)
    })
    .collect()
}
