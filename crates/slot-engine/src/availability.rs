//! Boundary entry point: validate the request, load the calendar, run the engine.
//!
//! Two failure tiers are kept apart here. Bad input and unknown calendars are
//! errors. A known calendar with no open hours or no sessions on the requested
//! day is not: it simply yields no units, or no subtraction.

use tracing::debug;

use crate::calendar::CalendarDate;
use crate::error::{Result, SlotError};
use crate::interval::FreeSlot;
use crate::packer::BookableUnit;
use crate::store::CalendarSource;

/// Bookable units of `duration_minutes` for `calendar_id` on `date` (`DD-MM-YYYY`).
///
/// # Errors
/// - `SlotError::InvalidDate` if `date` is not a real `DD-MM-YYYY` date.
/// - `SlotError::InvalidDuration` if `duration_minutes` is not positive.
/// - `SlotError::CalendarNotFound` if the source has no such calendar.
/// - `SlotError::InvalidBuffers` if the calendar has a negative buffer.
/// - `SlotError::Io` / `SlotError::Parse` if the calendar cannot be read.
pub fn get_available_spots(
    source: &impl CalendarSource,
    calendar_id: &str,
    date: &str,
    duration_minutes: i64,
) -> Result<Vec<BookableUnit>> {
    let date: CalendarDate = date.parse()?;
    if duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }

    let calendar = source.load(calendar_id)?;
    calendar.validate()?;
    let spots = calendar.available_spots(date, duration_minutes);

    debug!(
        calendar = calendar_id,
        %date,
        duration_minutes,
        spots = spots.len(),
        "computed available spots"
    );
    Ok(spots)
}

/// Free intervals for `calendar_id` on `date` (`DD-MM-YYYY`), before packing.
pub fn get_free_slots(
    source: &impl CalendarSource,
    calendar_id: &str,
    date: &str,
) -> Result<Vec<FreeSlot>> {
    let date: CalendarDate = date.parse()?;
    let calendar = source.load(calendar_id)?;
    Ok(calendar.free_slots(date))
}
