//! Remove booked sessions from a day's open hours.
//!
//! Each open interval is compared against every session independently. Only four
//! boundary relationships are recognised (see [`Overlap`]); a session that matches
//! none of them leaves the open interval untouched. In particular a session that
//! crosses exactly one boundary of an open interval without aligning to it is NOT
//! subtracted, and two sessions inside the same open interval each carve the
//! original interval rather than each other's remainder. Callers must hand in
//! sessions that respect this.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::interval::{FreeSlot, Interval};

/// How a session sits relative to one open interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// Strictly inside: splits the open interval in two.
    Interior,
    /// Starts with the open interval, ends before it.
    FlushLeft,
    /// Starts after the open interval, ends with it.
    FlushRight,
    /// Covers the open interval exactly.
    ExactCover,
    /// Outside, or crossing a boundary in a way none of the above describe.
    Unclassified,
}

/// Classify `session` against `open`, both as absolute instants.
pub fn classify(
    open: (DateTime<Utc>, DateTime<Utc>),
    session: (DateTime<Utc>, DateTime<Utc>),
) -> Overlap {
    let (start, end) = open;
    let (s_start, s_end) = session;

    if s_start > start && s_end < end {
        Overlap::Interior
    } else if s_start == start && s_end < end {
        Overlap::FlushLeft
    } else if s_start > start && s_end == end {
        Overlap::FlushRight
    } else if s_start == start && s_end == end {
        Overlap::ExactCover
    } else {
        Overlap::Unclassified
    }
}

/// Compute the free intervals of `date` left after removing `sessions` from `open`.
///
/// Output preserves the order of `open`. With `sessions == None` every open
/// interval passes through unchanged; an open interval that no session
/// classifies against is likewise emitted as-is.
pub fn resolve_conflicts(
    open: &[Interval],
    sessions: Option<&[Interval]>,
    date: NaiveDate,
) -> Vec<FreeSlot> {
    let free: Vec<FreeSlot> = open
        .iter()
        .flat_map(|interval| resolve_interval(interval, sessions, date))
        .collect();

    debug!(
        %date,
        open = open.len(),
        sessions = sessions.map_or(0, |s| s.len()),
        free = free.len(),
        "resolved conflicts"
    );

    free
}

fn resolve_interval(
    interval: &Interval,
    sessions: Option<&[Interval]>,
    date: NaiveDate,
) -> Vec<FreeSlot> {
    let open = interval.on(date);
    let untouched = || vec![FreeSlot::new(open.0, open.1)];

    let Some(sessions) = sessions else {
        return untouched();
    };

    let carved: Vec<Vec<FreeSlot>> = sessions
        .iter()
        .filter_map(|session| carve(open, session.on(date)))
        .collect();

    if carved.is_empty() {
        untouched()
    } else {
        carved.concat()
    }
}

/// Pieces of `open` left by one session, or `None` when the session has no effect.
fn carve(
    open: (DateTime<Utc>, DateTime<Utc>),
    session: (DateTime<Utc>, DateTime<Utc>),
) -> Option<Vec<FreeSlot>> {
    let (start, end) = open;
    let (s_start, s_end) = session;

    match classify(open, session) {
        Overlap::Interior => Some(vec![
            FreeSlot::new(start, s_start),
            FreeSlot::new(s_end, end),
        ]),
        Overlap::FlushLeft => Some(vec![FreeSlot::new(s_end, end)]),
        Overlap::FlushRight => Some(vec![FreeSlot::new(start, s_start)]),
        Overlap::ExactCover => Some(Vec::new()),
        Overlap::Unclassified => None,
    }
}
