//! Tests for the validated entry point over calendar sources.

use chrono::{NaiveDate, TimeZone, Utc};
use slot_engine::store::{CalendarSource, FileCalendarStore, MemoryCalendarStore};
use slot_engine::{get_available_spots, get_free_slots, CalendarConfig, CalendarDate, SlotError};

fn fixtures() -> FileCalendarStore {
    FileCalendarStore::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/calendars"
    ))
}

// ── Date parsing ────────────────────────────────────────────────────────────

#[test]
fn calendar_date_parses_and_displays() {
    let date: CalendarDate = "05-01-2024".parse().unwrap();

    assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(date.to_string(), "05-01-2024");
}

#[test]
fn calendar_date_rejects_malformed_input() {
    for raw in [
        "2023-04-10",
        "10/04/2023",
        "1-04-2023",
        "10-4-2023",
        "10-04-23",
        " 10-04-2023",
        "aa-bb-cccc",
        "31-02-2023",
        "",
    ] {
        assert!(
            matches!(raw.parse::<CalendarDate>(), Err(SlotError::InvalidDate(_))),
            "{raw:?} should be rejected"
        );
    }
}

// ── Boundary checks ─────────────────────────────────────────────────────────

#[test]
fn malformed_date_is_rejected_before_loading() {
    // The calendar does not exist either; the date check must win.
    let err = get_available_spots(&fixtures(), "missing", "2023-04-10", 30).unwrap_err();

    assert!(matches!(err, SlotError::InvalidDate(_)));
    assert!(err.to_string().contains("DD-MM-YYYY"));
}

#[test]
fn non_positive_duration_is_rejected() {
    let err = get_available_spots(&fixtures(), "1", "10-04-2023", 0).unwrap_err();
    assert!(matches!(err, SlotError::InvalidDuration(0)));

    let err = get_available_spots(&fixtures(), "1", "10-04-2023", -30).unwrap_err();
    assert!(matches!(err, SlotError::InvalidDuration(-30)));
}

#[test]
fn huge_durations_are_empty_not_a_panic() {
    let mut store = MemoryCalendarStore::new();
    store.insert(
        "c",
        CalendarConfig::from_json(
            r#"{ "slots": { "10-04-2023": [ { "start": "09:00", "end": "12:00" } ] } }"#,
        )
        .unwrap(),
    );

    for duration in [i64::MAX, 1_000_000_000_000, 181] {
        let spots = get_available_spots(&store, "c", "10-04-2023", duration).unwrap();
        assert!(spots.is_empty(), "duration {duration} should not fit");
    }
}

#[test]
fn negative_buffers_are_rejected() {
    let err = CalendarConfig::from_json(r#"{ "durationBefore": -15, "durationAfter": 0 }"#)
        .unwrap_err();
    assert!(matches!(
        err,
        SlotError::InvalidBuffers { before: -15, after: 0 }
    ));

    // Calendars that bypass file parsing are checked at the boundary too.
    let mut store = MemoryCalendarStore::new();
    store.insert(
        "neg",
        CalendarConfig {
            duration_after: -5,
            ..CalendarConfig::default()
        },
    );
    let err = get_available_spots(&store, "neg", "10-04-2023", 30).unwrap_err();
    assert!(matches!(err, SlotError::InvalidBuffers { before: 0, after: -5 }));
}

#[test]
fn unknown_calendar_is_not_found() {
    let err = get_available_spots(&fixtures(), "42", "10-04-2023", 30).unwrap_err();

    assert!(matches!(err, SlotError::CalendarNotFound(id) if id == "42"));
}

#[test]
fn calendar_ids_cannot_escape_the_directory() {
    let store = fixtures();

    assert!(store.path_for("../calendars/calendar.1").is_none());
    assert!(store.path_for("a/b").is_none());
    assert!(matches!(
        store.load("../1"),
        Err(SlotError::CalendarNotFound(_))
    ));
}

#[test]
fn unparseable_calendar_file_is_a_parse_error() {
    let err = get_available_spots(&fixtures(), "broken", "10-04-2023", 30).unwrap_err();

    assert!(matches!(err, SlotError::Parse(_)));
}

// ── File-backed calendar ────────────────────────────────────────────────────

#[test]
fn file_calendar_spots_with_buffers() {
    // 09-12 minus 10-11 and 14-17 minus 14-15, 60-minute spans.
    let spots = get_available_spots(&fixtures(), "1", "10-04-2023", 30).unwrap();

    assert_eq!(spots.len(), 4);
    let client_starts: Vec<_> = spots.iter().map(|s| s.client_start_hour).collect();
    assert_eq!(
        client_starts,
        vec![
            Utc.with_ymd_and_hms(2023, 4, 10, 9, 15, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 4, 10, 11, 15, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 4, 10, 15, 15, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 4, 10, 16, 15, 0).unwrap(),
        ]
    );
}

#[test]
fn file_calendar_free_slots() {
    let free = get_free_slots(&fixtures(), "1", "10-04-2023").unwrap();

    let minutes: Vec<_> = free.iter().map(|f| f.duration_minutes).collect();
    assert_eq!(minutes, vec![60, 60, 120]);
}

#[test]
fn day_without_sessions_entry_is_not_filtered() {
    let spots = get_available_spots(&fixtures(), "1", "11-04-2023", 30).unwrap();

    assert_eq!(spots.len(), 4);
}

#[test]
fn fully_booked_day_is_empty_not_an_error() {
    let spots = get_available_spots(&fixtures(), "1", "12-04-2023", 30).unwrap();

    assert!(spots.is_empty());
}

#[test]
fn day_without_template_is_empty_not_an_error() {
    let spots = get_available_spots(&fixtures(), "1", "13-04-2023", 30).unwrap();

    assert!(spots.is_empty());
}

// ── In-memory calendar ──────────────────────────────────────────────────────

#[test]
fn memory_store_serves_inserted_calendars() {
    let mut store = MemoryCalendarStore::new();
    store.insert(
        "team",
        CalendarConfig::from_json(
            r#"{ "slots": { "10-04-2023": [ { "start": "09:00", "end": "10:00" } ] } }"#,
        )
        .unwrap(),
    );

    let spots = get_available_spots(&store, "team", "10-04-2023", 20).unwrap();
    assert_eq!(spots.len(), 3);

    let err = get_available_spots(&store, "other", "10-04-2023", 20).unwrap_err();
    assert!(matches!(err, SlotError::CalendarNotFound(_)));
}
