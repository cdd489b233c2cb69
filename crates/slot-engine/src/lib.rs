//! # slot-engine
//!
//! Deterministic bookable-slot computation for appointment calendars.
//!
//! Given a day's open hours and the sessions already booked on it, the engine
//! subtracts the sessions from the open hours and slices what is left into
//! fixed-duration units wrapped in the calendar's lead and trail buffers. Every
//! function is pure: identical inputs always give identical output.
//!
//! ```rust
//! use slot_engine::{CalendarConfig, CalendarDate};
//!
//! let calendar = CalendarConfig::from_json(r#"{
//!     "durationBefore": 0,
//!     "durationAfter": 0,
//!     "slots": { "10-04-2023": [ { "start": "09:00", "end": "12:00" } ] },
//!     "sessions": { "10-04-2023": [ { "start": "10:00", "end": "10:30" } ] }
//! }"#).unwrap();
//!
//! let date: CalendarDate = "10-04-2023".parse().unwrap();
//! assert_eq!(calendar.available_spots(date, 30).len(), 5);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — Wall-clock intervals and free slots
//! - [`conflict`] — Remove booked sessions from open hours
//! - [`packer`] — Slice free intervals into bookable units
//! - [`calendar`] — Per-calendar configuration and `DD-MM-YYYY` dates
//! - [`store`] — Calendar sources (files, memory)
//! - [`availability`] — Validated entry point over a calendar source
//! - [`error`] — Error types

pub mod availability;
pub mod calendar;
pub mod conflict;
pub mod error;
pub mod interval;
pub mod packer;
pub mod store;

pub use availability::{get_available_spots, get_free_slots};
pub use calendar::{CalendarConfig, CalendarDate};
pub use conflict::resolve_conflicts;
pub use error::SlotError;
pub use interval::{FreeSlot, Interval};
pub use packer::{pack_slots, BookableUnit, Buffers};
pub use store::{CalendarSource, FileCalendarStore, MemoryCalendarStore};
