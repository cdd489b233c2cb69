//! Where calendar configurations come from.
//!
//! The engine never touches storage itself; [`crate::availability`] asks a
//! [`CalendarSource`] for a fresh [`CalendarConfig`] on every query.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::calendar::CalendarConfig;
use crate::error::{Result, SlotError};

/// Loads the configuration of a calendar by its identifier.
pub trait CalendarSource {
    /// Returns `SlotError::CalendarNotFound` when no such calendar exists.
    fn load(&self, calendar_id: &str) -> Result<CalendarConfig>;
}

/// Calendars stored as `calendar.<id>.json` files in one directory.
#[derive(Debug, Clone)]
pub struct FileCalendarStore {
    dir: PathBuf,
}

impl FileCalendarStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `calendar_id`, or `None` for identifiers that
    /// would escape the store directory.
    pub fn path_for(&self, calendar_id: &str) -> Option<PathBuf> {
        let escapes = calendar_id.is_empty()
            || calendar_id.contains(['/', '\\'])
            || calendar_id.contains("..");
        if escapes {
            return None;
        }
        Some(self.dir.join(format!("calendar.{}.json", calendar_id)))
    }
}

impl CalendarSource for FileCalendarStore {
    fn load(&self, calendar_id: &str) -> Result<CalendarConfig> {
        let path = self
            .path_for(calendar_id)
            .filter(|path| path.is_file())
            .ok_or_else(|| SlotError::CalendarNotFound(calendar_id.to_string()))?;

        debug!(calendar = calendar_id, path = %path.display(), "loading calendar");
        let json = fs::read_to_string(&path)?;
        CalendarConfig::from_json(&json)
    }
}

/// Calendars held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemoryCalendarStore {
    calendars: HashMap<String, CalendarConfig>,
}

impl MemoryCalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, calendar_id: impl Into<String>, config: CalendarConfig) {
        self.calendars.insert(calendar_id.into(), config);
    }
}

impl CalendarSource for MemoryCalendarStore {
    fn load(&self, calendar_id: &str) -> Result<CalendarConfig> {
        self.calendars
            .get(calendar_id)
            .cloned()
            .ok_or_else(|| SlotError::CalendarNotFound(calendar_id.to_string()))
    }
}
