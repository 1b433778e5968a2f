//! Consecutive-day streak tracking.
//!
//! The streak counts calendar days on which every checklist item was
//! complete. State lives in `streak.json` under the log directory and is
//! updated at most once per day: the first update on a new date compares
//! the previously recorded date against yesterday and either extends,
//! restarts, or clears the run. `best >= current` holds after every update.

use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const STREAK_FILE: &str = "streak.json";

/// Persistent streak state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakRecord {
    /// Length of the current run of fully-completed days.
    #[serde(default)]
    pub current: u32,
    /// Longest run ever recorded.
    #[serde(default)]
    pub best: u32,
    /// Date of the last update, None before the first one.
    #[serde(default)]
    pub last_date: Option<NaiveDate>,
}

/// File-backed streak tracker.
pub struct StreakTracker {
    dir: PathBuf,
}

impl StreakTracker {
    /// Open the tracker at the default log directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            dir: crate::store::data_dir()?,
        })
    }

    /// Open the tracker at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(STREAK_FILE)
    }

    /// Load the streak record, defaulting when the file is absent or
    /// malformed.
    pub fn load(&self) -> Result<StreakRecord> {
        let content = match std::fs::read_to_string(self.path()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StreakRecord::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&self, record: &StreakRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(self.path(), json)?;
        Ok(())
    }

    /// Record today's completion state and return the updated streak.
    ///
    /// Idempotent within a day: once today's date is recorded, further
    /// calls return the stored record unchanged.
    pub fn update(&self, all_completed: bool) -> Result<StreakRecord> {
        self.update_on(Local::now().date_naive(), all_completed)
    }

    /// [`update`](Self::update) with an explicit "today", for tests.
    pub fn update_on(&self, today: NaiveDate, all_completed: bool) -> Result<StreakRecord> {
        let mut record = self.load()?;

        if record.last_date == Some(today) {
            return Ok(record);
        }

        let yesterday = today.checked_sub_days(Days::new(1));
        if record.last_date == yesterday && all_completed {
            record.current += 1;
        } else if all_completed {
            record.current = 1;
        } else {
            record.current = 0;
        }

        record.last_date = Some(today);
        record.best = record.best.max(record.current);

        self.save(&record)?;
        Ok(record)
    }

    /// Manual reset: clear the current run, keep the best.
    pub fn force_reset(&self) -> Result<StreakRecord> {
        self.force_reset_on(Local::now().date_naive())
    }

    fn force_reset_on(&self, today: NaiveDate) -> Result<StreakRecord> {
        let record = StreakRecord {
            current: 0,
            best: self.load()?.best,
            last_date: Some(today),
        };
        self.save(&record)?;
        Ok(record)
    }

    /// Directory backing this tracker.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
