//! Interview slot and slot key models.
//!
//! A [`TimeSlot`] is one discrete, fixed-capacity interview time window.
//! Its identity for capacity accounting is the [`SlotKey`] — the unique
//! date + start-time combination. Slot boundaries arrive pre-sized from
//! the slot-generation layer (interview length and buffer already baked
//! in); this crate never recomputes them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated date + start-time key identifying a physical slot.
///
/// Candidates reference slots by key, and all occupancy accounting is
/// keyed by it. Two `TimeSlot`s with equal keys would collapse into one
/// logical slot and silently merge capacity; the optimizers reject that
/// at construction instead.
///
/// Canonical text form: `YYYYMMDD_HHMM` (e.g. `20241201_0900`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotKey(String);

impl SlotKey {
    /// Builds the key for a date and start time.
    pub fn new(date: NaiveDate, start_time: NaiveTime) -> Self {
        Self(format!(
            "{}_{}",
            date.format("%Y%m%d"),
            start_time.format("%H%M")
        ))
    }

    /// Parses a raw stored reference, validating the `YYYYMMDD_HHMM` form.
    ///
    /// Returns `None` for malformed text, so a corrupted reference fails
    /// at the boundary instead of silently never matching any slot.
    pub fn parse(raw: &str) -> Option<Self> {
        let (date_part, time_part) = raw.split_once('_')?;
        let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
        let time = NaiveTime::parse_from_str(time_part, "%H%M").ok()?;
        Some(Self::new(date, time))
    }

    /// Canonical text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bookable interview slot.
///
/// Holds up to `simultaneous_count` parallel interviews (the capacity is
/// a run-level constraint, not a per-slot field — see `OptimizerConfig`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Interview date.
    pub date: NaiveDate,
    /// Window start.
    pub start_time: NaiveTime,
    /// Window end.
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            start_time,
            end_time,
        }
    }

    /// Occupancy-accounting key for this slot (date + start time).
    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.date, self.start_time)
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}
