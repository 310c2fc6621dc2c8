//! Models for biometric punch events and the per-day pairs derived from them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Kind of punch recorded by a biometric device. Stored and serialized with
/// the wire values the ingestion side writes (`entrada` / `salida`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum EventKind {
    #[sqlx(rename = "entrada")]
    #[serde(rename = "entrada")]
    Entry,
    #[sqlx(rename = "salida")]
    #[serde(rename = "salida")]
    Exit,
}

/// One row of the append-only punch log.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AttendanceRecord {
    /// Primary key assigned by the store.
    pub id: i64,
    /// Employee the punch belongs to.
    pub employee_id: i64,
    /// Device that captured the punch.
    pub device_id: String,
    /// Entry or exit.
    pub kind: EventKind,
    /// Local wall-clock timestamp of the punch.
    pub recorded_at: NaiveDateTime,
    /// Whether the device validated the punch biometrically.
    pub biometric_validated: bool,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Completion state of one employee-day, derived from its punch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Both an entry and an exit were recorded.
    Complete,
    /// An entry exists with no exit.
    MissingExit,
    /// Neither punch exists.
    Absent,
}

/// Earliest entry and latest exit for one employee on one calendar day.
/// Computed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DailyPair {
    pub date: NaiveDate,
    pub first_entry: Option<NaiveDateTime>,
    pub last_exit: Option<NaiveDateTime>,
}

impl DailyPair {
    pub fn status(&self) -> DayStatus {
        match (self.first_entry, self.last_exit) {
            (Some(_), Some(_)) => DayStatus::Complete,
            (Some(_), None) => DayStatus::MissingExit,
            _ => DayStatus::Absent,
        }
    }

    /// Whole minutes between the pair's punches. `None` unless the day is
    /// complete; an exit recorded before the entry clamps to zero.
    pub fn worked_minutes(&self) -> Option<i64> {
        match (self.first_entry, self.last_exit) {
            (Some(entry), Some(exit)) => Some((exit - entry).num_minutes().max(0)),
            _ => None,
        }
    }

    /// True when both punches exist but the exit precedes the entry.
    pub fn is_inverted(&self) -> bool {
        matches!(
            (self.first_entry, self.last_exit),
            (Some(entry), Some(exit)) if exit < entry
        )
    }
}

/// Per-employee counters over one monthly window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
pub struct MonthlyStats {
    /// Distinct days having at least one punch of either kind.
    pub days_worked: i64,
    /// Entry punches strictly after the late cutoff.
    pub late_entries: i64,
    /// Sum of worked minutes over the window's complete days.
    pub total_minutes: i64,
}

impl MonthlyStats {
    /// Splits the total into whole hours and leftover minutes for display.
    pub fn split_hours_minutes(&self) -> (i64, i64) {
        (self.total_minutes / 60, self.total_minutes % 60)
    }
}
