//! Attendance record shapes: the raw wire form and the parsed form the
//! classifier consumes.
//!
//! `TimeRecord` mirrors what the store persists and what the original
//! backend exchanged: snake_case keys, nullable `"hh:mm AM/PM"` strings.
//! `AttendanceRecord` is its validated counterpart — every clock string is
//! parsed once at the constructor boundary, so the classification rules
//! never touch raw text. A clock string that fails to parse degrades to an
//! absent field rather than an error.

use crate::libs::clock::{parse_clock, ClockMinutes};
use crate::libs::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted day of attendance for one employee, in the wire shape.
///
/// `status` carries the label stored when the record was written (by a
/// tracking action or the seeder); views recompute the label and use the
/// stored one only as a fallback for incomplete data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub break_in: Option<String>,
    pub break_out: Option<String>,
    pub status: Option<Status>,
}

/// Scheduling policy for one employee, discriminated by whether an
/// expected-start-time override accompanies the record.
///
/// The override's *presence* selects the policy; its *parseability* only
/// affects the lateness anchor. An employee with a malformed override is
/// still judged by the flexible rules, just never late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Warehouse staff: fixed 08:00-17:00 boundaries.
    Fixed,
    /// Field staff: judged by net worked time, lateness anchored to the
    /// employee's own expected start.
    Flexible {
        expected_start: Option<ClockMinutes>,
    },
}

/// A day of attendance with every clock string already parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceRecord {
    pub time_in: Option<ClockMinutes>,
    pub time_out: Option<ClockMinutes>,
    pub break_in: Option<ClockMinutes>,
    pub break_out: Option<ClockMinutes>,
    pub schedule: Schedule,
    /// Previously stored label, returned verbatim when the record is too
    /// incomplete to classify.
    pub fallback: Option<Status>,
}

impl AttendanceRecord {
    /// Parses raw clock strings into a classifiable record.
    ///
    /// The expected-start override selects the fixed schedule when absent
    /// or blank (`""`/`"-"`); a present-but-malformed override still selects
    /// the flexible schedule with no lateness anchor, matching how the
    /// original system branched on the field's presence rather than its
    /// validity.
    pub fn from_clock_strings(
        time_in: Option<&str>,
        time_out: Option<&str>,
        break_in: Option<&str>,
        break_out: Option<&str>,
        expected_start_time: Option<&str>,
        fallback: Option<Status>,
    ) -> Self {
        let schedule = match expected_start_time {
            None => Schedule::Fixed,
            Some(raw) if raw.trim().is_empty() || raw.trim() == "-" => Schedule::Fixed,
            Some(raw) => Schedule::Flexible {
                expected_start: parse_clock(raw),
            },
        };
        AttendanceRecord {
            time_in: time_in.and_then(parse_clock),
            time_out: time_out.and_then(parse_clock),
            break_in: break_in.and_then(parse_clock),
            break_out: break_out.and_then(parse_clock),
            schedule,
            fallback,
        }
    }

    /// Builds the classifiable form of a stored record, joining in the
    /// employee's expected-start override.
    pub fn from_wire(record: &TimeRecord, expected_start_time: Option<&str>) -> Self {
        Self::from_clock_strings(
            record.time_in.as_deref(),
            record.time_out.as_deref(),
            record.break_in.as_deref(),
            record.break_out.as_deref(),
            expected_start_time,
            record.status,
        )
    }
}
