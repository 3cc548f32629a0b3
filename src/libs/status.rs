//! Workforce status labels and the daily classification rules.
//!
//! The classifier is the heart of the application: given one day of
//! attendance events it deduces a single human-readable status label. Two
//! rule sets exist, selected by the employee's schedule:
//!
//! - **Fixed shift** (warehouse staff): judged against the 08:00-17:00
//!   boundaries, 15 minutes of grace on each boundary independently.
//! - **Flexible shift** (field staff): judged by net worked time against an
//!   8-hour target, with lateness anchored to the employee's own expected
//!   start time.
//!
//! Each rule set is an ordered table evaluated top-down; the first matching
//! rule wins, which keeps the precedence between Late, Undertime and
//! Overtime auditable. The classifier is total: malformed or missing data
//! degrades to one of the defined labels, never to an error.

use crate::libs::clock::{wrapped_diff, ClockMinutes};
use crate::libs::record::{AttendanceRecord, Schedule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shift boundaries for fixed-schedule (warehouse) staff.
pub const EXPECTED_START: ClockMinutes = ClockMinutes::from_hm(8, 0);
pub const EXPECTED_END: ClockMinutes = ClockMinutes::from_hm(17, 0);

/// Net work target for flexible-schedule (field) staff, in minutes. The
/// target is fixed at eight hours no matter where the employee's expected
/// start time falls.
pub const EXPECTED_WORK_MINUTES: i32 = 8 * 60;

/// Tolerance window applied to every schedule boundary, in minutes. A
/// deviation of exactly this much still counts as within grace.
pub const GRACE_MINUTES: i32 = 15;

/// The closed set of workforce status labels.
///
/// `NotStarted` and `Completed` belong to the live tracking sheet;
/// `NoRecord` marks roster rows with no data for the requested day; the
/// remaining labels are produced by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "On Duty")]
    OnDuty,
    #[serde(rename = "On Break")]
    OnBreak,
    Completed,
    #[serde(rename = "On Time")]
    OnTime,
    Late,
    Undertime,
    Overtime,
    #[serde(rename = "No Record")]
    NoRecord,
}

impl Status {
    /// The wire spelling, identical to what the original system stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::OnDuty => "On Duty",
            Status::OnBreak => "On Break",
            Status::Completed => "Completed",
            Status::OnTime => "On Time",
            Status::Late => "Late",
            Status::Undertime => "Undertime",
            Status::Overtime => "Overtime",
            Status::NoRecord => "No Record",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored status string is not one of the known labels.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status label: {0}")]
pub struct ParseStatusError(String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(Status::NotStarted),
            "On Duty" => Ok(Status::OnDuty),
            "On Break" => Ok(Status::OnBreak),
            "Completed" => Ok(Status::Completed),
            "On Time" => Ok(Status::OnTime),
            "Late" => Ok(Status::Late),
            "Undertime" => Ok(Status::Undertime),
            "Overtime" => Ok(Status::Overtime),
            "No Record" => Ok(Status::NoRecord),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Inputs to the schedule rule tables, computed once per record.
struct DayFacts {
    time_in: i32,
    time_out: i32,
    /// Lateness anchor. `None` when a flexible-schedule override was present
    /// but unparseable, which disables the Late rule.
    expected_start: Option<i32>,
    /// Shift end boundary; only the fixed table reads it.
    expected_end: i32,
    /// Gross minus break minutes, floored at zero; only the flexible table
    /// reads it.
    net_worked: i32,
}

impl DayFacts {
    fn is_late(&self) -> bool {
        self.expected_start
            .is_some_and(|start| self.time_in > start + GRACE_MINUTES)
    }

    fn within_work_grace(&self) -> bool {
        (self.net_worked - EXPECTED_WORK_MINUTES).abs() <= GRACE_MINUTES
    }
}

/// One row of a classification table: first predicate to hold wins.
struct Rule {
    applies: fn(&DayFacts) -> bool,
    label: Status,
}

/// Fixed-shift rules. Late is checked first, which makes it mutually
/// exclusive with the time-out rules below it.
const FIXED_SHIFT_RULES: &[Rule] = &[
    Rule {
        applies: |f| f.is_late(),
        label: Status::Late,
    },
    Rule {
        applies: |f| f.time_out < f.expected_end - GRACE_MINUTES,
        label: Status::Undertime,
    },
    Rule {
        applies: |f| f.time_out > f.expected_end + GRACE_MINUTES,
        label: Status::Overtime,
    },
    Rule {
        applies: |_| true,
        label: Status::OnTime,
    },
];

/// Flexible-shift rules. A late arrival is Late even when the worked
/// duration lands on target; the duration labels below it only ever apply
/// to punctual arrivals. On Time leads the table so that a punctual,
/// on-target day never falls through to the duration checks.
const FLEXIBLE_SHIFT_RULES: &[Rule] = &[
    Rule {
        applies: |f| !f.is_late() && f.within_work_grace(),
        label: Status::OnTime,
    },
    Rule {
        applies: |f| f.is_late(),
        label: Status::Late,
    },
    Rule {
        applies: |f| f.net_worked > EXPECTED_WORK_MINUTES + GRACE_MINUTES,
        label: Status::Overtime,
    },
    Rule {
        applies: |f| f.net_worked < EXPECTED_WORK_MINUTES - GRACE_MINUTES,
        label: Status::Undertime,
    },
    Rule {
        applies: |_| true,
        label: Status::OnTime,
    },
];

/// Classifies one day of attendance into a status label.
///
/// Incomplete-day states are resolved first, before any schedule logic: an
/// open break means On Break, a missing time-out means On Duty. A record
/// still missing any of the four events after that falls back to the status
/// stored alongside it, or No Record when nothing was stored. Only complete
/// records reach the schedule tables.
pub fn classify(record: &AttendanceRecord) -> Status {
    if record.break_in.is_some() && record.break_out.is_none() {
        return Status::OnBreak;
    }
    if record.time_in.is_some() && record.time_out.is_none() {
        return Status::OnDuty;
    }

    let (Some(time_in), Some(time_out), Some(break_in), Some(break_out)) = (
        record.time_in,
        record.time_out,
        record.break_in,
        record.break_out,
    ) else {
        return record.fallback.unwrap_or(Status::NoRecord);
    };

    let (rules, facts) = match record.schedule {
        Schedule::Fixed => (
            FIXED_SHIFT_RULES,
            DayFacts {
                time_in: time_in.minutes(),
                time_out: time_out.minutes(),
                expected_start: Some(EXPECTED_START.minutes()),
                expected_end: EXPECTED_END.minutes(),
                net_worked: 0,
            },
        ),
        Schedule::Flexible { expected_start } => {
            let break_duration = wrapped_diff(Some(break_in), Some(break_out));
            let gross_duration = wrapped_diff(Some(time_in), Some(time_out));
            (
                FLEXIBLE_SHIFT_RULES,
                DayFacts {
                    time_in: time_in.minutes(),
                    time_out: time_out.minutes(),
                    expected_start: expected_start.map(ClockMinutes::minutes),
                    expected_end: 0,
                    net_worked: (gross_duration - break_duration).max(0),
                },
            )
        }
    };

    rules
        .iter()
        .find(|rule| (rule.applies)(&facts))
        .map(|rule| rule.label)
        .unwrap_or(Status::OnTime)
}
