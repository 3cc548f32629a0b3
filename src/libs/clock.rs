//! Twelve-hour clock parsing and midnight-aware duration math.
//!
//! Attendance events travel as `"hh:mm AM/PM"` strings, the format both the
//! kiosk and the admin views exchange. This module converts those strings
//! into minutes since local midnight and computes elapsed time between two
//! clock values, treating a negative difference as crossing midnight so that
//! overnight shifts report sane durations.
//!
//! ## Examples
//!
//! ```rust
//! use eckho::libs::clock::{parse_clock, wrapped_diff};
//!
//! let start = parse_clock("11:30 PM");
//! let end = parse_clock("12:30 AM");
//! assert_eq!(wrapped_diff(start, end), 60);
//! assert!(parse_clock("8:15").is_none()); // no meridiem
//! ```

use chrono::Timelike;
use std::fmt;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Minutes since local midnight.
///
/// Produced by [`parse_clock`], or by [`ClockMinutes::from_hm`] for schedule
/// constants. Well-formed input lands in `0..=1439`; malformed-but-numeric
/// input ("13:99 PM") is carried through unvalidated so views can still
/// render whatever upstream sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockMinutes(i32);

impl ClockMinutes {
    /// Builds a clock value from a 24-hour time. Intended for schedule
    /// constants, not for arbitrary arithmetic.
    pub const fn from_hm(hour: i32, minute: i32) -> Self {
        ClockMinutes(hour * 60 + minute)
    }

    /// Minutes since midnight as a plain integer.
    pub fn minutes(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ClockMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.0))
    }
}

/// Parses a `"hh:mm AM/PM"` string into minutes since midnight.
///
/// The string must split into exactly a time token and a meridiem token
/// (case-insensitive `AM`/`PM`); the time token must split on `:` into two
/// numeric parts. Hour 12 maps to 0 (AM) or 12 (PM); other hours gain +12
/// under PM. Anything else, including the `-` placeholder the backend emits
/// for missing values, is unparseable and yields `None`.
///
/// Hour and minute are validated only as numeric; out-of-range values pass
/// through, and callers tolerate the resulting out-of-range minutes.
pub fn parse_clock(raw: &str) -> Option<ClockMinutes> {
    let mut tokens = raw.trim().split_whitespace();
    let time = tokens.next()?;
    let meridiem = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let is_pm = match meridiem.to_ascii_uppercase().as_str() {
        "AM" => false,
        "PM" => true,
        _ => return None,
    };

    let (hour, minute) = time.split_once(':')?;
    let mut hour: i32 = hour.parse().ok()?;
    let minute: i32 = minute.parse().ok()?;

    if hour == 12 {
        hour = if is_pm { 12 } else { 0 };
    } else if is_pm {
        hour += 12;
    }

    Some(ClockMinutes(hour * 60 + minute))
}

/// Elapsed minutes from `start` to `end`, wrapping across midnight.
///
/// A negative raw difference means the end fell on the next calendar day, so
/// one day of minutes is added back. An absent side yields 0: callers treat
/// zero as "no duration known" rather than an error.
pub fn wrapped_diff(start: Option<ClockMinutes>, end: Option<ClockMinutes>) -> i32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    let raw = end.0 - start.0;
    if raw >= 0 {
        raw
    } else {
        raw + MINUTES_PER_DAY
    }
}

/// Formats raw minutes-since-midnight as `"hh:mm AM/PM"`, wrapping values
/// outside a single day. Used where arithmetic produces minutes that never
/// existed as a [`ClockMinutes`], e.g. the sample generator's shift math.
pub fn format_minutes(total: i32) -> String {
    let total = total.rem_euclid(MINUTES_PER_DAY);
    let hour = total / 60;
    let minute = total % 60;
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", hour12, minute, meridiem)
}

/// The current local wall-clock time as a `"hh:mm AM/PM"` string, the form
/// tracking actions stamp into the day sheet.
pub fn clock_now() -> String {
    let now = chrono::Local::now().time();
    format_minutes(now.hour() as i32 * 60 + now.minute() as i32)
}
