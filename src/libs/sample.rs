//! Synthetic attendance history for demos and local evaluation.
//!
//! Mirrors the data the original system shipped with: a roster of six
//! warehouse and five field employees, and three months of plausible
//! history per employee. Generation is driven by an injected RNG so tests
//! can seed it and assert on the output.

use crate::db::employees::Employee;
use crate::libs::clock::{format_minutes, parse_clock, MINUTES_PER_DAY};
use crate::libs::record::{AttendanceRecord, TimeRecord};
use crate::libs::status::{classify, EXPECTED_END, EXPECTED_START};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;

pub const DEFAULT_MONTHS_BACK: u32 = 3;

/// Arrival variance around the expected start, minutes either way.
const START_VARIANCE_MINUTES: i32 = 120;
/// Break placement: four hours into the shift, half an hour long.
const BREAK_AFTER_MINUTES: i32 = 4 * 60;
const BREAK_LENGTH_MINUTES: i32 = 30;
/// Shortest warehouse shift the generator will produce, minutes.
const MIN_SHIFT_MINUTES: i32 = 4 * 60;

/// The demo roster: `(first, last, username, expected start)`. A `Some`
/// expected start marks field staff.
pub const DEMO_ROSTER: &[(&str, &str, &str, Option<&str>)] = &[
    ("John", "Smith", "john.smith", None),
    ("Sarah", "Johnson", "sarah.johnson", None),
    ("Mike", "Davis", "mike.davis", None),
    ("Emily", "Wilson", "emily.wilson", None),
    ("David", "Brown", "david.brown", None),
    ("Lisa", "Anderson", "lisa.anderson", None),
    ("Ava", "Martinez", "ava.martinez", Some("11:30 PM")),
    ("Noah", "Clark", "noah.clark", Some("09:00 AM")),
    ("Mia", "Lee", "mia.lee", Some("07:00 AM")),
    ("Ethan", "Hernandez", "ethan.hernandez", Some("10:00 AM")),
    ("Isabella", "Walker", "isabella.walker", Some("09:30 PM")),
];

/// Generates history for one employee: every weekday of the last
/// `months_back` calendar months up to `today`, newest first. Each day's
/// status comes from the classifier, exactly as a stored day would be
/// labeled.
pub fn generate_history(
    employee: &Employee,
    months_back: u32,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<TimeRecord> {
    let mut records = Vec::new();

    for offset in 0..months_back {
        let month_start = month_origin(today, offset);
        for day in 1..=days_in_month(month_start) {
            let Some(date) =
                NaiveDate::from_ymd_opt(month_start.year(), month_start.month(), day)
            else {
                continue;
            };
            if date > today || is_weekend(date) {
                continue;
            }
            records.push(generate_day(employee, date, rng));
        }
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

fn generate_day(employee: &Employee, date: NaiveDate, rng: &mut impl Rng) -> TimeRecord {
    let expected_start = match &employee.expected_start_time {
        Some(raw) => parse_clock(raw),
        None => Some(EXPECTED_START),
    };

    let time_in = match expected_start {
        Some(expected) => {
            let variance = rng.gen_range(-START_VARIANCE_MINUTES..=START_VARIANCE_MINUTES);
            (expected.minutes() + variance).rem_euclid(MINUTES_PER_DAY)
        }
        // Unparseable override: fall back to a morning arrival.
        None => rng.gen_range(7..=9) * 60 + rng.gen_range(0..60),
    };

    let shift_minutes = if employee.is_field() {
        // Field shifts run 7.5 to 9.5 hours regardless of the clock.
        rng.gen_range(450..570)
    } else {
        // Warehouse shifts aim for the 5 PM boundary with some spread.
        let to_shift_end = EXPECTED_END.minutes() - time_in;
        (to_shift_end + rng.gen_range(-30..=30)).max(MIN_SHIFT_MINUTES)
    };

    let time_out = time_in + shift_minutes;
    let break_in = time_in + BREAK_AFTER_MINUTES;
    let break_out = break_in + BREAK_LENGTH_MINUTES;

    let time_in = format_minutes(time_in);
    let time_out = format_minutes(time_out);
    let break_in = format_minutes(break_in);
    let break_out = format_minutes(break_out);

    let status = classify(&AttendanceRecord::from_clock_strings(
        Some(&time_in),
        Some(&time_out),
        Some(&break_in),
        Some(&break_out),
        employee.expected_start_time.as_deref(),
        None,
    ));

    TimeRecord {
        employee_id: employee.id,
        date,
        time_in: Some(time_in),
        time_out: Some(time_out),
        break_in: Some(break_in),
        break_out: Some(break_out),
        status: Some(status),
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First day of the month `offset` calendar months before `today`'s month.
fn month_origin(today: NaiveDate, offset: u32) -> NaiveDate {
    let total = today.year() * 12 + today.month0() as i32 - offset as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
}

fn days_in_month(month_start: NaiveDate) -> u32 {
    let (year, month) = (month_start.year(), month_start.month());
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - month_start).num_days() as u32,
        None => 28,
    }
}
