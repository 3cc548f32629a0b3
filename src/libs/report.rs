//! Shared logic for attendance report assembly.
//!
//! Builds the per-day roster the admin table shows, resolves each row's
//! status through the classifier, and provides the range filtering and
//! week/month grouping used by the history views.

use crate::db::employees::Employee;
use crate::libs::record::{AttendanceRecord, TimeRecord};
use crate::libs::status::{classify, Status, EXPECTED_END, EXPECTED_START};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

/// How history rows are grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GroupBy {
    Week,
    Month,
}

/// One row of the per-day attendance roster.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub employee: Employee,
    /// `None` when the employee has no record for the requested day.
    pub record: Option<TimeRecord>,
    pub status: Status,
}

/// Recomputes the status of a stored record through the classifier, with
/// the stored label as the incomplete-data fallback.
pub fn resolve_status(employee: &Employee, record: &TimeRecord) -> Status {
    classify(&AttendanceRecord::from_wire(
        record,
        employee.expected_start_time.as_deref(),
    ))
}

/// Assembles the roster for one day: every employee appears exactly once,
/// and employees without a record that day synthesize a No Record row.
pub fn day_roster(employees: &[Employee], records: &HashMap<i64, TimeRecord>) -> Vec<RosterRow> {
    employees
        .iter()
        .map(|employee| match records.get(&employee.id) {
            Some(record) => RosterRow {
                status: resolve_status(employee, record),
                record: Some(record.clone()),
                employee: employee.clone(),
            },
            None => RosterRow {
                employee: employee.clone(),
                record: None,
                status: Status::NoRecord,
            },
        })
        .collect()
}

/// The schedule window shown for an employee when no record exists: field
/// staff have their own expected start and no fixed end, warehouse staff
/// get the 08:00-17:00 defaults.
pub fn expected_window(employee: &Employee) -> (String, Option<String>) {
    match &employee.expected_start_time {
        Some(start) => (start.clone(), None),
        None => (EXPECTED_START.to_string(), Some(EXPECTED_END.to_string())),
    }
}

/// Keeps the records whose date falls inside the inclusive range.
pub fn filter_by_range(records: &[TimeRecord], from: NaiveDate, to: NaiveDate) -> Vec<TimeRecord> {
    records
        .iter()
        .filter(|record| record.date >= from && record.date <= to)
        .cloned()
        .collect()
}

/// Records of one calendar week, Sunday start.
#[derive(Debug, Clone)]
pub struct WeekGroup {
    pub week_start: NaiveDate,
    pub records: Vec<TimeRecord>,
}

/// Records of one calendar month.
#[derive(Debug, Clone)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    pub records: Vec<TimeRecord>,
}

/// Groups records by week (Sunday start), newest week first, records
/// newest-first inside each group.
pub fn group_by_week(records: &[TimeRecord]) -> Vec<WeekGroup> {
    let mut grouped: HashMap<NaiveDate, Vec<TimeRecord>> = HashMap::new();
    for record in records {
        let back = record.date.weekday().num_days_from_sunday() as i64;
        let week_start = record.date - Duration::days(back);
        grouped.entry(week_start).or_default().push(record.clone());
    }
    let mut groups: Vec<WeekGroup> = grouped
        .into_iter()
        .map(|(week_start, mut records)| {
            records.sort_by(|a, b| b.date.cmp(&a.date));
            WeekGroup { week_start, records }
        })
        .collect();
    groups.sort_by(|a, b| b.week_start.cmp(&a.week_start));
    groups
}

/// Groups records by calendar month, newest month first.
pub fn group_by_month(records: &[TimeRecord]) -> Vec<MonthGroup> {
    let mut grouped: HashMap<(i32, u32), Vec<TimeRecord>> = HashMap::new();
    for record in records {
        grouped
            .entry((record.date.year(), record.date.month()))
            .or_default()
            .push(record.clone());
    }
    let mut groups: Vec<MonthGroup> = grouped
        .into_iter()
        .map(|((year, month), mut records)| {
            records.sort_by(|a, b| b.date.cmp(&a.date));
            MonthGroup { year, month, records }
        })
        .collect();
    groups.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
    groups
}

/// Per-employee status counts over a reporting period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusTally {
    pub days: usize,
    pub on_time: usize,
    pub late: usize,
    pub undertime: usize,
    pub overtime: usize,
    /// Live or fallback labels (On Duty, On Break, ...) that a period can
    /// still contain for its most recent day.
    pub other: usize,
}

impl StatusTally {
    pub fn add(&mut self, status: Status) {
        self.days += 1;
        match status {
            Status::OnTime => self.on_time += 1,
            Status::Late => self.late += 1,
            Status::Undertime => self.undertime += 1,
            Status::Overtime => self.overtime += 1,
            _ => self.other += 1,
        }
    }
}

/// Tallies the classifier's verdict over a set of records.
pub fn tally_statuses(employee: &Employee, records: &[TimeRecord]) -> StatusTally {
    let mut tally = StatusTally::default();
    for record in records {
        tally.add(resolve_status(employee, record));
    }
    tally
}
