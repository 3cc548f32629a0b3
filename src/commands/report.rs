//! Attendance reporting: the admin day roster and per-employee history.

use crate::commands::{history_range, parse_date, resolve_employee};
use crate::db::employees::{Employee, Employees};
use crate::db::records::TimeRecords;
use crate::libs::messages::Message;
use crate::libs::record::TimeRecord;
use crate::libs::report::{day_roster, group_by_month, group_by_week, resolve_status, GroupBy};
use crate::libs::status::Status;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(
        long,
        short,
        default_value = "today",
        help = "Date to report on (YYYY-MM-DD or 'today')"
    )]
    date: String,
    #[arg(long, short, help = "Show one employee's history instead of the day roster")]
    employee: Option<String>,
    #[arg(long, help = "History start date (YYYY-MM-DD; defaults to three months back)")]
    from: Option<String>,
    #[arg(long, help = "History end date (YYYY-MM-DD; defaults to today)")]
    to: Option<String>,
    #[arg(long, short, value_enum, help = "Group history rows by week or month")]
    group: Option<GroupBy>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    match report_args.employee.clone() {
        Some(username) => history(&username, &report_args),
        None => roster(&report_args.date),
    }
}

// The admin table: one row per employee for the chosen day.
fn roster(date_str: &str) -> Result<()> {
    let date = parse_date(date_str)?;
    let employees = Employees::new()?.fetch_all()?;
    if employees.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }

    let records: HashMap<i64, TimeRecord> = TimeRecords::new()?
        .fetch_day(date)?
        .into_iter()
        .map(|record| (record.employee_id, record))
        .collect();
    let rows = day_roster(&employees, &records);

    msg_print!(
        Message::RosterHeader(date.format("%B %-d, %Y").to_string()),
        true
    );
    View::roster(&rows)
}

fn history(username: &str, args: &ReportArgs) -> Result<()> {
    let employee = resolve_employee(Some(username))?;
    let (from, to) = history_range(args.from.as_deref(), args.to.as_deref())?;

    let records = TimeRecords::new()?.fetch_range(employee.id, from, to)?;
    let range = format!("{} to {}", from, to);
    if records.is_empty() {
        msg_info!(Message::NoRecordsInRange(range));
        return Ok(());
    }

    msg_print!(Message::HistoryHeader(employee.full_name(), range), true);
    match args.group {
        None => View::history(&with_statuses(&employee, &records))?,
        Some(GroupBy::Week) => {
            for group in group_by_week(&records) {
                msg_print!(Message::WeekHeader(
                    group.week_start.format("%Y-%m-%d").to_string()
                ));
                View::history(&with_statuses(&employee, &group.records))?;
            }
        }
        Some(GroupBy::Month) => {
            for group in group_by_month(&records) {
                let label = NaiveDate::from_ymd_opt(group.year, group.month, 1)
                    .map(|d| d.format("%B %Y").to_string())
                    .unwrap_or_else(|| format!("{}-{:02}", group.year, group.month));
                msg_print!(Message::MonthHeader(label));
                View::history(&with_statuses(&employee, &group.records))?;
            }
        }
    }
    Ok(())
}

fn with_statuses(employee: &Employee, records: &[TimeRecord]) -> Vec<(TimeRecord, Status)> {
    records
        .iter()
        .map(|record| (record.clone(), resolve_status(employee, record)))
        .collect()
}
