pub mod breaks;
pub mod employee;
pub mod export;
pub mod init;
pub mod report;
pub mod seed;
pub mod status;
pub mod sum;
pub mod time;

use crate::db::employees::{Employee, Employees};
use crate::db::records::TimeRecords;
use crate::libs::clock::clock_now;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::tracker::{DaySheet, TrackingAction};
use crate::msg_success;
use anyhow::Result;
use chrono::{Local, Months, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage the employee roster")]
    Employee(employee::EmployeeArgs),
    #[command(about = "Record a time-in or time-out event")]
    Time(time::TimeArgs),
    #[command(about = "Record a break-in or break-out event")]
    Break(breaks::BreakArgs),
    #[command(about = "Show today's tracking sheet for an employee")]
    Status(status::StatusArgs),
    #[command(about = "Attendance roster for a day or history for an employee")]
    Report(report::ReportArgs),
    #[command(about = "Monthly status summary across employees")]
    Sum(sum::SumArgs),
    #[command(about = "Seed the demo roster and attendance history")]
    Seed(seed::SeedArgs),
    #[command(about = "Export attendance data to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Employee(args) => employee::cmd(args),
            Commands::Time(args) => time::cmd(args),
            Commands::Break(args) => breaks::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Seed(args) => seed::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

// Parses a date argument, accepting 'today' as an alias.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}

// Parses a month argument (YYYY-MM), accepting 'today' for the current one.
pub(crate) fn parse_month(month_str: &str) -> Result<NaiveDate> {
    if month_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(
            &format!("{}-01", month_str),
            "%Y-%m-%d",
        )?)
    }
}

// Resolves the history range for report and export: `to` defaults to today,
// `from` to three months before `to`.
pub(crate) fn history_range(
    from: Option<&str>,
    to: Option<&str>,
) -> Result<(NaiveDate, NaiveDate)> {
    let to = match to {
        Some(date_str) => parse_date(date_str)?,
        None => Local::now().date_naive(),
    };
    let from = match from {
        Some(date_str) => parse_date(date_str)?,
        None => to.checked_sub_months(Months::new(3)).unwrap_or(to),
    };
    Ok((from, to))
}

// Resolves the employee a tracking command acts on: the explicit username,
// or the configured default.
pub(crate) fn resolve_employee(explicit: Option<&str>) -> Result<Employee> {
    let username = match explicit {
        Some(username) => username.to_string(),
        None => match Config::read()?.default_employee {
            Some(username) => username,
            None => crate::msg_bail_anyhow!(Message::NoDefaultEmployee),
        },
    };
    match Employees::new()?.fetch_by_username(&username)? {
        Some(employee) => Ok(employee),
        None => crate::msg_bail_anyhow!(Message::EmployeeNotFound(username)),
    }
}

// Loads today's sheet, applies one tracking action and persists the result.
pub(crate) fn apply_tracking_action(
    action: TrackingAction,
    employee: Option<String>,
) -> Result<()> {
    let employee = resolve_employee(employee.as_deref())?;
    let today = Local::now().date_naive();
    let mut records = TimeRecords::new()?;

    let mut sheet = match records.fetch(employee.id, today)? {
        Some(record) => DaySheet::from_record(&record),
        None => DaySheet::new(),
    };

    let at = clock_now();
    match sheet.apply(action, &at) {
        Ok(_) => {
            records.upsert(&sheet.into_record(employee.id, today))?;
            let message = match action {
                TrackingAction::TimeIn => Message::TimedInAt(at),
                TrackingAction::TimeOut => Message::TimedOutAt(at),
                TrackingAction::BreakIn => Message::BreakStartedAt(at),
                TrackingAction::BreakOut => Message::BreakEndedAt(at),
            };
            msg_success!(message);
            Ok(())
        }
        Err(rejection) => {
            crate::msg_bail_anyhow!(Message::TrackingRejected(rejection.to_string()))
        }
    }
}
