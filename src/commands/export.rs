//! Export command: writes the day roster or one employee's history to a
//! CSV or JSON file.

use crate::commands::{history_range, parse_date, resolve_employee};
use crate::db::employees::Employees;
use crate::db::records::TimeRecords;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::record::TimeRecord;
use crate::libs::report::{day_roster, resolve_status};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, short, value_enum, default_value = "csv", help = "Output format")]
    format: ExportFormat,
    #[arg(
        long,
        short,
        default_value = "today",
        help = "Roster date (YYYY-MM-DD or 'today')"
    )]
    date: String,
    #[arg(long, short, help = "Export one employee's history instead of the day roster")]
    employee: Option<String>,
    #[arg(long, help = "History start date (defaults to three months back)")]
    from: Option<String>,
    #[arg(long, help = "History end date (defaults to today)")]
    to: Option<String>,
    #[arg(long, short, help = "Output file path (defaults to a name derived from the data)")]
    output: Option<PathBuf>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let exporter = Exporter::new(export_args.format, export_args.output.clone());

    let path = match &export_args.employee {
        Some(username) => {
            let employee = resolve_employee(Some(username.as_str()))?;
            let (from, to) = history_range(export_args.from.as_deref(), export_args.to.as_deref())?;
            let records = TimeRecords::new()?.fetch_range(employee.id, from, to)?;
            if records.is_empty() {
                msg_info!(Message::NothingToExport);
                return Ok(());
            }
            let rows: Vec<_> = records
                .iter()
                .map(|record| (record.clone(), resolve_status(&employee, record)))
                .collect();
            exporter.export_history(&employee, &rows)?
        }
        None => {
            let date = parse_date(&export_args.date)?;
            let employees = Employees::new()?.fetch_all()?;
            if employees.is_empty() {
                msg_info!(Message::NothingToExport);
                return Ok(());
            }
            let records: HashMap<i64, TimeRecord> = TimeRecords::new()?
                .fetch_day(date)?
                .into_iter()
                .map(|record| (record.employee_id, record))
                .collect();
            let rows = day_roster(&employees, &records);
            exporter.export_roster(date, &rows)?
        }
    };

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
