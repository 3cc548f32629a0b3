//! Data export for attendance rosters and per-employee history.
//!
//! Supports CSV for spreadsheet use and JSON for programmatic consumers.
//! Output rows carry the same columns as the terminal tables, with `-` for
//! missing events, so an export matches what the admin saw on screen.

use crate::db::employees::Employee;
use crate::libs::record::TimeRecord;
use crate::libs::report::RosterRow;
use crate::libs::status::Status;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported attendance row, identical for roster and history exports.
#[derive(Debug, Serialize)]
struct ExportRow {
    date: String,
    employee: String,
    time_in: String,
    time_out: String,
    break_in: String,
    break_out: String,
    status: String,
}

impl ExportRow {
    fn new(date: NaiveDate, employee: &Employee, record: Option<&TimeRecord>, status: Status) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        let (time_in, time_out, break_in, break_out) = match record {
            Some(record) => (
                field(&record.time_in),
                field(&record.time_out),
                field(&record.break_in),
                field(&record.break_out),
            ),
            None => ("-".into(), "-".into(), "-".into(), "-".into()),
        };
        ExportRow {
            date: date.format("%Y-%m-%d").to_string(),
            employee: employee.full_name(),
            time_in,
            time_out,
            break_in,
            break_out,
            status: status.to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Exports one day's roster. Returns the written path.
    pub fn export_roster(&self, date: NaiveDate, rows: &[RosterRow]) -> Result<PathBuf> {
        let export_rows: Vec<ExportRow> = rows
            .iter()
            .map(|row| ExportRow::new(date, &row.employee, row.record.as_ref(), row.status))
            .collect();
        self.write(&format!("eckho_roster_{}", date.format("%Y-%m-%d")), &export_rows)
    }

    /// Exports one employee's history rows with their recomputed statuses.
    pub fn export_history(
        &self,
        employee: &Employee,
        records: &[(TimeRecord, Status)],
    ) -> Result<PathBuf> {
        let export_rows: Vec<ExportRow> = records
            .iter()
            .map(|(record, status)| ExportRow::new(record.date, employee, Some(record), *status))
            .collect();
        self.write(&format!("eckho_history_{}", employee.username), &export_rows)
    }

    fn write(&self, stem: &str, rows: &[ExportRow]) -> Result<PathBuf> {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.{}", stem, self.format.extension())));

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let file = File::create(&path)?;
                serde_json::to_writer_pretty(file, rows)?;
            }
        }

        Ok(path)
    }
}
