//! Terminal table rendering for rosters, history and summaries.

use crate::db::employees::Employee;
use crate::libs::record::TimeRecord;
use crate::libs::report::{expected_window, RosterRow, StatusTally};
use crate::libs::status::Status;
use crate::libs::tracker::DaySheet;
use anyhow::Result;
use prettytable::{row, Table};

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "USERNAME", "SCHEDULE", "EXPECTED START"]);
        for employee in employees {
            let (expected_in, _) = expected_window(employee);
            table.add_row(row![
                employee.id,
                employee.full_name(),
                employee.username,
                if employee.is_field() { "Field" } else { "Warehouse" },
                expected_in,
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// The admin day table: one row per employee, `-` for missing events.
    pub fn roster(rows: &[RosterRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "EMPLOYEE", "TIME IN", "TIME OUT", "BREAK IN", "BREAK OUT", "STATUS"
        ]);
        for roster_row in rows {
            match &roster_row.record {
                Some(record) => table.add_row(row![
                    roster_row.employee.full_name(),
                    cell(&record.time_in),
                    cell(&record.time_out),
                    cell(&record.break_in),
                    cell(&record.break_out),
                    roster_row.status,
                ]),
                None => table.add_row(row![
                    roster_row.employee.full_name(),
                    "-",
                    "-",
                    "-",
                    "-",
                    roster_row.status,
                ]),
            };
        }
        table.printstd();

        Ok(())
    }

    /// Per-employee history rows with their recomputed status.
    pub fn history(records: &[(TimeRecord, Status)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "DATE", "TIME IN", "TIME OUT", "BREAK IN", "BREAK OUT", "STATUS"
        ]);
        for (record, status) in records {
            table.add_row(row![
                record.date.format("%Y-%m-%d"),
                cell(&record.time_in),
                cell(&record.time_out),
                cell(&record.break_in),
                cell(&record.break_out),
                status,
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Monthly status tallies per employee.
    pub fn summary(rows: &[(Employee, StatusTally)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "EMPLOYEE", "DAYS", "ON TIME", "LATE", "UNDERTIME", "OVERTIME", "OTHER"
        ]);
        for (employee, tally) in rows {
            table.add_row(row![
                employee.full_name(),
                tally.days,
                tally.on_time,
                tally.late,
                tally.undertime,
                tally.overtime,
                tally.other,
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Today's tracking sheet for one employee.
    pub fn sheet(employee: &Employee, sheet: &DaySheet) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "EMPLOYEE", "TIME IN", "TIME OUT", "BREAK IN", "BREAK OUT", "STATUS"
        ]);
        table.add_row(row![
            employee.full_name(),
            cell(&sheet.time_in),
            cell(&sheet.time_out),
            cell(&sheet.break_in),
            cell(&sheet.break_out),
            sheet.state().status(),
        ]);
        table.printstd();

        Ok(())
    }
}
