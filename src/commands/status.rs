use crate::commands::resolve_employee;
use crate::db::records::TimeRecords;
use crate::libs::tracker::DaySheet;
use crate::libs::view::View;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[arg(long, short, help = "Employee username (defaults to the configured employee)")]
    employee: Option<String>,
}

// Shows today's tracking sheet for one employee.
pub fn cmd(status_args: StatusArgs) -> Result<()> {
    let employee = resolve_employee(status_args.employee.as_deref())?;
    let today = Local::now().date_naive();

    let sheet = match TimeRecords::new()?.fetch(employee.id, today)? {
        Some(record) => DaySheet::from_record(&record),
        None => DaySheet::new(),
    };

    View::sheet(&employee, &sheet)
}
