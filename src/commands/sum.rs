use crate::commands::parse_month;
use crate::db::employees::Employees;
use crate::db::records::TimeRecords;
use crate::libs::messages::Message;
use crate::libs::report::tally_statuses;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(
        long,
        short,
        default_value = "today",
        help = "Month to summarize (YYYY-MM or 'today')"
    )]
    month: String,
}

// Tallies each employee's classified statuses over one calendar month.
pub fn cmd(sum_args: SumArgs) -> Result<()> {
    let date = parse_month(&sum_args.month)?;
    let employees = Employees::new()?.fetch_all()?;
    if employees.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }

    let mut records = TimeRecords::new()?;
    let mut rows = Vec::new();
    for employee in employees {
        let month_records = records.fetch_month(employee.id, date)?;
        let tally = tally_statuses(&employee, &month_records);
        rows.push((employee, tally));
    }

    msg_print!(
        Message::SummaryHeader(date.format("%B %Y").to_string()),
        true
    );
    View::summary(&rows)
}
