//! Demo data seeding: populates the roster on first run and generates a
//! realistic attendance history for every employee.

use crate::db::employees::Employees;
use crate::db::records::TimeRecords;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::sample::{generate_history, DEFAULT_MONTHS_BACK, DEMO_ROSTER};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[arg(
        long,
        short,
        help = "Months of history to generate (defaults to the configured value)"
    )]
    months: Option<u32>,
    #[arg(long, help = "RNG seed for reproducible histories")]
    seed: Option<u64>,
}

pub fn cmd(seed_args: SeedArgs) -> Result<()> {
    let mut employees = Employees::new()?;

    // First run: populate the demo roster.
    if employees.count()? == 0 {
        for (first_name, last_name, username, expected_start) in DEMO_ROSTER {
            employees.insert(first_name, last_name, username, *expected_start)?;
        }
        msg_success!(Message::RosterSeeded(DEMO_ROSTER.len()));
    }

    let months_back = seed_args
        .months
        .or_else(|| Config::read().ok().and_then(|c| c.seed.map(|s| s.months_back)))
        .unwrap_or(DEFAULT_MONTHS_BACK);

    let mut rng: StdRng = match seed_args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let today = Local::now().date_naive();
    let roster = employees.fetch_all()?;
    let mut records = TimeRecords::new()?;
    let mut total = 0usize;
    for employee in &roster {
        // Regenerate from scratch so repeated seeding stays consistent.
        records.clear_for(employee.id)?;
        let history = generate_history(employee, months_back, today, &mut rng);
        total += history.len();
        for record in &history {
            records.upsert(record)?;
        }
    }

    msg_success!(Message::SeedCompleted {
        employees: roster.len(),
        records: total,
    });
    Ok(())
}
