//! Employee roster management commands.

use crate::db::employees::Employees;
use crate::libs::clock::parse_clock;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    action: EmployeeAction,
}

#[derive(Debug, Subcommand)]
enum EmployeeAction {
    #[command(about = "Add an employee to the roster")]
    Add(AddArgs),
    #[command(about = "List the roster")]
    List,
    #[command(about = "Remove an employee")]
    Remove(RemoveArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long, help = "First name (prompted when omitted)")]
    first_name: Option<String>,
    #[arg(long, help = "Last name (prompted when omitted)")]
    last_name: Option<String>,
    #[arg(long, short, help = "Login username (prompted when omitted)")]
    username: Option<String>,
    #[arg(
        long,
        help = "Expected start time for field staff, e.g. '09:00 AM'; omit for warehouse staff"
    )]
    expected_start: Option<String>,
}

#[derive(Debug, Args)]
struct RemoveArgs {
    #[arg(required = true)]
    username: String,
}

pub fn cmd(employee_args: EmployeeArgs) -> Result<()> {
    match employee_args.action {
        EmployeeAction::Add(args) => add(args),
        EmployeeAction::List => list(),
        EmployeeAction::Remove(args) => remove(args),
    }
}

fn add(args: AddArgs) -> Result<()> {
    let first_name = prompt_or(args.first_name, "First name")?;
    let last_name = prompt_or(args.last_name, "Last name")?;
    let username = prompt_or(args.username, "Username")?;

    // Field staff get a validated expected start; the flag stays optional
    // so warehouse staff can be added without it.
    if let Some(raw) = &args.expected_start {
        if parse_clock(raw).is_none() {
            msg_bail_anyhow!(Message::InvalidClockString(raw.clone()));
        }
    }

    let mut employees = Employees::new()?;
    if employees.fetch_by_username(&username)?.is_some() {
        msg_bail_anyhow!(Message::EmployeeExists(username));
    }
    employees.insert(
        &first_name,
        &last_name,
        &username,
        args.expected_start.as_deref(),
    )?;

    msg_success!(Message::EmployeeAdded(format!("{} {}", first_name, last_name)));
    Ok(())
}

fn list() -> Result<()> {
    let employees = Employees::new()?.fetch_all()?;
    if employees.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }
    View::employees(&employees)
}

fn remove(args: RemoveArgs) -> Result<()> {
    if Employees::new()?.remove(&args.username)? {
        msg_success!(Message::EmployeeRemoved(args.username));
        Ok(())
    } else {
        msg_bail_anyhow!(Message::EmployeeNotFound(args.username))
    }
}

fn prompt_or(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}
