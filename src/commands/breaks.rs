use crate::commands::apply_tracking_action;
use crate::libs::tracker::TrackingAction;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct BreakArgs {
    #[command(subcommand)]
    event: BreakEvent,
}

#[derive(Debug, Subcommand)]
enum BreakEvent {
    #[command(about = "Start a break")]
    In(BreakEventArgs),
    #[command(about = "End the current break")]
    Out(BreakEventArgs),
}

#[derive(Debug, Args)]
struct BreakEventArgs {
    #[arg(long, short, help = "Employee username (defaults to the configured employee)")]
    employee: Option<String>,
}

pub fn cmd(break_args: BreakArgs) -> Result<()> {
    let (action, args) = match break_args.event {
        BreakEvent::In(args) => (TrackingAction::BreakIn, args),
        BreakEvent::Out(args) => (TrackingAction::BreakOut, args),
    };
    apply_tracking_action(action, args.employee)
}
