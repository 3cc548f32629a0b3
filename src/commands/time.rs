use crate::commands::apply_tracking_action;
use crate::libs::tracker::TrackingAction;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TimeArgs {
    #[command(subcommand)]
    event: TimeEvent,
}

#[derive(Debug, Subcommand)]
enum TimeEvent {
    #[command(about = "Clock in for today")]
    In(TimeEventArgs),
    #[command(about = "Clock out for today")]
    Out(TimeEventArgs),
}

#[derive(Debug, Args)]
struct TimeEventArgs {
    #[arg(long, short, help = "Employee username (defaults to the configured employee)")]
    employee: Option<String>,
}

pub fn cmd(time_args: TimeArgs) -> Result<()> {
    let (action, args) = match time_args.event {
        TimeEvent::In(args) => (TrackingAction::TimeIn, args),
        TimeEvent::Out(args) => (TrackingAction::TimeOut, args),
    };
    apply_tracking_action(action, args.employee)
}
