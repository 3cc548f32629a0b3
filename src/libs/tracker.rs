//! Live tracking of today's attendance actions.
//!
//! A [`DaySheet`] holds the four clock stamps of the current day and walks
//! the state machine `Not Started -> On Duty <-> On Break`, `On Duty ->
//! Completed`. Out-of-order actions are rejected with a typed error instead
//! of silently mutating the sheet; the store only ever sees sheets that took
//! a legal transition. The sheet itself is plain data owned by the caller —
//! persistence goes through the records store, not a process-wide singleton.

use crate::libs::record::TimeRecord;
use crate::libs::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the employee currently stands in today's sheet. Always derived
/// from the clock stamps, so a sheet loaded from the store can never
/// disagree with its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    NotStarted,
    OnDuty,
    OnBreak,
    Completed,
}

impl TrackingState {
    /// The status label shown for this live state.
    pub fn status(&self) -> Status {
        match self {
            TrackingState::NotStarted => Status::NotStarted,
            TrackingState::OnDuty => Status::OnDuty,
            TrackingState::OnBreak => Status::OnBreak,
            TrackingState::Completed => Status::Completed,
        }
    }
}

/// The four tracking actions, with the wire names the original REST
/// endpoint accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingAction {
    TimeIn,
    TimeOut,
    BreakIn,
    BreakOut,
}

/// Rejection reasons for out-of-order tracking actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackingError {
    #[error("already timed in for today")]
    AlreadyTimedIn,
    #[error("must time in first")]
    NotTimedIn,
    #[error("already timed out for today")]
    AlreadyTimedOut,
    #[error("cannot time out while on break")]
    TimeOutOnBreak,
    #[error("already on break")]
    AlreadyOnBreak,
    #[error("no break in progress")]
    NoOpenBreak,
    #[error("workday already completed")]
    AlreadyCompleted,
}

/// Today's clock stamps for one employee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySheet {
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub break_in: Option<String>,
    pub break_out: Option<String>,
}

impl DaySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a sheet from a stored record.
    pub fn from_record(record: &TimeRecord) -> Self {
        DaySheet {
            time_in: record.time_in.clone(),
            time_out: record.time_out.clone(),
            break_in: record.break_in.clone(),
            break_out: record.break_out.clone(),
        }
    }

    /// Converts the sheet back into a storable record, stamping the live
    /// status derived from the current state.
    pub fn into_record(self, employee_id: i64, date: NaiveDate) -> TimeRecord {
        let status = self.state().status();
        TimeRecord {
            employee_id,
            date,
            time_in: self.time_in,
            time_out: self.time_out,
            break_in: self.break_in,
            break_out: self.break_out,
            status: Some(status),
        }
    }

    pub fn state(&self) -> TrackingState {
        if self.time_out.is_some() {
            TrackingState::Completed
        } else if self.break_in.is_some() && self.break_out.is_none() {
            TrackingState::OnBreak
        } else if self.time_in.is_some() {
            TrackingState::OnDuty
        } else {
            TrackingState::NotStarted
        }
    }

    /// Applies one tracking action, stamping `at` on success. Returns the
    /// new live status.
    pub fn apply(&mut self, action: TrackingAction, at: &str) -> Result<Status, TrackingError> {
        match action {
            TrackingAction::TimeIn => self.time_in(at),
            TrackingAction::TimeOut => self.time_out(at),
            TrackingAction::BreakIn => self.break_in(at),
            TrackingAction::BreakOut => self.break_out(at),
        }
    }

    pub fn time_in(&mut self, at: &str) -> Result<Status, TrackingError> {
        match self.state() {
            TrackingState::Completed => Err(TrackingError::AlreadyCompleted),
            TrackingState::OnDuty | TrackingState::OnBreak => Err(TrackingError::AlreadyTimedIn),
            TrackingState::NotStarted => {
                self.time_in = Some(at.to_string());
                Ok(self.state().status())
            }
        }
    }

    pub fn time_out(&mut self, at: &str) -> Result<Status, TrackingError> {
        match self.state() {
            TrackingState::NotStarted => Err(TrackingError::NotTimedIn),
            TrackingState::OnBreak => Err(TrackingError::TimeOutOnBreak),
            TrackingState::Completed => Err(TrackingError::AlreadyTimedOut),
            TrackingState::OnDuty => {
                self.time_out = Some(at.to_string());
                Ok(self.state().status())
            }
        }
    }

    pub fn break_in(&mut self, at: &str) -> Result<Status, TrackingError> {
        match self.state() {
            TrackingState::NotStarted => Err(TrackingError::NotTimedIn),
            TrackingState::OnBreak => Err(TrackingError::AlreadyOnBreak),
            TrackingState::Completed => Err(TrackingError::AlreadyCompleted),
            TrackingState::OnDuty => {
                // A new break replaces any earlier closed one; the sheet
                // tracks a single break window per day.
                self.break_in = Some(at.to_string());
                self.break_out = None;
                Ok(self.state().status())
            }
        }
    }

    pub fn break_out(&mut self, at: &str) -> Result<Status, TrackingError> {
        match self.state() {
            TrackingState::NotStarted => Err(TrackingError::NotTimedIn),
            TrackingState::Completed => Err(TrackingError::AlreadyCompleted),
            TrackingState::OnDuty => Err(TrackingError::NoOpenBreak),
            TrackingState::OnBreak => {
                self.break_out = Some(at.to_string());
                Ok(self.state().status())
            }
        }
    }
}
