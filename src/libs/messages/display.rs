//! Display implementation for eckho application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and messages with dynamic content interpolate their
//! parameters type-safely.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeAdded(name) => format!("Employee '{}' added", name),
            Message::EmployeeRemoved(username) => format!("Employee '{}' removed", username),
            Message::EmployeeNotFound(username) => format!("Employee '{}' not found", username),
            Message::EmployeeExists(username) => {
                format!("An employee with username '{}' already exists", username)
            }
            Message::NoEmployees => {
                "No employees yet. Add one with 'eckho employee add' or run 'eckho seed'"
                    .to_string()
            }
            Message::NoDefaultEmployee => {
                "No employee given. Pass --employee or set a default with 'eckho init'".to_string()
            }
            Message::InvalidClockString(raw) => {
                format!("'{}' is not a valid time; expected hh:mm AM/PM", raw)
            }

            // === TRACKING MESSAGES ===
            Message::TimedInAt(at) => format!("Timed in at {}", at),
            Message::TimedOutAt(at) => format!("Timed out at {}", at),
            Message::BreakStartedAt(at) => format!("Break started at {}", at),
            Message::BreakEndedAt(at) => format!("Break ended at {}", at),
            Message::TrackingRejected(reason) => format!("Action rejected: {}", reason),

            // === REPORT MESSAGES ===
            Message::RosterHeader(date) => format!("Attendance for {}", date),
            Message::HistoryHeader(name, range) => format!("Records for {} ({})", name, range),
            Message::WeekHeader(week_start) => format!("Week of {}", week_start),
            Message::MonthHeader(month) => month.clone(),
            Message::SummaryHeader(month) => format!("Status summary for {}", month),
            Message::NoRecordsInRange(range) => format!("No records found for {}", range),

            // === SEED MESSAGES ===
            Message::RosterSeeded(count) => format!("Seeded demo roster with {} employees", count),
            Message::SeedCompleted { employees, records } => format!(
                "Generated {} records across {} employees",
                records, employees
            ),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NothingToExport => "Nothing to export".to_string(),
        };
        write!(f, "{}", text)
    }
}
