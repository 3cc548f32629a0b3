#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,

    // === EMPLOYEE MESSAGES ===
    EmployeeAdded(String),
    EmployeeRemoved(String),
    EmployeeNotFound(String),
    EmployeeExists(String),
    NoEmployees,
    NoDefaultEmployee,
    InvalidClockString(String),

    // === TRACKING MESSAGES ===
    TimedInAt(String),
    TimedOutAt(String),
    BreakStartedAt(String),
    BreakEndedAt(String),
    TrackingRejected(String),

    // === REPORT MESSAGES ===
    RosterHeader(String),          // date
    HistoryHeader(String, String), // employee name, range
    WeekHeader(String),            // week start date
    MonthHeader(String),           // month/year
    SummaryHeader(String),         // month/year
    NoRecordsInRange(String),

    // === SEED MESSAGES ===
    RosterSeeded(usize),
    SeedCompleted { employees: usize, records: usize },

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NothingToExport,
}
