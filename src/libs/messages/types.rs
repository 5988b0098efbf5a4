#[derive(Debug, Clone)]
pub enum Message {
    // === DAILY REPORT MESSAGES ===
    ConfirmCreateDailyReport,
    DailyReportHeader(String),     // date
    DailyReportSaved(String),      // path
    DailyReportNotFound(String),   // date
    DailyReportTotalsMissing(String), // date
    DailyReportCellInvalid { date: String, text: String },
    InitRecordDateInvalid(String), // raw date
    InitRecordNotFound(String),    // path
    DateMismatch { init: String, first: Option<String> },
    TripLogNotFound(String), // path
    TripTimeInvalid(String), // raw time

    // === READING CHECK MESSAGES ===
    ReadingIssue(String),
    ReadingsRejected(usize), // issue count

    // === MONTHLY REPORT MESSAGES ===
    ConfirmAddToMonthlyReport(String), // date
    NotADailyReport(String),           // label
    MonthlyReportHeader(String),       // month
    MonthlyRowAdded { date: String, month: String },
    MonthlyReportNotFound(String), // month
    OverBudget(String),            // formatted difference
    PromptWorkDay,
    PromptPaidAllowance,

    // === TRIP LOG ROLLOVER MESSAGES ===
    ConfirmClearTripLog,
    InitRecordCarriedOver { economy: f64, distance: f64 },
    TripLogCleared(usize), // trip count
    NothingToClear,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleReport,
    ConfigModuleStore,
    PromptSelectModules,
    PromptIdlingMarker,
    PromptReadingCheck,
    PromptCurrency,
    PromptDataDir,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    InvalidInput(String),
}
