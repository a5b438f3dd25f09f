#[derive(Debug, Clone)]
pub enum Message {
    // === FORM MESSAGES ===
    PromptIncidentType,
    FormHeader(String), // incident title
    FormSubtitle,
    FieldInvalid(String, String), // label, error
    RequiredFieldsMissing,
    TotalTime(String), // formatted duration
    ReviewHeader,
    FieldsCleared,
    PromptNewOccurrence,
    InputFileLoaded(String), // path

    // === REPORT MESSAGES ===
    ReportHeader,
    ReportCopied,
    ReportCopyFailed,

    // === FIELD TOOL MESSAGES ===
    InvalidValue(String, String), // value, error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    PromptGarageName,
    PromptDefaultCcoDuty,
    PromptClipboardCommand,
}
