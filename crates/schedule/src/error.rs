/// Every way a cron expression can be rejected.
///
/// The `Display` output is the user-facing message; the CLI prints it
/// verbatim after `Error: `.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Fewer than five schedule fields plus a command.
    #[error("invalid cron expression: expected at least 6 fields")]
    Structure { found: usize },

    /// The part after `*/` is not a positive integer.
    #[error("invalid step value: {0}")]
    InvalidStep(String),

    /// A `-` token that does not split into exactly two parts.
    #[error("invalid range format: {0}")]
    RangeFormat(String),

    /// Range endpoints that are not integers, are reversed, or leave the domain.
    #[error("invalid range: {0}")]
    RangeValue(String),

    /// One entry of a comma-separated list.
    #[error("invalid value: {0}")]
    ListValue(String),

    /// A bare single-value token.
    #[error("invalid value: {0}")]
    LiteralValue(String),

    /// The parser has no domain registered for a field kind.
    #[error("no parser for field: {0}")]
    UnknownFieldKind(&'static str),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
