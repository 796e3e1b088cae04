use thiserror::Error;

/// Errors surfaced by almanac queries.
///
/// Calendar data is externally supplied and only partially trusted, so none
/// of these are fatal: every query either produces a value or one of these
/// conditions. Degenerate pieces of an otherwise valid calendar (a moon with
/// a zero-length cycle, an intercalary block naming an unknown month) are
/// skipped where they occur and never reach this type.
#[derive(Error, Debug)]
pub enum AlmanacError {
    #[error("no active calendar is configured")]
    MissingCalendar,

    #[error("no date was supplied and the provider has no current date")]
    MissingDate,

    #[error("date {0} does not exist in calendar '{1}'")]
    MalformedDate(String, String),

    #[error("calendar '{0}' has no usable months")]
    DegenerateCalendar(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("calendar file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AlmanacError>;
