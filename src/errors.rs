/// Error types for the option analysis pipeline.
/// - Malformed rows never reach here: the loader drops them and logs
/// - Domain errors abort the affected period only
/// - I/O failures abort the whole run
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("io error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("domain error: {0}")]
    Domain(String),

    #[error("empty period: {0}")]
    EmptyPeriod(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialize error: {0}")]
    Serialize(String),
}

impl AnalysisError {
    /// I/O and config failures terminate the run; everything else is scoped to one period.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AnalysisError::Io(_) | AnalysisError::Config(_))
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(e: std::io::Error) -> Self {
        AnalysisError::Io(e.to_string())
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            AnalysisError::Io(e.to_string())
        } else {
            AnalysisError::Parse(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::Serialize(e.to_string())
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
