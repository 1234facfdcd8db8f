use thiserror::Error;

/// Errors produced while turning report text into structured tables.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("malformed table: {reason}")]
    MalformedTable { reason: String },

    #[error("no parser is available for reports generated by '{0}'")]
    UnsupportedReportKind(String),

    #[error("report has no metadata header")]
    MissingMetadata,

    #[error("metadata line has no ':' separator: {line}")]
    MalformedMetadata { line: String },

    #[error("metadata header has no '{0}' entry")]
    MissingMetadataField(String),

    #[error("report has no data path delay line")]
    DataPathDelayNotFound,

    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ReportError {
    pub(crate) fn malformed_table(reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
