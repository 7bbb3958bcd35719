use std::fmt;

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for the analysis pipeline.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type returned by CSV ingestion.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the provided schema (missing required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// Which user-facing selector (or prompt answer) a value was rejected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    City,
    Filter,
    Month,
    Day,
    /// Free-form prompt answers such as "show more raw data?".
    Input,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::City => "city",
            Self::Filter => "filter",
            Self::Month => "month",
            Self::Day => "day",
            Self::Input => "input",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the analysis pipeline.
///
/// Selector errors are meant to be recovered by asking again; the other two end the current run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A city/month/day (or prompt answer) outside the supported set.
    #[error("{value} is not a valid {kind} option")]
    UnsupportedSelector { kind: SelectorKind, value: String },

    /// The dataset backing a valid city could not be loaded.
    #[error("data for {city} is unavailable: {source}")]
    DataUnavailable {
        city: String,
        #[source]
        source: IngestionError,
    },

    /// The filters removed every row, so the named report has no defined result.
    #[error("no trips match the selected filters; cannot compute {report}")]
    EmptyResultSet { report: &'static str },
}

impl AnalysisError {
    pub(crate) fn unsupported(kind: SelectorKind, value: impl Into<String>) -> Self {
        Self::UnsupportedSelector {
            kind,
            value: value.into(),
        }
    }

    /// `true` for errors the console should answer by prompting again.
    pub fn is_selector_error(&self) -> bool {
        matches!(self, Self::UnsupportedSelector { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_selector_message_names_value_and_kind() {
        let err = AnalysisError::unsupported(SelectorKind::City, "boston");
        assert_eq!(err.to_string(), "boston is not a valid city option");
        assert!(err.is_selector_error());
    }

    #[test]
    fn data_unavailable_wraps_ingestion_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AnalysisError::DataUnavailable {
            city: "chicago".to_string(),
            source: IngestionError::from(io),
        };
        let msg = err.to_string();
        assert!(msg.contains("chicago"));
        assert!(msg.contains("no such file"));
        assert!(!err.is_selector_error());
    }

    #[test]
    fn empty_result_set_names_report() {
        let err = AnalysisError::EmptyResultSet {
            report: "trip duration",
        };
        assert!(err.to_string().contains("trip duration"));
    }
}
