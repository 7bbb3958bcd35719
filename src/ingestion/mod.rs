//! Ingestion entrypoints.
//!
//! Most callers should use [`ingest_from_path`], which:
//!
//! - ingests a CSV file into an in-memory [`crate::types::DataSet`] using a [`Schema`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The reader-level functions live in [`csv`].

pub mod csv;
pub mod observability;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, Schema};

pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    TracingObserver,
};

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Ingest a CSV file, reporting the outcome to the configured observer.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count and the optional fields the file lacked
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use bikeshare_stats::ingestion::{ingest_from_path, IngestionOptions, TracingObserver};
/// use bikeshare_stats::types::{DataType, Field, Schema};
///
/// # fn main() -> Result<(), bikeshare_stats::IngestionError> {
/// let schema = Schema::new(vec![
///     Field::new("Start Time", DataType::Timestamp),
///     Field::optional("Gender", DataType::Utf8),
/// ]);
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let ds = ingest_from_path("chicago.csv", &schema, &opts)?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    schema: &Schema,
    options: &IngestionOptions,
) -> IngestionResult<DataSet> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
    };

    let result = csv::ingest_csv_from_path(path, schema);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(&ctx, &ingestion_stats(schema, ds)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn ingestion_stats(schema: &Schema, ds: &DataSet) -> IngestionStats {
    IngestionStats {
        rows: ds.row_count(),
        missing_optional: schema
            .fields
            .iter()
            .filter(|f| !ds.schema.contains(&f.name))
            .map(|f| f.name.clone())
            .collect(),
    }
}

fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::Io(_) => IngestionSeverity::Critical,
        IngestionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        IngestionError::SchemaMismatch { .. } => IngestionSeverity::Error,
        IngestionError::ParseError { .. } => IngestionSeverity::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataType, Field, Value};

    #[test]
    fn stats_list_missing_optional_fields() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::optional("Gender", DataType::Utf8),
            Field::optional("Birth Year", DataType::Int64),
        ]);
        let ds = DataSet::new(
            Schema::new(vec![Field::new("id", DataType::Int64)]),
            vec![vec![Value::Int64(1)]],
        );
        let stats = ingestion_stats(&schema, &ds);
        assert_eq!(stats.rows, 1);
        assert_eq!(stats.missing_optional, vec!["Gender", "Birth Year"]);
    }

    #[test]
    fn io_errors_are_critical() {
        let err = IngestionError::from(std::io::Error::other("boom"));
        assert_eq!(severity_for_error(&err), IngestionSeverity::Critical);
        let err = IngestionError::SchemaMismatch {
            message: "x".to_string(),
        };
        assert_eq!(severity_for_error(&err), IngestionSeverity::Error);
    }

    #[test]
    fn every_failure_is_error_or_critical() {
        let err = IngestionError::ParseError {
            row: 2,
            column: "Start Time".to_string(),
            raw: "soon".to_string(),
            message: "bad timestamp".to_string(),
        };
        assert_eq!(severity_for_error(&err), IngestionSeverity::Error);
        assert!(IngestionSeverity::Error < IngestionSeverity::Critical);
        assert_eq!(IngestionOptions::default().alert_at_or_above, IngestionSeverity::Critical);
    }
}
