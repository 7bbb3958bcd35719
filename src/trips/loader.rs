//! Loading a city's trips and deriving the month/day-of-week columns.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Datelike;
use tracing::debug;

use super::{TripSet, columns, trip_schema};
use crate::error::{AnalysisError, AnalysisResult, IngestionError, IngestionResult};
use crate::ingestion::{IngestionOptions, ingest_from_path};
use crate::selectors::{City, DayOfWeek};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Where the city datasets live and how ingestion is observed.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    pub data_dir: PathBuf,
    pub ingestion: IngestionOptions,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            ingestion: IngestionOptions::default(),
        }
    }
}

impl LoadOptions {
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

/// Load every trip for `city`, with `month` and `day_of_week` populated on each row.
///
/// Any failure to read or parse the file is reported as [`AnalysisError::DataUnavailable`].
pub fn load_city(city: City, options: &LoadOptions) -> AnalysisResult<TripSet> {
    let path = options.path_for(city);
    load_path(&path, &options.ingestion).map_err(|source| AnalysisError::DataUnavailable {
        city: city.key().to_string(),
        source,
    })
}

/// Load a trip CSV from an explicit path.
pub fn load_path(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<TripSet> {
    let started = Instant::now();
    let raw = ingest_from_path(path.as_ref(), &trip_schema(), options)?;
    let trips = derive_time_fields(&raw)?;
    debug!(
        path = %path.as_ref().display(),
        rows = trips.len(),
        has_gender = trips.columns().has_gender(),
        has_birth_year = trips.columns().has_birth_year(),
        elapsed = ?started.elapsed(),
        "loaded trips"
    );
    Ok(trips)
}

/// Append `month` (1-12) and `day_of_week` (Monday = 0) computed from each row's start time.
///
/// A row without a start time is a parse error: the derived columns must exist on every row.
pub fn derive_time_fields(raw: &DataSet) -> IngestionResult<TripSet> {
    let start_idx = raw
        .schema
        .index_of(columns::START_TIME)
        .ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!("missing required column '{}'", columns::START_TIME),
        })?;

    let mut fields = raw.schema.fields.clone();
    fields.push(Field::new(columns::MONTH, DataType::Int64));
    fields.push(Field::new(columns::DAY_OF_WEEK, DataType::Int64));

    let rows = raw
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let start = row
                .get(start_idx)
                .and_then(Value::as_timestamp)
                .ok_or_else(|| IngestionError::ParseError {
                    row: i + 2,
                    column: columns::START_TIME.to_string(),
                    raw: String::new(),
                    message: "start time is required".to_string(),
                })?;
            let day = DayOfWeek::from_chrono(start.weekday());
            let mut out = Vec::with_capacity(row.len() + 2);
            out.extend_from_slice(row);
            out.push(Value::Int64(i64::from(start.month())));
            out.push(Value::Int64(i64::from(day.index())));
            Ok(out)
        })
        .collect::<IngestionResult<Vec<_>>>()?;

    TripSet::new(DataSet::new(Schema::new(fields), rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw_trips(starts: &[Option<(i32, u32, u32)>]) -> DataSet {
        let mut fields = trip_schema().fields;
        fields.retain(|f| f.required);
        let rows = starts
            .iter()
            .map(|start| {
                let ts = start.map_or(Value::Null, |(y, m, d)| {
                    Value::Timestamp(
                        NaiveDate::from_ymd_opt(y, m, d)
                            .unwrap()
                            .and_hms_opt(8, 0, 0)
                            .unwrap(),
                    )
                });
                vec![
                    ts,
                    Value::Float64(60.0),
                    Value::Utf8("A".to_string()),
                    Value::Utf8("B".to_string()),
                    Value::Utf8("Subscriber".to_string()),
                ]
            })
            .collect();
        DataSet::new(Schema::new(fields), rows)
    }

    #[test]
    fn derives_month_and_monday_based_weekday() {
        // 2017-01-01 was a Sunday, 2017-03-06 a Monday.
        let raw = raw_trips(&[Some((2017, 1, 1)), Some((2017, 3, 6))]);
        let trips = derive_time_fields(&raw).unwrap();
        let cols = *trips.columns();

        assert_eq!(trips.rows()[0][cols.month], Value::Int64(1));
        assert_eq!(trips.rows()[0][cols.day_of_week], Value::Int64(6));
        assert_eq!(trips.rows()[1][cols.month], Value::Int64(3));
        assert_eq!(trips.rows()[1][cols.day_of_week], Value::Int64(0));
        assert!(!cols.has_gender());
        assert!(!cols.has_birth_year());
    }

    #[test]
    fn missing_start_time_is_a_parse_error() {
        let raw = raw_trips(&[Some((2017, 1, 1)), None]);
        let err = derive_time_fields(&raw).unwrap_err();
        assert!(matches!(err, IngestionError::ParseError { row: 3, .. }));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let options = LoadOptions {
            data_dir: PathBuf::from("definitely/not/here"),
            ..Default::default()
        };
        let err = load_city(City::Chicago, &options).unwrap_err();
        match err {
            AnalysisError::DataUnavailable { city, source } => {
                assert_eq!(city, "chicago");
                assert!(matches!(source, IngestionError::Csv(_) | IngestionError::Io(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn path_for_joins_city_file_name() {
        let options = LoadOptions {
            data_dir: PathBuf::from("data"),
            ..Default::default()
        };
        assert_eq!(
            options.path_for(City::NewYorkCity),
            PathBuf::from("data").join("new_york_city.csv")
        );
    }
}
