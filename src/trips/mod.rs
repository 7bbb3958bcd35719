//! Trip datasets: the bike-share schema, the per-dataset column descriptor, loading and
//! time filtering.

pub mod filter;
pub mod loader;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

pub use filter::filter_trips;
pub use loader::{LoadOptions, derive_time_fields, load_city, load_path};

/// Column names as they appear in the source files, plus the two derived columns.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";
    pub const MONTH: &str = "month";
    pub const DAY_OF_WEEK: &str = "day_of_week";
}

/// Schema of a trip source file. `End Time`, `Gender` and `Birth Year` may be absent.
pub fn trip_schema() -> Schema {
    Schema::new(vec![
        Field::new(columns::START_TIME, DataType::Timestamp),
        Field::optional(columns::END_TIME, DataType::Timestamp),
        Field::new(columns::TRIP_DURATION, DataType::Float64),
        Field::new(columns::START_STATION, DataType::Utf8),
        Field::new(columns::END_STATION, DataType::Utf8),
        Field::new(columns::USER_TYPE, DataType::Utf8),
        Field::optional(columns::GENDER, DataType::Utf8),
        Field::optional(columns::BIRTH_YEAR, DataType::Int64),
    ])
}

/// Resolved column positions for one trip dataset.
///
/// Built once per load; the `Option` fields record whether the optional columns exist, so reports
/// never have to probe rows to find out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripColumns {
    pub start_time: usize,
    pub end_time: Option<usize>,
    pub trip_duration: usize,
    pub start_station: usize,
    pub end_station: usize,
    pub user_type: usize,
    pub gender: Option<usize>,
    pub birth_year: Option<usize>,
    pub month: usize,
    pub day_of_week: usize,
}

impl TripColumns {
    /// Resolve positions against a schema that already carries the derived columns.
    pub fn resolve(schema: &Schema) -> IngestionResult<TripColumns> {
        let required = |name: &str| {
            schema
                .index_of(name)
                .ok_or_else(|| IngestionError::SchemaMismatch {
                    message: format!("trip dataset has no '{name}' column"),
                })
        };
        Ok(TripColumns {
            start_time: required(columns::START_TIME)?,
            end_time: schema.index_of(columns::END_TIME),
            trip_duration: required(columns::TRIP_DURATION)?,
            start_station: required(columns::START_STATION)?,
            end_station: required(columns::END_STATION)?,
            user_type: required(columns::USER_TYPE)?,
            gender: schema.index_of(columns::GENDER),
            birth_year: schema.index_of(columns::BIRTH_YEAR),
            month: required(columns::MONTH)?,
            day_of_week: required(columns::DAY_OF_WEEK)?,
        })
    }

    pub fn has_gender(&self) -> bool {
        self.gender.is_some()
    }

    pub fn has_birth_year(&self) -> bool {
        self.birth_year.is_some()
    }
}

/// A trip dataset with derived `month`/`day_of_week` columns and its column descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSet {
    data: DataSet,
    columns: TripColumns,
}

impl TripSet {
    /// Wrap a dataset that already has the derived columns.
    pub fn new(data: DataSet) -> IngestionResult<TripSet> {
        let columns = TripColumns::resolve(&data.schema)?;
        Ok(TripSet { data, columns })
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }

    pub fn columns(&self) -> &TripColumns {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.data.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.data.rows
    }

    /// Values at one column position, in row order.
    pub fn values(&self, idx: usize) -> impl Iterator<Item = &Value> + '_ {
        self.data.rows.iter().filter_map(move |row| row.get(idx))
    }

    /// Replace the rows, keeping the column descriptor.
    pub(crate) fn with_data(&self, data: DataSet) -> TripSet {
        TripSet {
            data,
            columns: self.columns,
        }
    }
}
