//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion and
//! knows nothing about trips. The trip-specific filters and reports are built from these pieces.
//!
//! - [`filter()`]: row filtering by predicate
//! - [`reduce()`]: numeric reductions (sum/mean/min/max)
//! - [`frequency`]: mode, value counts, group counts with a smallest-key tie-break
//!
//! ## Example: filter → reduce
//!
//! ```rust
//! use bikeshare_stats::processing::{filter, reduce, ReduceOp};
//! use bikeshare_stats::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("month", DataType::Int64),
//!     Field::new("duration", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(1), Value::Float64(10.0)],
//!         vec![Value::Int64(2), Value::Float64(20.0)],
//!         vec![Value::Int64(1), Value::Null],
//!     ],
//! );
//!
//! let month_idx = ds.schema.index_of("month").unwrap();
//! let january = filter(&ds, |row| matches!(row.get(month_idx), Some(Value::Int64(1))));
//!
//! // Sum durations (nulls ignored).
//! let sum = reduce(&january, "duration", ReduceOp::Sum).unwrap();
//! assert_eq!(sum, Value::Float64(10.0));
//! ```

pub mod filter;
pub mod frequency;
pub mod reduce;

pub use filter::{filter, filter_eq_i64};
pub use frequency::{mode, mode_with_count, value_counts};
pub use reduce::{ReduceOp, reduce};
