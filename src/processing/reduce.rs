//! Numeric reduction operations for [`crate::types::DataSet`].

use crate::types::{DataSet, DataType, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Arithmetic mean of numeric values, ignoring nulls. Always `Float64`.
    Mean,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - For `Sum`/`Mean`/`Min`/`Max`, returns `Some(Value::Null)` if there are no non-null values.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> Option<Value> {
    let idx = dataset.schema.index_of(column)?;

    match op {
        ReduceOp::Mean => Some(mean(dataset, idx)),
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => {
            let data_type = dataset.schema.fields.get(idx)?.data_type;
            Some(reduce_numeric_typed(dataset, idx, data_type, op))
        }
    }
}

fn mean(dataset: &DataSet, idx: usize) -> Value {
    let (sum, n) = dataset.reduce_rows((0.0_f64, 0usize), |(sum, n), row| {
        match row.get(idx).and_then(Value::as_f64) {
            Some(v) => (sum + v, n + 1),
            None => (sum, n),
        }
    });
    if n == 0 {
        Value::Null
    } else {
        Value::Float64(sum / n as f64)
    }
}

fn reduce_numeric_typed(dataset: &DataSet, idx: usize, data_type: DataType, op: ReduceOp) -> Value {
    match data_type {
        DataType::Int64 => {
            let acc = dataset.reduce_rows(None::<i64>, |acc, row| match row.get(idx) {
                Some(Value::Int64(v)) => Some(match (op, acc) {
                    (ReduceOp::Sum, Some(a)) => a + v,
                    (ReduceOp::Min, Some(a)) => a.min(*v),
                    (ReduceOp::Max, Some(a)) => a.max(*v),
                    _ => *v,
                }),
                _ => acc,
            });
            acc.map(Value::Int64).unwrap_or(Value::Null)
        }
        DataType::Float64 => {
            let acc = dataset.reduce_rows(None::<f64>, |acc, row| match row.get(idx) {
                Some(Value::Float64(v)) => Some(match (op, acc) {
                    (ReduceOp::Sum, Some(a)) => a + v,
                    (ReduceOp::Min, Some(a)) => a.min(*v),
                    (ReduceOp::Max, Some(a)) => a.max(*v),
                    _ => *v,
                }),
                _ => acc,
            });
            acc.map(Value::Float64).unwrap_or(Value::Null)
        }
        _ => Value::Null,
    }
}
