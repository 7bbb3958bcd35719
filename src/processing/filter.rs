//! Row filtering for [`crate::types::DataSet`].

use crate::types::{DataSet, Value};

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Keep rows whose integer value at `idx` equals `expected`.
pub fn filter_eq_i64(dataset: &DataSet, idx: usize, expected: i64) -> DataSet {
    filter(dataset, |row| matches!(row.get(idx), Some(Value::Int64(v)) if *v == expected))
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_eq_i64};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("month", DataType::Int64),
            Field::new("station", DataType::Utf8),
        ]);

        let rows = vec![
            vec![Value::Int64(1), Value::Utf8("a".to_string())],
            vec![Value::Int64(2), Value::Utf8("b".to_string())],
            vec![Value::Int64(1), Value::Utf8("c".to_string())],
            vec![Value::Null, Value::Utf8("d".to_string())],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn filter_eq_keeps_matching_rows_in_order() {
        let ds = sample_dataset();
        let out = filter_eq_i64(&ds, 0, 1);

        assert_eq!(out.schema, ds.schema);
        assert_eq!(
            out.rows,
            vec![
                vec![Value::Int64(1), Value::Utf8("a".to_string())],
                vec![Value::Int64(1), Value::Utf8("c".to_string())],
            ]
        );
        // Original unchanged
        assert_eq!(ds.row_count(), 4);
    }

    #[test]
    fn filter_eq_never_matches_nulls() {
        let ds = sample_dataset();
        assert_eq!(filter_eq_i64(&ds, 0, 0).row_count(), 0);
    }

    #[test]
    fn filter_rows_can_return_empty_dataset() {
        let ds = sample_dataset();
        let out = filter(&ds, |_| false);
        assert_eq!(out.schema, ds.schema);
        assert!(out.rows.is_empty());
    }
}
