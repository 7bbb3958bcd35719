//! Frequency reductions: mode, value counts and multi-key group counts.
//!
//! All of these ignore nulls. Keys are counted in a `BTreeMap`, so ties are always resolved in
//! favour of the smallest key in natural ascending order.

use std::collections::BTreeMap;

/// Count occurrences of every key.
pub fn counts<K, I>(values: I) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut out = BTreeMap::new();
    for v in values {
        *out.entry(v).or_insert(0) += 1;
    }
    out
}

/// The most frequent key together with its count; ties pick the smallest key.
///
/// Returns `None` for an empty input.
pub fn mode_with_count<K, I>(values: I) -> Option<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut best: Option<(K, usize)> = None;
    // Ascending iteration + strict comparison keeps the first (smallest) key among ties.
    for (key, n) in counts(values) {
        if best.as_ref().is_none_or(|(_, top)| n > *top) {
            best = Some((key, n));
        }
    }
    best
}

/// The most frequent key; ties pick the smallest key.
pub fn mode<K, I>(values: I) -> Option<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    mode_with_count(values).map(|(k, _)| k)
}

/// Every distinct key with its count, ordered by count descending then key ascending.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut out: Vec<(K, usize)> = counts(values).into_iter().collect();
    // Stable sort keeps the ascending key order within equal counts.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_picks_most_frequent() {
        assert_eq!(mode(vec![3, 1, 3, 2, 3, 1]), Some(3));
    }

    #[test]
    fn mode_breaks_ties_by_smallest_value() {
        assert_eq!(mode(vec![5, 2, 5, 2, 9]), Some(2));
        assert_eq!(mode(vec!["b", "a", "b", "a"]), Some("a"));
    }

    #[test]
    fn mode_of_empty_is_none() {
        assert_eq!(mode(Vec::<i64>::new()), None);
        assert_eq!(mode_with_count(Vec::<i64>::new()), None);
    }

    #[test]
    fn mode_with_count_reports_count() {
        let pairs = vec![("A", "B"), ("A", "C"), ("A", "B"), ("D", "E"), ("D", "E")];
        assert_eq!(mode_with_count(pairs), Some((("A", "B"), 2)));
    }

    #[test]
    fn value_counts_orders_by_count_then_key() {
        let out =
            value_counts(vec!["Subscriber", "Customer", "Subscriber", "Dependent", "Customer"]);
        assert_eq!(
            out,
            vec![("Customer", 2), ("Subscriber", 2), ("Dependent", 1)]
        );
    }
}
