use std::collections::HashSet;
use std::hash::Hash;

use crate::types::BucketScoped;

/// Split `items` into those matching `pred` and the rest, keeping order.
pub fn partition<T>(items: Vec<T>, pred: impl Fn(&T) -> bool) -> (Vec<T>, Vec<T>) {
    items.into_iter().partition(|item| pred(item))
}

/// Whether `item` falls inside a query scope. No scope matches everything.
pub fn in_scope<T: BucketScoped>(item: &T, scope: Option<&str>) -> bool {
    scope.map_or(true, |bucket_id| item.bucket_id() == bucket_id)
}

/// Partition-and-replace: drop cached entries inside `scope` and append
/// `fresh`. Entries outside the scope keep their position and content.
pub fn reconcile<T: BucketScoped>(cached: Vec<T>, scope: Option<&str>, fresh: Vec<T>) -> Vec<T> {
    let (_, mut kept) = partition(cached, |item| in_scope(item, scope));
    kept.extend(fresh);
    kept
}

/// Keep the first item for each key, preserving order.
pub fn dedupe_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

/// Distinct ids in first-seen order.
pub fn unique_ids<'a, I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bucket;

    fn ids(buckets: &[Bucket]) -> Vec<&str> {
        buckets.iter().map(|b| b.bucket_id.as_str()).collect()
    }

    #[test]
    fn test_partition_keeps_order() {
        let (even, odd) = partition(vec![1, 2, 3, 4, 5], |n| n % 2 == 0);
        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1, 3, 5]);
    }

    #[test]
    fn test_scoped_reconcile_replaces_only_scope() {
        let cached = vec![
            Bucket::new("A", "a"),
            Bucket::new("B", "stale"),
            Bucket::new("C", "c"),
        ];
        let fresh = vec![Bucket::new("B", "fresh")];

        let merged = reconcile(cached, Some("B"), fresh);
        assert_eq!(ids(&merged), vec!["A", "C", "B"]);
        assert_eq!(merged[2].bucket_name, "fresh");
    }

    #[test]
    fn test_unscoped_reconcile_replaces_everything() {
        let cached = vec![Bucket::new("A", "a"), Bucket::new("B", "b")];
        let fresh = vec![Bucket::new("C", "c")];

        let merged = reconcile(cached, None, fresh);
        assert_eq!(ids(&merged), vec!["C"]);
    }

    #[test]
    fn test_dedupe_by_keeps_first_occurrence() {
        let buckets = vec![
            Bucket::new("A", "first"),
            Bucket::new("B", "b"),
            Bucket::new("A", "second"),
        ];

        let unique = dedupe_by(buckets, |b| b.bucket_id.clone());
        assert_eq!(ids(&unique), vec!["A", "B"]);
        assert_eq!(unique[0].bucket_name, "first");
    }

    #[test]
    fn test_unique_ids_first_seen_order() {
        let unique = unique_ids(["b", "a", "b", "c", "a"]);
        assert_eq!(unique, vec!["b", "a", "c"]);
    }
}
