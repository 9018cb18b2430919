//! Partition items into uniques and duplicate groups by a derived key

use std::collections::HashMap;
use std::hash::Hash;

/// Result of [`group_uniques_and_duplicates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouped<T> {
    /// Items whose key no other item shares, in input order.
    pub uniques: Vec<T>,

    /// Items sharing a key with at least one other item, one group per key.
    /// Groups are ordered by first appearance; members keep input order.
    pub duplicates: Vec<Vec<T>>,
}

impl<T> Default for Grouped<T> {
    fn default() -> Self {
        Self {
            uniques: vec![],
            duplicates: vec![],
        }
    }
}

/// Group `items` by `key`. A key seen once yields a unique, a key seen
/// twice or more yields a duplicate group and none of its items are unique.
pub fn group_uniques_and_duplicates<T, K, F>(
    items: impl IntoIterator<Item = T>,
    mut key: F,
) -> Grouped<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut buckets: Vec<Vec<T>> = Vec::new();

    for item in items {
        let k = key(&item);
        match index.get(&k) {
            Some(&i) => buckets[i].push(item),
            None => {
                index.insert(k, buckets.len());
                buckets.push(vec![item]);
            }
        }
    }

    let mut grouped = Grouped::default();
    for mut bucket in buckets {
        if bucket.len() == 1 {
            grouped.uniques.extend(bucket.pop());
        } else {
            grouped.duplicates.push(bucket);
        }
    }
    grouped
}
