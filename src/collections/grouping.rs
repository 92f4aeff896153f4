//! Grouping values under derived keys, the entry-API idiom.

use std::collections::HashMap;
use std::hash::Hash;

/// Bucket values by a derived key, preserving encounter order inside
/// each bucket.
pub fn group_by<K, V, I, F>(items: I, key_fn: F) -> HashMap<K, Vec<V>>
where
    K: Hash + Eq,
    I: IntoIterator<Item = V>,
    F: Fn(&V) -> K,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

/// Key each value uniquely; a later item with the same key wins.
pub fn index_by<K, V, I, F>(items: I, key_fn: F) -> HashMap<K, V>
where
    K: Hash + Eq,
    I: IntoIterator<Item = V>,
    F: Fn(&V) -> K,
{
    let mut index = HashMap::new();
    for item in items {
        index.insert(key_fn(&item), item);
    }
    index
}

/// Groups of paths sharing identical content, smallest path first inside
/// a group; singleton groups are dropped.
pub fn duplicate_groups(files: &[(String, String)]) -> Vec<Vec<String>> {
    let by_content = group_by(files.iter(), |&(_, content)| content.clone());
    let mut out: Vec<Vec<String>> = by_content
        .into_values()
        .filter(|group| group.len() > 1)
        .map(|group| {
            let mut paths: Vec<String> = group.iter().map(|(path, _)| path.clone()).collect();
            paths.sort();
            paths
        })
        .collect();
    out.sort();
    out
}
