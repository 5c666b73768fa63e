use std::cmp::Ordering;

/// Key-value pair stored in a hash index slot or bucket
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> MapEntry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        MapEntry { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Resolves a raw lookup key against a stored entry.
///
/// The comparison is asymmetric on purpose: the left side is the key being
/// looked up, the right side is an entry already in the map. Maps only rely on
/// `Ordering::Equal` to decide a hit; the other variants order keys for
/// callers that want them.
pub trait EntryComparator<K, V> {
    fn compare_key_to_entry(&self, key: &K, entry: &MapEntry<K, V>) -> Ordering;

    fn matches(&self, key: &K, entry: &MapEntry<K, V>) -> bool {
        self.compare_key_to_entry(key, entry) == Ordering::Equal
    }
}

impl<K, V, F> EntryComparator<K, V> for F
where
    F: Fn(&K, &MapEntry<K, V>) -> Ordering,
{
    fn compare_key_to_entry(&self, key: &K, entry: &MapEntry<K, V>) -> Ordering {
        self(key, entry)
    }
}

/// Compares keys with their own `Ord` implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<K: Ord, V> EntryComparator<K, V> for NaturalOrder {
    fn compare_key_to_entry(&self, key: &K, entry: &MapEntry<K, V>) -> Ordering {
        key.cmp(&entry.key)
    }
}
