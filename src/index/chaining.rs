use std::hash::Hash;
use tracing::debug;
use crate::index::entry::{EntryComparator, MapEntry};
use crate::index::hashing::{grown_capacity, MadHasher};
use crate::index::sequence::Sequence;

/// Separate-chaining hash map.
///
/// Every bucket is a `Sequence` of entries: collisions append to the bucket,
/// lookups scan it with the map's comparator. Same growth policy as
/// `ProbingMap`, rehashing every entry into a fresh bucket array.
pub struct ChainingMap<K, V, C> {
    buckets: Vec<Sequence<MapEntry<K, V>>>,
    len: usize,
    load_factor: f64,
    comparator: C,
    hasher: MadHasher,
    resizes: usize,
}

impl<K, V, C> ChainingMap<K, V, C>
where
    K: Hash,
    C: EntryComparator<K, V>,
{
    pub fn new(capacity: usize, load_factor: f64, comparator: C) -> Self {
        ChainingMap {
            buckets: empty_buckets(capacity.max(1)),
            len: 0,
            load_factor,
            comparator,
            hasher: MadHasher::default(),
            resizes: 0,
        }
    }

    /// Insert or overwrite; returns the replaced value
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.hasher.slot(&key, self.capacity());
        let comparator = &self.comparator;
        let bucket = &mut self.buckets[idx];

        if let Some(entry) = bucket.find_by_mut(&key, |k, e| comparator.compare_key_to_entry(k, e)) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        bucket.push_back(MapEntry::new(key, value));
        self.len += 1;

        if self.current_load() >= self.load_factor {
            self.rehash(grown_capacity(self.capacity()));
        }
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_entry(key).map(|entry| &entry.value)
    }

    pub fn get_entry(&self, key: &K) -> Option<&MapEntry<K, V>> {
        let idx = self.hasher.slot(key, self.capacity());
        self.buckets[idx].find_by(key, |k, e| self.comparator.compare_key_to_entry(k, e))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.hasher.slot(key, self.capacity());
        let comparator = &self.comparator;
        self.buckets[idx]
            .find_by_mut(key, |k, e| comparator.compare_key_to_entry(k, e))
            .map(|entry| &mut entry.value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get_entry(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn current_load(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    pub fn resizes(&self) -> usize {
        self.resizes
    }

    /// Length of the longest bucket
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Sequence::len).max().unwrap_or(0)
    }

    /// Entries bucket by bucket, in chain order
    pub fn iter(&self) -> impl Iterator<Item = &MapEntry<K, V>> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.buckets
            .iter_mut()
            .flat_map(|bucket| bucket.iter_mut().map(|entry| &mut entry.value))
    }

    fn rehash(&mut self, new_capacity: usize) {
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for bucket in old {
            for entry in bucket.into_vec() {
                let idx = self.hasher.slot(&entry.key, new_capacity);
                self.buckets[idx].push_back(entry);
            }
        }
        self.resizes += 1;
        debug!(buckets = new_capacity, len = self.len, "chaining map resized");
    }
}

fn empty_buckets<T>(capacity: usize) -> Vec<Sequence<T>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Sequence::new);
    buckets
}
