use std::hash::Hash;
use tracing::debug;
use crate::index::entry::{EntryComparator, MapEntry};
use crate::index::hashing::{grown_capacity, MadHasher};

/// Open-addressing hash map with linear probing.
///
/// Entries are never removed, so an empty slot always terminates a probe and
/// no tombstones are needed. The table grows (next prime >= 2x, full rehash)
/// once `len / capacity` reaches `load_factor`, which keeps at least one slot
/// empty as long as `load_factor < 1`.
pub struct ProbingMap<K, V, C> {
    slots: Vec<Option<MapEntry<K, V>>>,
    len: usize,
    load_factor: f64,
    comparator: C,
    hasher: MadHasher,
    resizes: usize,
}

impl<K, V, C> ProbingMap<K, V, C>
where
    K: Hash,
    C: EntryComparator<K, V>,
{
    pub fn new(capacity: usize, load_factor: f64, comparator: C) -> Self {
        let capacity = capacity.max(1);
        ProbingMap {
            slots: empty_slots(capacity),
            len: 0,
            load_factor,
            comparator,
            hasher: MadHasher::default(),
            resizes: 0,
        }
    }

    /// Insert or overwrite; returns the replaced value
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let pos = match self.probe(&key) {
            Some(pos) => pos,
            None => {
                self.rehash(grown_capacity(self.capacity()));
                match self.probe(&key) {
                    Some(pos) => pos,
                    None => return None,
                }
            }
        };
        if let Some(entry) = self.slots[pos].as_mut() {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.slots[pos] = Some(MapEntry::new(key, value));
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
        let pos = self.probe(key)?;
        self.slots[pos].as_ref()
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let pos = self.probe(key)?;
        self.slots[pos].as_mut().map(|entry| &mut entry.value)
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

    pub fn capacity(&self) -> usize {
        self.slots.len()
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

    /// Entries in slot order
    pub fn iter(&self) -> impl Iterator<Item = &MapEntry<K, V>> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Slot holding `key`, or the empty slot where it would be inserted.
    /// `None` only when the table is full and `key` is absent.
    fn probe(&self, key: &K) -> Option<usize> {
        let capacity = self.capacity();
        let mut pos = self.hasher.slot(key, capacity);
        for _ in 0..capacity {
            match &self.slots[pos] {
                None => return Some(pos),
                Some(entry) if self.comparator.matches(key, entry) => return Some(pos),
                Some(_) => pos = (pos + 1) % capacity,
            }
        }
        None
    }

    fn rehash(&mut self, new_capacity: usize) {
        let old = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        for entry in old.into_iter().flatten() {
            let mut pos = self.hasher.slot(&entry.key, new_capacity);
            while self.slots[pos].is_some() {
                pos = (pos + 1) % new_capacity;
            }
            self.slots[pos] = Some(entry);
        }
        self.resizes += 1;
        debug!(capacity = new_capacity, len = self.len, "probing map resized");
    }
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Option<MapEntry<K, V>>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::entry::NaturalOrder;

    #[test]
    fn put_get_overwrite() {
        let mut map = ProbingMap::new(8, 0.5, NaturalOrder);
        assert!(map.is_empty());

        assert_eq!(map.put(1u64, "a"), None);
        assert_eq!(map.put(2u64, "b"), None);
        assert_eq!(map.put(1u64, "c"), Some("a"));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&"c"));
        assert_eq!(map.get(&2), Some(&"b"));
        assert_eq!(map.get(&3), None);
        assert!(map.contains(&2));
        assert!(!map.contains(&3));
    }

    #[test]
    fn resizes_at_threshold() {
        let mut map = ProbingMap::new(200, 0.4, NaturalOrder);
        for id in 0..79u64 {
            map.put(id, id * 10);
        }
        assert_eq!(map.resizes(), 0);
        assert_eq!(map.capacity(), 200);

        map.put(79, 790);
        assert_eq!(map.resizes(), 1);
        assert_eq!(map.capacity(), 401);

        for id in 0..80u64 {
            assert_eq!(map.get(&id), Some(&(id * 10)));
        }
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = ProbingMap::new(4, 0.4, NaturalOrder);
        map.put("tolkien".to_string(), 1);
        *map.get_mut(&"tolkien".to_string()).unwrap() += 1;
        assert_eq!(map.get(&"tolkien".to_string()), Some(&2));
    }

    #[test]
    fn colliding_keys_wrap_to_front() {
        let mut map = ProbingMap::new(7, 0.9, NaturalOrder);
        let last = map.capacity() - 1;
        let keys: Vec<u64> = (0..10_000u64)
            .filter(|key| map.hasher.slot(key, 7) == last)
            .take(3)
            .collect();
        assert_eq!(keys.len(), 3);

        for (i, key) in keys.iter().enumerate() {
            map.put(*key, i);
        }
        assert_eq!(map.capacity(), 7);

        // Same home slot: the first stays at the end, the others wrap to 0 and 1.
        assert_eq!(map.slots[last].as_ref().map(|e| e.key), Some(keys[0]));
        assert_eq!(map.slots[0].as_ref().map(|e| e.key), Some(keys[1]));
        assert_eq!(map.slots[1].as_ref().map(|e| e.key), Some(keys[2]));

        for (i, key) in keys.iter().enumerate() {
            assert_eq!(map.get(key), Some(&i));
        }
        assert_eq!(map.put(keys[2], 9), Some(2));
        assert_eq!(map.len(), 3);
    }
}
