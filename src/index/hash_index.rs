use std::hash::Hash;
use serde::{Deserialize, Serialize};
use crate::index::chaining::ChainingMap;
use crate::index::entry::{EntryComparator, MapEntry};
use crate::index::probing::ProbingMap;

/// Collision resolution strategy of a hash index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapType {
    Probing,
    Chaining,
}

/// Operations every hash index supports, whatever its collision strategy
pub trait Map<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V>;
    fn get(&self, key: &K) -> Option<&V>;
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;
    fn contains(&self, key: &K) -> bool;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
    fn resizes(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Hash, V, C: EntryComparator<K, V>> Map<K, V> for ProbingMap<K, V, C> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        ProbingMap::put(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        ProbingMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        ProbingMap::get_mut(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        ProbingMap::contains(self, key)
    }

    fn len(&self) -> usize {
        ProbingMap::len(self)
    }

    fn capacity(&self) -> usize {
        ProbingMap::capacity(self)
    }

    fn resizes(&self) -> usize {
        ProbingMap::resizes(self)
    }
}

impl<K: Hash, V, C: EntryComparator<K, V>> Map<K, V> for ChainingMap<K, V, C> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        ChainingMap::put(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        ChainingMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        ChainingMap::get_mut(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        ChainingMap::contains(self, key)
    }

    fn len(&self) -> usize {
        ChainingMap::len(self)
    }

    fn capacity(&self) -> usize {
        ChainingMap::capacity(self)
    }

    fn resizes(&self) -> usize {
        ChainingMap::resizes(self)
    }
}

/// Hash index whose collision strategy is picked at construction time
pub enum HashIndex<K, V, C> {
    Probing(ProbingMap<K, V, C>),
    Chaining(ChainingMap<K, V, C>),
}

impl<K, V, C> HashIndex<K, V, C>
where
    K: Hash,
    C: EntryComparator<K, V>,
{
    pub fn new(map_type: MapType, capacity: usize, load_factor: f64, comparator: C) -> Self {
        match map_type {
            MapType::Probing => HashIndex::Probing(ProbingMap::new(capacity, load_factor, comparator)),
            MapType::Chaining => HashIndex::Chaining(ChainingMap::new(capacity, load_factor, comparator)),
        }
    }

    pub fn map_type(&self) -> MapType {
        match self {
            HashIndex::Probing(_) => MapType::Probing,
            HashIndex::Chaining(_) => MapType::Chaining,
        }
    }

    pub fn load_factor(&self) -> f64 {
        match self {
            HashIndex::Probing(map) => map.load_factor(),
            HashIndex::Chaining(map) => map.load_factor(),
        }
    }

    pub fn current_load(&self) -> f64 {
        match self {
            HashIndex::Probing(map) => map.current_load(),
            HashIndex::Chaining(map) => map.current_load(),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &MapEntry<K, V>> + '_> {
        match self {
            HashIndex::Probing(map) => Box::new(map.iter()),
            HashIndex::Chaining(map) => Box::new(map.iter()),
        }
    }
}

impl<K, V, C> Map<K, V> for HashIndex<K, V, C>
where
    K: Hash,
    C: EntryComparator<K, V>,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self {
            HashIndex::Probing(map) => map.put(key, value),
            HashIndex::Chaining(map) => map.put(key, value),
        }
    }

    fn get(&self, key: &K) -> Option<&V> {
        match self {
            HashIndex::Probing(map) => map.get(key),
            HashIndex::Chaining(map) => map.get(key),
        }
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self {
            HashIndex::Probing(map) => map.get_mut(key),
            HashIndex::Chaining(map) => map.get_mut(key),
        }
    }

    fn contains(&self, key: &K) -> bool {
        match self {
            HashIndex::Probing(map) => map.contains(key),
            HashIndex::Chaining(map) => map.contains(key),
        }
    }

    fn len(&self) -> usize {
        match self {
            HashIndex::Probing(map) => map.len(),
            HashIndex::Chaining(map) => map.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            HashIndex::Probing(map) => map.capacity(),
            HashIndex::Chaining(map) => map.capacity(),
        }
    }

    fn resizes(&self) -> usize {
        match self {
            HashIndex::Probing(map) => map.resizes(),
            HashIndex::Chaining(map) => map.resizes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::entry::NaturalOrder;

    fn exercise(map_type: MapType) {
        let mut index = HashIndex::new(map_type, 5, 0.5, NaturalOrder);
        assert_eq!(index.map_type(), map_type);
        assert!(index.is_empty());

        for id in 0..20u64 {
            assert_eq!(index.put(id, id * 2), None);
        }
        assert_eq!(index.put(3, 0), Some(6));

        assert_eq!(index.len(), 20);
        assert!(index.resizes() > 0);
        assert!(index.capacity() > 5);
        assert_eq!(index.get(&3), Some(&0));
        assert!(index.contains(&19));
        assert!(!index.contains(&20));
        assert_eq!(index.iter().count(), 20);
    }

    #[test]
    fn probing_behind_common_interface() {
        exercise(MapType::Probing);
    }

    #[test]
    fn chaining_behind_common_interface() {
        exercise(MapType::Chaining);
    }
}
