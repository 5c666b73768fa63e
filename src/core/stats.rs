use std::hash::Hash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::index::entry::EntryComparator;
use crate::index::hash_index::{HashIndex, Map, MapType};

/// Catalog statistics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub generated_at: DateTime<Utc>,

    // Record counts
    pub books: usize,
    pub inserted_books: usize,
    pub authors: usize,
    pub tags: usize,
    pub years: usize,

    pub indices: Vec<IndexStats>,
}

impl CatalogStats {
    pub fn index(&self, name: &str) -> Option<&IndexStats> {
        self.indices.iter().find(|stats| stats.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    pub name: String,
    pub map_type: MapType,
    pub len: usize,
    pub capacity: usize,
    pub load_factor: f64,
    pub current_load: f64,
    pub resizes: usize,
}

impl IndexStats {
    pub fn of<K, V, C>(name: &str, index: &HashIndex<K, V, C>) -> Self
    where
        K: Hash,
        C: EntryComparator<K, V>,
    {
        IndexStats {
            name: name.to_string(),
            map_type: index.map_type(),
            len: index.len(),
            capacity: index.capacity(),
            load_factor: index.load_factor(),
            current_load: index.current_load(),
            resizes: index.resizes(),
        }
    }
}
