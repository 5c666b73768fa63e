use serde::{Deserialize, Serialize};
use crate::core::error::{Error, Result};
use crate::index::hash_index::MapType;

/// Sizing and collision strategy of one hash index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    pub map_type: MapType,
    pub capacity: usize,
    pub load_factor: f64,
}

impl IndexConfig {
    pub fn probing(capacity: usize, load_factor: f64) -> Self {
        IndexConfig { map_type: MapType::Probing, capacity, load_factor }
    }

    pub fn chaining(capacity: usize, load_factor: f64) -> Self {
        IndexConfig { map_type: MapType::Chaining, capacity, load_factor }
    }

    pub fn validate(&self, name: &str) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::invalid_argument(format!("{} index: capacity must be > 0", name)));
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "{} index: load factor {} must be a positive number",
                name, self.load_factor
            )));
        }
        // Open addressing needs a free slot to end every probe.
        if self.map_type == MapType::Probing && self.load_factor >= 1.0 {
            return Err(Error::invalid_argument(format!(
                "{} index: probing load factor {} must be < 1",
                name, self.load_factor
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub book_ids: IndexConfig,
    pub authors: IndexConfig,
    pub tags: IndexConfig,
    pub tag_ids: IndexConfig,
    pub years: IndexConfig,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        self.book_ids.validate("book_ids")?;
        self.authors.validate("authors")?;
        self.tags.validate("tags")?;
        self.tag_ids.validate("tag_ids")?;
        self.years.validate("years")?;
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            book_ids: IndexConfig::probing(200, 0.4),
            authors: IndexConfig::probing(200, 0.4),
            tags: IndexConfig::chaining(1000, 0.7),
            tag_ids: IndexConfig::chaining(1000, 0.7),
            years: IndexConfig::chaining(500, 0.7),
        }
    }
}
