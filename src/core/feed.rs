use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::error::Result;
use crate::core::types::{BookRecord, BookTagRecord, TagRecord};

/// Batch of already-parsed records used to build a catalog.
///
/// `Catalog::load` applies the three lists in dependency order, so the order
/// of the lists inside the document does not matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFeed {
    #[serde(default)]
    pub books: Vec<BookRecord>,
    #[serde(default)]
    pub tags: Vec<TagRecord>,
    #[serde(default)]
    pub book_tags: Vec<BookTagRecord>,
}

impl CatalogFeed {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

/// What a `Catalog::load` call applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSummary {
    pub books: usize,
    pub rejected_books: usize,
    pub tags: usize,
    pub associations: usize,
    /// Associations whose tag id was not registered (no effect)
    pub unknown_tag_associations: usize,
    /// Associations counted on their tag without a book appended
    pub unknown_book_associations: usize,
}
