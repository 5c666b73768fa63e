use std::hash::Hash;
use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, info, trace, warn};
use crate::core::compare::{compare_book_ids, compare_names, compare_tag_ids, compare_years, KeyComparator};
use crate::core::config::{CatalogConfig, IndexConfig};
use crate::core::error::Result;
use crate::core::feed::{CatalogFeed, FeedSummary};
use crate::core::stats::{CatalogStats, IndexStats};
use crate::core::types::{
    compare_books_by_id, Author, Book, BookId, BookRef, BookTagRecord, Tag, TagRecord, YearBucket,
};
use crate::index::hash_index::{HashIndex, Map};
use crate::index::sequence::Sequence;

type Index<K, V> = HashIndex<K, V, KeyComparator<K, V>>;

/// Position of a tag in the catalog's tag store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSlot(usize);

/// Book catalog with id, author, tag and year indices.
///
/// Every book is held once (`Arc<Book>`) and referenced from the primary
/// sequence, the id index, its year bucket and any author or tag it is
/// linked to. Tags live in a single store; the name and id indices both map
/// to the same slot, so a tag reached through either index is the same value.
pub struct Catalog {
    config: CatalogConfig,
    books: Sequence<BookRef>,
    book_ids: Index<BookId, BookRef>,
    authors: Index<String, Author>,
    tags: Index<String, TagSlot>,
    tag_ids: Index<u64, TagSlot>,
    tag_store: Vec<Tag>,
    years: Index<i32, YearBucket>,
}

fn index<K: Hash, V>(config: &IndexConfig, comparator: KeyComparator<K, V>) -> Index<K, V> {
    HashIndex::new(config.map_type, config.capacity, config.load_factor, comparator)
}

impl Catalog {
    /// Empty catalog with the default index layout
    pub fn new() -> Self {
        Self::build(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Catalog populated from a construction feed
    pub fn from_feed(feed: CatalogFeed) -> Result<Self> {
        let mut catalog = Catalog::new();
        catalog.load(feed)?;
        Ok(catalog)
    }

    fn build(config: CatalogConfig) -> Self {
        Catalog {
            books: Sequence::with_comparator(compare_books_by_id),
            book_ids: index(&config.book_ids, compare_book_ids),
            authors: index(&config.authors, compare_names),
            tags: index(&config.tags, compare_names),
            tag_ids: index(&config.tag_ids, compare_tag_ids),
            tag_store: Vec::new(),
            years: index(&config.years, compare_years),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Adds a book to the primary sequence, the id index and its year bucket.
    ///
    /// A reused id replaces the id-index entry (last write wins); the earlier
    /// book stays in the primary sequence and its year bucket. Fails without
    /// touching any index when the publication year is not integer-like.
    pub fn insert_book(&mut self, book: Book) -> Result<BookRef> {
        let year = book.publication_year()?;
        let book = Arc::new(book);

        self.books.push_back(book.clone());
        if self.book_ids.put(book.id, book.clone()).is_some() {
            debug!(book_id = %book.id, "book id reused, id index entry replaced");
        }

        match self.years.get_mut(&year) {
            Some(bucket) => bucket.books.push_back(book.clone()),
            None => {
                let mut bucket = YearBucket::new(year);
                bucket.books.push_back(book.clone());
                self.years.put(year, bucket);
            }
        }

        trace!(book_id = %book.id, year, "book inserted");
        Ok(book)
    }

    /// Links `book` to the author `name`, creating the author on first use,
    /// and folds the book's rating into the author's average.
    pub fn insert_book_author(&mut self, name: &str, book: &BookRef) {
        let key = name.to_string();
        match self.authors.get_mut(&key) {
            Some(author) => author.add_book(book.clone()),
            None => {
                let mut author = Author::new(name);
                author.add_book(book.clone());
                self.authors.put(key, author);
            }
        }
        trace!(author = name, book_id = %book.id, "author linked");
    }

    /// Registers a tag under both its name and its id.
    /// Re-registering a name or id points that key at the new tag.
    pub fn register_tag(&mut self, record: TagRecord) -> TagSlot {
        let slot = TagSlot(self.tag_store.len());
        self.tag_store.push(Tag::new(record.tag_name.clone(), record.tag_id));
        self.tags.put(record.tag_name, slot);
        self.tag_ids.put(record.tag_id, slot);
        slot
    }

    /// Applies a book-tag association.
    ///
    /// The id resolves to a tag name and the tag currently registered under
    /// that name receives the association, so after a name is re-registered
    /// the newer tag collects it. Unknown tag ids are ignored. For a known
    /// tag the counters always advance; the book is appended only when its
    /// id is in the id index.
    pub fn associate_book_tag(&mut self, record: BookTagRecord) {
        let Some(&TagSlot(by_id)) = self.tag_ids.get(&record.tag_id) else {
            debug!(tag_id = record.tag_id, "association skipped, unknown tag");
            return;
        };
        let slot = self
            .tags
            .get(&self.tag_store[by_id].name)
            .map_or(by_id, |&TagSlot(by_name)| by_name);
        let tag = &mut self.tag_store[slot];
        tag.total_books += 1;
        tag.count += record.count as f64;

        match self.book_ids.get(&record.book_id) {
            Some(book) => tag.books.push_back(book.clone()),
            None => debug!(
                tag_id = record.tag_id,
                book_id = %record.book_id,
                "association counted without book, unknown book id"
            ),
        }
    }

    /// Applies a feed in dependency order: books (each linked to its
    /// attribution string as a single author), tags, then associations.
    /// Book rows that fail validation are skipped and reported in the summary.
    pub fn load(&mut self, feed: CatalogFeed) -> Result<FeedSummary> {
        let mut summary = FeedSummary::default();

        for record in feed.books {
            let book = match Book::try_from(record) {
                Ok(book) => book,
                Err(err) => {
                    warn!(error = %err, "book record rejected");
                    summary.rejected_books += 1;
                    continue;
                }
            };
            let book = self.insert_book(book)?;
            let authors = book.authors.clone();
            self.insert_book_author(&authors, &book);
            summary.books += 1;
        }

        for record in feed.tags {
            self.register_tag(record);
            summary.tags += 1;
        }

        for record in feed.book_tags {
            if !self.tag_ids.contains(&record.tag_id) {
                summary.unknown_tag_associations += 1;
            } else if !self.book_ids.contains(&record.book_id) {
                summary.unknown_book_associations += 1;
            }
            self.associate_book_tag(record);
            summary.associations += 1;
        }

        info!(
            books = summary.books,
            rejected = summary.rejected_books,
            tags = summary.tags,
            associations = summary.associations,
            "feed loaded"
        );
        Ok(summary)
    }

    pub fn book(&self, id: BookId) -> Option<&BookRef> {
        self.book_ids.get(&id)
    }

    /// Every inserted book in insertion order, duplicates included
    pub fn books(&self) -> &Sequence<BookRef> {
        &self.books
    }

    pub fn author(&self, name: &str) -> Option<&Author> {
        self.authors.get(&name.to_string())
    }

    pub fn books_by_author(&self, name: &str) -> Option<&Sequence<BookRef>> {
        self.author(name).map(|author| &author.books)
    }

    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags
            .get(&name.to_string())
            .map(|&TagSlot(slot)| &self.tag_store[slot])
    }

    pub fn tag_by_id(&self, tag_id: u64) -> Option<&Tag> {
        self.tag_ids
            .get(&tag_id)
            .map(|&TagSlot(slot)| &self.tag_store[slot])
    }

    pub fn books_by_tag(&self, name: &str) -> Option<&Sequence<BookRef>> {
        self.tag(name).map(|tag| &tag.books)
    }

    pub fn year(&self, year: i32) -> Option<&YearBucket> {
        self.years.get(&year)
    }

    pub fn books_by_year(&self, year: i32) -> Option<&Sequence<BookRef>> {
        self.year(year).map(|bucket| &bucket.books)
    }

    /// Distinct book ids
    pub fn count_books(&self) -> usize {
        self.book_ids.len()
    }

    /// Length of the primary sequence, counting reused ids once per insertion
    pub fn inserted_books(&self) -> usize {
        self.books.len()
    }

    pub fn count_authors(&self) -> usize {
        self.authors.len()
    }

    pub fn count_tags(&self) -> usize {
        self.tags.len()
    }

    pub fn count_years(&self) -> usize {
        self.years.len()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            generated_at: Utc::now(),
            books: self.count_books(),
            inserted_books: self.inserted_books(),
            authors: self.count_authors(),
            tags: self.count_tags(),
            years: self.count_years(),
            indices: vec![
                IndexStats::of("book_ids", &self.book_ids),
                IndexStats::of("authors", &self.authors),
                IndexStats::of("tags", &self.tags),
                IndexStats::of("tag_ids", &self.tag_ids),
                IndexStats::of("years", &self.years),
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}
