use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Deserializer, Serialize};
use crate::core::error::{Error, Result};
use crate::index::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(pub u64);

impl BookId {
    pub fn new(id: u64) -> Self {
        BookId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        BookId(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalogued book. Never mutated once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Attribution string, possibly several names ("Author1, Author2")
    pub authors: String,
    pub average_rating: f64,
    pub original_publication_year: f64,
}

impl Book {
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        authors: impl Into<String>,
        average_rating: f64,
        original_publication_year: f64,
    ) -> Self {
        Book {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            average_rating,
            original_publication_year,
        }
    }

    /// Publication year truncated toward zero (2001.9 -> 2001)
    pub fn publication_year(&self) -> Result<i32> {
        let year = self.original_publication_year;
        if !year.is_finite() || year < i32::MIN as f64 || year >= i32::MAX as f64 + 1.0 {
            return Err(Error::invalid_input(format!(
                "book {}: publication year {} is not an integer-like value",
                self.id, year
            )));
        }
        Ok(year.trunc() as i32)
    }
}

pub type BookRef = Arc<Book>;

pub(crate) fn compare_books_by_id(a: &BookRef, b: &BookRef) -> std::cmp::Ordering {
    a.id.cmp(&b.id)
}

/// Books attributed to one author name plus their rating aggregate
#[derive(Debug, Clone)]
pub struct Author {
    pub name: String,
    pub books: Sequence<BookRef>,
    pub average_rating: f64,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Author {
            name: name.into(),
            books: Sequence::with_comparator(compare_books_by_id),
            average_rating: 0.0,
        }
    }

    /// Appends `book` and folds its rating into the aggregate.
    ///
    /// The aggregate is a pairwise cascade, not a running mean: a zero
    /// average takes the new rating as is, otherwise the new average is the
    /// midpoint of the old average and the new rating.
    pub fn add_book(&mut self, book: BookRef) {
        let rating = book.average_rating;
        self.books.push_back(book);
        if self.average_rating == 0.0 {
            self.average_rating = rating;
        } else {
            self.average_rating = (self.average_rating + rating) / 2.0;
        }
    }
}

/// A tag with the books associated to it
#[derive(Debug, Clone)]
pub struct Tag {
    pub name: String,
    pub tag_id: u64,
    /// Number of associations applied, including ones whose book was unknown
    pub total_books: u64,
    pub count: f64,
    pub books: Sequence<BookRef>,
}

impl Tag {
    pub fn new(name: impl Into<String>, tag_id: u64) -> Self {
        Tag {
            name: name.into(),
            tag_id,
            total_books: 0,
            count: 0.0,
            books: Sequence::new(),
        }
    }
}

/// Books published in one year
#[derive(Debug, Clone)]
pub struct YearBucket {
    pub year: i32,
    pub books: Sequence<BookRef>,
}

impl YearBucket {
    pub fn new(year: i32) -> Self {
        YearBucket {
            year,
            books: Sequence::with_comparator(compare_books_by_id),
        }
    }
}

/// Raw book row as found in a construction feed.
///
/// Numeric columns accept JSON numbers or numeric strings ("2001.0"). The id
/// must be a whole unsigned integer ("42" or 42); anything else is kept as
/// `None`, and unparsable rating or year text as NaN, so `Book::try_from`
/// rejects the row instead of failing the whole feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(deserialize_with = "optional_u64_or_string")]
    pub goodreads_book_id: Option<u64>,
    pub title: String,
    pub authors: String,
    #[serde(deserialize_with = "number_or_string")]
    pub average_rating: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub original_publication_year: f64,
}

impl TryFrom<BookRecord> for Book {
    type Error = Error;

    fn try_from(record: BookRecord) -> Result<Self> {
        let Some(id) = record.goodreads_book_id else {
            return Err(Error::invalid_input(format!(
                "book '{}': id is not an unsigned integer",
                record.title
            )));
        };
        if !record.average_rating.is_finite() {
            return Err(Error::invalid_input(format!(
                "book {}: invalid average rating",
                id
            )));
        }
        let book = Book::new(
            id,
            record.title,
            record.authors,
            record.average_rating,
            record.original_publication_year,
        );
        book.publication_year()?;
        Ok(book)
    }
}

/// Tag registration: name and id known up front
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    #[serde(deserialize_with = "u64_or_string")]
    pub tag_id: u64,
    pub tag_name: String,
}

impl TagRecord {
    pub fn new(tag_id: u64, tag_name: impl Into<String>) -> Self {
        TagRecord {
            tag_id,
            tag_name: tag_name.into(),
        }
    }
}

/// Association of a book with a tag, weighted by `count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookTagRecord {
    #[serde(rename = "goodreads_book_id", deserialize_with = "book_id_or_string")]
    pub book_id: BookId,
    #[serde(deserialize_with = "u64_or_string")]
    pub tag_id: u64,
    #[serde(deserialize_with = "i64_or_string")]
    pub count: i64,
}

impl BookTagRecord {
    pub fn new(book_id: impl Into<BookId>, tag_id: u64, count: i64) -> Self {
        BookTagRecord {
            book_id: book_id.into(),
            tag_id,
            count,
        }
    }
}

/// A numeric feed cell: JSON integer, JSON float or text.
/// Integers are matched before floats so large ids keep every digit.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawNumber::deserialize(deserializer)? {
        RawNumber::Unsigned(value) => value as f64,
        RawNumber::Signed(value) => value as f64,
        RawNumber::Float(value) => value,
        RawNumber::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
    })
}

fn optional_u64_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawNumber::deserialize(deserializer)? {
        RawNumber::Unsigned(value) => Some(value),
        RawNumber::Text(text) => text.trim().parse::<u64>().ok(),
        RawNumber::Signed(_) | RawNumber::Float(_) => None,
    })
}

fn u64_or_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Unsigned(value) => Ok(value),
        RawNumber::Text(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("'{}' is not an unsigned integer", text))),
        RawNumber::Signed(value) => Err(serde::de::Error::custom(format!(
            "{} is not an unsigned integer",
            value
        ))),
        RawNumber::Float(value) => Err(serde::de::Error::custom(format!(
            "{} is not an unsigned integer",
            value
        ))),
    }
}

fn i64_or_string<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Unsigned(value) => i64::try_from(value)
            .map_err(|_| serde::de::Error::custom(format!("{} is out of range", value))),
        RawNumber::Signed(value) => Ok(value),
        RawNumber::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("'{}' is not an integer", text))),
        RawNumber::Float(value) => Err(serde::de::Error::custom(format!(
            "{} is not an integer",
            value
        ))),
    }
}

fn book_id_or_string<'de, D>(deserializer: D) -> std::result::Result<BookId, D::Error>
where
    D: Deserializer<'de>,
{
    u64_or_string(deserializer).map(BookId)
}
