//! Key-to-entry comparators for the catalog indices.
//!
//! Integer keys compare numerically, names compare lexicographically. Each
//! function takes the raw lookup key on the left and a stored entry on the
//! right, matching `EntryComparator`.

use std::cmp::Ordering;
use crate::core::types::BookId;
use crate::index::entry::MapEntry;

pub type KeyComparator<K, V> = fn(&K, &MapEntry<K, V>) -> Ordering;

pub fn compare_book_ids<V>(id: &BookId, entry: &MapEntry<BookId, V>) -> Ordering {
    id.value().cmp(&entry.key.value())
}

/// Author and tag names
pub fn compare_names<V>(name: &String, entry: &MapEntry<String, V>) -> Ordering {
    name.as_str().cmp(entry.key.as_str())
}

pub fn compare_tag_ids<V>(id: &u64, entry: &MapEntry<u64, V>) -> Ordering {
    id.cmp(&entry.key)
}

pub fn compare_years<V>(year: &i32, entry: &MapEntry<i32, V>) -> Ordering {
    year.cmp(&entry.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_numeric_and_lexicographic_keys() {
        let entry = MapEntry::new(BookId(10), ());
        assert_eq!(compare_book_ids(&BookId(10), &entry), Ordering::Equal);
        assert_eq!(compare_book_ids(&BookId(9), &entry), Ordering::Less);

        let entry = MapEntry::new("Tolkien".to_string(), ());
        assert_eq!(compare_names(&"Tolkien".to_string(), &entry), Ordering::Equal);
        assert_eq!(compare_names(&"Austen".to_string(), &entry), Ordering::Less);

        let entry = MapEntry::new(2001, ());
        assert_eq!(compare_years(&2002, &entry), Ordering::Greater);
        assert_eq!(compare_tag_ids(&7, &MapEntry::new(7u64, ())), Ordering::Equal);
    }
}
