use std::cmp::Ordering;
use std::fmt;

pub type ItemComparator<T> = fn(&T, &T) -> Ordering;

/// Append-only ordered sequence with linear search.
///
/// Items keep insertion order and are never removed or reordered. Searches
/// scan from the front and return the first item the comparator reports as
/// `Ordering::Equal`.
pub struct Sequence<T> {
    items: Vec<T>,
    comparator: Option<ItemComparator<T>>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Sequence {
            items: Vec::new(),
            comparator: None,
        }
    }

    /// Sequence whose `search` uses `comparator`
    pub fn with_comparator(comparator: ItemComparator<T>) -> Self {
        Sequence {
            items: Vec::new(),
            comparator: Some(comparator),
        }
    }

    pub fn push_back(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        self.items.get(pos)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Position of the first item equal to `item` under the creation comparator.
    /// Sequences built without a comparator never match.
    pub fn search(&self, item: &T) -> Option<usize> {
        let comparator = self.comparator?;
        self.items
            .iter()
            .position(|candidate| comparator(item, candidate) == Ordering::Equal)
    }

    /// Position of the first item matching `key` under a caller-supplied comparator.
    /// The key type may differ from the element type.
    pub fn search_by<Q, F>(&self, key: &Q, comparator: F) -> Option<usize>
    where
        Q: ?Sized,
        F: Fn(&Q, &T) -> Ordering,
    {
        self.items
            .iter()
            .position(|candidate| comparator(key, candidate) == Ordering::Equal)
    }

    pub fn find_by<Q, F>(&self, key: &Q, comparator: F) -> Option<&T>
    where
        Q: ?Sized,
        F: Fn(&Q, &T) -> Ordering,
    {
        self.search_by(key, comparator).map(|pos| &self.items[pos])
    }

    pub(crate) fn find_by_mut<Q, F>(&mut self, key: &Q, comparator: F) -> Option<&mut T>
    where
        Q: ?Sized,
        F: Fn(&Q, &T) -> Ordering,
    {
        self.items
            .iter_mut()
            .find(|candidate| comparator(key, candidate) == Ordering::Equal)
    }

    pub fn contains_by<Q, F>(&self, key: &Q, comparator: F) -> bool
    where
        Q: ?Sized,
        F: Fn(&Q, &T) -> Ordering,
    {
        self.search_by(key, comparator).is_some()
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            items: self.items.clone(),
            comparator: self.comparator,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare_i32(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn keeps_insertion_order() {
        let mut seq = Sequence::new();
        seq.push_back(3);
        seq.push_back(1);
        seq.push_back(3);

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.as_slice(), &[3, 1, 3]);
        assert_eq!(seq.first(), Some(&3));
        assert_eq!(seq.last(), Some(&3));
    }

    #[test]
    fn search_returns_first_match() {
        let mut seq = Sequence::with_comparator(compare_i32);
        for v in [5, 7, 7, 9] {
            seq.push_back(v);
        }

        assert_eq!(seq.search(&7), Some(1));
        assert_eq!(seq.search(&4), None);
    }

    #[test]
    fn search_without_comparator_never_matches() {
        let mut seq = Sequence::new();
        seq.push_back(1);
        assert_eq!(seq.search(&1), None);
    }

    #[test]
    fn search_by_uses_foreign_key_type() {
        let mut seq: Sequence<(u32, String)> = Sequence::new();
        seq.push_back((1, "one".to_string()));
        seq.push_back((2, "two".to_string()));

        let by_name = |key: &str, item: &(u32, String)| key.cmp(item.1.as_str());
        assert_eq!(seq.find_by("two", by_name), Some(&(2, "two".to_string())));
        assert_eq!(seq.search_by("one", by_name), Some(0));
        assert!(!seq.contains_by("three", by_name));
    }
}
