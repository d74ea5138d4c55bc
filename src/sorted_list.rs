use crate::traverse::Traverse;
use crate::{EnumerableError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Shl;
use tracing::debug;

/// A sequence that keeps its elements in ascending order after every insertion
///
/// The list exposes its contents only through [`Traverse`], which is all the
/// enumerable operations and cursors need.
#[derive(Clone, PartialEq)]
pub struct SortedList<T> {
    data: Vec<T>,
}

impl<T> SortedList<T> {
    pub fn new() -> Self {
        SortedList { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SortedList {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The stored elements, smallest first
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }
}

impl<T: PartialOrd + fmt::Debug> SortedList<T> {
    /// Insert an element and re-sort the list
    ///
    /// Returns the list so insertions can be chained. Fails without modifying
    /// the list if the element has no ordering against itself or against any
    /// stored element (for example `f64::NAN`).
    pub fn insert(&mut self, element: T) -> Result<&mut Self> {
        let comparable = element.partial_cmp(&element).is_some()
            && self.data.iter().all(|e| e.partial_cmp(&element).is_some());

        if !comparable {
            debug!(target: "enumerable::sorted_list", element = ?element, "Rejected incomparable element");
            return Err(EnumerableError::Incomparable(format!("{:?}", element)));
        }

        self.data.push(element);
        self.data
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Ok(self)
    }
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> Traverse for SortedList<T> {
    type Element = T;

    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element),
    {
        self.data.iter().for_each(visitor)
    }
}

/// Chained insertion for totally ordered elements:
/// `SortedList::new() << 3 << 13 << 42`
impl<T: Ord> Shl<T> for SortedList<T> {
    type Output = SortedList<T>;

    fn shl(mut self, element: T) -> Self::Output {
        self.data.push(element);
        self.data.sort();
        self
    }
}

impl<T: Ord> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
        self.data.sort();
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SortedList::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut list = SortedList::new();
        list.insert(3)
            .unwrap()
            .insert(13)
            .unwrap()
            .insert(42)
            .unwrap()
            .insert(4)
            .unwrap()
            .insert(7)
            .unwrap();

        assert_eq!(list.as_slice(), &[3, 4, 7, 13, 42]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_shl_chaining() {
        let list = SortedList::new() << 3 << 13 << 42 << 4 << 7;
        assert_eq!(list.as_slice(), &[3, 4, 7, 13, 42]);
        assert_eq!(list.first(), Some(&3));
        assert_eq!(list.last(), Some(&42));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let list = SortedList::new() << 2 << 1 << 2;
        assert_eq!(list.as_slice(), &[1, 2, 2]);
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: SortedList<i32> = SortedList::default();
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
    }

    #[test]
    fn test_insert_nan_is_rejected() {
        let mut list = SortedList::new();
        list.insert(1.5).unwrap();

        let result = list.insert(f64::NAN);
        assert!(matches!(result, Err(EnumerableError::Incomparable(_))));
        assert_eq!(list.as_slice(), &[1.5]);
    }

    #[test]
    fn test_insert_nan_into_empty_list_is_rejected() {
        let mut list: SortedList<f64> = SortedList::new();
        assert!(list.insert(f64::NAN).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_floats_are_sorted() {
        let mut list = SortedList::new();
        list.insert(2.5).unwrap().insert(-1.0).unwrap().insert(0.0).unwrap();
        assert_eq!(list.as_slice(), &[-1.0, 0.0, 2.5]);
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut list: SortedList<&str> = ["pear", "apple"].into_iter().collect();
        list.extend(["fig"]);
        assert_eq!(list.as_slice(), &["apple", "fig", "pear"]);
    }

    #[test]
    fn test_traverse_visits_in_sorted_order() {
        let list = SortedList::new() << 42 << 3 << 13;
        let mut seen = Vec::new();
        list.traverse(|e| seen.push(*e));
        assert_eq!(seen, vec![3, 13, 42]);
    }

    #[test]
    fn test_debug_prints_as_list() {
        let list = SortedList::new() << 2 << 1;
        assert_eq!(format!("{:?}", list), "[1, 2]");
    }
}
