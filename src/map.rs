use crate::cursor::{self, Cursor};
use crate::traverse::Traverse;

/// Extension trait adding `map` and its cursor form to every traversable source
pub trait MapExt: Traverse {
    /// Transform every element, preserving traversal order
    ///
    /// The result is built eagerly in a single traversal and owned by the caller.
    fn map<U, F>(&self, mut transform: F) -> Vec<U>
    where
        F: FnMut(&Self::Element) -> U,
    {
        let mut result = Vec::new();
        self.traverse(|e| result.push(transform(e)));
        result
    }

    /// A cursor that replays `map` over this source
    ///
    /// Pulling from it yields the untransformed elements; `with_index` on it
    /// collects the visitor's results the way `map` would.
    fn map_cursor(&self) -> Cursor<&Self, cursor::Map> {
        Cursor::new(self)
    }
}

impl<S: Traverse + ?Sized> MapExt for S {}

/// Convenience function to map over a source
pub fn map<S, U, F>(source: &S, transform: F) -> Vec<U>
where
    S: Traverse + ?Sized,
    F: FnMut(&S::Element) -> U,
{
    source.map(transform)
}
