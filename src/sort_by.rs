use crate::traverse::Traverse;
use std::collections::BTreeMap;

/// Extension trait adding key-based ordering to every traversable source
pub trait SortByExt: Traverse {
    /// Return the elements ordered by the ascending key `key_fn` computes for each
    ///
    /// Elements are looked up by key, so when several elements share a key the
    /// last one visited wins and is emitted once for every occurrence of that
    /// key. The result always has the source's length. Tie order is unspecified.
    fn sorted_by_key<K, F>(&self, mut key_fn: F) -> Vec<Self::Element>
    where
        Self::Element: Clone,
        K: Ord + Clone,
        F: FnMut(&Self::Element) -> K,
    {
        let mut keys = Vec::new();
        let mut by_key = BTreeMap::new();

        self.traverse(|e| {
            let key = key_fn(e);
            keys.push(key.clone());
            by_key.insert(key, e.clone());
        });

        keys.sort_unstable();
        // every key was inserted into `by_key` during the traversal
        keys.iter().map(|k| by_key[k].clone()).collect()
    }
}

impl<S: Traverse + ?Sized> SortByExt for S {}

/// Convenience function to order a source by key
pub fn sorted_by_key<S, K, F>(source: &S, key_fn: F) -> Vec<S::Element>
where
    S: Traverse + ?Sized,
    S::Element: Clone,
    K: Ord + Clone,
    F: FnMut(&S::Element) -> K,
{
    source.sorted_by_key(key_fn)
}
