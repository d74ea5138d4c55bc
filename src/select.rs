use crate::traverse::Traverse;

/// Extension trait adding `select` to every traversable source
pub trait SelectExt: Traverse {
    /// Keep the elements for which `predicate` holds, in traversal order
    fn select<F>(&self, mut predicate: F) -> Vec<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element) -> bool,
    {
        let mut result = Vec::new();
        self.traverse(|e| {
            if predicate(e) {
                result.push(e.clone());
            }
        });
        result
    }
}

impl<S: Traverse + ?Sized> SelectExt for S {}

/// Convenience function to select from a source
pub fn select<S, F>(source: &S, predicate: F) -> Vec<S::Element>
where
    S: Traverse + ?Sized,
    S::Element: Clone,
    F: FnMut(&S::Element) -> bool,
{
    source.select(predicate)
}
