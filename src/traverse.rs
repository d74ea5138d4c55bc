use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

/// Core traversal trait for enumerable containers
///
/// This is the single primitive every enumerable operation and every cursor
/// is built on. Implementors visit each element exactly once, in their stored
/// order, synchronously, and then return.
pub trait Traverse {
    type Element;

    /// Invoke `visitor` once per element, in order
    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element);
}

impl<S: Traverse + ?Sized> Traverse for &S {
    type Element = S::Element;

    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element),
    {
        (**self).traverse(visitor)
    }
}

impl<S: Traverse + ?Sized> Traverse for Rc<S> {
    type Element = S::Element;

    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element),
    {
        (**self).traverse(visitor)
    }
}

/// Borrows the inner container for the duration of one traversal, so the
/// container may be mutated between traversals but not during one.
///
/// Panics if the container is mutably borrowed while being traversed.
impl<S: Traverse + ?Sized> Traverse for RefCell<S> {
    type Element = S::Element;

    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element),
    {
        self.borrow().traverse(visitor)
    }
}

impl<T> Traverse for [T] {
    type Element = T;

    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element),
    {
        self.iter().for_each(visitor)
    }
}

impl<T> Traverse for Vec<T> {
    type Element = T;

    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element),
    {
        self.iter().for_each(visitor)
    }
}

impl<T> Traverse for VecDeque<T> {
    type Element = T;

    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element),
    {
        self.iter().for_each(visitor)
    }
}

impl<T> Traverse for BTreeSet<T> {
    type Element = T;

    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Element),
    {
        self.iter().for_each(visitor)
    }
}
