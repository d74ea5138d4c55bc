use crate::map::MapExt;
use crate::traverse::Traverse;
use crate::{EnumerableError, Result};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// A traversal-producing operation that a cursor can re-run
///
/// The cursor never caches elements. Every pull replays the operation over
/// the source from the start, so each replay must visit the source elements
/// in traversal order.
pub trait Replay {
    /// Name of the operation, used for inspection and logging
    const NAME: &'static str;

    /// What the operation builds from the visitor's results
    type Output<U>;

    /// Run the operation over `source`, feeding each element to `visitor`
    fn replay<S, U, F>(source: &S, visitor: F) -> Self::Output<U>
    where
        S: Traverse + ?Sized,
        F: FnMut(&S::Element) -> U;
}

/// Replays the plain traversal; builds nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Each;

impl Replay for Each {
    const NAME: &'static str = "each";
    type Output<U> = ();

    fn replay<S, U, F>(source: &S, mut visitor: F) -> Self::Output<U>
    where
        S: Traverse + ?Sized,
        F: FnMut(&S::Element) -> U,
    {
        source.traverse(|e| {
            visitor(e);
        });
    }
}

/// Replays `map`; builds the visitor's results in traversal order
#[derive(Debug, Clone, Copy, Default)]
pub struct Map;

impl Replay for Map {
    const NAME: &'static str = "map";
    type Output<U> = Vec<U>;

    fn replay<S, U, F>(source: &S, visitor: F) -> Self::Output<U>
    where
        S: Traverse + ?Sized,
        F: FnMut(&S::Element) -> U,
    {
        source.map(visitor)
    }
}

/// Pull-based cursor over a push-based traversal
///
/// The cursor remembers only how many elements it has handed out. Each call to
/// [`Cursor::next`] re-runs the bound operation over the source and returns the
/// element at the new position, so it always reflects the source as it is at
/// the time of the pull.
pub struct Cursor<S, O = Each> {
    source: S,
    /// `None` until the first pull and after a rewind
    position: Option<usize>,
    _operation: PhantomData<O>,
}

impl<S, O> Cursor<S, O>
where
    S: Traverse,
    O: Replay,
{
    pub fn new(source: S) -> Self {
        Cursor {
            source,
            position: None,
            _operation: PhantomData,
        }
    }

    /// Advance and return the element at the new position
    ///
    /// Past the end this keeps failing with [`EnumerableError::EndOfSequence`],
    /// and the position keeps growing until [`Cursor::rewind`] is called.
    pub fn next(&mut self) -> Result<S::Element>
    where
        S::Element: Clone,
    {
        let target = self.position.map_or(0, |p| p + 1);
        self.position = Some(target);

        let (found, visited) = self.element_at(target);
        found.ok_or_else(|| {
            debug!(target: "enumerable::cursor", operation = O::NAME, position = target, "End of sequence");
            EnumerableError::EndOfSequence {
                position: target,
                len: visited,
            }
        })
    }

    /// The element the next call to [`Cursor::next`] would return, or `None`
    /// if that call would reach the end
    pub fn peek(&self) -> Option<S::Element>
    where
        S::Element: Clone,
    {
        self.element_at(self.position.map_or(0, |p| p + 1)).0
    }

    /// Return to the state before the first pull
    pub fn rewind(&mut self) -> &mut Self {
        debug!(target: "enumerable::cursor", operation = O::NAME, position = ?self.position, "Cursor rewound");
        self.position = None;
        self
    }

    /// Run the bound operation with a zero-based index threaded to `visitor`
    ///
    /// Returns whatever the operation builds, e.g. the collected visitor
    /// results for a `map` cursor. The cursor position is left untouched.
    pub fn with_index<U, F>(&self, mut visitor: F) -> O::Output<U>
    where
        F: FnMut(&S::Element, usize) -> U,
    {
        let mut index = 0;
        O::replay(&self.source, |e| {
            let output = visitor(e, index);
            index += 1;
            output
        })
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn operation(&self) -> &'static str {
        O::NAME
    }

    /// Replay the operation and pick the element at `target`, along with how
    /// many elements the replay visited
    fn element_at(&self, target: usize) -> (Option<S::Element>, usize)
    where
        S::Element: Clone,
    {
        let mut visited = 0;
        let mut found = None;

        O::replay(&self.source, |e| {
            if visited == target {
                found = Some(e.clone());
            }
            visited += 1;
        });

        trace!(target: "enumerable::cursor", operation = O::NAME, position = target, visited, "Cursor replayed");
        (found, visited)
    }
}

impl<S: Clone, O> Clone for Cursor<S, O> {
    fn clone(&self) -> Self {
        Cursor {
            source: self.source.clone(),
            position: self.position,
            _operation: PhantomData,
        }
    }
}

impl<S, O: Replay> fmt::Debug for Cursor<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("operation", &O::NAME)
            .field("position", &self.position)
            .finish()
    }
}

/// Extension trait adding the cursor form of the plain traversal
pub trait CursorExt: Traverse {
    /// A cursor that replays the plain traversal over this source
    fn cursor(&self) -> Cursor<&Self, Each> {
        Cursor::new(self)
    }
}

impl<S: Traverse + ?Sized> CursorExt for S {}
