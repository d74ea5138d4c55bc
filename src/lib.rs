//! # Enumerable - Traversal-Derived Collection Operations
//!
//! Any container that can visit its elements in order gains a standard set of
//! higher-order operations and a resumable pull cursor, all derived from that
//! single traversal primitive.
//!
//! - **One primitive**: implement [`Traverse`] and every operation comes for free
//! - **Eager operations**: `map`, `select`, `sorted_by_key` and the `reduce` family
//!   build owned results in a single traversal
//! - **Pull cursors**: [`Cursor`] turns a push traversal into `next`/`rewind`
//!   by replaying it, so it always sees the container's current contents
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let list = SortedList::new() << 3 << 13 << 42 << 4 << 7;
//! assert_eq!(list.map(|x| x + 1), vec![4, 5, 8, 14, 43]);
//! assert_eq!(list.reduce_with(BinaryOp::Add), Some(69));
//!
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.next().unwrap(), 3);
//! assert_eq!(cursor.next().unwrap(), 4);
//! ```

pub mod cursor;
pub mod error;
pub mod map;
pub mod operator;
pub mod reduce;
pub mod select;
pub mod sort_by;
pub mod sorted_list;
pub mod traverse;

pub use cursor::{Cursor, CursorExt, Each, Map, Replay};
pub use error::{EnumerableError, Result};
pub use map::MapExt;
pub use operator::{BinaryOp, Concat, Max, Min, Minus, Operator, Plus, Times};
pub use reduce::ReduceExt;
pub use select::SelectExt;
pub use sort_by::SortByExt;
pub use sorted_list::SortedList;
pub use traverse::Traverse;

/// Everything needed to call the enumerable operations on a source
pub mod prelude {
    pub use crate::cursor::{Cursor, CursorExt};
    pub use crate::map::MapExt;
    pub use crate::operator::{BinaryOp, Concat, Max, Min, Minus, Operator, Plus, Times};
    pub use crate::reduce::ReduceExt;
    pub use crate::select::SelectExt;
    pub use crate::sort_by::SortByExt;
    pub use crate::sorted_list::SortedList;
    pub use crate::traverse::Traverse;
}
