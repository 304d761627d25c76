//! Linked collection types. [`LinkedList`] links every node in both directions, while
//! [`ForwardList`] only links forwards and makes its edits relative to a predecessor.
//!
//! Both lists share a merge sort that relinks nodes in place, so sorting never allocates per
//! element and already sorted input is handled in linear time.

pub(crate) mod chain;
pub mod forward;
pub mod list;

#[doc(inline)]
pub use forward::ForwardList;
#[doc(inline)]
pub use list::LinkedList;
