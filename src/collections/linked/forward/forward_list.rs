use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use super::{Iter, IterMut, Link, Node, NodeRef};
use crate::collections::contiguous::Vector;
use crate::collections::linked::chain::{self, Chain, RelinkGuard};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in one direction only, addressed in the "insert after" and "erase after"
/// style.
///
/// Every position in the list has a predecessor: the first element's predecessor is the
/// before-begin anchor, which is the list's own head link and can never be removed. Operations
/// take the index of the predecessor, where [`None`] stands for the anchor.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `insert_after` | `O(i)` |
/// | `erase_after` | `O(i)` |
/// | `merge` | `O(n)` |
/// | `sort_by` | `O(n log n)` |
/// | `reverse` | `O(n)` |
///
/// # Examples
/// ```
/// # use stl_collections::collections::linked::ForwardList;
/// let mut list = ForwardList::new();
/// list.push_front(3);
/// list.push_front(1);
/// list.push_front(2);
/// assert!(list.iter().eq(&[2, 1, 3]));
///
/// list.insert_after(Some(0), 5);
/// assert_eq!(list.erase_after(None), Some(2));
/// assert!(list.iter().eq(&[5, 1, 3]));
/// ```
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

/// A place that a node can be linked after: the before-begin anchor, or a node with its index.
pub(crate) enum Position<T> {
    BeforeBegin,
    Node { node: NodeRef<T>, index: usize },
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> ForwardList<T> {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            head: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(NodeRef::value)
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(NodeRef::value_mut)
    }

    /// Adds an element to the front of the list, directly after the anchor.
    pub fn push_front(&mut self, value: T) {
        self.link_after(Position::BeforeBegin, value);
    }

    /// Removes and returns the first element, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(Position::BeforeBegin)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Inserts `value` after the element at index `after`, or at the front if `after` is [`None`].
    /// Returns a reference to the inserted value.
    ///
    /// # Panics
    /// Panics if `after` is out of bounds.
    pub fn insert_after(&mut self, after: Option<usize>, value: T) -> &mut T {
        self.try_insert_after(after, value).throw()
    }

    /// Inserts `value` after the element at index `after`, or at the front if `after` is [`None`],
    /// returning an [`Err`] if `after` is out of bounds.
    pub fn try_insert_after(
        &mut self,
        after: Option<usize>,
        value: T,
    ) -> Result<&mut T, IndexOutOfBounds> {
        let pos = self.checked_position(after)?;
        Ok(self.link_after(pos, value).value_mut())
    }

    /// Removes and returns the element following the element at index `after`, or the first
    /// element if `after` is [`None`]. Returns [`None`] if there is no such element.
    pub fn erase_after(&mut self, after: Option<usize>) -> Option<T> {
        let pos = self.checked_position(after).ok()?;
        self.unlink_after(pos)
    }

    /// Removes every element, leaving only the anchor.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Swaps the contents of two lists.
    pub fn swap(&mut self, other: &mut ForwardList<T>) {
        mem::swap(self, other);
    }

    /// Merges the nodes of `other` into this list by relinking. Both lists should already be
    /// sorted by `cmp`. When elements compare equal, those from `self` come first. If `cmp` panics,
    /// this list keeps its original order.
    pub fn merge<F>(&mut self, mut other: ForwardList<T>, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let Some(right) = other.chain() else { return };
        let Some(left) = self.chain() else {
            self.swap(&mut other);
            return;
        };

        let len = self.len.checked_add(other.len).ok_or(CapacityOverflow).throw();
        let left_guard = RelinkGuard::new(left);
        let right_guard = RelinkGuard::new(right);
        let merged = chain::merge(left, right, &mut cmp);
        left_guard.disarm();
        right_guard.disarm();

        self.head = Some(merged.head);
        self.len = len;
        // The nodes now belong to self, so other must not free them.
        other.head = None;
        other.len = 0;
    }

    /// Sorts the list with a stable, bottom-up merge sort which relinks nodes instead of moving
    /// values.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if let Some(chain) = self.chain() {
            let guard = RelinkGuard::new(chain);
            let sorted = chain::sort_gap(chain, self.len, &mut cmp);
            guard.disarm();
            self.head = Some(sorted.head);
        }
    }

    /// Sorts the list with a stable natural merge sort over its existing ascending runs. Like
    /// [`ForwardList::sort_by`], a panic in `cmp` leaves the list in its original order.
    pub fn sort_natural_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if let Some(chain) = self.chain() {
            let guard = RelinkGuard::new(chain);
            let sorted = chain::sort_natural(chain, &mut cmp);
            guard.disarm();
            self.head = Some(sorted.head);
        }
    }

    /// Reverses the order of the elements. The nodes are collected into a scratch buffer and their
    /// values exchanged pairwise from both ends, leaving every `next` link untouched.
    ///
    /// # Panics
    /// Panics if the scratch buffer can't be allocated.
    pub fn reverse(&mut self) {
        let nodes: Vector<NodeRef<T>> = self.nodes().collect();

        for (front, back) in nodes.iter().zip(nodes.iter().rev()).take(nodes.len() / 2) {
            mem::swap(front.value_mut(), back.value_mut());
        }
    }

    /// Exchanges the values held at indices `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap_values(&mut self, a: usize, b: usize) {
        self.try_swap_values(a, b).throw()
    }

    pub fn try_swap_values(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        let node_a = self.checked_seek(a)?;
        let node_b = self.checked_seek(b)?;

        if node_a != node_b {
            mem::swap(node_a.value_mut(), node_b.value_mut());
        }
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> ForwardList<T> {
    /// Sorts the list in ascending order. See [`ForwardList::sort_by`].
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }
}

impl<T> ForwardList<T> {
    pub(crate) fn next_of(&self, pos: Position<T>) -> Link<T> {
        match pos {
            Position::BeforeBegin => self.head,
            Position::Node { node, .. } => node.next(),
        }
    }

    fn set_next_of(&mut self, pos: Position<T>, next: Link<T>) {
        match pos {
            Position::BeforeBegin => self.head = next,
            Position::Node { node, .. } => node.set_next(next),
        }
    }

    /// Allocates a node for `value` and links it directly after `pos`.
    ///
    /// # Panics
    /// Panics if the length would overflow.
    pub(crate) fn link_after(&mut self, pos: Position<T>, value: T) -> NodeRef<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            next: self.next_of(pos),
        });
        self.set_next_of(pos, Some(node));
        node
    }

    /// Unlinks the node directly after `pos`, if there is one, then frees it and returns its
    /// value. `pos` must belong to this list.
    pub(crate) fn unlink_after(&mut self, pos: Position<T>) -> Option<T> {
        let node = self.next_of(pos)?;
        self.set_next_of(pos, node.next());
        self.len -= 1;

        // SAFETY: The node is no longer reachable from the list.
        Some(unsafe { node.take_node() }.value)
    }

    /// Resolves the index of a predecessor, where [`None`] is the anchor.
    pub(crate) fn checked_position(
        &self,
        after: Option<usize>,
    ) -> Result<Position<T>, IndexOutOfBounds> {
        Ok(match after {
            None => Position::BeforeBegin,
            Some(index) => Position::Node {
                node: self.checked_seek(index)?,
                index,
            },
        })
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        self.nodes().nth(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Iterates over the node handles in order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = NodeRef<T>> + '_ {
        let mut curr = self.head;
        std::iter::from_fn(move || {
            let node = curr?;
            curr = node.next();
            Some(node)
        })
    }

    /// Returns the whole list as a chain, walking to find the tail.
    fn chain(&self) -> Option<Chain<NodeRef<T>>> {
        let head = self.head?;
        let tail = self.nodes().last().unwrap_or(head);
        Some(Chain { head, tail })
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends every item at the back of the list, in order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut pos = match self.nodes().last() {
            Some(node) => Position::Node {
                node,
                index: self.len - 1,
            },
            None => Position::BeforeBegin,
        };

        for item in iter {
            let node = self.link_after(pos, item);
            pos = Position::Node {
                node,
                index: self.len - 1,
            };
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(node) = curr {
            curr = node.next();
            // SAFETY: Each node is visited once and never touched again after being taken.
            drop(unsafe { node.take_node() });
        }
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a ForwardList<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("ForwardList")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") -> (")
        )
    }
}

// SAFETY: The list uniquely owns its nodes, so it can be sent when T can.
unsafe impl<T: Send> Send for ForwardList<T> {}
// SAFETY: Shared access to the list only ever yields shared references to values.
unsafe impl<T: Sync> Sync for ForwardList<T> {}
