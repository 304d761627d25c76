use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Link, Node, NodeRef, ONE};
use crate::collections::contiguous::Vector;
use crate::collections::linked::chain::{self, Chain, RelinkGuard};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`CursorMut`](super::CursorMut) for `O(1)`
/// insertion and removal at a node.
///
/// Nodes are allocated individually and never move while linked, so a node's position can be held
/// by a cursor across insertions and removals elsewhere in the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `erase` | `O(min(i, n-i))` |
/// | `merge` | `O(n)` |
/// | `sort_by` | `O(n log n)`, `O(n)` when sorted |
/// | `sort_natural_by` | `O(n log n)`, `O(n)` when sorted |
/// | `reverse` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, because all `O(i)`
/// or `O(n)` operations will consist primarily of cache misses. [`Vector`] should be preferred for
/// most applications unless the cursor's `O(1)` methods are being heavily utilized.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Empty
    }
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head().map(NodeRef::value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head().map(NodeRef::value_mut)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail().map(NodeRef::value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail().map(NodeRef::value_mut)
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        let head = self.head();
        self.link_before(head, value);
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head()?;
        // SAFETY: The head is a node of this list.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail()?;
        // SAFETY: The tail is a node of this list.
        Some(unsafe { self.unlink(tail) })
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements back by one. An
    /// `index` equal to the length appends. Returns a reference to the inserted value.
    ///
    /// The position is found by walking from whichever end of the list is closer.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 3].into_iter().collect();
    /// list.insert(1, 2);
    /// list.insert(3, 4);
    /// assert!(list.iter().eq(&[1, 2, 3, 4]));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len();
        let next = match index {
            i if i == len => None,
            i if i < len => Some(self.checked_seek(i)?),
            _ => Err(IndexOutOfBounds { index, len })?,
        };

        Ok(self.link_before(next, value).value_mut())
    }

    /// Removes and returns the element at `index`. Returns [`None`] if the list is empty or the
    /// index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (0..4).collect();
    /// assert_eq!(list.erase(1), Some(1));
    /// assert_eq!(list.erase(3), None);
    /// assert!(list.iter().eq(&[0, 2, 3]));
    /// ```
    pub fn erase(&mut self, index: usize) -> Option<T> {
        let node = self.checked_seek(index).ok()?;
        // SAFETY: The node was found by walking this list.
        Some(unsafe { self.unlink(node) })
    }

    /// Removes every element, leaving the list empty.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Swaps the contents of two lists. No nodes are touched.
    pub fn swap(&mut self, other: &mut LinkedList<T>) {
        mem::swap(self, other);
    }

    /// Merges the nodes of `other` into this list, relinking rather than reallocating. Both lists
    /// should already be sorted by `cmp`, in which case the result is too. When elements compare
    /// equal, those from `self` come first.
    ///
    /// If `cmp` panics, this list keeps its original order and `other` is dropped whole.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::linked::LinkedList;
    /// let mut a: LinkedList<_> = [1, 4, 6].into_iter().collect();
    /// let b: LinkedList<_> = [2, 4, 5].into_iter().collect();
    /// a.merge(b, i32::cmp);
    /// assert!(a.iter().eq(&[1, 2, 4, 4, 5, 6]));
    /// ```
    pub fn merge<F>(&mut self, mut other: LinkedList<T>, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.is_empty() {
            mem::swap(self, &mut other);
            return;
        }
        let (Full(contents), Full(other_contents)) = (&mut self.state, &other.state) else {
            return;
        };

        let len = contents.len
            .checked_add(other_contents.len.get())
            .ok_or(CapacityOverflow)
            .throw();

        let left = RelinkGuard::new(contents.chain());
        let right = RelinkGuard::new(other_contents.chain());
        let merged = chain::merge(contents.chain(), other_contents.chain(), &mut cmp);
        left.disarm();
        right.disarm();

        contents.head = merged.head;
        contents.len = len;
        contents.rebuild_prev_links();
        // The nodes now belong to self, so other must not free them.
        other.state = Empty;
    }

    /// Sorts the list with a stable, bottom-up merge sort which relinks nodes instead of moving
    /// values. A list which is already sorted costs `O(n)` comparisons. If `cmp` panics, the list
    /// is left in its original order.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [5, 1, 4, 2, 3].into_iter().collect();
    /// list.sort_by(|a: &i32, b: &i32| b.cmp(a));
    /// assert!(list.iter().eq(&[5, 4, 3, 2, 1]));
    /// ```
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if let Full(contents) = &mut self.state {
            let guard = RelinkGuard::new(contents.chain());
            let sorted = chain::sort_gap(contents.chain(), contents.len.get(), &mut cmp);
            guard.disarm();
            contents.head = sorted.head;
            contents.rebuild_prev_links();
        }
    }

    /// Sorts the list with a stable natural merge sort, which merges the list's existing ascending
    /// runs. Cheap for input which is already mostly sorted, costing `O(n)` comparisons when fully
    /// sorted.
    pub fn sort_natural_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if let Full(contents) = &mut self.state {
            let guard = RelinkGuard::new(contents.chain());
            let sorted = chain::sort_natural(contents.chain(), &mut cmp);
            guard.disarm();
            contents.head = sorted.head;
            contents.rebuild_prev_links();
        }
    }

    /// Reverses the order of the elements by exchanging values between nodes from both ends
    /// inwards. The nodes themselves stay where they are.
    pub fn reverse(&mut self) {
        let (mut front, mut back) = match &self.state {
            Empty => return,
            Full(contents) => (contents.head, contents.tail),
        };

        for _ in 0..self.len() / 2 {
            mem::swap(front.value_mut(), back.value_mut());
            // Both ends are still short of the middle, so neither link is None.
            match (front.next(), back.prev()) {
                (Some(next), Some(prev)) => {
                    front = next;
                    back = prev;
                },
                _ => break,
            }
        }
    }

    /// Exchanges the values held at indices `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap_values(&mut self, a: usize, b: usize) {
        self.try_swap_values(a, b).throw()
    }

    /// Exchanges the values held at indices `a` and `b`, returning an [`Err`] if either index is out
    /// of bounds.
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

impl<T: Ord> LinkedList<T> {
    /// Sorts the list in ascending order. See [`LinkedList::sort_by`].
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn head(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head),
        }
    }

    pub(crate) const fn tail(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail),
        }
    }

    /// Allocates a node for `value` and links it in front of `next`, or at the back of the list if
    /// `next` is [`None`].
    ///
    /// # Panics
    /// Panics if the length would overflow.
    pub(crate) fn link_before(&mut self, next: Link<T>, value: T) -> NodeRef<T> {
        match &mut self.state {
            Empty => {
                let node = NodeRef::from_node(Node {
                    value,
                    prev: None,
                    next: None,
                });
                self.state = Full(ListContents {
                    len: ONE,
                    head: node,
                    tail: node,
                });
                node
            },
            Full(contents) => {
                let len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
                let prev = match next {
                    Some(next) => next.prev(),
                    None => Some(contents.tail),
                };

                let node = NodeRef::from_node(Node { value, prev, next });

                match prev {
                    Some(prev) => prev.set_next(Some(node)),
                    None => contents.head = node,
                }
                match next {
                    Some(next) => next.set_prev(Some(node)),
                    None => contents.tail = node,
                }

                contents.len = len;
                node
            },
        }
    }

    /// Unlinks `node` from its neighbours, updating the head, tail and length, and only then frees
    /// it, returning its value.
    ///
    /// # Safety
    /// `node` must currently be linked into this list.
    pub(crate) unsafe fn unlink(&mut self, node: NodeRef<T>) -> T {
        if let Full(contents) = &mut self.state {
            match contents.len.checked_sub(1) {
                Some(len) => {
                    let (prev, next) = (node.prev(), node.next());

                    match prev {
                        Some(prev) => prev.set_next(next),
                        None => if let Some(next) = next { contents.head = next },
                    }
                    match next {
                        Some(next) => next.set_prev(prev),
                        None => if let Some(prev) = prev { contents.tail = prev },
                    }

                    contents.len = len;
                },
                None => self.state = Empty,
            }
        }

        // SAFETY: The node is no longer reachable from the list.
        unsafe { node.take_node() }.value
    }

    /// Finds the node at `index`, walking from whichever end is closer.
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.head();

        while let Some(node) = curr {
            assert!(node.prev() == prev, "Each node's prev should point to the node before it.");
            prev = Some(node);
            curr = node.next();
            count += 1;
        }

        assert!(prev == self.tail(), "The last node reached should be the tail.");
        assert_eq!(count, self.len(), "The number of linked nodes should match the length.");
    }
}

impl<T> ListContents<T> {
    pub fn chain(&self) -> Chain<NodeRef<T>> {
        Chain {
            head: self.head,
            tail: self.tail,
        }
    }

    /// Walks the `next` links from the head, restoring every `prev` link and the tail.
    pub fn rebuild_prev_links(&mut self) {
        let mut prev = None;
        let mut curr = Some(self.head);

        while let Some(node) = curr {
            node.set_prev(prev);
            prev = Some(node);
            curr = node.next();
        }

        if let Some(tail) = prev {
            self.tail = tail;
        }
    }

    pub fn seek(&self, index: usize) -> NodeRef<T> {
        let mut node;
        if index <= self.len.get() / 2 {
            node = self.head;
            for _ in 0..index {
                // The index is in bounds, so the walk never runs off the end.
                let Some(next) = node.next() else { break };
                node = next;
            }
        } else {
            node = self.tail;
            for _ in index..self.len.last_index() {
                let Some(prev) = node.prev() else { break };
                node = prev;
            }
        }
        node
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head();
        while let Some(node) = curr {
            curr = node.next();
            // SAFETY: Each node is visited once and never touched again after being taken.
            drop(unsafe { node.take_node() });
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Creates a deep copy of the list, with new nodes holding clones of each value in order.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a LinkedList<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("LinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
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
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access to the list only ever yields shared references to values.
unsafe impl<T: Sync> Sync for LinkedList<T> {}
