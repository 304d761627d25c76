use std::fmt::{self, Debug, Formatter};

use super::{LinkedList, NodeRef};
use crate::util::error::IndexOutOfBounds;

/// A mutable cursor over a [`LinkedList`], pointing either at a node or at the end position, a
/// ghost which sits after the tail and before the head.
///
/// Insertion and removal at the cursor are `O(1)`. While the cursor exists it holds the list's
/// mutable borrow, so no other handle can invalidate the node it points to.
///
/// # Examples
/// ```
/// # use stl_collections::collections::linked::LinkedList;
/// let mut list: LinkedList<_> = (1..=5).collect();
/// let mut cursor = list.cursor_front_mut();
///
/// while let Some(&value) = cursor.current() {
///     if value % 2 == 0 {
///         cursor.erase();
///     } else {
///         cursor.insert_before(value * 10);
///         cursor.move_next();
///     }
/// }
///
/// assert!(list.iter().eq(&[10, 1, 30, 3, 50, 5]));
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
    pub(crate) pos: Position<T>,
}

pub(crate) enum Position<T> {
    Node { node: NodeRef<T>, index: usize },
    End,
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> LinkedList<T> {
    /// Returns a cursor pointing at the first element, or at the end position if the list is
    /// empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let pos = match self.head() {
            Some(node) => Position::Node { node, index: 0 },
            None => Position::End,
        };
        CursorMut { list: self, pos }
    }

    /// Returns a cursor pointing at the last element, or at the end position if the list is
    /// empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let pos = match self.tail() {
            Some(node) => Position::Node {
                node,
                index: self.len() - 1,
            },
            None => Position::End,
        };
        CursorMut { list: self, pos }
    }

    /// Returns a cursor pointing at the end position.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            list: self,
            pos: Position::End,
        }
    }

    /// Returns a cursor pointing at the element at `index`, or at the end position if
    /// `index == len`.
    pub fn cursor_at_mut(&mut self, index: usize) -> Result<CursorMut<'_, T>, IndexOutOfBounds> {
        let pos = if index == self.len() {
            Position::End
        } else {
            Position::Node {
                node: self.checked_seek(index)?,
                index,
            }
        };
        Ok(CursorMut { list: self, pos })
    }
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns the index of the current element, or [`None`] at the end position.
    pub const fn index(&self) -> Option<usize> {
        match self.pos {
            Position::Node { index, .. } => Some(index),
            Position::End => None,
        }
    }

    pub const fn is_end(&self) -> bool {
        matches!(self.pos, Position::End)
    }

    /// Returns a reference to the current element, or [`None`] at the end position.
    pub fn current(&self) -> Option<&T> {
        match self.pos {
            Position::Node { node, .. } => Some(node.value()),
            Position::End => None,
        }
    }

    /// Returns a mutable reference to the current element, or [`None`] at the end position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.pos {
            Position::Node { node, .. } => Some(node.value_mut()),
            Position::End => None,
        }
    }

    /// Returns a reference to the element after the current one, without moving.
    pub fn peek_next(&self) -> Option<&T> {
        let next = match self.pos {
            Position::Node { node, .. } => node.next(),
            Position::End => self.list.head(),
        };
        next.map(NodeRef::value)
    }

    /// Returns a reference to the element before the current one, without moving.
    pub fn peek_prev(&self) -> Option<&T> {
        let prev = match self.pos {
            Position::Node { node, .. } => node.prev(),
            Position::End => self.list.tail(),
        };
        prev.map(NodeRef::value)
    }

    /// Moves to the next element. Moving past the tail reaches the end position, and moving from the
    /// end position wraps around to the head.
    pub fn move_next(&mut self) {
        self.pos = match self.pos {
            Position::Node { node, index } => match node.next() {
                Some(next) => Position::Node {
                    node: next,
                    index: index + 1,
                },
                None => Position::End,
            },
            Position::End => match self.list.head() {
                Some(node) => Position::Node { node, index: 0 },
                None => Position::End,
            },
        };
    }

    /// Moves to the previous element. Moving past the head reaches the end position, and moving
    /// from the end position wraps around to the tail.
    pub fn move_prev(&mut self) {
        self.pos = match self.pos {
            Position::Node { node, index } => match node.prev() {
                Some(prev) => Position::Node {
                    node: prev,
                    index: index - 1,
                },
                None => Position::End,
            },
            Position::End => match self.list.tail() {
                Some(node) => Position::Node {
                    node,
                    index: self.list.len() - 1,
                },
                None => Position::End,
            },
        };
    }

    /// Inserts `value` before the current position in `O(1)`. At the end position this appends to
    /// the list. The cursor keeps pointing at the same element.
    pub fn insert_before(&mut self, value: T) {
        match &mut self.pos {
            Position::Node { node, index } => {
                self.list.link_before(Some(*node), value);
                *index += 1;
            },
            Position::End => {
                self.list.link_before(None, value);
            },
        }
    }

    /// Inserts `value` after the current position in `O(1)`. At the end position this prepends to
    /// the list. The cursor keeps pointing at the same element.
    pub fn insert_after(&mut self, value: T) {
        let next = match self.pos {
            Position::Node { node, .. } => node.next(),
            Position::End => self.list.head(),
        };
        self.list.link_before(next, value);
    }

    /// Removes the current element in `O(1)` and returns it, moving the cursor to the following
    /// element (or the end position). Does nothing and returns [`None`] at the end position.
    pub fn erase(&mut self) -> Option<T> {
        let Position::Node { node, index } = self.pos else {
            return None;
        };

        self.pos = match node.next() {
            Some(next) => Position::Node { node: next, index },
            None => Position::End,
        };

        // SAFETY: The cursor only ever points at nodes of its own list.
        Some(unsafe { self.list.unlink(node) })
    }

    /// Returns the underlying list, ending the cursor.
    pub fn into_list(self) -> &'a mut LinkedList<T> {
        self.list
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.current())
            .field("index", &self.index())
            .field("list", &self.list)
            .finish()
    }
}
