use super::{ForwardList, NodeRef, Position};

/// A mutable cursor over a [`ForwardList`], which only moves forwards. It starts at the
/// before-begin anchor, and edits always apply to the element after it.
///
/// # Examples
/// ```
/// # use stl_collections::collections::linked::ForwardList;
/// let mut list: ForwardList<_> = (1..=6).collect();
/// let mut cursor = list.cursor_mut();
///
/// // Drop every element that follows an odd one.
/// while cursor.move_next() {
///     if cursor.current().is_some_and(|v| v % 2 == 1) {
///         cursor.erase_after();
///     }
/// }
///
/// assert!(list.iter().eq(&[1, 3, 5]));
/// ```
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    pos: Position<T>,
}

impl<T> ForwardList<T> {
    /// Returns a cursor positioned at the before-begin anchor.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            list: self,
            pos: Position::BeforeBegin,
        }
    }
}

impl<T> CursorMut<'_, T> {
    pub const fn is_before_begin(&self) -> bool {
        matches!(self.pos, Position::BeforeBegin)
    }

    /// Returns the index of the current element, or [`None`] at the anchor.
    pub const fn index(&self) -> Option<usize> {
        match self.pos {
            Position::BeforeBegin => None,
            Position::Node { index, .. } => Some(index),
        }
    }

    /// Returns a reference to the current element, or [`None`] at the anchor.
    pub fn current(&self) -> Option<&T> {
        match self.pos {
            Position::BeforeBegin => None,
            Position::Node { node, .. } => Some(node.value()),
        }
    }

    /// Returns a mutable reference to the current element, or [`None`] at the anchor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.pos {
            Position::BeforeBegin => None,
            Position::Node { node, .. } => Some(node.value_mut()),
        }
    }

    /// Returns a reference to the element after the cursor.
    pub fn peek_next(&self) -> Option<&T> {
        self.list.next_of(self.pos).map(NodeRef::value)
    }

    /// Advances to the next element. Returns false, without moving, if there is none.
    pub fn move_next(&mut self) -> bool {
        match self.list.next_of(self.pos) {
            Some(node) => {
                self.pos = Position::Node {
                    node,
                    index: self.index().map_or(0, |index| index + 1),
                };
                true
            },
            None => false,
        }
    }

    /// Inserts `value` directly after the cursor, which doesn't move.
    pub fn insert_after(&mut self, value: T) {
        self.list.link_after(self.pos, value);
    }

    /// Removes and returns the element directly after the cursor, which doesn't move.
    pub fn erase_after(&mut self) -> Option<T> {
        self.list.unlink_after(self.pos)
    }
}
