use std::iter::Rev;

use crate::collections::linked::LinkedList;
use crate::collections::linked::list::IntoIter;

/// A last-in first-out stack, restricting a [`LinkedList`] to its tail.
///
/// # Examples
/// ```
/// # use stl_collections::collections::adaptor::Stack;
/// let mut stack: Stack<_> = (0..3).collect();
/// stack.push(3);
///
/// assert_eq!(stack.top(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert!(stack.into_iter().eq([2, 1, 0]));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` on to the top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the most recently pushed value.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    pub fn top(&self) -> Option<&T> {
        self.list.back()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn swap(&mut self, other: &mut Stack<T>) {
        self.list.swap(&mut other.list);
    }
}

/// The list's tail becomes the top of the stack.
impl<T> From<LinkedList<T>> for Stack<T> {
    fn from(list: LinkedList<T>) -> Self {
        Stack { list }
    }
}

impl<T> From<Stack<T>> for LinkedList<T> {
    fn from(stack: Stack<T>) -> Self {
        stack.list
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

/// Yields values in the order they would be popped.
impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = Rev<IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter().rev()
    }
}
