use std::iter::Rev;

use crate::collections::linked::LinkedList;
use crate::collections::linked::list::IntoIter;

/// A first-in first-out queue over a [`LinkedList`]. Values enter at the list's head and leave
/// from its tail, so the oldest value is always at the back of the list.
///
/// # Examples
/// ```
/// # use stl_collections::collections::adaptor::Queue;
/// let mut queue = Queue::new();
/// queue.push('a');
/// queue.push('b');
///
/// assert_eq!(queue.front(), Some(&'a'));
/// assert_eq!(queue.back(), Some(&'b'));
/// assert_eq!(queue.pop(), Some('a'));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` as the newest element of the queue.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the oldest element of the queue.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Returns the oldest element, which is next to be popped.
    pub fn front(&self) -> Option<&T> {
        self.list.back()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    /// Returns the newest element.
    pub fn back(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn swap(&mut self, other: &mut Queue<T>) {
        self.list.swap(&mut other.list);
    }
}

/// The list's tail becomes the front of the queue.
impl<T> From<LinkedList<T>> for Queue<T> {
    fn from(list: LinkedList<T>) -> Self {
        Queue { list }
    }
}

impl<T> From<Queue<T>> for LinkedList<T> {
    fn from(queue: Queue<T>) -> Self {
        queue.list
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Yields values in the order they would be popped.
impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = Rev<IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter().rev()
    }
}
