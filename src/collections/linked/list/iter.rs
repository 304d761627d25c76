use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedList, Link};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator over a [`LinkedList`], popping values from either end.
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// The unvisited span of a list, from `front` to `back` inclusive. `remaining` is tracked instead
/// of comparing the ends, so the two ends can never cross.
struct Span<T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
}

impl<T> Span<T> {
    fn of(list: &LinkedList<T>) -> Span<T> {
        Span {
            front: list.head(),
            back: list.tail(),
            remaining: list.len(),
        }
    }

    fn next_front(&mut self) -> Link<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        self.front = node.next();
        Some(node)
    }

    fn next_back(&mut self) -> Link<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        self.back = node.prev();
        Some(node)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            span: Span::of(self),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over the values of a [`LinkedList`].
pub struct Iter<'a, T> {
    span: Span<T>,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.span.next_front().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.span.next_back().map(|node| node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            span: Span {
                front: self.span.front,
                back: self.span.back,
                remaining: self.span.remaining,
            },
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            span: Span::of(self),
            _phantom: PhantomData,
        }
    }
}

/// A mutable borrowed iterator over the values of a [`LinkedList`]. Each node is yielded at most
/// once, so the mutable references never alias.
pub struct IterMut<'a, T> {
    span: Span<T>,
    _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.span.next_front().map(|node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.span.next_back().map(|node| node.value_mut())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
