use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::buffer::RawBuffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);

        IntoIter {
            // SAFETY: The Vector is never dropped, so ownership of the buffer moves into the
            // iterator and it is deallocated exactly once.
            buf: unsafe { ptr::read(&vec.buf) },
            start: 0,
            end: vec.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`], moving each value out of the buffer in turn. The
/// buffer is deallocated, and any values not yet yielded dropped, when the iterator is dropped.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    start: usize,
    end: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Slots [start, end) are still initialized and owned by the iterator. The buffer
        // itself is freed when buf is dropped.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is within the initialized range. Incrementing start afterwards means
            // the value is effectively moved off of the heap.
            let value = unsafe { self.buf.ptr.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end still points to an initialized, unread value.
            Some(unsafe { self.buf.ptr.add(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// Borrowed iteration is provided by Deref<Target = [T]>.
