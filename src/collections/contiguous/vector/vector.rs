use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Range};
use std::ptr;
use std::slice;

use super::VectorConfig;
use crate::collections::contiguous::buffer::RawBuffer;
#[doc(inline)]
pub use crate::util::error::{
    AllocError, CapacityOverflow, EmptyContainer, IndexOutOfBounds, ReserveError, VectorError,
};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

/// A variable size contiguous collection, which owns a single buffer of `T`.
///
/// Every accessor hands out a borrow of the Vector itself, so no reference to an element can be
/// held across an operation that might move the buffer (any insertion, removal or change in
/// capacity). This is the Rust rendition of "all element addresses are invalidated by growth".
///
/// The capacity is only ever changed implicitly when growing: when a Vector is full, the capacity
/// is multiplied by the configured growth factor (see [`VectorConfig`]). Shrinking only happens
/// through [`shrink_to_fit`](Vector::shrink_to_fit).
///
/// Every fallible operation has a `try_*` form, which returns a [`VectorError`] and leaves the
/// Vector untouched on failure, and a panicking form for convenience.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being inserted or removed at once.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `erase` | `O(n-i)` |
/// | `erase_range` | `O(n-i)` |
/// | `insert_copied` | `O(n-i+m)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `resize` | `O(m)`, `O(n+m)` |
/// | `swap` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the requested size already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
    pub(crate) config: VectorConfig,
}

impl<T> Vector<T> {
    /// Creates a new, empty Vector using the default [`VectorConfig`], allocating room for 16
    /// elements up front.
    ///
    /// # Panics
    /// Panics if the initial allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 16);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_config(VectorConfig::new())
    }

    /// Creates a new, empty Vector using the default [`VectorConfig`], returning an [`Err`] if the
    /// initial allocation can't be made.
    pub fn try_new() -> Result<Vector<T>, ReserveError> {
        Vector::try_with_config(VectorConfig::new())
    }

    /// Creates a new, empty Vector, allocating `config.initial_cap()` elements up front.
    ///
    /// # Panics
    /// Panics if the initial allocation fails.
    pub fn with_config(config: VectorConfig) -> Vector<T> {
        Vector::try_with_config(config).throw()
    }

    /// Creates a new, empty Vector, allocating `config.initial_cap()` elements up front and
    /// returning an [`Err`] if that isn't possible.
    pub fn try_with_config(config: VectorConfig) -> Result<Vector<T>, ReserveError> {
        Ok(Vector {
            buf: RawBuffer::try_with_cap(config.initial_cap())?,
            len: 0,
            config,
        })
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if the allocation fails or its size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::try_with_cap(cap).throw()
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, returning an
    /// [`Err`] if the allocation can't be made.
    pub fn try_with_cap(cap: usize) -> Result<Vector<T>, ReserveError> {
        Ok(Vector {
            buf: RawBuffer::try_with_cap(cap)?,
            len: 0,
            config: VectorConfig::new(),
        })
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value last
    /// requested by construction, growth or one of the capacity manipulation methods.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the configuration this Vector grows with.
    pub const fn config(&self) -> VectorConfig {
        self.config
    }

    /// Returns a slice over the initialized elements, the direct view of the underlying storage.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Returns a mutable slice over the initialized elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::Vector;
    /// let vec = Vector::from([10, 20, 30]);
    /// assert_eq!(vec.at(1), Ok(&20));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the slot is initialized.
        Ok(unsafe { self.buf.ptr.add(index).as_ref() })
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the slot is initialized. The borrow is tied to &mut self.
        Ok(unsafe { self.buf.ptr.add(index).as_mut() })
    }

    /// Returns a reference to the first element, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.at(0).ok()
    }

    /// Returns a mutable reference to the first element, if there is one.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.at_mut(0).ok()
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.at(last).ok())
    }

    /// Returns a mutable reference to the last element, if there is one.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.at_mut(last).ok(),
            None => None,
        }
    }

    /// Push the provided value onto the end of the Vector, growing the capacity if required.
    ///
    /// # Panics
    /// Panics if the Vector needs to grow and the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Push the provided value onto the end of the Vector, returning an [`Err`] without modifying
    /// the Vector if it needed to grow and couldn't.
    pub fn try_push(&mut self, value: T) -> Result<(), ReserveError> {
        self.try_grow_for(1)?;
        // SAFETY: There is capacity for at least one more element at index len.
        unsafe { self.buf.ptr.add(self.len).write(value); }
        self.len += 1;
        Ok(())
    }

    /// Pops the last value off the end of the Vector, returning it if the Vector isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so that the value is no longer considered owned.
            self.len -= 1;

            // SAFETY: The slot at the old last index is initialized and is forgotten by the Vector
            // now that len has been decremented.
            Some(unsafe { self.buf.ptr.add(self.len).read() })
        }
    }

    /// Inserts the provided value before the element currently at `index`, moving all following
    /// elements one slot to the right. `index == len` appends. Returns a reference to the inserted
    /// value.
    ///
    /// # Panics
    /// Panics if `index > len` or if growing fails.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value before the element currently at `index`, returning an [`Err`]
    /// without modifying the Vector if `index > len` or growing fails.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, VectorError> {
        self.check_position(index)?;
        self.try_grow_for(1)?;

        // SAFETY: index <= len < cap. The shifted region [index, len) moves to [index + 1, len + 1)
        // which is within the allocation. ptr::copy handles the overlap.
        unsafe {
            let slot = self.buf.ptr.add(index).as_ptr();
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
            self.len += 1;
            Ok(&mut *slot)
        }
    }

    /// Inserts copies of all `items` before the element currently at `index`, shifting the tail
    /// once rather than once per item.
    ///
    /// # Panics
    /// Panics if `index > len` or if growing fails.
    pub fn insert_copied(&mut self, index: usize, items: &[T])
    where
        T: Copy,
    {
        self.try_insert_copied(index, items).throw()
    }

    /// Inserts copies of all `items` before the element currently at `index`, returning an [`Err`]
    /// without modifying the Vector if `index > len` or growing fails.
    pub fn try_insert_copied(&mut self, index: usize, items: &[T]) -> Result<(), VectorError>
    where
        T: Copy,
    {
        self.check_position(index)?;
        self.try_grow_for(items.len())?;

        // SAFETY: There is capacity for items.len() more elements. The tail [index, len) moves to
        // [index + m, len + m), then the gap is filled with bitwise copies of T: Copy values,
        // which can't alias the Vector's own buffer while it is mutably borrowed.
        unsafe {
            let slot = self.buf.ptr.add(index).as_ptr();
            ptr::copy(slot, slot.add(items.len()), self.len - index);
            ptr::copy_nonoverlapping(items.as_ptr(), slot, items.len());
        }
        self.len += items.len();
        Ok(())
    }

    /// Removes and returns the element at `index`, moving all following values left to fill the
    /// gap.
    ///
    /// # Panics
    /// Panics if the Vector is empty or `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.erase(1), 'e');
    /// assert_eq!(vec.erase(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn erase(&mut self, index: usize) -> T {
        self.try_erase(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] if the Vector is empty or
    /// `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::vector::{EmptyContainer, Vector, VectorError};
    /// let mut vec = Vector::<u8>::new();
    /// assert_eq!(vec.try_erase(0), Err(VectorError::EmptyContainer(EmptyContainer)));
    ///
    /// vec.push(7);
    /// match vec.try_erase(3) {
    ///     Err(VectorError::IndexOutOfBounds(err)) => assert_eq!((err.index, err.len), (3, 1)),
    ///     other => panic!("unexpected result: {other:?}"),
    /// }
    /// ```
    pub fn try_erase(&mut self, index: usize) -> Result<T, VectorError> {
        if self.len == 0 {
            Err(EmptyContainer)?
        }
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized. The value is read out before the tail
        // (len - index - 1 elements, all initialized) is moved left over it.
        let value = unsafe {
            let slot = self.buf.ptr.add(index).as_ptr();
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Drops all elements within `range` and moves the following elements left to fill the gap.
    ///
    /// # Panics
    /// Panics if the range is reversed or extends past `len`.
    pub fn erase_range(&mut self, range: Range<usize>) {
        self.try_erase_range(range).throw()
    }

    /// Drops all elements within `range` and moves the following elements left to fill the gap,
    /// returning an [`Err`] if the range is reversed or extends past `len`.
    pub fn try_erase_range(&mut self, range: Range<usize>) -> Result<(), VectorError> {
        let Range { start, end } = range;
        if start > end || end > self.len {
            Err(IndexOutOfBounds {
                index: cmp::max(start, end),
                len: self.len,
            })?
        }

        let old_len = self.len;
        // Forget everything from start onward while dropping, in case a drop panics.
        self.len = start;

        // SAFETY: [start, end) is initialized and dropped exactly once, then the initialized tail
        // [end, old_len) is moved into its place.
        unsafe {
            let base = self.buf.ptr.as_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));
            ptr::copy(base.add(end), base.add(start), old_len - end);
        }

        self.len = old_len - (end - start);
        Ok(())
    }

    /// Ensures that the capacity is at least `cap`. Never shrinks the Vector.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn reserve(&mut self, cap: usize) {
        self.try_reserve(cap).throw()
    }

    /// Ensures that the capacity is at least `cap`, returning an [`Err`] without modifying the
    /// Vector if the allocation fails.
    pub fn try_reserve(&mut self, cap: usize) -> Result<(), ReserveError> {
        if cap <= self.cap() {
            return Ok(());
        }
        self.buf.try_realloc(cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Panics
    /// Panics if the reallocation fails.
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().throw()
    }

    /// Shrinks the Vector so that its capacity is equal to its length, returning an [`Err`]
    /// without modifying the Vector if the reallocation fails.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), ReserveError> {
        self.buf.try_realloc(self.len)
    }

    /// Drops every element past `len`, keeping the capacity as it is.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let tail = self.len - len;
        self.len = len;

        // SAFETY: The elements [len, len + tail) were initialized and are now forgotten by the
        // Vector, so they are dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.add(len).as_ptr(),
                tail,
            ));
        }
    }

    /// Drops every element. The capacity is left unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Swaps the entire contents (buffer, length and configuration) of two Vectors. No elements are
    /// moved.
    pub fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Grows the buffer, if required, so that `extra` more elements fit. Grows by the configured
    /// factor, repeatedly if needed, rather than to the exact size.
    pub(crate) fn try_grow_for(&mut self, extra: usize) -> Result<(), ReserveError> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        if required <= self.cap() {
            return Ok(());
        }

        let mut new_cap = match self.cap() {
            0 => cmp::max(self.config.initial_cap(), MIN_CAP),
            cap => cap.checked_mul(self.config.growth_factor()).ok_or(CapacityOverflow)?,
        };
        while new_cap < required {
            new_cap = new_cap.checked_mul(self.config.growth_factor()).ok_or(CapacityOverflow)?;
        }

        self.buf.try_realloc(new_cap)
    }

    /// Checks that the provided index refers to an element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that the provided index is a valid insertion point, `[0, len]`.
    pub(crate) const fn check_position(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: Default> Vector<T> {
    /// Changes the length of the Vector to `len`, filling new slots with the default value of `T`
    /// ("zero-filled") or dropping surplus elements. The capacity is never reduced.
    ///
    /// # Panics
    /// Panics if growing fails.
    ///
    /// # Examples
    /// ```
    /// # use stl_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1_u32, 2]);
    /// vec.resize(4);
    /// assert_eq!(&*vec, &[1, 2, 0, 0]);
    /// vec.resize(1);
    /// assert_eq!(&*vec, &[1]);
    /// ```
    pub fn resize(&mut self, len: usize) {
        self.try_resize(len).throw()
    }

    /// Changes the length of the Vector to `len`, returning an [`Err`] without modifying the Vector
    /// if growing fails.
    pub fn try_resize(&mut self, len: usize) -> Result<(), ReserveError> {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }

        self.try_reserve(len)?;
        while self.len < len {
            // SAFETY: The capacity is at least len, so the slot exists and is uninitialized.
            unsafe { self.buf.ptr.add(self.len).write(T::default()); }
            self.len += 1;
        }
        Ok(())
    }
}

impl<T: Clone> Vector<T> {
    /// Appends a clone of every element of `items`.
    ///
    /// # Panics
    /// Panics if growing fails.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        self.try_grow_for(items.len()).throw();
        for item in items {
            self.push(item.clone());
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::new();
        vec.reserve(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop. The buffer itself is
        // deallocated when self.buf is dropped afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len));
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned (dangling only when nothing is read through it). The
        // borrow checker enforces that self isn't mutated while the slice lives.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the &mut self borrow guarantees unique access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Creates a deep copy with the same capacity and configuration. Mutating the copy never
    /// affects the original.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.cap());
        vec.config = self.config;

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
