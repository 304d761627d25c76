use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::{Vector, VectorConfig};
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, ReserveError, VectorError};
use crate::util::result::ResultExtension;

/// A growable string of raw bytes, stored in a [`Vector<u8>`] and sharing its growth policy.
///
/// No encoding is assumed or validated. [`Display`] renders the bytes as lossy UTF-8. Positions
/// are byte offsets, and ranges are given as a start position plus a count, with the count clamped
/// to the end of the string.
///
/// # Examples
/// ```
/// # use stl_collections::collections::contiguous::ByteString;
/// let mut s = ByteString::from("hello");
/// s.append_bytes(b" world");
/// s.replace(0, 5, b"goodbye");
/// assert_eq!(s.as_bytes(), b"goodbye world");
/// assert_eq!(s.substr(8, 100).as_bytes(), b"world");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteString {
    vec: Vector<u8>,
}

impl ByteString {
    /// Creates a new, empty ByteString with the default [`VectorConfig`].
    ///
    /// # Panics
    /// Panics if the initial allocation fails.
    pub fn new() -> ByteString {
        ByteString { vec: Vector::new() }
    }

    /// Creates a new, empty ByteString that allocates and grows according to `config`.
    ///
    /// # Panics
    /// Panics if the initial allocation fails.
    pub fn with_config(config: VectorConfig) -> ByteString {
        ByteString::try_with_config(config).throw()
    }

    pub fn try_with_config(config: VectorConfig) -> Result<ByteString, ReserveError> {
        Ok(ByteString {
            vec: Vector::try_with_config(config)?,
        })
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.vec.cap()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.vec
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.vec
    }

    /// Returns the byte at `pos`, or an [`Err`] if `pos >= len`.
    pub fn at(&self, pos: usize) -> Result<u8, IndexOutOfBounds> {
        self.vec.at(pos).copied()
    }

    pub fn front(&self) -> Option<u8> {
        self.vec.front().copied()
    }

    pub fn back(&self) -> Option<u8> {
        self.vec.back().copied()
    }

    /// Ensures that the capacity is at least `cap` bytes.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn reserve(&mut self, cap: usize) {
        self.vec.reserve(cap);
    }

    pub fn try_reserve(&mut self, cap: usize) -> Result<(), ReserveError> {
        self.vec.try_reserve(cap)
    }

    /// Reduces the capacity to the current length.
    ///
    /// # Panics
    /// Panics if the reallocation fails.
    pub fn shrink_to_fit(&mut self) {
        self.vec.shrink_to_fit();
    }

    pub fn try_shrink_to_fit(&mut self) -> Result<(), ReserveError> {
        self.vec.try_shrink_to_fit()
    }

    pub fn clear(&mut self) {
        self.vec.clear();
    }

    /// Inserts `count` copies of `byte` before `pos`.
    ///
    /// # Panics
    /// Panics if `pos > len` or if growing fails.
    pub fn insert(&mut self, pos: usize, byte: u8, count: usize) {
        self.try_insert(pos, byte, count).throw()
    }

    pub fn try_insert(&mut self, pos: usize, byte: u8, count: usize) -> Result<(), VectorError> {
        self.vec.check_position(pos)?;
        self.vec.try_grow_for(count)?;

        // The capacity is already there, so extend can't reallocate.
        self.vec.extend(iter::repeat(byte).take(count));
        self.vec[pos..].rotate_right(count);
        Ok(())
    }

    /// Inserts a copy of `bytes` before `pos`.
    ///
    /// # Panics
    /// Panics if `pos > len` or if growing fails.
    pub fn insert_bytes(&mut self, pos: usize, bytes: &[u8]) {
        self.try_insert_bytes(pos, bytes).throw()
    }

    pub fn try_insert_bytes(&mut self, pos: usize, bytes: &[u8]) -> Result<(), VectorError> {
        self.vec.try_insert_copied(pos, bytes)
    }

    /// Removes up to `count` bytes starting at `pos`. The count is clamped to the end of the
    /// string.
    ///
    /// # Panics
    /// Panics if `pos > len`.
    pub fn erase(&mut self, pos: usize, count: usize) {
        self.try_erase(pos, count).throw()
    }

    pub fn try_erase(&mut self, pos: usize, count: usize) -> Result<(), VectorError> {
        let end = self.clamped_end(pos, count)?;
        self.vec.try_erase_range(pos..end)
    }

    /// Appends a single byte.
    ///
    /// # Panics
    /// Panics if growing fails.
    pub fn push(&mut self, byte: u8) {
        self.vec.push(byte);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.vec.pop()
    }

    /// Appends `count` copies of `byte`.
    ///
    /// # Panics
    /// Panics if growing fails.
    pub fn append(&mut self, byte: u8, count: usize) {
        self.insert(self.len(), byte, count);
    }

    /// Appends a copy of `bytes`.
    ///
    /// # Panics
    /// Panics if growing fails.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.insert_bytes(self.len(), bytes);
    }

    /// Replaces up to `count` bytes starting at `pos` with `bytes`. The count is clamped to the end
    /// of the string, and the replacement may be longer or shorter than the replaced region.
    ///
    /// # Panics
    /// Panics if `pos > len` or if growing fails.
    pub fn replace(&mut self, pos: usize, count: usize, bytes: &[u8]) {
        self.try_replace(pos, count, bytes).throw()
    }

    pub fn try_replace(&mut self, pos: usize, count: usize, bytes: &[u8]) -> Result<(), VectorError> {
        let end = self.clamped_end(pos, count)?;
        // Grow before erasing, so that a failure leaves the string untouched.
        self.vec.try_grow_for(bytes.len().saturating_sub(end - pos))?;

        self.vec.try_erase_range(pos..end)?;
        self.vec.try_insert_copied(pos, bytes)
    }

    /// Returns a new ByteString holding up to `count` bytes starting at `pos`.
    ///
    /// # Panics
    /// Panics if `pos > len`.
    pub fn substr(&self, pos: usize, count: usize) -> ByteString {
        self.try_substr(pos, count).throw()
    }

    pub fn try_substr(&self, pos: usize, count: usize) -> Result<ByteString, IndexOutOfBounds> {
        let end = self.clamped_end(pos, count)?;
        Ok(ByteString::from(&self.vec[pos..end]))
    }

    /// Copies bytes starting at `pos` into `dest`, as many as fit. Returns the number of bytes
    /// copied.
    ///
    /// # Panics
    /// Panics if `pos > len`.
    pub fn copy_to(&self, dest: &mut [u8], pos: usize) -> usize {
        self.try_copy_to(dest, pos).throw()
    }

    pub fn try_copy_to(&self, dest: &mut [u8], pos: usize) -> Result<usize, IndexOutOfBounds> {
        let end = self.clamped_end(pos, dest.len())?;
        let count = end - pos;
        dest[..count].copy_from_slice(&self.vec[pos..end]);
        Ok(count)
    }

    /// Changes the length to `len`, appending zero bytes or truncating.
    ///
    /// # Panics
    /// Panics if growing fails.
    pub fn resize(&mut self, len: usize) {
        self.vec.resize(len);
    }

    pub fn try_resize(&mut self, len: usize) -> Result<(), ReserveError> {
        self.vec.try_resize(len)
    }

    pub fn swap(&mut self, other: &mut ByteString) {
        self.vec.swap(&mut other.vec);
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.vec.starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        self.vec.ends_with(suffix)
    }

    /// Validates `pos` as a position and clamps `pos + count` to the length.
    fn clamped_end(&self, pos: usize, count: usize) -> Result<usize, IndexOutOfBounds> {
        self.vec.check_position(pos)?;
        Ok(cmp::min(self.len(), pos.saturating_add(count)))
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        let mut string = ByteString::new();
        string.append_bytes(value);
        string
    }
}

impl From<&str> for ByteString {
    fn from(value: &str) -> Self {
        ByteString::from(value.as_bytes())
    }
}

impl From<Vector<u8>> for ByteString {
    fn from(value: Vector<u8>) -> Self {
        ByteString { vec: value }
    }
}

impl From<ByteString> for Vector<u8> {
    fn from(value: ByteString) -> Self {
        value.vec
    }
}

impl FromIterator<u8> for ByteString {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        ByteString {
            vec: iter.into_iter().collect(),
        }
    }
}

impl Extend<u8> for ByteString {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.vec.extend(iter);
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl DerefMut for ByteString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        self
    }
}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    /// Lexicographic byte comparison, where a proper prefix orders first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Display for ByteString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self))
    }
}

impl Debug for ByteString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteString")
            .field("contents", &String::from_utf8_lossy(self))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
