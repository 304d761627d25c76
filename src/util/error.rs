use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for the collection and operation in question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The requested capacity can't be represented by a valid memory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator couldn't provide a block of `size` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Failed to allocate {size} bytes!")]
pub struct AllocError {
    /// Bytes requested.
    pub size: usize,
}

/// The operation requires at least one element, but the collection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Operation requires a non-empty collection!")]
pub struct EmptyContainer;

/// The ways that a change in capacity can fail. Either way, the collection is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
#[allow(missing_docs)]
pub enum ReserveError {
    CapacityOverflow(CapacityOverflow),
    AllocError(AllocError),
}

/// Every failure that a [`Vector`](crate::collections::contiguous::Vector) operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
#[allow(missing_docs)]
pub enum VectorError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    AllocError(AllocError),
    EmptyContainer(EmptyContainer),
}

impl From<ReserveError> for VectorError {
    fn from(value: ReserveError) -> Self {
        match value {
            ReserveError::CapacityOverflow(err) => VectorError::CapacityOverflow(err),
            ReserveError::AllocError(err) => VectorError::AllocError(err),
        }
    }
}
