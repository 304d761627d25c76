#![warn(missing_docs)]
//! Crate-private helpers: the error taxonomy shared by every collection, [`Result`] extensions and
//! a few types that only exist to make the tests easier to write.

pub mod alloc;
pub mod error;
pub mod panic;
pub mod result;
