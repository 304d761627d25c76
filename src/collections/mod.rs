//! Generic collection types.
//!
//! # Method
//! [`Vector`](contiguous::Vector) and [`ByteString`](contiguous::ByteString) implement
//! [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which saves me from writing some of the
//! more repetitive functionality. The linked types can't do that, so they carry their own iterators
//! and cursors instead.

pub mod adaptor;
pub mod contiguous;
pub mod linked;
