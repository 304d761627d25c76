//! Collections backed by a single contiguous buffer.
//!
//! [`Vector`] is the core type here, with [`ByteString`] layered on top of a `Vector<u8>`.

mod buffer;
pub mod string;
pub mod vector;

#[doc(inline)]
pub use string::ByteString;
#[doc(inline)]
pub use vector::{ReserveError, Vector, VectorConfig, VectorError};
