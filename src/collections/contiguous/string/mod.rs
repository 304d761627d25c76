//! A byte string built on [`Vector<u8>`](super::Vector).

mod byte_string;
mod tests;

pub use byte_string::*;
