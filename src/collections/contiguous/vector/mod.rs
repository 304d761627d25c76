//! A module containing [`Vector`] and associated types.
//!
//! Along with the Vector itself, this module holds its [`VectorConfig`] and [`IntoIter`] for owned
//! iteration. [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`]
//! are used for borrowed iteration.
//!
//! [`Vector`] and [`VectorConfig`] are also re-exported under the parent module.

mod config;
mod iter;
mod tests;
mod vector;

pub use config::*;
pub use iter::*;
pub use vector::*;
