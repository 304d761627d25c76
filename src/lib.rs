//! Generic containers and comparison-based algorithms.
//!
//! # Contents
//! - [`Vector`](collections::contiguous::Vector): a growable array with a configurable growth
//!   policy, and [`ByteString`](collections::contiguous::ByteString) layered on top of it.
//! - [`LinkedList`](collections::linked::LinkedList) and
//!   [`ForwardList`](collections::linked::ForwardList), whose nodes never move while linked, with
//!   cursors for `O(1)` edits at a node and an in-place merge sort.
//! - [`Stack`](collections::adaptor::Stack) and [`Queue`](collections::adaptor::Queue), restricted
//!   views over a linked list.
//! - [`algorithm`]: slice sorts, binary search and the comparators they all share.
//!
//! # Error Handling
//! It is more ergonomic for most methods to panic on misuse, because users don't want to be forced
//! to handle an error every time they invoke a method. Imagine having to handle the possibility of
//! a capacity overflow every time you push into a Vector. So every fallible operation comes in two
//! forms: `try_*`, which returns a [`Result`], and a plain form that panics with the error's
//! message, documented under `# Panics`. Accessors that can only fail by the element not existing
//! return an [`Option`] instead.
//!
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] at all, [`Vector`](collections::contiguous::Vector) is built
//! directly on the global allocator. It depends on some derive macros because they're helpful and
//! remove the need for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod collections;

pub(crate) mod util;
