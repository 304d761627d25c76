//! Restricted views over a [`LinkedList`](super::linked::LinkedList). [`Stack`] works on the tail
//! only, while [`Queue`] pushes at the head and pops from the tail. Neither holds any state besides
//! the list itself.

mod queue;
mod stack;

pub use queue::*;
pub use stack::*;
