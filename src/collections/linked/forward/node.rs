use std::ptr::NonNull;

use crate::collections::linked::chain::ChainLink;

pub(crate) type Link<T> = Option<NodeRef<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A non-owning handle to a heap allocated singly linked [`Node`].
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node, returning its contents.
    ///
    /// # Safety
    /// The node must have been created by [`NodeRef::from_node`], must not have been taken already
    /// and must no longer be reachable from any list.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak and is being reclaimed exactly once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live while it is linked into a list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The node is live while it is linked into a list, which hands out at most one
        // mutable borrow per node.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is live while it is linked into a list.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: The node is live while it is linked into a list.
        unsafe { (*self.0.as_ptr()).next = next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T> ChainLink for NodeRef<T> {
    type Item = T;

    fn item<'a>(self) -> &'a T {
        self.value()
    }

    fn next_link(self) -> Option<Self> {
        self.next()
    }

    fn set_next_link(self, next: Option<Self>) {
        self.set_next(next);
    }
}
