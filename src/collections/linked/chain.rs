//! Merging and sorting of singly-threaded node chains, shared by both linked lists.
//!
//! All functions here work purely on `next` links: nodes are relinked, never allocated, freed or
//! moved. A [`LinkedList`](super::LinkedList) rebuilds its `prev` links afterwards.

use std::cmp::Ordering;

use crate::collections::contiguous::Vector;

/// A handle to a node which can be threaded into a chain through its `next` link.
pub(crate) trait ChainLink: Copy + Eq {
    type Item;

    /// Returns the value held by the node. The lifetime is unbounded, the caller must ensure that
    /// the node outlives it.
    fn item<'a>(self) -> &'a Self::Item;

    fn next_link(self) -> Option<Self>;

    fn set_next_link(self, next: Option<Self>);
}

/// A run of linked nodes from `head` to `tail` inclusive. The tail's next link is always `None`
/// while a chain is held separately from any other.
#[derive(Clone, Copy)]
pub(crate) struct Chain<L> {
    pub head: L,
    pub tail: L,
}

impl<L: ChainLink> Chain<L> {
    /// Links `other` after `self`.
    pub fn append(self, other: Chain<L>) -> Chain<L> {
        self.tail.set_next_link(Some(other.head));
        Chain {
            head: self.head,
            tail: other.tail,
        }
    }

    /// Splits off the first `count` nodes (at least one) starting from `head`, terminating the
    /// taken chain and returning the remainder, if any.
    pub fn take(head: L, count: usize) -> (Chain<L>, Option<L>) {
        let mut tail = head;
        for _ in 1..count {
            match tail.next_link() {
                Some(next) => tail = next,
                None => break,
            }
        }

        let rest = tail.next_link();
        tail.set_next_link(None);
        (Chain { head, tail }, rest)
    }
}

/// Remembers the order of a chain's nodes. If it is dropped while still armed, which happens when
/// a comparator panics partway through a merge or sort, the nodes are relinked in that order. Only
/// `next` links are ever changed by this module, so the owning list is left exactly as it was.
pub(crate) struct RelinkGuard<L: ChainLink> {
    nodes: Vector<L>,
    armed: bool,
}

impl<L: ChainLink> RelinkGuard<L> {
    pub fn new(chain: Chain<L>) -> RelinkGuard<L> {
        let mut nodes = Vector::new();
        let mut curr = Some(chain.head);
        while let Some(node) = curr {
            nodes.push(node);
            curr = node.next_link();
        }
        RelinkGuard { nodes, armed: true }
    }

    /// Accepts the new links.
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl<L: ChainLink> Drop for RelinkGuard<L> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut next = None;
        for node in self.nodes.iter().rev() {
            node.set_next_link(next);
            next = Some(*node);
        }
    }
}

/// Merges two terminated, individually sorted chains into one. Stable: when elements compare
/// equal, the one from `left` comes first.
///
/// If the last element of `left` doesn't order after the first element of `right`, the chains are
/// concatenated after that single comparison.
pub(crate) fn merge<L, F>(left: Chain<L>, right: Chain<L>, cmp: &mut F) -> Chain<L>
where
    L: ChainLink,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    if cmp(right.head.item(), left.tail.item()) != Ordering::Less {
        return left.append(right);
    }

    let (mut a, mut b) = (Some(left.head), Some(right.head));
    let mut merged: Option<Chain<L>> = None;

    while let (Some(x), Some(y)) = (a, b) {
        // Taking from the right only when it is strictly less keeps the merge stable.
        let node = if cmp(y.item(), x.item()) == Ordering::Less {
            b = y.next_link();
            y
        } else {
            a = x.next_link();
            x
        };

        merged = Some(match merged {
            Some(chain) => chain.append(Chain { head: node, tail: node }),
            None => Chain { head: node, tail: node },
        });
    }

    // One side is exhausted, the other is still linked through to its own tail.
    let rest = match (a, b) {
        (Some(x), _) => Some(Chain { head: x, tail: left.tail }),
        (None, Some(y)) => Some(Chain { head: y, tail: right.tail }),
        (None, None) => None,
    };

    match (merged, rest) {
        (Some(chain), Some(rest)) => chain.append(rest),
        (Some(chain), None) => chain,
        (None, Some(rest)) => rest,
        (None, None) => left,
    }
}

/// Sorts a terminated chain of `len` nodes with a bottom-up merge sort: runs of `gap` nodes, for
/// `gap` = 1, 2, 4, ..., are merged pairwise and the results concatenated in order.
///
/// Sorted input costs roughly `len` comparisons, since every pair merge takes the fast path.
pub(crate) fn sort_gap<L, F>(chain: Chain<L>, len: usize, cmp: &mut F) -> Chain<L>
where
    L: ChainLink,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    let mut sorted = chain;
    let mut gap = 1_usize;

    while gap < len {
        let mut rest = Some(sorted.head);
        let mut result: Option<Chain<L>> = None;

        while let Some(start) = rest {
            let (left, after_left) = Chain::take(start, gap);
            let merged = match after_left {
                Some(right_start) => {
                    let (right, after_right) = Chain::take(right_start, gap);
                    rest = after_right;
                    merge(left, right, cmp)
                },
                None => {
                    rest = None;
                    left
                },
            };

            result = Some(match result {
                Some(acc) => acc.append(merged),
                None => merged,
            });
        }

        if let Some(pass) = result {
            sorted = pass;
        }
        gap = gap.saturating_mul(2);
    }

    sorted
}

/// Sorts a terminated chain with a natural merge sort: a single pass splits the chain into its
/// maximal non-descending runs, which are then merged pairwise until one remains.
///
/// Sorted input is a single run, costing `len - 1` comparisons and no merges.
pub(crate) fn sort_natural<L, F>(chain: Chain<L>, cmp: &mut F) -> Chain<L>
where
    L: ChainLink,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    let mut runs = Vector::new();
    let mut start = Some(chain.head);

    while let Some(head) = start {
        let mut tail = head;
        while let Some(next) = tail.next_link() {
            if cmp(next.item(), tail.item()) == Ordering::Less {
                break;
            }
            tail = next;
        }

        start = tail.next_link();
        tail.set_next_link(None);
        runs.push(Chain { head, tail });
    }

    while runs.len() > 1 {
        let mut merged = Vector::with_cap(runs.len().div_ceil(2));
        let mut pairs = runs.into_iter();

        while let Some(left) = pairs.next() {
            merged.push(match pairs.next() {
                Some(right) => merge(left, right, cmp),
                None => left,
            });
        }

        runs = merged;
    }

    runs.pop().unwrap_or(chain)
}
