use std::cmp::Ordering;

use crate::collections::contiguous::Vector;

/// Sorts `slice` with an iterative quicksort. Not stable.
///
/// Pending ranges live on a fixed stack of `usize::BITS` entries rather than the call stack. The
/// pivot is the last element of each range and elements that compare less than or equal to it are
/// partitioned to its left. Of the two ranges either side of the pivot, the larger is pushed first,
/// so the smaller is always sorted next and at most `log2(len)` ranges are ever pending.
///
/// # Time Complexity
/// `O(n log n)` on average, `O(n^2)` when every pivot is an extreme (e.g. sorted input).
///
/// # Examples
/// ```
/// # use stl_collections::algorithm;
/// let mut values = [5, -1, 3, 3, 0];
/// algorithm::quick_sort(&mut values, i32::cmp);
///
/// assert_eq!(values, [-1, 0, 3, 3, 5]);
/// ```
pub fn quick_sort<T, F>(slice: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Half-open ranges, each holding at least two elements.
    let mut stack = [(0_usize, 0_usize); usize::BITS as usize];
    let mut top = 0;
    if slice.len() >= 2 {
        stack[0] = (0, slice.len());
        top = 1;
    }

    while top > 0 {
        top -= 1;
        let (start, end) = stack[top];
        let pivot = start + partition(&mut slice[start..end], &mut cmp);

        let left = (start, pivot);
        let right = (pivot + 1, end);
        let (larger, smaller) = if left.1 - left.0 >= right.1 - right.0 {
            (left, right)
        } else {
            (right, left)
        };

        for (start, end) in [larger, smaller] {
            if end - start >= 2 {
                stack[top] = (start, end);
                top += 1;
            }
        }
    }
}

/// Lomuto partition around the last element, returning the pivot's final index. `slice` must hold
/// at least two elements.
fn partition<T, F>(slice: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = slice.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if cmp(&slice[i], &slice[last]) != Ordering::Greater {
            slice.swap(i, store);
            store += 1;
        }
    }
    slice.swap(store, last);
    store
}

/// Sorts `slice` with a bottom-up merge sort. Stable.
///
/// Blocks of width 1, 2, 4, ... are merged pairwise. Each merge copies its two blocks into scratch
/// [`Vector`]s, which are released as soon as that merge finishes.
///
/// # Time Complexity
/// `O(n log n)` comparisons in every case, with `O(n)` scratch space at most.
///
/// # Examples
/// ```
/// # use stl_collections::algorithm;
/// let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// algorithm::merge_sort(&mut pairs, |a, b| a.0.cmp(&b.0));
///
/// assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort<T, F>(slice: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = slice.len();
    let mut width = 1_usize;
    while width < len {
        let mut start = 0;
        while len - start > width {
            let end = start + usize::min(width.saturating_mul(2), len - start);
            merge_blocks(&mut slice[start..end], width, &mut cmp);
            start = end;
        }
        width = width.saturating_mul(2);
    }
}

/// Merges the sorted runs `block[..mid]` and `block[mid..]`, preferring the left run on ties.
fn merge_blocks<T, F>(block: &mut [T], mid: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut left = block[..mid].iter().cloned().collect::<Vector<T>>().into_iter().peekable();
    let mut right = block[mid..].iter().cloned().collect::<Vector<T>>().into_iter().peekable();

    for slot in block.iter_mut() {
        let next = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) if cmp(r, l) == Ordering::Less => right.next(),
            (Some(_), _) => left.next(),
            (None, _) => right.next(),
        };
        if let Some(value) = next {
            *slot = value;
        }
    }
}
