use std::cmp::Ordering;

/// Searches the sorted `slice` for an element equal to `key` under `cmp`, returning its index.
/// With duplicates, any one of the matching indices may be returned.
///
/// `cmp` is always called with `key` on the left.
///
/// # Examples
/// ```
/// # use stl_collections::algorithm;
/// let values = [1, 3, 5, 7, 9];
///
/// assert_eq!(algorithm::binary_search(&5, &values, i32::cmp), Some(2));
/// assert_eq!(algorithm::binary_search(&4, &values, i32::cmp), None);
/// ```
pub fn binary_search<T, F>(key: &T, slice: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // The window is `slice[base..base + n]`.
    let mut base = 0;
    let mut n = slice.len();
    while n > 0 {
        let pivot = base + n / 2;
        match cmp(key, &slice[pivot]) {
            Ordering::Equal => return Some(pivot),
            Ordering::Greater => {
                base = pivot + 1;
                n -= 1;
            },
            Ordering::Less => {},
        }
        n /= 2;
    }
    None
}

/// Returns true if no element compares greater than the one after it.
pub fn is_sorted_by<T, F>(slice: &[T], mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    slice.windows(2).all(|pair| cmp(&pair[0], &pair[1]) != Ordering::Greater)
}
