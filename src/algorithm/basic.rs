use std::cmp::Ordering;

/// Sorts `slice` by repeatedly swapping adjacent elements that are out of order. Stops early once a
/// pass makes no swaps, so sorted input costs a single pass.
pub fn bubble_sort<T, F>(slice: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut unsorted = slice.len();
    while unsorted > 1 {
        let mut swapped = false;
        for i in 1..unsorted {
            if cmp(&slice[i - 1], &slice[i]) == Ordering::Greater {
                slice.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        // The largest remaining element has bubbled to the end.
        unsorted -= 1;
    }
}

/// Sorts `slice` by moving the minimum of the unsorted tail to its front, one position at a time.
/// Not stable.
pub fn selection_sort<T, F>(slice: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..slice.len() {
        let mut min = i;
        for j in i + 1..slice.len() {
            if cmp(&slice[j], &slice[min]) == Ordering::Less {
                min = j;
            }
        }
        slice.swap(i, min);
    }
}

/// Sorts `slice` by shifting each element left past every greater one. Stable, and linear on
/// sorted input.
pub fn insertion_sort<T, F>(slice: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && cmp(&slice[j - 1], &slice[j]) == Ordering::Greater {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// An insertion sort over shrinking gaps from Knuth's sequence (1, 4, 13, 40, ...). Not stable.
pub fn shell_sort<T, F>(slice: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = slice.len();
    let mut gap = 1;
    while gap < len / 3 {
        gap = 3 * gap + 1;
    }

    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && cmp(&slice[j - gap], &slice[j]) == Ordering::Greater {
                slice.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 3;
    }
}
