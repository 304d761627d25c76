#![cfg(test)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::iter;

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::compare::*;
use super::*;
use crate::collections::contiguous::Vector;

type Sort = fn(&mut [i32], fn(&i32, &i32) -> Ordering);

const SORTS: [(&str, Sort); 6] = [
    ("bubble_sort", bubble_sort),
    ("selection_sort", selection_sort),
    ("insertion_sort", insertion_sort),
    ("shell_sort", shell_sort),
    ("quick_sort", quick_sort),
    ("merge_sort", merge_sort),
];

fn random_values(seed: u64, len: usize) -> Vector<i32> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    iter::repeat_with(|| rng.gen_range(-50..50)).take(len).collect()
}

#[test]
fn test_sorts_order_and_permute() {
    for (name, sort) in SORTS {
        for (seed, len) in [(0, 0), (1, 1), (2, 2), (3, 17), (4, 500)] {
            let values = random_values(seed, len);
            let mut expected = values.clone();
            expected.sort();

            let mut sorted = values.clone();
            sort(&mut sorted, int_cmp);
            assert_eq!(sorted, expected, "{name} should produce a sorted permutation of {len} values.");
        }
    }
}

#[test]
fn test_sorts_edge_inputs() {
    let ascending: Vector<i32> = (0..200).collect();
    let descending: Vector<i32> = (0..200).rev().collect();
    let equal: Vector<i32> = iter::repeat_n(7, 200).collect();

    for (name, sort) in SORTS {
        for input in [&ascending, &descending, &equal] {
            let mut values = input.clone();
            sort(&mut values, int_cmp);
            assert!(is_sorted_by(&values, int_cmp), "{name} should handle presorted and uniform input.");
        }
    }
}

#[test]
fn test_descending() {
    for (name, sort) in SORTS {
        let mut values = random_values(99, 64);
        sort(&mut values, |a, b| b.cmp(a));
        assert!(is_sorted_by(&values, reversed(int_cmp)), "{name} should sort descending with a flipped comparator.");
    }

    let mut values = random_values(7, 64);
    quick_sort(&mut values, reversed(int_cmp));
    assert!(
        values.windows(2).all(|pair| pair[0] >= pair[1]),
        "A reversed comparator should sort in descending order."
    );
}

#[test]
fn test_merge_sort_stable() {
    let mut rng = XorShiftRng::seed_from_u64(42);
    let mut pairs: Vector<(u8, usize)> = (0..300).map(|i| (rng.gen_range(0..8), i)).collect();

    merge_sort(&mut pairs, |a, b| a.0.cmp(&b.0));
    assert!(
        pairs.windows(2).all(|pair| pair[0].0 < pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1)),
        "Equal keys should keep their original order."
    );

    let mut pairs = pairs.clone();
    insertion_sort(&mut pairs, |a, b| b.0.cmp(&a.0));
    assert!(
        pairs.windows(2).all(|pair| pair[0].0 > pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1)),
        "Insertion sort should be stable too."
    );
}

#[test]
fn test_quick_sort_large_sorted() {
    // Every partition of sorted input is maximally unbalanced, which is the worst case for the
    // range stack.
    let mut values: Vector<u32> = (0..5_000).collect();
    quick_sort(&mut values, u32::cmp);
    assert!(values.iter().copied().eq(0..5_000), "Sorted input should be left sorted.");
}

#[test]
fn test_bubble_sort_early_exit() {
    let count = Cell::new(0_usize);
    let mut values: Vector<u32> = (0..100).collect();
    bubble_sort(&mut values, |a, b| {
        count.set(count.get() + 1);
        a.cmp(b)
    });
    assert_eq!(count.get(), 99, "Sorted input should take a single pass.");
}

#[test]
fn test_binary_search() {
    let values = [1, 3, 5, 7, 9];

    assert_eq!(binary_search(&5, &values, int_cmp), Some(2), "5 should be found at index 2.");
    assert_eq!(binary_search(&4, &values, int_cmp), None, "4 isn't present.");
    for (index, value) in values.iter().enumerate() {
        assert_eq!(binary_search(value, &values, int_cmp), Some(index), "Every element should be found.");
    }
    for missing in [0, 2, 6, 10] {
        assert_eq!(binary_search(&missing, &values, int_cmp), None, "{missing} isn't present.");
    }
    let empty: [i32; 0] = [];
    assert_eq!(binary_search(&1, &empty, int_cmp), None, "Nothing is found in an empty slice.");

    let words = ["apple", "banana", "cherry"];
    assert_eq!(binary_search(&"cherry", &words, natural), Some(2));
}

#[test]
fn test_comparators() {
    assert_eq!(int_cmp(&-3, &2), Ordering::Less);
    assert_eq!(float_cmp(&1.5, &1.5), Ordering::Equal);
    assert_eq!(float_cmp(&f64::NAN, &1.0), Ordering::Equal, "NaN should compare equal to anything.");
    assert_eq!(float_cmp(&2.0, &-1.0), Ordering::Greater);

    let mut c_style = three_way(|a: &i32, b: &i32| a - b);
    assert_eq!(c_style(&1, &5), Ordering::Less);
    assert_eq!(c_style(&5, &5), Ordering::Equal);
    assert_eq!(reversed(int_cmp)(&1, &5), Ordering::Greater);

    assert_eq!(numeric_str_cmp("2", "10"), Ordering::Less, "Strings should compare by value.");
    assert_eq!(numeric_str_cmp("\t 1e3x", "999.9"), Ordering::Greater);
    assert_eq!(numeric_str_cmp("+4.", "4"), Ordering::Equal);
    assert_eq!(numeric_str_cmp("1e", "1"), Ordering::Equal, "A dangling exponent should be ignored.");
    assert_eq!(numeric_str_cmp("abc", "-"), Ordering::Equal, "Non-numbers should count as zero.");

    let mut labels = [String::from("10 b"), String::from("9 a"), String::from("-1 c")];
    shell_sort(&mut labels, numeric_str_cmp);
    assert_eq!(labels, ["-1 c", "9 a", "10 b"]);
}
