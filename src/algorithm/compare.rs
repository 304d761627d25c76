//! Comparators for the sorting and searching functions in this crate, and for the list sorts in
//! [`linked`](crate::collections::linked).
//!
//! A comparator is any `FnMut(&T, &T) -> Ordering`, the same shape that [`slice::sort_by`] takes,
//! so closures and `Ord::cmp` can be passed directly. The functions here cover the remaining cases:
//! C-style three-way functions, reversal and a few stock comparisons.

use std::cmp::Ordering;

/// Compares by [`Ord`].
pub fn natural<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Flips the order given by `cmp`, turning an ascending sort into a descending one.
///
/// # Examples
/// ```
/// # use stl_collections::algorithm::{self, compare};
/// let mut values = [2, 9, 4];
/// algorithm::insertion_sort(&mut values, compare::reversed(compare::int_cmp));
///
/// assert_eq!(values, [9, 4, 2]);
/// ```
pub fn reversed<T: ?Sized, F>(mut cmp: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| cmp(b, a)
}

/// Adapts a function returning a negative, zero or positive integer, as C comparators do.
pub fn three_way<T: ?Sized, F>(mut cmp: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> i32,
{
    move |a: &T, b: &T| cmp(a, b).cmp(&0)
}

pub fn int_cmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// Compares two floats, treating NaN as equal to everything.
pub fn float_cmp(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Compares two strings by the decimal number they start with.
///
/// Leading whitespace is skipped, then the longest prefix that reads as a number (optional sign,
/// digits with an optional fraction, optional exponent) is parsed. A string that doesn't start with
/// a number counts as `0.0`.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use stl_collections::algorithm::compare::numeric_str_cmp;
/// assert_eq!(numeric_str_cmp(&"10 apples", &"9.5e0 pears"), Ordering::Greater);
/// assert_eq!(numeric_str_cmp(&"  -0.5", &"-.5"), Ordering::Equal);
/// assert_eq!(numeric_str_cmp(&"none", &"0"), Ordering::Equal);
/// ```
pub fn numeric_str_cmp<S: AsRef<str> + ?Sized>(a: &S, b: &S) -> Ordering {
    float_cmp(&leading_number(a.as_ref()), &leading_number(b.as_ref()))
}

fn leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int = digits(end);
    end += int;

    let mut frac = 0;
    if bytes.get(end) == Some(&b'.') {
        frac = digits(end + 1);
        if int + frac > 0 {
            end += 1 + frac;
        }
    }
    if int + frac == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp = digits(end + 1 + sign);
        if exp > 0 {
            end += 1 + sign + exp;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}
