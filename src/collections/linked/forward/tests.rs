#![cfg(test)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::iter;

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_push_front_order() {
    let mut list = ForwardList::new();
    list.push_front(3);
    list.push_front(1);
    list.push_front(2);

    assert!(list.iter().eq(&[2, 1, 3]), "push_front should build the list in reverse.");
    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.len(), 3);

    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_insert_erase_after() {
    let mut list: ForwardList<_> = (0..3).collect();

    *list.insert_after(Some(2), 30) += 1;
    list.insert_after(None, -1);
    list.insert_after(Some(1), 5);
    assert!(list.iter().eq(&[-1, 0, 5, 1, 2, 31]));

    assert_eq!(list.erase_after(Some(1)), Some(5));
    assert_eq!(list.erase_after(None), Some(-1));
    assert!(list.iter().eq(&[0, 1, 2, 31]));
    assert_eq!(list.erase_after(Some(2)), Some(31), "Erasing after the second last should remove the last.");
    assert_eq!(list.erase_after(Some(2)), None, "Erasing after the last element should do nothing.");
    assert_eq!(list.erase_after(Some(10)), None, "Erasing after an out of range index should do nothing.");
    assert!(list.iter().eq(&[0, 1, 2]));
    assert_eq!(list.len(), 3);

    assert!(list.try_insert_after(Some(3), 0).is_err());
    assert_panics!({
        let mut list = ForwardList::<u8>::new();
        list.insert_after(Some(0), 0);
    });
}

#[test]
fn test_net_count() {
    let mut rng = XorShiftRng::seed_from_u64(7);
    let mut list = ForwardList::new();
    let mut inserted = 0_usize;
    let mut erased = 0_usize;

    for i in 0..1_000 {
        let after = match list.len() {
            0 => None,
            len => Some(rng.gen_range(0..len)).filter(|_| rng.gen_range(0..4) != 0),
        };
        if rng.gen_range(0..3) == 0 {
            if list.erase_after(after).is_some() {
                erased += 1;
            }
        } else {
            list.insert_after(after, i);
            inserted += 1;
        }
        assert_eq!(list.len(), inserted - erased, "Length should track inserts and erases.");
    }
    assert_eq!(list.iter().count(), list.len(), "Every counted node should be reachable.");
}

#[test]
fn test_sort_and_merge() {
    let mut rng = XorShiftRng::seed_from_u64(1234);
    let values: Vector<i64> = iter::repeat_with(|| rng.gen_range(-100..100)).take(300).collect();
    let mut expected = values.clone();
    expected.sort();

    let mut list: ForwardList<_> = values.iter().copied().collect();
    list.sort();
    assert!(list.iter().eq(expected.iter()), "sort should order the list.");

    let mut list: ForwardList<_> = values.iter().copied().collect();
    list.sort_natural_by(i64::cmp);
    assert!(list.iter().eq(expected.iter()), "sort_natural_by should order the list.");

    let mut a: ForwardList<_> = [(1, 'a'), (4, 'a')].into_iter().collect();
    let b: ForwardList<_> = [(0, 'b'), (1, 'b'), (7, 'b')].into_iter().collect();
    a.merge(b, |x: &(u8, char), y: &(u8, char)| x.0.cmp(&y.0));
    assert!(a.iter().eq(&[(0, 'b'), (1, 'a'), (1, 'b'), (4, 'a'), (7, 'b')]));
    assert_eq!(a.len(), 5, "Merging should add the lengths.");

    let mut empty = ForwardList::new();
    empty.merge(a.clone(), |x, y| x.cmp(y));
    assert_eq!(empty, a, "Merging into an empty list should take everything.");
}

#[test]
fn test_sorted_input_linear_comparisons() {
    let count = Cell::new(0_usize);
    let counting = |a: &u32, b: &u32| {
        count.set(count.get() + 1);
        a.cmp(b)
    };

    let mut list: ForwardList<_> = (0..1_000).collect();
    list.sort_by(counting);
    assert!(count.get() < 2_000, "Sorting sorted input should be linear.");

    count.set(0);
    list.sort_natural_by(counting);
    assert_eq!(count.get(), 999, "Natural sorting of sorted input should make one pass.");
}

#[test]
fn test_reverse_and_swap_values() {
    let mut list: ForwardList<_> = (0..5).collect();
    let head = list.head;

    list.reverse();
    assert!(list.iter().eq(&[4, 3, 2, 1, 0]));
    assert!(list.head == head, "Reversing should exchange values, not relink nodes.");

    list.swap_values(0, 3);
    assert!(list.iter().eq(&[1, 3, 2, 4, 0]));
    assert!(list.try_swap_values(5, 0).is_err());

    let mut single: ForwardList<_> = iter::once('x').collect();
    single.reverse();
    assert_eq!(single.front(), Some(&'x'));
}

#[test]
fn test_cursor() {
    let mut list = ForwardList::new();
    let mut cursor = list.cursor_mut();

    assert!(cursor.is_before_begin());
    assert!(!cursor.move_next(), "An empty list has nowhere to move.");
    cursor.insert_after(2);
    cursor.insert_after(1);
    assert_eq!(cursor.peek_next(), Some(&1));

    assert!(cursor.move_next());
    assert_eq!(cursor.current(), Some(&1));
    assert_eq!(cursor.index(), Some(0));
    cursor.insert_after(10);
    assert!(cursor.move_next());
    *cursor.current_mut().unwrap() += 5;
    assert_eq!(cursor.erase_after(), Some(2));
    assert_eq!(cursor.erase_after(), None);

    assert!(list.iter().eq(&[1, 15]));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_clone_clear_drop() {
    let list: ForwardList<_> = (0..4).map(|i| i.to_string()).collect();
    let mut copy = list.clone();
    copy.front_mut().unwrap().push('!');
    assert!(list.iter().eq(&["0", "1", "2", "3"]), "A clone should be independent.");
    assert_eq!(copy.get(0), "0!");

    let counter = CountedDrop::new(0);
    let mut list: ForwardList<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    list.clear();
    assert_eq!(counter.count(), 5, "Clearing should drop every element.");

    let counter = CountedDrop::new(0);
    let mut a: ForwardList<_> = iter::repeat_with(|| counter.clone()).take(3).collect();
    let mut b = ForwardList::new();
    a.swap(&mut b);
    assert_eq!(b.len(), 3);
    drop(b);
    drop(a);
    assert_eq!(counter.count(), 3, "Dropping should drop every element exactly once.");
}

/// Returns a comparator which panics on its `limit`th call.
fn gives_up_after(limit: usize) -> impl FnMut(&i32, &i32) -> Ordering {
    let mut calls = 0;
    move |a: &i32, b: &i32| {
        calls += 1;
        if calls == limit {
            panic!("comparator gave up");
        }
        a.cmp(b)
    }
}

#[test]
fn test_panicking_comparator_keeps_order() {
    let values = [5, 3, 9, 1, 7, 2, 8];

    for limit in 1..=5 {
        let mut list: ForwardList<i32> = values.into_iter().collect();
        assert_panics!({ list.sort_by(gives_up_after(limit)) });
        assert_eq!(list.iter().count(), list.len(), "Every counted node should be reachable.");
        assert!(list.iter().eq(&values), "A failed sort should leave the original order.");

        assert_panics!({ list.sort_natural_by(gives_up_after(limit)) });
        assert_eq!(list.iter().count(), list.len(), "Every counted node should be reachable.");
        assert!(list.iter().eq(&values), "A failed natural sort should leave the original order.");
    }

    let counter = CountedDrop::new(0);
    let mut a: ForwardList<_> = [1, 4, 6].into_iter().map(|k| (k, counter.clone())).collect();
    let b: ForwardList<_> = [2, 3, 5].into_iter().map(|k| (k, counter.clone())).collect();
    let mut cmp = gives_up_after(3);
    assert_panics!({ a.merge(b, |x: &(i32, CountedDrop), y: &(i32, CountedDrop)| cmp(&x.0, &y.0)) });
    assert_eq!(a.iter().count(), a.len(), "Every counted node should be reachable.");
    assert!(a.iter().map(|pair| pair.0).eq([1, 4, 6]), "A failed merge should leave self as it was.");
    assert_eq!(a.len(), 3);
    assert_eq!(counter.count(), 3, "The other list should be dropped whole.");
    drop(a);
    assert_eq!(counter.count(), 6, "Every element should be dropped exactly once.");
}

#[test]
fn test_formatting() {
    let list: ForwardList<_> = (1..=3).collect();

    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "ForwardList { contents: [1, 2, 3], len: 3 }");
}
