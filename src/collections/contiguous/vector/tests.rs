#![cfg(test)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::iter;

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_new_and_growth() {
    let mut vec = Vector::<u32>::new();
    assert_eq!(vec.cap(), 16, "A new Vector should start with a capacity of 16.");
    assert!(vec.is_empty(), "A new Vector should be empty.");

    for i in 0..16 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 16, "Filling the initial capacity shouldn't grow.");

    vec.push(16);
    assert_eq!(vec.cap(), 32, "Pushing onto a full Vector should double the capacity.");
    assert_eq!(vec.len(), 17);

    let mut vec = Vector::with_config(VectorConfig::new().with_initial_cap(0));
    assert_eq!(vec.cap(), 0, "An initial capacity of 0 shouldn't allocate.");
    vec.push('a');
    assert_eq!(vec.cap(), 2, "Growing from nothing should use the minimum capacity.");
}

#[test]
fn test_push_pop_net_count() {
    let mut rng = XorShiftRng::seed_from_u64(0x5eed);
    let mut vec = Vector::new();
    let mut pushes = 0_usize;
    let mut pops = 0_usize;

    for i in 0..2_000 {
        if rng.gen_range(0..3) == 0 {
            if vec.pop().is_some() {
                pops += 1;
            }
        } else {
            vec.push(i);
            pushes += 1;
        }
        assert_eq!(
            vec.len(),
            pushes - pops,
            "Length should always equal successful pushes minus successful pops."
        );
        assert!(vec.len() <= vec.cap(), "Length should never exceed capacity.");
    }
}

#[test]
fn test_at_front_back() {
    let mut vec = Vector::from([1, 2, 3]);

    assert_eq!(vec.at(0), Ok(&1));
    assert_eq!(
        vec.at(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Indexing at len should be out of bounds."
    );
    assert_eq!(vec.front(), Some(&1));
    assert_eq!(vec.back(), Some(&3));

    *vec.at_mut(1).unwrap() = 20;
    *vec.back_mut().unwrap() = 30;
    assert_eq!(&*vec, &[1, 20, 30], "Mutable accessors should write through.");

    vec.clear();
    assert_eq!(vec.front(), None, "An empty Vector should have no front.");
    assert_eq!(vec.back(), None, "An empty Vector should have no back.");
}

#[test]
fn test_insert() {
    let mut vec: Vector<_> = (0..3).collect();

    assert_eq!(*vec.insert(0, 10), 10, "Insert should return the inserted value.");
    vec.insert(4, 20);
    vec.insert(2, 30);
    assert_eq!(&*vec, &[10, 0, 30, 1, 2, 20]);

    assert_eq!(
        vec.try_insert(7, 0),
        Err(VectorError::IndexOutOfBounds(IndexOutOfBounds { index: 7, len: 6 })),
        "Inserting past len should fail."
    );
    assert_eq!(vec.len(), 6, "A failed insert shouldn't change the Vector.");

    assert_panics!({
        let mut vec = Vector::from([1]);
        vec.insert(2, 5);
    });

    let mut vec: Vector<_> = Vector::with_config(VectorConfig::new().with_initial_cap(2));
    for i in 0..100 {
        vec.insert(0, i);
    }
    assert!(
        vec.iter().copied().eq((0..100).rev()),
        "Repeated front insertion should grow and keep order."
    );
}

#[test]
fn test_insert_copied_and_extend() {
    let mut vec = Vector::from([1, 5]);
    vec.insert_copied(1, &[2, 3, 4]);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5]);

    vec.insert_copied(5, &[6]);
    vec.insert_copied(0, &[]);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6]);

    assert!(
        vec.try_insert_copied(10, &[0]).is_err_and(|e| e.is_index_out_of_bounds()),
        "Bulk insertion past len should fail."
    );

    let mut vec = Vector::with_config(VectorConfig::new().with_initial_cap(1));
    vec.extend_from_slice(&[String::from("a"), String::from("b"), String::from("c")]);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.cap(), 4, "Bulk growth should repeat the growth factor until it fits.");
}

#[test]
fn test_erase() {
    let mut vec: Vector<_> = (0..6).collect();

    assert_eq!(vec.erase(0), 0);
    assert_eq!(vec.erase(4), 5, "Erasing the last element should work.");
    assert_eq!(vec.erase(1), 2);
    assert_eq!(&*vec, &[1, 3, 4]);

    assert_eq!(
        vec.try_erase(3),
        Err(VectorError::IndexOutOfBounds(IndexOutOfBounds { index: 3, len: 3 }))
    );

    let mut empty = Vector::<u8>::new();
    assert_eq!(
        empty.try_erase(0),
        Err(VectorError::EmptyContainer(EmptyContainer)),
        "Erasing from an empty Vector should report it as empty."
    );

    assert_panics!({
        let mut vec = Vector::<u8>::new();
        vec.erase(0);
    });
}

#[test]
fn test_erase_range() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    vec.erase_range(2..5);
    assert_eq!(vec.len(), 7);
    assert_eq!(counter.count(), 3, "Erased elements should be dropped.");

    vec.erase_range(3..3);
    assert_eq!(vec.len(), 7, "An empty range should erase nothing.");

    let mut vec: Vector<_> = (0..8).collect();
    vec.erase_range(5..8);
    vec.erase_range(0..2);
    assert_eq!(&*vec, &[2, 3, 4]);

    assert!(vec.try_erase_range(2..4).is_err(), "Ranges past len should fail.");
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 2..1;
    assert!(vec.try_erase_range(reversed).is_err(), "Reversed ranges should fail.");
    assert_eq!(&*vec, &[2, 3, 4], "A failed erase shouldn't change the Vector.");
}

#[test]
fn test_reserve_and_shrink() {
    let mut vec = Vector::from([1_u64, 2, 3]);
    let cap = vec.cap();

    vec.reserve(1);
    assert_eq!(vec.cap(), cap, "Reserving less than the capacity should do nothing.");

    vec.reserve(100);
    assert_eq!(vec.cap(), 100, "Reserving more should set the capacity exactly.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3, "Shrinking should match the capacity to the length.");
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3, "Shrinking twice should change nothing.");
    assert_eq!(&*vec, &[1, 2, 3], "Shrinking shouldn't change the contents.");

    assert!(
        vec.try_reserve(usize::MAX).is_err_and(|e| e.is_capacity_overflow()),
        "An unrepresentable capacity should overflow."
    );
    assert_eq!(vec.cap(), 3, "A failed reserve shouldn't change the capacity.");

    let mut vec = Vector::<u8>::new();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0);
    vec.push(1);
    assert_eq!(&*vec, &[1], "A Vector should grow again after shrinking to nothing.");
}

#[test]
fn test_resize_and_truncate() {
    let mut vec = Vector::from([5_i32, 6]);

    vec.resize(5);
    assert_eq!(&*vec, &[5, 6, 0, 0, 0], "Growing should fill with zeroes.");
    let cap = vec.cap();

    vec.resize(1);
    assert_eq!(&*vec, &[5]);
    assert_eq!(vec.cap(), cap, "Resizing down shouldn't reduce the capacity.");

    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    vec.truncate(2);
    assert_eq!(counter.count(), 4, "Truncated elements should be dropped.");
    vec.truncate(10);
    assert_eq!(vec.len(), 2, "Truncating to a larger length should do nothing.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);
    assert_eq!(counter.count(), 10, "Every element should be dropped exactly once.");

    let counter = CountedDrop::new(0);
    let mut iter = iter::repeat_with(|| counter.clone())
        .take(10)
        .collect::<Vector<_>>()
        .into_iter();

    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.count(), 2);
    drop(iter);
    assert_eq!(
        counter.count(),
        10,
        "Dropping a partially consumed iterator should drop the rest."
    );
}

#[test]
fn test_into_iter() {
    let vec: Vector<_> = (0..5).collect();
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.collect::<Vector<_>>(), Vector::from([1, 2, 3]));

    let mut vec: Vector<_> = (0..3).collect();
    for value in &mut vec {
        *value *= 2;
    }
    assert_eq!(&*vec, &[0, 2, 4], "Mutable iteration should write through.");
}

#[test]
fn test_clone_isolation() {
    let mut vec = Vector::with_config(VectorConfig::new().with_initial_cap(3).with_growth_factor(4));
    vec.extend([String::from("x"), String::from("y")]);
    vec.reserve(7);

    let mut copy = vec.clone();
    assert_eq!(copy, vec, "A clone should be equal to the original.");
    assert_eq!(copy.cap(), vec.cap(), "A clone should keep the capacity.");
    assert_eq!(copy.config(), vec.config(), "A clone should keep the config.");

    copy.push(String::from("z"));
    copy.at_mut(0).unwrap().push('!');
    assert_eq!(&*vec, &["x", "y"], "Mutating the clone shouldn't affect the original.");
    assert_eq!(&*copy, &["x!", "y", "z"]);
}

#[test]
fn test_swap() {
    let mut a = Vector::from([1, 2, 3]);
    let mut b = Vector::with_config(VectorConfig::new().with_initial_cap(40));
    b.push(9);

    a.swap(&mut b);
    assert_eq!(&*a, &[9]);
    assert_eq!(a.cap(), 40, "Swap should exchange capacities.");
    assert_eq!(&*b, &[1, 2, 3]);
}

#[test]
fn test_equality_and_hash() {
    let vec: Vector<_> = (0..5).collect();

    assert_eq!(vec, Vector::from([0, 1, 2, 3, 4]));
    assert_ne!(vec, Vector::from([0, 1, 2, 5, 4]));
    assert_eq!(
        hash_of(&vec),
        hash_of(&Vector::from([0, 1, 2, 3, 4])),
        "Equal Vectors should hash equally."
    );
    assert_eq!(
        hash_of(&vec),
        hash_of(&[0, 1, 2, 3, 4][..]),
        "A Vector should hash like its slice."
    );
}

#[test]
fn test_formatting() {
    let vec = Vector::from([1, 2, 3]);

    assert_eq!(format!("{vec}"), "![1, 2, 3]");
    assert_eq!(
        format!("{vec:?}"),
        "Vector { contents: [1, 2, 3], len: 3, cap: 16 }"
    );
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::<ZeroSizedType>::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.erase(50), ZeroSizedType);
    vec.resize(10);
    vec.shrink_to_fit();
    assert_eq!(vec.into_iter().count(), 10, "Should iterate over every ZST instance.");
}
