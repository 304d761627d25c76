#![cfg(test)]

use super::*;
use crate::collections::contiguous::VectorConfig;
use crate::util::panic::assert_panics;

#[test]
fn test_access() {
    let s = ByteString::from("abc");

    assert_eq!(s.len(), 3);
    assert_eq!(s.at(1), Ok(b'b'));
    assert!(s.at(3).is_err(), "Accessing at len should fail.");
    assert_eq!(s.front(), Some(b'a'));
    assert_eq!(s.back(), Some(b'c'));
    assert_eq!(ByteString::new().front(), None, "An empty string should have no front.");
}

#[test]
fn test_insert_and_append() {
    let mut s = ByteString::from("ad");

    s.insert(1, b'b', 2);
    assert_eq!(s.as_bytes(), b"abbd", "Repeated bytes should be inserted at the position.");
    s.insert_bytes(3, b"c");
    assert_eq!(s.as_bytes(), b"abbcd");
    s.append(b'!', 3);
    s.append_bytes(b"?");
    assert_eq!(s.as_bytes(), b"abbcd!!!?");

    s.insert(0, b'x', 0);
    assert_eq!(s.len(), 9, "Inserting zero bytes should change nothing.");

    assert_eq!(
        s.try_insert(10, b'x', 1),
        Err(VectorError::IndexOutOfBounds(IndexOutOfBounds { index: 10, len: 9 })),
        "Inserting past len should fail with the offending position."
    );
    assert_panics!({
        let mut s = ByteString::new();
        s.insert_bytes(1, b"x");
    });

    let mut s = ByteString::with_config(VectorConfig::new().with_initial_cap(1));
    s.append(b'z', 5);
    assert_eq!(s.as_bytes(), b"zzzzz", "Appending should grow as needed.");
}

#[test]
fn test_erase_clamps() {
    let mut s = ByteString::from("hello world");

    s.erase(5, 1);
    assert_eq!(s.as_bytes(), b"helloworld");
    s.erase(5, 100);
    assert_eq!(s.as_bytes(), b"hello", "The count should be clamped to the end.");
    s.erase(5, 1);
    assert_eq!(s.as_bytes(), b"hello", "Erasing at len should do nothing.");
    assert!(s.try_erase(6, 1).is_err(), "Erasing past len should fail.");
}

#[test]
fn test_replace_and_substr() {
    let mut s = ByteString::from("one two three");

    s.replace(4, 3, b"2");
    assert_eq!(s.as_bytes(), b"one 2 three", "A shorter replacement should shrink the string.");
    s.replace(0, 3, b"eleven");
    assert_eq!(s.as_bytes(), b"eleven 2 three", "A longer replacement should grow the string.");
    s.replace(9, 50, b"3");
    assert_eq!(s.as_bytes(), b"eleven 2 3");

    assert_eq!(s.substr(7, 1).as_bytes(), b"2");
    assert_eq!(s.substr(7, 100).as_bytes(), b"2 3", "Substrings should be clamped.");
    assert!(s.substr(10, 5).is_empty(), "A substring at len should be empty.");
    assert!(s.try_substr(11, 1).is_err());
}

#[test]
fn test_copy_to() {
    let s = ByteString::from("abcdef");
    let mut buf = [0_u8; 4];

    assert_eq!(s.copy_to(&mut buf, 1), 4);
    assert_eq!(&buf, b"bcde");
    assert_eq!(s.copy_to(&mut buf, 4), 2, "Copying should stop at the end of the string.");
    assert_eq!(&buf[..2], b"ef");
}

#[test]
fn test_push_pop_resize() {
    let mut s = ByteString::new();
    s.push(b'a');
    s.push(b'b');
    assert_eq!(s.pop(), Some(b'b'));

    s.resize(3);
    assert_eq!(s.as_bytes(), &[b'a', 0, 0], "Resizing up should zero fill.");
    s.resize(0);
    assert!(s.is_empty());
    assert_eq!(s.pop(), None);
}

#[test]
fn test_compare_and_affixes() {
    let a = ByteString::from("apple");
    let b = ByteString::from("apples");
    let c = ByteString::from("banana");

    assert!(a < b, "A proper prefix should order first.");
    assert!(b < c);
    assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);

    assert!(b.starts_with(b"app"));
    assert!(b.ends_with(b"les"));
    assert!(!a.ends_with(b"les"));
}

#[test]
fn test_swap_and_format() {
    let mut a = ByteString::from("left");
    let mut b = ByteString::from("right");

    a.swap(&mut b);
    assert_eq!(format!("{a}"), "right");
    assert_eq!(format!("{b}"), "left");
    assert_eq!(
        format!("{:?}", ByteString::from("hi")),
        "ByteString { contents: \"hi\", len: 2, cap: 16 }"
    );
}
