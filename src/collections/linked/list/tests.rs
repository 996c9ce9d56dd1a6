#![cfg(test)]

use std::iter;

use super::*;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;
use crate::util::probe::CountedDrop;

#[test]
fn test_head_operations() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None, "Popping an empty list should yield nothing.");

    list.push_front(1);
    list.push_front(2);
    assert_eq!(list.front(), Some(&2));
    assert_eq!(
        list.pop_front(),
        Some(2),
        "The most recently pushed head should pop first."
    );
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_tail_operations() {
    let mut list = SinglyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);

    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.pop_back(), Some(3), "pop_back should reach the tail.");
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_index_operations() {
    let mut list: SinglyLinkedList<_> = (0..5).collect();

    assert_eq!(list[0], 0);
    assert_eq!(list[4], 4);
    assert_eq!(
        list.try_get(5),
        Err(IndexOutOfBounds { index: 5, len: 5 }),
        "Reads at len should be out of bounds."
    );

    list.insert(2, 100);
    assert_eq!(
        list.to_visual_string(),
        "HEAD -> [0] -> [1] -> [100] -> [2] -> [3] -> [4] -> NULL"
    );
    list.insert(6, 200);
    assert_eq!(list.back(), Some(&200), "Insertion at len should append.");
    assert!(list.try_insert(100, 0).is_err());

    assert_eq!(list.remove(2), 100);
    assert_eq!(
        list[2], 2,
        "After a removal the surviving index should hold the pre-removal successor."
    );
    assert_eq!(list.try_remove(6), Err(IndexOutOfBounds { index: 6, len: 6 }));

    assert_eq!(list.replace(0, 42), 0, "Replacing should return the previous value.");
    assert_eq!(list[0], 42);

    assert_panics!({
        let list: SinglyLinkedList<u8> = SinglyLinkedList::new();
        list.get(0);
    });
}

#[test]
fn test_value_lookup() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3, 2].into_iter().collect();

    assert_eq!(list.index_of(&2), Some(1), "index_of should return the first match.");
    assert!(list.contains(&3));
    assert!(!list.contains(&100));

    assert!(list.remove_value(&2));
    assert_eq!(
        list.to_visual_string(),
        "HEAD -> [1] -> [3] -> [2] -> NULL",
        "remove_value should only remove the first match."
    );
    assert!(!list.remove_value(&100));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_reverse() {
    let mut list: SinglyLinkedList<_> = (0..6).collect();
    let original = list.clone();

    list.reverse();
    assert_eq!(
        list,
        (0..6).rev().collect(),
        "Reversal should flip the element order."
    );

    list.reverse();
    assert_eq!(list, original, "Reversing twice should restore the original order.");

    let mut empty: SinglyLinkedList<u8> = SinglyLinkedList::new();
    empty.reverse();
    assert!(empty.is_empty(), "Reversing an empty list should do nothing.");
}

#[test]
fn test_len_matches_enumeration() {
    let mut list: SinglyLinkedList<_> = (0..10).collect();

    list.pop_front();
    list.pop_back();
    list.remove(3);
    list.insert(0, 100);
    list.push_back(200);
    assert!(list.remove_value(&5));

    assert_eq!(
        list.len(),
        list.iter().count(),
        "The tracked length should match an explicit enumeration after any mutations."
    );
}

#[test]
fn test_iterators() {
    let mut list: SinglyLinkedList<_> = (0_usize..5).collect();

    let borrowed: SinglyLinkedList<_> = list.iter().copied().collect();
    assert_eq!(list, borrowed);

    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(list, [0, 2, 4, 6, 8].into_iter().collect());

    let mut iter = list.iter();
    assert_eq!(iter.len(), 5);
    iter.next();
    assert_eq!(iter.len(), 4);

    assert_eq!(list.into_iter().collect::<SinglyLinkedList<_>>().len(), 5);
}

#[test]
fn test_extend() {
    let mut list: SinglyLinkedList<_> = (0..3).collect();
    list.extend(3..6);

    assert_eq!(list, (0..6).collect(), "Extension should append in iteration order.");
    assert_eq!(list.len(), 6);
}

#[test]
fn test_drop_and_clear() {
    let counter = CountedDrop::new();

    let list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(list);
    assert_eq!(counter.take(), 10, "Dropping the list should drop every element.");

    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    list.clear();
    assert_eq!(counter.take(), 10, "Clearing should drop every element.");
    assert!(list.is_empty());

    // Long chains exercise the iterative drop; a recursive drop would overflow the stack here.
    let list: SinglyLinkedList<_> = (0..500_000).collect();
    drop(list);
}
