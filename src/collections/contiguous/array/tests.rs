#![cfg(test)]

use std::borrow::BorrowMut;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{BuildHasher, RandomState};
use std::mem;

use super::*;
use crate::collections::traits::{Difference, SortOrder};
use crate::util::alloc::DropCounter;
use crate::util::error::ContainerError;
use crate::util::panic::assert_panics;

#[test]
fn test_fill_and_read_back() {
    for size in [0_isize, 1, 2, 17, 100] {
        let mut arr = Array::<isize>::with_size(size);
        assert_eq!(arr.size(), size as usize);

        for i in 0..arr.size() {
            arr[i] = size - i as isize;
        }
        for i in 0..arr.size() {
            assert_eq!(
                *arr.get(i), size - i as isize,
                "Every written value should be read back from the same index."
            );
        }
    }

    assert_eq!(
        Array::<u8>::try_with_size(-3),
        Err(InvalidSize { size: -3 }),
        "A negative size should be rejected."
    );
    assert_panics!({
        Array::<u8>::with_size(-1);
    });
}

#[test]
fn test_empty_array() {
    let arr: Array<String> = Array::new();
    assert!(arr.is_empty());
    assert_eq!(arr, Array::default());
    assert_eq!(arr.to_string(), "", "An empty Array should display as nothing.");
    assert_eq!(arr.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_checked_access() {
    let mut arr = Array::from_iter_sized(0..3);

    assert_eq!(arr.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(arr.try_get_mut(usize::MAX).map(|v| *v), Err(IndexOutOfBounds { index: usize::MAX, len: 3 }));
    assert_eq!(arr.try_set(2, 10), Ok(2), "Setting should return the replaced value.");
    assert_eq!(arr.set(0, 7), 0);
    assert_eq!(&*arr, &[7, 1, 10]);
    assert!(arr.try_set(5, 1).is_err());

    assert_panics!({
        let arr = Array::from_iter_sized(0..3);
        let _ = arr[3];
    });
    assert_panics!({
        let mut arr = Array::from_iter_sized(0..3);
        arr[10] = 1;
    });
}

#[test]
fn test_clone_is_independent() {
    let original = Array::from_iter_sized(["a", "b", "c"].map(String::from));
    let mut copy = original.clone();
    assert_eq!(copy, original, "A copy should be equal to its source.");

    copy[1].push('!');
    copy.reverse();
    assert_eq!(&*original, &["a", "b", "c"], "Mutating a copy shouldn't change the source.");
    assert_eq!(&*copy, &["c", "b!", "a"]);
}

#[test]
fn test_take_leaves_empty() {
    let counter = DropCounter::new();
    let mut arr = Array::repeat_item(counter.clone(), 4);
    let moved = mem::take(&mut arr);

    assert_eq!(arr.size(), 0, "The moved-from Array should report size 0.");
    assert!(arr.is_empty());
    assert_eq!(moved.size(), 4);
    assert_eq!(counter.drops(), 1, "Only the item passed to repeat_item should be dropped.");

    drop(arr);
    assert_eq!(counter.drops(), 1, "Dropping the empty Array shouldn't drop anything.");
    drop(moved);
    assert_eq!(counter.drops(), 5);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let arr = Array::from_fn(10, |_| counter.clone());

    drop(arr);
    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_zst_support() {
    let mut arr = Array::<()>::repeat_default(5);
    assert_eq!(arr.size(), 5);
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");
    arr.reverse();
    arr.sort(SortOrder::Ascending);
    assert_eq!(arr.into_iter().count(), 5);
}

#[test]
fn test_capacity_overflow() {
    assert_eq!(
        Array::<u64>::try_new_uninit(usize::MAX).map(|arr| arr.size()),
        Err(CapacityOverflow),
        "A layout over isize::MAX bytes should be rejected."
    );
    assert_eq!(
        ContainerError::from(CapacityOverflow).to_string(),
        "Capacity overflow!"
    );
    assert_panics!({
        Array::<u64>::new_uninit(usize::MAX);
    });
    assert_panics!({
        Array::<u64>::repeat_default(usize::MAX / 2);
    });
}

#[test]
fn test_borrow_as_slice() {
    let mut set = HashSet::new();
    set.insert(Array::from_iter_sized([1, 2, 3]));
    set.insert(Array::from_iter_sized([4, 5]));

    assert!(set.contains(&[1, 2, 3][..]), "An Array should be found by its slice.");
    assert!(!set.contains(&[1, 2][..]));

    let mut arr = Array::from_iter_sized([3, 1, 2]);
    AsMut::<[i32]>::as_mut(&mut arr).sort();
    BorrowMut::<[i32]>::borrow_mut(&mut arr)[0] = 0;
    assert_eq!(AsRef::<[i32]>::as_ref(&arr), &[0, 2, 3]);
}

#[test]
fn test_unordered_elements() {
    let nan = Array::from_iter_sized([1.0, f64::NAN]);
    let other = nan.clone();

    assert!(nan <= other && nan >= other, "No element is greater on either side.");
    assert!(!(nan < other) && !(nan > other));
    assert_ne!(nan, other);
    assert_eq!(nan.partial_cmp(&other), None);
}

#[test]
fn test_short_iterator_panics() {
    struct Liar(usize);

    impl Iterator for Liar {
        type Item = usize;

        fn next(&mut self) -> Option<usize> {
            (self.0 > 0).then(|| {
                self.0 -= 1;
                self.0
            })
        }
    }

    impl ExactSizeIterator for Liar {
        fn len(&self) -> usize {
            self.0 + 2
        }
    }

    assert_panics!({
        Array::from_iter_sized(Liar(3));
    });
}

#[test]
fn test_reverse() {
    for size in [0, 1, 2, 5, 8] {
        let original = Array::from_iter_sized(0..size);
        let mut arr = original.clone();

        arr.reverse();
        assert!(arr.iter().copied().eq((0..size).rev()), "Reversing should flip the order.");
        arr.reverse();
        assert_eq!(arr, original, "Reversing twice should restore the original.");
    }
}

#[test]
fn test_sort() {
    let mut arr = Array::from_iter_sized([5, -2, 9, 0, 3, 3, -7]);

    arr.sort(SortOrder::Ascending);
    assert_eq!(&*arr, &[-7, -2, 0, 3, 3, 5, 9]);
    let sorted = arr.clone();
    arr.sort(SortOrder::Ascending);
    assert_eq!(arr, sorted, "Sorting a sorted Array shouldn't change it.");

    arr.sort(SortOrder::Descending);
    assert_eq!(&*arr, &[9, 5, 3, 3, 0, -2, -7]);
    let sorted = arr.clone();
    arr.sort(SortOrder::Descending);
    assert_eq!(arr, sorted, "Sorting a sorted Array shouldn't change it in either direction.");

    let mut arr = Array::from_iter_sized([4, 1, 3, 2]);
    arr.sort_by(SortOrder::Ascending, Difference);
    assert_eq!(&*arr, &[1, 2, 3, 4], "The subtraction comparator should sort numbers.");
    arr.sort_by(SortOrder::from(false), Difference);
    assert_eq!(&*arr, &[4, 3, 2, 1]);

    let mut arr = Array::<i32>::new();
    arr.sort(SortOrder::Ascending);
    assert!(arr.is_empty());
}

#[test]
fn test_sort_is_stable_and_adaptive() {
    let mut arr = Array::from_iter_sized([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
    arr.sort_by(SortOrder::Ascending, |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
    assert_eq!(&*arr, &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')], "Equal keys should keep their order.");

    let comparisons = std::cell::Cell::new(0);
    let mut arr = Array::from_iter_sized(0..50);
    arr.sort_by(SortOrder::Ascending, |a: &i32, b: &i32| {
        comparisons.set(comparisons.get() + 1);
        a.cmp(b)
    });
    assert_eq!(comparisons.get(), 49, "A sorted Array should only take a single pass.");
}

#[test]
fn test_elementwise_arithmetic() {
    let a = Array::from_iter_sized(0..10);
    assert_eq!(&*(&a * &a), &[0, 1, 4, 9, 16, 25, 36, 49, 64, 81]);

    let b = Array::repeat_item(2, 10);
    assert!((&a + &b).iter().zip(a.iter()).all(|(sum, x)| *sum == x + 2));
    assert!((&a - &b).iter().zip(a.iter()).all(|(diff, x)| *diff == x - 2));
    assert!((&a / &b).iter().zip(a.iter()).all(|(quot, x)| *quot == x / 2));

    let mut c = a.clone();
    c *= &b;
    c -= a.clone();
    assert_eq!(c, a, "2a - a should equal a.");
    c += &a;
    c /= b;
    assert_eq!(c, a);

    let squares = a.clone() * &a;
    assert_eq!(squares[9], 81);
    assert_eq!((a.clone() + a.clone())[3], 6);
}

#[test]
fn test_size_mismatch() {
    let mut a = Array::from_iter_sized([1, 2, 3]);
    let b = Array::from_iter_sized([1, 2]);

    assert_eq!(a.try_add_assign(&b), Err(SizeMismatch { left: 3, right: 2 }));
    assert_eq!(a.try_mul(&b), Err(SizeMismatch { left: 3, right: 2 }));
    assert_eq!(b.try_div(&a).map(|arr| arr.size()), Err(SizeMismatch { left: 2, right: 3 }));
    assert_eq!(&*a, &[1, 2, 3], "A failed operation shouldn't modify the Array.");

    assert_panics!({
        let _ = Array::from_iter_sized([1, 2]) + Array::from_iter_sized([1]);
    });
    assert_panics!({
        let mut a = Array::from_iter_sized([1, 2]);
        a -= &Array::new();
    });
}

#[test]
fn test_scalar_arithmetic() {
    let mut arr = Array::from_iter_sized([2.0, 4.0, 8.0]);

    arr *= Scalar(0.5);
    assert_eq!(&*arr, &[1.0, 2.0, 4.0]);
    arr += Scalar(1.0);
    arr -= Scalar(0.5);
    arr /= Scalar(0.5);
    assert_eq!(&*arr, &[3.0, 5.0, 9.0]);

    assert_eq!(&*(&arr - Scalar(1.0)), &[2.0, 4.0, 8.0]);
    assert_eq!(&*(Scalar(9.0) / &arr), &[3.0, 1.8, 1.0]);
    assert_eq!(&*(Scalar(10.0) - arr.clone()), &[7.0, 5.0, 1.0]);
    assert_eq!(&*(Scalar(1.0) + Array::<f64>::new()), &[] as &[f64]);
}

#[test]
fn test_equality_and_ordering() {
    let arr = Array::from_iter_sized(0_usize..5);

    assert_eq!(arr, Array::from_iter_sized([0, 1, 2, 3, 4]));
    assert_ne!(arr, Array::from_iter_sized([0, 1, 2, 5, 4]));
    assert_ne!(arr, Array::from_iter_sized(0..4), "Arrays of different sizes aren't equal.");

    let short = Array::from_iter_sized([1, 2]);
    let long = Array::from_iter_sized([1, 2, 0]);
    assert!(short <= long, "A shorter Array with no greater elements should be <=.");
    assert!(short != long, "... while still not being equal.");
    assert!(!(long <= short));
    assert!(short < long);

    let crossing_a = Array::from_iter_sized([1, 5]);
    let crossing_b = Array::from_iter_sized([2, 3]);
    assert_eq!(crossing_a.partial_cmp(&crossing_b), None);
    assert!(!(crossing_a <= crossing_b) && !(crossing_a >= crossing_b));

    assert_eq!(short.partial_cmp(&short.clone()), Some(Ordering::Equal));
    assert!(Array::from_iter_sized([3, 3]) > Array::from_iter_sized([1, 2]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Hashes should match the equivalent slice."
    );
}

#[test]
fn test_display_and_print() {
    let arr = Array::from_iter_sized(1..5);
    assert_eq!(arr.to_string(), "{1, 2, 3, 4}");
    assert_eq!(Array::from_iter_sized([7]).to_string(), "{7}");

    assert_eq!(arr.display_range(0, 4).map(|r| r.to_string()), Ok(String::from("1 2 3 4")));
    assert_eq!(arr.display_range(3, 1).map(|r| r.to_string()), Ok(String::from("4")));
    assert_eq!(
        arr.display_range(3, 2).map(|r| r.to_string()),
        Err(InvalidRange { start: 3, count: 2, len: 4 })
    );
    assert!(arr.display_range(0, 0).is_err(), "An empty range should be rejected.");
    assert!(arr.display_range(usize::MAX, 2).is_err());

    assert_eq!(arr.print(1, 2), Ok(()));
    assert!(arr.print(4, 1).is_err());

    assert_eq!(
        format!("{:?}", Array::from_iter_sized([1, 2])),
        "Array { contents: [1, 2], size: 2 }"
    );
}

#[test]
fn test_iterators() {
    let mut arr = Array::from_iter_sized(0_usize..5);
    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0_usize, 2, 4, 6, 8]);

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = DropCounter::new();
    let arr = Array::from_fn(10, |_| counter.clone());
    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 10, "Dropping an owned iterator should drop all elements once.");
}
