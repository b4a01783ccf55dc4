use std::cmp::Ordering;
use std::mem;

use super::{LinkedList, Link, Node};
use crate::collections::traits::{Comparator, Natural};

impl<T: PartialOrd> LinkedList<T> {
    /// Sorts the list into ascending order. The sort is stable.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::linked::LinkedList;
    /// let mut list: LinkedList<i32> = [3, 1, 2].into_iter().collect();
    /// list.sort();
    /// assert_eq!(list.to_string(), "1 2 3");
    /// ```
    pub fn sort(&mut self) {
        self.sort_by(Natural)
    }
}

impl<T> LinkedList<T> {
    /// Sorts the list with a merge sort driven by `comparator`, relinking nodes rather than moving
    /// values. Elements that compare as [`Equal`](Ordering::Equal) keep their relative order.
    ///
    /// If `comparator` panics, the list is left empty.
    pub fn sort_by<C: Comparator<T>>(&mut self, comparator: C) {
        // The chain is detached while sorting, so `len` must read 0 until it's relinked.
        let len = mem::replace(&mut self.len, 0);
        self.head = merge_sort(self.head.take(), &comparator);
        self.len = len;
    }
}

fn merge_sort<T, C: Comparator<T>>(head: Link<T>, comparator: &C) -> Link<T> {
    let mut left = match head {
        Some(node) if node.next.is_some() => node,
        short => return short,
    };

    let right = split(&mut left);
    merge(
        merge_sort(Some(left), comparator),
        merge_sort(right, comparator),
        comparator,
    )
}

/// Detaches and returns the second half of the chain starting at `head`. For an odd length, the
/// first half keeps the extra node.
fn split<T>(head: &mut Node<T>) -> Link<T> {
    let mut steps = 0;
    let mut fast = head.next.as_deref();
    while let Some(node) = fast {
        fast = node.next.as_deref();
        if let Some(node) = fast {
            steps += 1;
            fast = node.next.as_deref();
        }
    }

    let mut slow = head;
    for _ in 0..steps {
        slow = slow.next.as_deref_mut()?;
    }
    slow.next.take()
}

fn merge<T, C: Comparator<T>>(mut left: Link<T>, mut right: Link<T>, comparator: &C) -> Link<T> {
    let mut merged: Link<T> = None;
    let mut tail = &mut merged;

    loop {
        let next = match (left.take(), right.take()) {
            // Ties take from the left to keep the sort stable.
            (Some(mut l), Some(r)) if comparator.compare(&l.value, &r.value) != Ordering::Greater => {
                left = l.next.take();
                right = Some(r);
                l
            },
            (Some(l), Some(mut r)) => {
                right = r.next.take();
                left = Some(l);
                r
            },
            (rest, None) | (None, rest) => {
                *tail = rest;
                break;
            },
        };
        tail = &mut tail.insert(next).next;
    }

    merged
}
