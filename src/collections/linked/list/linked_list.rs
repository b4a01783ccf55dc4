use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node};
use crate::collections::traits::pairwise::{pairwise_le, pairwise_partial_cmp};
use crate::util::fmt::{DebugIter, write_separated};
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::InvalidPosition;

/// A list with links in a single direction, where every node owns the node after it.
///
/// Positions are zero-based. Insertion accepts any position in `0..=len` (inserting before the
/// node currently at that position), while removal and access accept positions in `0..len`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The position of the item in question.
/// - `m`: The number of items in the other LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` / `pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `add` / `rm` / `peek` | `O(i)` |
/// | `merge` | `O(i+m)` |
/// | `reverse` | `O(n)` |
/// | `sort` | `O(n log n)` |
/// | `search` / `contains` | `O(n)` |
///
/// # Merging
/// [`merge`](LinkedList::merge) takes the other list by mutable reference, so merging a list into
/// itself is rejected by the borrow checker rather than corrupting the chain:
/// ```compile_fail,E0499
/// # use basic_containers::collections::linked::LinkedList;
/// let mut list: LinkedList<i32> = (0..3).collect();
/// list.merge(1, &mut list);
/// ```
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Add the provided element to the back of the LinkedList. This walks the whole list.
    pub fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Inserts `value` before the element currently at `pos`, returning an [`Err`] if `pos` is
    /// greater than the length of the list. A `pos` equal to the length appends to the list.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.try_add(0, 3).unwrap();
    /// list.try_add(0, 1).unwrap();
    /// list.try_add(1, 2).unwrap();
    /// assert_eq!(list.to_string(), "1 2 3");
    /// assert!(list.try_add(5, 4).is_err());
    /// ```
    pub fn try_add(&mut self, pos: usize, value: T) -> Result<(), InvalidPosition> {
        let err = InvalidPosition { pos, len: self.len };
        if pos > self.len {
            return Err(err);
        }

        let link = self.link_mut(pos).ok_or(err)?;
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` before the element currently at `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is greater than the length of the list.
    pub fn add(&mut self, pos: usize, value: T) {
        self.try_add(pos, value).throw()
    }

    /// Removes and returns the element at `pos`, returning an [`Err`] if `pos` is out of bounds.
    pub fn try_rm(&mut self, pos: usize) -> Result<T, InvalidPosition> {
        let err = InvalidPosition { pos, len: self.len };
        if pos >= self.len {
            return Err(err);
        }

        let link = self.link_mut(pos).ok_or(err)?;
        let node = link.take().ok_or(err)?;
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the element at `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds of the list.
    pub fn rm(&mut self, pos: usize) -> T {
        self.try_rm(pos).throw()
    }

    /// Returns a reference to the element at `pos` without removing it, returning an [`Err`] if
    /// `pos` is out of bounds.
    pub fn try_peek(&self, pos: usize) -> Result<&T, InvalidPosition> {
        let len = self.len;
        self.iter().nth(pos).ok_or(InvalidPosition { pos, len })
    }

    /// Returns a reference to the element at `pos`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds of the list.
    pub fn peek(&self, pos: usize) -> &T {
        self.try_peek(pos).throw()
    }

    /// Returns a mutable reference to the element at `pos`, returning an [`Err`] if `pos` is out of
    /// bounds.
    pub fn try_peek_mut(&mut self, pos: usize) -> Result<&mut T, InvalidPosition> {
        let len = self.len;
        self.iter_mut().nth(pos).ok_or(InvalidPosition { pos, len })
    }

    /// Returns a mutable reference to the element at `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds of the list.
    pub fn peek_mut(&mut self, pos: usize) -> &mut T {
        self.try_peek_mut(pos).throw()
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    /// Reverses the list in place by relinking each node to the node visited before it.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }

        self.head = reversed;
    }

    /// Moves every element of `other` into this list, before the element currently at `pos`.
    /// `other` is left empty.
    ///
    /// On an [`Err`], neither list is modified.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::linked::LinkedList;
    /// let mut list: LinkedList<i32> = [1, 4].into_iter().collect();
    /// let mut other: LinkedList<i32> = [2, 3].into_iter().collect();
    /// list.try_merge(1, &mut other).unwrap();
    /// assert_eq!(list.to_string(), "1 2 3 4");
    /// assert!(other.is_empty());
    /// ```
    pub fn try_merge(&mut self, pos: usize, other: &mut LinkedList<T>) -> Result<(), InvalidPosition> {
        let err = InvalidPosition { pos, len: self.len };
        if pos > self.len {
            return Err(err);
        }

        let added = other.len;
        let link = self.link_mut(pos).ok_or(err)?;
        let rest = link.take();
        *link = other.head.take();
        other.len = 0;

        let mut tail = link;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        *tail = rest;

        self.len += added;
        Ok(())
    }

    /// Moves every element of `other` into this list, before the element currently at `pos`,
    /// panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is greater than the length of the list.
    pub fn merge(&mut self, pos: usize, other: &mut LinkedList<T>) {
        self.try_merge(pos, other).throw()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns the link that points at the node at `pos`, or [`None`] if the chain is shorter than
    /// `pos`. The link at `len` is the empty link after the last node.
    pub(crate) fn link_mut(&mut self, pos: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..pos {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of every element equal to `key`, in **descending** order.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::linked::LinkedList;
    /// let list: LinkedList<char> = "abacada".chars().collect();
    /// assert_eq!(list.search(&'a').to_string(), "6 4 2 0");
    /// assert!(list.search(&'z').is_empty());
    /// ```
    pub fn search(&self, key: &T) -> LinkedList<usize> {
        let mut matches = LinkedList::new();
        for (pos, value) in self.iter().enumerate() {
            if value == key {
                matches.push_front(pos);
            }
        }
        matches
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|value| value == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T: Display> LinkedList<T> {
    /// Prints the elements to stdout, separated by single spaces and followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.peek(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.peek_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }

        // Counted per node, `len` stays accurate if `iter` panics.
        for value in iter {
            tail = &mut tail.insert(Node::boxed(value, None)).next;
            self.len += 1;
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time, dropping the whole chain recursively could overflow the stack.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Lists are compared pairwise: `a <= b` holds when no element of `a` is greater than the element
/// at the same position in `b` and `a` is no longer than `b`.
///
/// This is only a partial order. For elements that aren't ordered with themselves, such as
/// [`f64::NAN`], `a <= b` can hold while neither `a < b` nor `a == b` does, and
/// [`partial_cmp`](PartialOrd::partial_cmp) returns [`None`].
impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        pairwise_partial_cmp(self.iter(), self.len, other.iter(), other.len, self == other)
    }

    fn le(&self, other: &Self) -> bool {
        pairwise_le(self.iter(), self.len, other.iter(), other.len)
    }

    fn ge(&self, other: &Self) -> bool {
        pairwise_le(other.iter(), other.len, self.iter(), self.len)
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    /// Formats the elements separated by single spaces.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_separated(f, self.iter(), " ")
    }
}
