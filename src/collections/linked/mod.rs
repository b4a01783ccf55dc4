//! Linked collection types. Currently this is only [`LinkedList`], a singly linked list with
//! positional operations and a merge sort.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
