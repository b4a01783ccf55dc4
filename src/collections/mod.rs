//! The container types of this crate.
//!
//! # Purpose
//! Two small containers written to learn about ownership of raw buffers and linked nodes: a
//! runtime-sized [`Array`](contiguous::Array) and a singly linked
//! [`LinkedList`](linked::LinkedList).
//!
//! # Method
//! [`Array`](contiguous::Array) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves me from writing some of the more repetitive functionality. Both
//! containers sort through the [`Comparator`](traits::Comparator) capability and compare as wholes
//! with the same pairwise policy.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
