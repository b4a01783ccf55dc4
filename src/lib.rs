//! A pair of basic containers: a runtime-sized [`Array`](collections::contiguous::Array) with
//! element-wise arithmetic and a singly linked [`LinkedList`](collections::linked::LinkedList).
//!
//! # Purpose
//! This crate is a learning exercise in owning memory directly, with no expectation for it to be
//! used in production. The Array manages its own allocation and the LinkedList owns each of its
//! nodes through the node before it.
//!
//! # Error Handling
//! It is more ergonomic for container methods to panic in some cases, because users don't want to
//! be forced to handle an error every time they index into an Array. So every fallible operation
//! comes in two forms: a `try_*` method returning a [`Result`], and a plain method that panics with
//! the same error's message.
//!
//! The errors themselves are strongly typed, with one small struct per failure implementing
//! [`Error`](std::error::Error) and an enum, [`ContainerError`], for callers that want a single
//! type. A failed operation never modifies the container it was called on.
//!
//! # Features
//! Each container sits behind its own feature, `contiguous` and `linked`, both enabled by the
//! default `collections-all` feature.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::*;
