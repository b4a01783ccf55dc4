//! Error types shared by the collections in this crate.
//!
//! Each failure is its own small struct so that a method's signature states exactly what can go
//! wrong with it. [`ContainerError`] unites all of them for callers that would rather use `?` over
//! several different operations.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside the initialized elements of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// The memory layout for a requested allocation would exceed [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A collection was requested with a negative number of elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cannot create a collection with negative size {size}!")]
pub struct InvalidSize {
    pub size: isize,
}

/// A range of elements was empty or reached past the end of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Range of {count} elements starting at {start} is invalid for collection with {len} elements!")]
pub struct InvalidRange {
    pub start: usize,
    pub count: usize,
    pub len: usize,
}

/// Two collections combined element by element had different sizes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Element-wise operation on collections of different sizes ({left} and {right})!")]
pub struct SizeMismatch {
    pub left: usize,
    pub right: usize,
}

/// A position was outside the valid range for a linked collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Position {pos} is invalid for list with {len} elements!")]
pub struct InvalidPosition {
    pub pos: usize,
    pub len: usize,
}

/// Any error produced by the collections in this crate.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    InvalidSize(InvalidSize),
    InvalidRange(InvalidRange),
    SizeMismatch(SizeMismatch),
    InvalidPosition(InvalidPosition),
}
