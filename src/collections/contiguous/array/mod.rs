//! A module containing [`Array`] and associated types.
//!
//! Other than [`Array`] itself, this includes [`IntoIter`] for owned iteration, [`Scalar`] for
//! arithmetic with a single value and [`DisplayRange`] for printing part of an Array.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod iter;
mod ops;
mod tests;

pub use array::*;
pub use iter::*;
pub use ops::*;
