//! Contiguous collection types. Currently this is only [`Array`], a runtime-sized buffer with
//! element-wise arithmetic.

pub mod array;

#[doc(inline)]
pub use array::{Array, Scalar};
