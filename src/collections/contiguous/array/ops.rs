//! Element-wise arithmetic for [`Array`].
//!
//! Two Arrays are combined element by element and must have the same size. The `try_*` methods
//! return [`SizeMismatch`] when they don't, while the operators panic with the same error. A single
//! value applied to every element is wrapped in [`Scalar`] to keep it apart from the Array forms.
//!
//! # Examples
//! ```
//! # use basic_containers::collections::contiguous::{Array, Scalar};
//! let arr = Array::from_iter_sized(0..10);
//! assert_eq!(&*(&arr * &arr), &[0, 1, 4, 9, 16, 25, 36, 49, 64, 81]);
//!
//! let mut arr = Array::from_iter_sized([1, 2, 3]);
//! arr += Scalar(10);
//! assert_eq!(&*arr, &[11, 12, 13]);
//! assert_eq!(&*(Scalar(20) - &arr), &[9, 8, 7]);
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::Array;
#[doc(inline)]
pub use crate::util::error::SizeMismatch;
use crate::util::result::ResultExtension;

/// A single value applied to every element of an [`Array`] by the arithmetic operators.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scalar<T>(pub T);

impl<T> Array<T> {
    fn check_same_size(&self, other: &Array<T>) -> Result<(), SizeMismatch> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(SizeMismatch { left: self.size, right: other.size })
        }
    }
}

macro_rules! impl_elementwise_op {
    (
        $Op:ident, $op:ident, $try_op:ident,
        $OpAssign:ident, $op_assign:ident, $try_op_assign:ident,
        $symbol:literal
    ) => {
        impl<T: $OpAssign + Clone> Array<T> {
            #[doc = concat!("Applies `", $symbol, "=` to each element with the element at the same")]
            #[doc = "index in `rhs`."]
            ///
            /// # Errors
            /// Returns [`SizeMismatch`] without modifying `self` if the sizes differ.
            pub fn $try_op_assign(&mut self, rhs: &Array<T>) -> Result<(), SizeMismatch> {
                self.check_same_size(rhs)?;
                for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
                    lhs.$op_assign(rhs.clone());
                }
                Ok(())
            }

            #[doc = concat!("Returns a new Array holding `self[i] ", $symbol, " rhs[i]` for every")]
            #[doc = "index."]
            ///
            /// # Errors
            /// Returns [`SizeMismatch`] if the sizes differ.
            pub fn $try_op(&self, rhs: &Array<T>) -> Result<Array<T>, SizeMismatch> {
                self.check_same_size(rhs)?;
                let mut result = self.clone();
                result.$try_op_assign(rhs)?;
                Ok(result)
            }
        }

        impl<T: $OpAssign + Clone> $OpAssign<&Array<T>> for Array<T> {
            /// # Panics
            /// Panics if the sizes differ.
            fn $op_assign(&mut self, rhs: &Array<T>) {
                self.$try_op_assign(rhs).throw()
            }
        }

        impl<T: $OpAssign + Clone> $OpAssign<Array<T>> for Array<T> {
            fn $op_assign(&mut self, rhs: Array<T>) {
                self.$try_op_assign(&rhs).throw()
            }
        }

        impl<T: $OpAssign + Clone> $OpAssign<Scalar<T>> for Array<T> {
            fn $op_assign(&mut self, rhs: Scalar<T>) {
                for lhs in self.iter_mut() {
                    lhs.$op_assign(rhs.0.clone());
                }
            }
        }

        impl<T: $OpAssign + Clone> $Op<&Array<T>> for &Array<T> {
            type Output = Array<T>;

            fn $op(self, rhs: &Array<T>) -> Array<T> {
                self.$try_op(rhs).throw()
            }
        }

        impl<T: $OpAssign + Clone> $Op<&Array<T>> for Array<T> {
            type Output = Array<T>;

            fn $op(mut self, rhs: &Array<T>) -> Array<T> {
                self.$op_assign(rhs);
                self
            }
        }

        impl<T: $OpAssign + Clone> $Op<Array<T>> for Array<T> {
            type Output = Array<T>;

            fn $op(mut self, rhs: Array<T>) -> Array<T> {
                self.$op_assign(&rhs);
                self
            }
        }

        impl<T: $OpAssign + Clone> $Op<Scalar<T>> for Array<T> {
            type Output = Array<T>;

            fn $op(mut self, rhs: Scalar<T>) -> Array<T> {
                self.$op_assign(rhs);
                self
            }
        }

        impl<T: $OpAssign + Clone> $Op<Scalar<T>> for &Array<T> {
            type Output = Array<T>;

            fn $op(self, rhs: Scalar<T>) -> Array<T> {
                self.clone().$op(rhs)
            }
        }

        impl<T: $Op<Output = T> + Clone> $Op<Array<T>> for Scalar<T> {
            type Output = Array<T>;

            fn $op(self, mut rhs: Array<T>) -> Array<T> {
                for element in rhs.iter_mut() {
                    *element = self.0.clone().$op(element.clone());
                }
                rhs
            }
        }

        impl<T: $Op<Output = T> + Clone> $Op<&Array<T>> for Scalar<T> {
            type Output = Array<T>;

            fn $op(self, rhs: &Array<T>) -> Array<T> {
                Array::from_iter_sized(rhs.iter().map(|element| self.0.clone().$op(element.clone())))
            }
        }
    };
}

impl_elementwise_op!(Add, add, try_add, AddAssign, add_assign, try_add_assign, "+");
impl_elementwise_op!(Sub, sub, try_sub, SubAssign, sub_assign, try_sub_assign, "-");
impl_elementwise_op!(Mul, mul, try_mul, MulAssign, mul_assign, try_mul_assign, "*");
impl_elementwise_op!(Div, div, try_div, DivAssign, div_assign, try_div_assign, "/");
