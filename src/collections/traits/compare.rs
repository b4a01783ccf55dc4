use std::cmp::Ordering;
use std::ops::Sub;

use derive_more::IsVariant;

/// A three-way comparison between two values, used by the sorting methods of the collections in
/// this crate.
///
/// Sorting only ever asks whether the left element is [`Greater`](Ordering::Greater) than the right
/// one, so implementations are free to return [`Equal`](Ordering::Equal) for values that can't be
/// ordered.
///
/// Any closure with the signature `Fn(&T, &T) -> Ordering` is a Comparator.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use basic_containers::collections::traits::{Comparator, Natural, SortOrder};
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ccc", &"a"), Ordering::Greater);
/// assert_eq!(SortOrder::Descending.compare(&by_len, &"ccc", &"a"), Ordering::Less);
/// assert_eq!(Natural.compare(&"a", &"b"), Ordering::Less);
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares elements with their [`PartialOrd`] implementation. `a > b` is
/// [`Greater`](Ordering::Greater), `a < b` is [`Less`](Ordering::Less) and anything else is
/// [`Equal`](Ordering::Equal).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if a > b {
            Ordering::Greater
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// Compares numeric elements by the sign of their difference: `a - b` is measured against
/// `T::default()`, which is expected to be zero.
///
/// The subtraction must not overflow for the elements being sorted, which in practice limits this
/// comparator to signed and floating point types.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Difference;

impl<T> Comparator<T> for Difference
where
    T: Sub<Output = T> + Clone + Default + PartialOrd,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let diff = a.clone() - b.clone();
        diff.partial_cmp(&T::default()).unwrap_or(Ordering::Equal)
    }
}

/// The direction that a sort should leave elements in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Compares `a` and `b` with `comparator`, reversing the result for
    /// [`Descending`](SortOrder::Descending) order.
    pub fn compare<T: ?Sized, C: Comparator<T> + ?Sized>(
        self,
        comparator: &C,
        a: &T,
        b: &T,
    ) -> Ordering {
        match self {
            SortOrder::Ascending => comparator.compare(a, b),
            SortOrder::Descending => comparator.compare(b, a),
        }
    }
}

impl From<bool> for SortOrder {
    /// `true` is ascending and `false` is descending.
    fn from(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}
