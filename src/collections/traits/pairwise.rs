//! The ordering policy shared by [`Array`](crate::collections::contiguous::Array) and
//! [`LinkedList`](crate::collections::linked::LinkedList).
//!
//! `lhs <= rhs` holds when no element of `lhs` is greater than the element at the same position in
//! `rhs` (looking only at the shorter length) and `lhs` is no longer than `rhs`. This isn't a total
//! order: `[1, 5]` and `[2, 3]` are incomparable.

use std::cmp::Ordering;

/// Evaluates `lhs <= rhs` under the pairwise policy.
pub(crate) fn pairwise_le<'a, T, L, R>(lhs: L, lhs_len: usize, rhs: R, rhs_len: usize) -> bool
where
    T: PartialOrd + 'a,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
{
    lhs.into_iter()
        .zip(rhs)
        .all(|(l, r)| l.partial_cmp(r) != Some(Ordering::Greater))
        && lhs_len <= rhs_len
}

/// Derives a [`PartialOrd::partial_cmp`] result from the pairwise policy, given whether the two
/// sides are equal.
pub(crate) fn pairwise_partial_cmp<'a, T, I>(
    lhs: I,
    lhs_len: usize,
    rhs: I,
    rhs_len: usize,
    equal: bool,
) -> Option<Ordering>
where
    T: PartialOrd + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    if equal {
        return Some(Ordering::Equal);
    }

    match (
        pairwise_le(lhs.clone(), lhs_len, rhs.clone(), rhs_len),
        pairwise_le(rhs, rhs_len, lhs, lhs_len),
    ) {
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        // Both holding without equality only happens for elements that aren't ordered with
        // themselves, such as NaN.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(lhs: &[i32], rhs: &[i32]) -> Option<Ordering> {
        pairwise_partial_cmp(lhs.iter(), lhs.len(), rhs.iter(), rhs.len(), lhs == rhs)
    }

    #[test]
    fn test_pairwise_policy() {
        assert_eq!(cmp(&[1, 2, 3], &[1, 2, 3]), Some(Ordering::Equal));
        assert_eq!(cmp(&[1, 2], &[1, 3]), Some(Ordering::Less));
        assert_eq!(cmp(&[1, 2], &[1, 2, 0]), Some(Ordering::Less), "A prefix is the lesser side.");
        assert_eq!(cmp(&[4, 4, 4], &[1, 1]), Some(Ordering::Greater));
        assert_eq!(cmp(&[1, 5], &[2, 3]), None, "Crossing elements are incomparable.");
        assert_eq!(cmp(&[], &[]), Some(Ordering::Equal));
        assert_eq!(cmp(&[], &[7]), Some(Ordering::Less));

        assert!(pairwise_le([1.0, f64::NAN].iter(), 2, [1.0, f64::NAN].iter(), 2));
        assert!(!pairwise_le([2].iter(), 1, [1].iter(), 1));
    }
}
