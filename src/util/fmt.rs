use std::fmt::{self, Debug, Display, Formatter};

/// Debug-formats every item produced by a cloneable iterator as a list. Used to nest the contents
/// of a collection inside a `debug_struct`.
pub(crate) struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes every item of `iter` using its [`Display`] implementation, separated by `sep`.
pub(crate) fn write_separated<I>(f: &mut Formatter<'_>, iter: I, sep: &str) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut iter = iter.into_iter();
    if let Some(first) = iter.next() {
        write!(f, "{first}")?;
        for item in iter {
            write!(f, "{sep}{item}")?;
        }
    }
    Ok(())
}
