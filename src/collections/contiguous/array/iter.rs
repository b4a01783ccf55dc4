use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop};
use std::ptr::{self, NonNull};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, size) = self.into_parts();
        IntoIter {
            // SAFETY: The parts are taken straight from a valid Array, which now belongs to the
            // iterator. ManuallyDrop keeps it from dropping elements that have been moved out.
            buf: ManuallyDrop::new(unsafe { Array::from_parts(ptr, size) }),
            start: 0,
            end: size,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over an [`Array`]. See [`Array::into_iter`].
///
/// Only the elements in `start..end` are still owned by the iterator. The allocation itself is
/// released when the iterator is dropped.
pub struct IntoIter<T> {
    pub(crate) buf: ManuallyDrop<Array<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> IntoIter<T> {
    fn base(&self) -> NonNull<T> {
        self.buf.ptr
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Elements in start..end haven't been read out and are still initialized. The
        // pointer offset stays within the allocation.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.base().add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        // Drop the Array as if it held uninitialized values, so that only the allocation is
        // released.
        // SAFETY: The buffer is never used again after this point.
        let buf = unsafe { ManuallyDrop::take(&mut self.buf) };
        drop(buf.into_parts_uninit());
    }
}

impl<T> Array<T> {
    /// Reinterprets the Array as uninitialized so that dropping it only frees the allocation.
    fn into_parts_uninit(self) -> Array<mem::MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The value at start is initialized and is moved out exactly once, because
            // start is advanced straight after.
            let value = unsafe { self.base().add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The value at the newly decremented end is initialized and won't be read
            // again.
            let value = unsafe { self.base().add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}
