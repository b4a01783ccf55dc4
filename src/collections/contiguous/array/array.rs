use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::traits::pairwise::{pairwise_le, pairwise_partial_cmp};
use crate::collections::traits::{Comparator, Natural, SortOrder};
use crate::util::fmt::{DebugIter, write_separated};
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InvalidRange, InvalidSize};

/// An array that is sized at runtime and owns a single contiguous allocation. Similar to a
/// [`Box<[T]>`](Box<T>), with element-wise arithmetic (see [`Scalar`](super::Scalar) for the scalar
/// forms), in-place sorting and reversal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` / `set` | `O(1)` |
/// | `size` | `O(1)` |
/// | `reverse` | `O(n)` |
/// | `sort` | `O(n^2)`, `O(n)` when already sorted |
/// | arithmetic | `O(n)` |
/// | `clone` | `O(n)` |
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr = Array::from_iter_sized([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the Array has no elements.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Creates a new Array with size 0. No memory is allocated.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw()
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`, returning an [`Err`] if
    /// the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// # use basic_containers::CapacityOverflow;
    /// assert_eq!(Array::<u64>::try_new_uninit(4).map(|arr| arr.size()), Ok(4));
    /// assert_eq!(Array::<u64>::try_new_uninit(usize::MAX).map(|arr| arr.size()), Err(CapacityOverflow));
    /// ```
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, CapacityOverflow> {
        let layout = Array::<MaybeUninit<T>>::try_make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Creates a new Array of `size` elements, where the element at each index is the result of
    /// calling `f` with that index.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr = Array::from_fn(5, |i| i * i);
    /// assert_eq!(&*arr, &[0, 1, 4, 9, 16]);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(size: usize, mut f: F) -> Array<T> {
        let mut arr = Self::new_uninit(size);

        for (index, slot) in arr.iter_mut().enumerate() {
            slot.write(f(index));
        }

        // SAFETY: Every slot has been written. If `f` panicked instead, the uninitialized Array is
        // dropped, which frees the allocation without dropping any elements.
        unsafe { arr.assume_init() }
    }

    /// Creates an Array from an iterator that knows its exact length.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`], or if the iterator yields fewer items
    /// than it reported. Extra items are ignored.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr = Array::from_iter_sized(0..4);
    /// assert_eq!(&*arr, &[0, 1, 2, 3]);
    /// ```
    pub fn from_iter_sized<I>(iter: I) -> Array<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let size = iter.len();
        let mut arr = Self::new_uninit(size);
        let mut written = 0;

        for (slot, item) in arr.iter_mut().zip(iter) {
            slot.write(item);
            written += 1;
        }

        // Leaking the written items is safe, reading uninitialized ones isn't.
        assert!(written == size, "Iterator yielded {written} of {size} reported items!");

        // SAFETY: All `size` values are initialized.
        unsafe { arr.assume_init() }
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// After calling this function, the caller is responsible for the allocated data. The parts can
    /// be used to reconstruct an Array with [`Array::from_parts`], allowing it to be dropped
    /// normally.
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// Nothing is checked during construction. For the produced value to be valid:
    /// - `ptr` needs to be allocated within the global allocator with `Layout::array::<T>(size)`,
    ///   or dangling if that layout has size zero.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.deref().get(index).ok_or(IndexOutOfBounds { index, len: self.size })
    }

    /// Returns a reference to the element at `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Array.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] if it is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.size;
        self.deref_mut().get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Array.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Stores `value` at `index`, returning the value it replaced.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Stores `value` at `index`, returning the value it replaced.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Array.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Reverses the order of the elements in place by swapping pairs from both ends toward the
    /// middle.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let mut arr = Array::from_iter_sized([1, 2, 3, 4]);
    /// arr.reverse();
    /// assert_eq!(&*arr, &[4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.size < 2 {
            return;
        }

        let (mut head, mut tail) = (0, self.size - 1);
        while head < tail {
            self.swap(head, tail);
            head += 1;
            tail -= 1;
        }
    }

    /// Bubble sorts the Array using `comparator`, in the direction given by `order`.
    ///
    /// Each pass carries the largest remaining element to the end of the unsorted region. The sort
    /// finishes early after the first pass that doesn't swap anything. Equal elements are never
    /// swapped, so the sort is stable.
    pub fn sort_by<C: Comparator<T>>(&mut self, order: SortOrder, comparator: C) {
        let n = self.size;
        for pass in 1..n {
            let mut swapped = false;

            for j in 0..n - pass {
                if order.compare(&comparator, &self[j], &self[j + 1]) == Ordering::Greater {
                    self.swap(j, j + 1);
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }
    }

    /// Returns the elements `start..start + count` as a value that displays them separated by
    /// single spaces.
    ///
    /// # Errors
    /// Returns [`InvalidRange`] if `count` is zero or the range reaches past the end of the Array.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr = Array::from_iter_sized(0..6);
    /// assert_eq!(arr.display_range(2, 3).unwrap().to_string(), "2 3 4");
    /// assert!(arr.display_range(4, 3).is_err());
    /// ```
    pub fn display_range(&self, start: usize, count: usize) -> Result<DisplayRange<'_, T>, InvalidRange> {
        let err = InvalidRange { start, count, len: self.size };
        match start.checked_add(count) {
            Some(end) if count >= 1 && end <= self.size => Ok(DisplayRange(&(**self)[start..end])),
            _ => Err(err),
        }
    }
}

impl<T: Display> Array<T> {
    /// Prints the elements `start..start + count` to stdout, separated by single spaces and
    /// followed by a newline. See [`Array::display_range`].
    pub fn print(&self, start: usize, count: usize) -> Result<(), InvalidRange> {
        println!("{}", self.display_range(start, count)?);
        Ok(())
    }
}

impl<T: PartialOrd> Array<T> {
    /// Bubble sorts the Array by the elements' [`PartialOrd`] implementation. See
    /// [`Array::sort_by`].
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// # use basic_containers::collections::traits::SortOrder;
    /// let mut arr = Array::from_iter_sized([3, 1, 2]);
    /// arr.sort(SortOrder::Descending);
    /// assert_eq!(&*arr, &[3, 2, 1]);
    /// ```
    pub fn sort(&mut self, order: SortOrder) {
        self.sort_by(order, Natural);
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        Self::from_fn(count, |_| T::default())
    }

    /// Creates an Array of `size` default values, returning an [`Err`] if `size` is negative.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`]. Use [`Array::try_new_uninit`] to
    /// handle that case as a [`CapacityOverflow`] error.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr = Array::<i32>::try_with_size(3).unwrap();
    /// assert_eq!(&*arr, &[0, 0, 0]);
    /// assert!(Array::<i32>::try_with_size(-1).is_err());
    /// ```
    pub fn try_with_size(size: isize) -> Result<Array<T>, InvalidSize> {
        let count = usize::try_from(size).map_err(|_| InvalidSize { size })?;
        Ok(Self::repeat_default(count))
    }

    /// Creates an Array of `size` default values.
    ///
    /// # Panics
    /// Panics if `size` is negative or memory layout size exceeds [`isize::MAX`].
    pub fn with_size(size: isize) -> Array<T> {
        Self::try_with_size(size).throw()
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new `Array<T>` with `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr = Array::repeat_item(5, 3);
    /// assert_eq!(&*arr, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Array<T> {
        Self::from_fn(count, |_| item.clone())
    }
}

impl<T> Array<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Self::try_make_layout(size).throw()
    }

    pub(crate) fn try_make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T, so the allocation is valid for an
        // Array<T> of the same size. Initialization is up to the caller.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: The pointer is nonnull, properly aligned and refers to `size` initialized
        // values which are never used again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents access throughout 'a.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_iter_sized(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

/// Arrays are compared pairwise: `a <= b` holds when no element of `a` is greater than the element
/// at the same index in `b` and `a` is no larger than `b`.
///
/// This is only a partial order. For elements that aren't ordered with themselves, such as
/// [`f64::NAN`], `a <= b` can hold while neither `a < b` nor `a == b` does, and
/// [`partial_cmp`](PartialOrd::partial_cmp) returns [`None`].
impl<T: PartialOrd> PartialOrd for Array<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        pairwise_partial_cmp(self.iter(), self.size, other.iter(), other.size, self == other)
    }

    fn le(&self, other: &Self) -> bool {
        pairwise_le(self.iter(), self.size, other.iter(), other.size)
    }

    fn ge(&self, other: &Self) -> bool {
        pairwise_le(other.iter(), other.size, self.iter(), self.size)
    }
}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugIter(self.iter()))
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Display> Display for Array<T> {
    /// Formats the Array as `{e0, e1, ..., eN-1}`. An empty Array produces no output.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        write!(f, "{{")?;
        write_separated(f, self.iter(), ", ")?;
        write!(f, "}}")
    }
}

/// A validated range of an [`Array`], displayed as its elements separated by single spaces. See
/// [`Array::display_range`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayRange<'a, T>(&'a [T]);

impl<T: Display> Display for DisplayRange<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_separated(f, self.0.iter(), " ")
    }
}
