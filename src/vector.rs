//! A contiguous growable array with explicit control over its storage.
//!
//! [`Vector`] keeps its elements in a single [`RawBlock`], exclusively owned. Only the first `len`
//! slots of that block hold live values, everything past them is raw storage that is never read or
//! dropped.
//!
//! # Positions
//!
//! Element positions are plain `usize` indices. Borrowed views of the elements (slices, iterators,
//! references returned by [`Vector::at`]) can not be held across any mutating call, so the
//! invalidation caused by reallocation or shifting is rejected at compile time. An index obtained
//! earlier stays a valid number, but after an insert or erase at or before it, it names whatever
//! element was shifted into that slot.

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop};
use std::ops::{Bound, Deref, DerefMut, Index, IndexMut, RangeBounds};
use std::ptr;
use std::slice::{self, SliceIndex};

use crate::error::{Result, VectorError};
use crate::raw::{self, RawBlock};

pub struct Vector<T> {
    buf: RawBlock<T>,
    /// Number of constructed elements at the start of `buf`.
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector. Nothing is allocated until an element is added.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBlock::new(),
            len: 0,
        }
    }

    /// Creates an empty vector able to hold at least `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut v = Self::new();
        v.reserve(capacity);
        v
    }

    /// Creates a vector holding `n` clones of `value`.
    pub fn from_elem(n: usize, value: &T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(n);
        for _ in 0..n {
            v.push_back(value.clone());
        }
        v
    }

    /// Creates a vector holding `n` default constructed elements.
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::with_capacity(n);
        for _ in 0..n {
            v.push_back(T::default());
        }
        v
    }

    /// Creates a vector holding clones of `items`, in order.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(items.len());
        v.extend(items.iter().cloned());
        v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The largest length a vector of `T` could theoretically reach.
    pub fn max_size(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Ensures the capacity is at least `n`, reporting allocation failure instead of aborting.
    ///
    /// Growth starts at one slot and doubles until `n` fits. Every live element is relocated into
    /// the new block in ascending order. The old block is only released, and the new capacity only
    /// published, after the new block was successfully allocated, so on error the vector is
    /// unchanged.
    pub fn try_reserve(&mut self, n: usize) -> Result<()> {
        let cap = self.capacity();
        if n <= cap {
            return Ok(());
        }

        let mut new_cap = cap.max(1);
        while new_cap < n {
            new_cap = new_cap
                .checked_mul(2)
                .ok_or(VectorError::CapacityOverflow)?;
        }

        let new_buf = RawBlock::allocate(new_cap)?;

        // SAFETY: The first `len` slots of `buf` are initialized, `new_buf` has room for at least
        // `len` elements and the two blocks are distinct allocations. After the copy the old slots
        // are logically uninitialized, dropping the old block only frees the storage.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr(), new_buf.ptr(), self.len);
        }
        self.buf = new_buf;

        Ok(())
    }

    /// Ensures the capacity is at least `n`.
    ///
    /// # Panics
    ///
    /// Panics if the required size overflows, aborts via [`std::alloc::handle_alloc_error`] if the
    /// allocator fails.
    pub fn reserve(&mut self, n: usize) {
        if let Err(err) = self.try_reserve(n) {
            raw::handle_error(err);
        }
    }

    fn reserve_additional(&mut self, additional: usize) {
        match self.len.checked_add(additional) {
            Some(n) => self.reserve(n),
            None => raw::handle_error(VectorError::CapacityOverflow),
        }
    }

    /// Appends `value` at index `len`, growing the storage if it is full.
    ///
    /// Amortized *O*(1).
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.reserve_additional(1);
        }

        // SAFETY: `len < capacity`, so the slot is inside the block and uninitialized.
        unsafe {
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes the last element and returns it.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(VectorError::Empty);
        }

        self.len -= 1;
        // SAFETY: The slot at the old `len - 1` was initialized and is now outside the live
        // prefix, so ownership moves to the caller exactly once.
        unsafe { Ok(ptr::read(self.buf.ptr().add(self.len))) }
    }

    /// Drops every element at index `n` and above. Does nothing if `n >= len`.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.len {
            return;
        }

        let tail_len = self.len - n;
        // The length is lowered first, if a destructor panics the rest of the tail is leaked and
        // never dropped twice.
        self.len = n;
        // SAFETY: `[n, n + tail_len)` was the initialized tail and is no longer reachable.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(n), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes to `n` elements, appending clones of `fill` or dropping from the back.
    pub fn resize(&mut self, n: usize, fill: &T)
    where
        T: Clone,
    {
        if n > self.len {
            self.reserve(n);
            while self.len < n {
                self.push_back(fill.clone());
            }
        } else {
            self.truncate(n);
        }
    }

    /// Resizes to `n` elements, appending `T::default()` or dropping from the back.
    pub fn resize_default(&mut self, n: usize)
    where
        T: Default,
    {
        if n > self.len {
            self.reserve(n);
            while self.len < n {
                self.push_back(T::default());
            }
        } else {
            self.truncate(n);
        }
    }

    /// Drops all elements and releases the storage. Afterwards `len == capacity == 0`.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.buf = RawBlock::new();
    }

    /// Replaces the contents with the items of `iter`, keeping the current storage.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.truncate(0);
        self.extend(iter);
    }

    /// Replaces the contents with `n` clones of `value`, keeping the current storage.
    pub fn assign_n(&mut self, n: usize, value: &T)
    where
        T: Clone,
    {
        self.truncate(0);
        self.resize(n, value);
    }

    /// Checked element access.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(VectorError::Empty)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(VectorError::Empty)
    }

    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(VectorError::Empty)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(VectorError::Empty)
    }

    /// Inserts `value` before position `pos`, shifting `[pos, len)` one slot to the right.
    ///
    /// `pos == len` appends. Returns the position of the inserted element.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize> {
        let len = self.len;
        if pos > len {
            return Err(VectorError::OutOfRange { index: pos, len });
        }

        if len == self.capacity() {
            self.reserve_additional(1);
        }

        // SAFETY: There is room for one more element. `ptr::copy` moves the tail one slot right,
        // starting from its last element, which leaves the slot at `pos` logically uninitialized
        // and ready for `value`.
        unsafe {
            let p = self.buf.ptr().add(pos);
            if pos < len {
                ptr::copy(p, p.add(1), len - pos);
            }
            ptr::write(p, value);
        }
        self.len = len + 1;

        Ok(pos)
    }

    /// Inserts `n` clones of `value` before position `pos`, returning `pos`.
    ///
    /// The relative order of the existing elements is preserved.
    pub fn insert_n(&mut self, pos: usize, n: usize, value: &T) -> Result<usize>
    where
        T: Clone,
    {
        self.insert_range(pos, (0..n).map(|_| value.clone()))
    }

    /// Inserts the items of `iter` before position `pos`, in iteration order, returning `pos`.
    ///
    /// Any iterator is accepted, including single pass ones. The items are appended to the back
    /// first and then rotated into place, which keeps the vector fully initialized at every step.
    /// If `iter` panics, the items it produced so far remain at the back of the vector.
    pub fn insert_range<I>(&mut self, pos: usize, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let old_len = self.len;
        if pos > old_len {
            return Err(VectorError::OutOfRange {
                index: pos,
                len: old_len,
            });
        }

        self.extend(iter);

        let inserted = self.len - old_len;
        if inserted != 0 && pos != old_len {
            self.as_mut_slice()[pos..].rotate_right(inserted);
        }

        Ok(pos)
    }

    /// Inserts clones of `items` before position `pos`, returning `pos`.
    pub fn insert_slice(&mut self, pos: usize, items: &[T]) -> Result<usize>
    where
        T: Clone,
    {
        if pos <= self.len {
            self.reserve_additional(items.len());
        }
        self.insert_range(pos, items.iter().cloned())
    }

    /// Removes the element at `pos`, shifting everything after it one slot to the left.
    ///
    /// Returns `pos`, which now holds the following element or equals `len`.
    pub fn erase(&mut self, pos: usize) -> Result<usize> {
        self.erase_range(pos..pos.saturating_add(1))
            .map_err(|_| VectorError::OutOfRange {
                index: pos,
                len: self.len,
            })
    }

    /// Removes the elements in `range`, shifting the remainder left. Returns the start of the
    /// range.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize> {
        let len = self.len;
        let (start, end) = checked_bounds(range, len)?;

        if start == end {
            return Ok(start);
        }

        // Moves the tail down once the range is dropped, even if one of the destructors panics.
        struct ShiftTail<'a, T> {
            vec: &'a mut Vector<T>,
            start: usize,
            end: usize,
            old_len: usize,
        }

        impl<T> Drop for ShiftTail<'_, T> {
            fn drop(&mut self) {
                let tail_len = self.old_len - self.end;
                // SAFETY: `[end, old_len)` is still initialized and `[start, end)` has been
                // dropped. Shifting left means reading ahead of the destination, `ptr::copy`
                // handles the overlap.
                unsafe {
                    let base = self.vec.buf.ptr();
                    ptr::copy(base.add(self.end), base.add(self.start), tail_len);
                }
                self.vec.len = self.start + tail_len;
            }
        }

        // Everything from `start` on is unreachable until the guard restores the length.
        self.len = start;
        let guard = ShiftTail {
            vec: self,
            start,
            end,
            old_len: len,
        };

        // SAFETY: `[start, end)` is in bounds and initialized, checked above.
        unsafe {
            let erased = ptr::slice_from_raw_parts_mut(guard.vec.buf.ptr().add(start), end - start);
            ptr::drop_in_place(erased);
        }

        drop(guard);
        Ok(start)
    }

    /// Exchanges storage, length and capacity with `other`. No element is moved, cloned or
    /// dropped.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is non-null and aligned even without allocation, and the first `len` slots
        // are initialized.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: See `as_slice`, plus `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }
}

fn checked_bounds<R: RangeBounds<usize>>(range: R, len: usize) -> Result<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok((start, end)),
        (start, end) => Err(VectorError::InvalidRange {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: Drops exactly the initialized prefix. The block itself is freed by `RawBlock`.
        unsafe {
            ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_additional(lower);
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        v.extend(items);
        v
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let v = ManuallyDrop::new(self);
        // SAFETY: `v` is never dropped, so the block is moved out exactly once.
        let buf = unsafe { ptr::read(&v.buf) };
        IntoIter {
            buf,
            start: 0,
            end: v.len,
        }
    }
}

/// An iterator that moves elements out of a [`Vector`], from either end.
///
/// Elements that are not consumed are dropped with the iterator.
pub struct IntoIter<T> {
    buf: RawBlock<T>,
    /// `[start, end)` are the slots still holding live elements.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` is initialized.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let index = self.start;
        self.start += 1;
        // SAFETY: `index` was inside the live range and is now outside of it.
        unsafe { Some(ptr::read(self.buf.ptr().add(index))) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The old `end - 1` was inside the live range and is now outside of it.
        unsafe { Some(ptr::read(self.buf.ptr().add(self.end))) }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only the unconsumed elements are dropped, the block is freed by `RawBlock`.
        unsafe {
            let remaining = ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(self.start),
                self.end - self.start,
            );
            ptr::drop_in_place(remaining);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

/// Creates a [`Vector`] from a list of elements or from `value; count`.
#[macro_export]
macro_rules! vector {
    () => {
        $crate::vector::Vector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::vector::Vector::from_elem($n, &$elem)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::vector::Vector::from([$($elem),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_allocate() {
        let v = Vector::<String>::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn growth_doubles_from_one() {
        let mut v = Vector::new();
        let mut seen = vec![v.capacity()];
        for i in 0..17 {
            v.push_back(i);
            if *seen.last().unwrap() != v.capacity() {
                seen.push(v.capacity());
            }
        }
        assert_eq!(seen, [0, 1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn reserve_relocates_once() {
        let mut v = Vector::new();
        v.push_back(String::from("x"));
        v.reserve(100);
        assert_eq!(v.capacity(), 128);
        let ptr = v.as_ptr();
        for _ in 0..99 {
            v.push_back(String::from("y"));
        }
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.len(), 100);

        v.reserve(10);
        assert_eq!(v.capacity(), 128);
    }

    #[test]
    fn try_reserve_overflow_leaves_vector_untouched() {
        let mut v: Vector<u64> = vector![1, 2, 3];
        let cap = v.capacity();

        assert_eq!(v.try_reserve(usize::MAX), Err(VectorError::CapacityOverflow));
        assert_eq!(v.capacity(), cap);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn checked_access() {
        let mut v: Vector<i32> = vector![10, 20, 30];
        assert_eq!(v.at(1), Ok(&20));
        assert_eq!(v.at(3), Err(VectorError::OutOfRange { index: 3, len: 3 }));
        *v.at_mut(0).unwrap() = 11;
        assert_eq!(v.front(), Ok(&11));
        assert_eq!(v.back(), Ok(&30));

        let mut empty = Vector::<i32>::new();
        assert_eq!(empty.front(), Err(VectorError::Empty));
        assert_eq!(empty.back_mut(), Err(VectorError::Empty));
        assert_eq!(empty.pop_back(), Err(VectorError::Empty));
    }

    #[test]
    fn insert_positions() {
        let mut v: Vector<i32> = Vector::new();
        assert_eq!(v.insert(0, 2), Ok(0));
        assert_eq!(v.insert(0, 0), Ok(0));
        assert_eq!(v.insert(1, 1), Ok(1));
        assert_eq!(v.insert(3, 3), Ok(3));
        assert_eq!(v, [0, 1, 2, 3]);
        assert_eq!(v.insert(5, 9), Err(VectorError::OutOfRange { index: 5, len: 4 }));
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn erase_positions() {
        let mut v: Vector<i32> = (0..6).collect();
        assert_eq!(v.erase(0), Ok(0));
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(v.erase(4), Ok(4));
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.erase(4), Err(VectorError::OutOfRange { index: 4, len: 4 }));
        assert_eq!(v.erase_range(1..3), Ok(1));
        assert_eq!(v, [1, 4]);
        assert_eq!(v.erase_range(1..1), Ok(1));
        assert_eq!(
            v.erase_range(1..5),
            Err(VectorError::InvalidRange { start: 1, end: 5, len: 2 })
        );
        assert_eq!(v.erase_range(..), Ok(0));
        assert!(v.is_empty());
    }

    #[test]
    fn clear_releases_storage() {
        let mut v: Vector<String> = vector![String::from("a"); 10];
        assert!(v.capacity() >= 10);
        v.clear();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        v.push_back(String::from("b"));
        assert_eq!(v, ["b"]);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = Vector::new();
        for _ in 0..1000 {
            v.push_back(());
        }
        assert_eq!(v.len(), 1000);
        assert_eq!(v.capacity(), usize::MAX);
        assert_eq!(v.insert(500, ()), Ok(500));
        assert_eq!(v.erase_range(0..10), Ok(0));
        assert_eq!(v.len(), 991);
        assert_eq!(v.pop_back(), Ok(()));
        assert_eq!(v.into_iter().count(), 990);
    }

    #[test]
    fn max_size() {
        assert_eq!(Vector::<u8>::new().max_size(), isize::MAX as usize);
        assert_eq!(Vector::<u64>::new().max_size(), isize::MAX as usize / 8);
        assert_eq!(Vector::<()>::new().max_size(), usize::MAX);
    }

    #[test]
    fn into_iter_both_ends() {
        let v: Vector<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let mut it = v.into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.next_back().as_deref(), Some("d"));
        assert_eq!(it.as_slice(), ["b", "c"]);
    }

    #[test]
    fn vector_macro() {
        let empty: Vector<i32> = vector![];
        assert!(empty.is_empty());
        assert_eq!(vector![1, 2, 3], [1, 2, 3]);
        assert_eq!(vector!["a"; 2], ["a", "a"]);
    }
}
