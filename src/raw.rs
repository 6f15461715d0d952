//! Uninitialized storage for a fixed number of elements.
//!
//! [`RawBlock`] only owns the allocation. It never reads, writes or drops elements, tracking which
//! slots hold live values is up to the owner.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::{Result, VectorError};

pub struct RawBlock<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBlock uniquely owns its allocation, same as Box<[T]>.
unsafe impl<T: Send> Send for RawBlock<T> {}
unsafe impl<T: Sync> Sync for RawBlock<T> {}

impl<T> RawBlock<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty block without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates uninitialized storage for `capacity` elements.
    ///
    /// Zero-sized types and a zero `capacity` never touch the allocator.
    pub fn allocate(capacity: usize) -> Result<Self> {
        if Self::IS_ZST || capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| VectorError::CapacityOverflow)?;

        // SAFETY: `layout` has a non-zero size, checked above.
        let ptr = unsafe { alloc::alloc(layout) } as *mut T;

        match NonNull::new(ptr) {
            Some(ptr) => Ok(Self {
                ptr,
                cap: capacity,
                _marker: PhantomData,
            }),
            None => Err(VectorError::AllocFailed {
                size: layout.size(),
                align: layout.align(),
            }),
        }
    }

    #[inline]
    pub fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Number of slots. Always `usize::MAX` for zero-sized types.
    #[inline]
    pub fn capacity(&self) -> usize {
        if Self::IS_ZST {
            usize::MAX
        } else {
            self.cap
        }
    }
}

impl<T> Default for RawBlock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBlock<T> {
    fn drop(&mut self) {
        if Self::IS_ZST || self.cap == 0 {
            return;
        }

        // SAFETY: The same layout was validated by `Layout::array` when the block was allocated,
        // and `ptr` came from the global allocator with exactly that layout.
        unsafe {
            let layout =
                Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>());
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

/// Turns a failed allocation on an infallible code path into the matching abort or panic.
#[cold]
#[inline(never)]
pub(crate) fn handle_error(err: VectorError) -> ! {
    match err {
        VectorError::AllocFailed { size, align } => match Layout::from_size_align(size, align) {
            Ok(layout) => alloc::handle_alloc_error(layout),
            Err(_) => panic!("{}", VectorError::CapacityOverflow),
        },
        other => panic!("{other}"),
    }
}
