use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::{AllocError, CapacityOverflow, ReserveError};

/// An owned, uninitialized block of memory able to hold `cap` values of `T`. The buffer never
/// reads, writes or drops the values it holds; that is entirely the responsibility of the owning
/// collection, which tracks the initialized region itself.
///
/// Zero-sized types are never allocated: the pointer stays dangling and only `cap` changes.
pub(crate) struct RawBuffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a buffer with capacity 0. No memory is allocated.
    pub(crate) const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a buffer with capacity for exactly `cap` values.
    pub(crate) fn try_with_cap(cap: usize) -> Result<RawBuffer<T>, ReserveError> {
        let mut buf = RawBuffer::new();
        buf.try_realloc(cap)?;
        Ok(buf)
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// A helper function to create a [`Layout`] for `cap` values of `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    /// Changes the capacity of the buffer to exactly `new_cap`, moving the first
    /// `min(cap, new_cap)` slots if the block has to be moved. On an [`Err`], the buffer is left
    /// exactly as it was.
    ///
    /// Any initialized values in slots `>= new_cap` must already have been dropped or moved out
    /// by the caller, they are simply forgotten here.
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        let new_layout = Self::make_layout(new_cap)?;

        let new_ptr = match (self.cap, new_cap) {
            (_, _) if size_of::<T>() == 0 => {
                // Nothing to allocate for a ZST, the dangling pointer is valid for any count.
                self.ptr
            },
            (old, new) if old == new => return Ok(()),
            (0, _) => {
                // SAFETY: new_cap is non-zero and T isn't zero-sized, so the layout has a non-zero
                // size.
                let raw_ptr: *mut T = unsafe { alloc::alloc(new_layout).cast() };

                NonNull::new(raw_ptr).ok_or(AllocError { size: new_layout.size() })?
            },
            (_, 0) => {
                self.dealloc();
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.cap)?;

                // SAFETY: ptr was allocated by the global allocator with old_layout, which has the
                // same alignment as new_layout, and the new size is non-zero and was validated by
                // Layout::array. On failure the old block is left untouched.
                let raw_ptr: *mut T = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_layout.size(),
                    ).cast()
                };

                NonNull::new(raw_ptr).ok_or(AllocError { size: new_layout.size() })?
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Returns the block to the allocator if one is held.
    fn dealloc(&mut self) {
        if size_of::<T>() == 0 || self.cap == 0 {
            return;
        }

        if let Ok(layout) = Self::make_layout(self.cap) {
            // SAFETY: ptr is always allocated in the global allocator with this exact layout while
            // cap is non-zero and T isn't zero-sized.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.dealloc();
    }
}

// SAFETY: RawBuffer uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: RawBuffer exposes no interior mutability.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
