use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An untyped-length heap buffer: a pointer plus a capacity, with no idea which slots hold
/// initialized values. The owner is responsible for dropping elements; this type only manages
/// the allocation itself.
///
/// Zero-sized element types never allocate. The capacity is still recorded so that the owner's
/// bookkeeping stays uniform.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a buffer with capacity 0 and no allocation.
    pub const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a buffer with the exact provided capacity.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> RawBuffer<T> {
        let mut buf = Self::new();
        buf.resize(cap);
        buf
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Reallocates the buffer to hold exactly `new_cap` elements, preserving the bytes of the
    /// overlapping prefix. Slots beyond the old capacity are uninitialized.
    ///
    /// # Panics
    /// Panics if the new memory layout size would exceed [`isize::MAX`].
    pub fn resize(&mut self, new_cap: usize) {
        if size_of::<T>() == 0 || new_cap == self.cap {
            // Zero-sized values occupy no storage, so only the recorded capacity changes.
            self.cap = new_cap;
            return;
        }

        if new_cap == 0 {
            // SAFETY: cap != new_cap and T isn't zero-sized, so an allocation with this exact
            // layout exists.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap));
            }
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return;
        }

        let new_layout = Self::layout(new_cap);
        let raw_ptr: *mut T = if self.cap == 0 {
            // SAFETY: The layout has non-zero size because zero-sized types and new_cap == 0
            // are both handled above.
            unsafe { alloc::alloc(new_layout).cast() }
        } else {
            // SAFETY: The pointer was allocated in the global allocator with the layout for the
            // old capacity, and the new size is non-zero and validated by Layout::array.
            unsafe {
                alloc::realloc(self.ptr.as_ptr().cast(), Self::layout(self.cap), new_layout.size())
                    .cast()
            }
        };

        self.ptr = NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout));
        self.cap = new_cap;
    }

    /// The [`Layout`] for `cap` elements of `T`.
    ///
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`].
    fn layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("Capacity overflow!")
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if size_of::<T>() != 0 && self.cap != 0 {
            // SAFETY: A non-empty, non-zero-sized buffer always owns an allocation made with
            // this exact layout. Elements were already dropped by the owner.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap));
            }
        }
    }
}
