//! Traits and types providing the owned memory block behind a deque.

use alloc::boxed::Box;
use core::mem::MaybeUninit;

/// An interface for a contiguous memory block for use by data structures.
///
/// # Safety
/// Implementors must ensure the length of the slices returned by [`storage`](ContiguousStorage::storage)
/// and [`storage_mut`](ContiguousStorage::storage_mut) never changes while
/// the value is alive.
pub unsafe trait ContiguousStorage<T>: Sized {
    /// Extracts a slice over the entire memory block.
    fn storage(&self) -> &[MaybeUninit<T>];
    /// Extracts a mutable slice over the entire memory block.
    fn storage_mut(&mut self) -> &mut [MaybeUninit<T>];

    /// Returns the size of the memory block in units of T.
    #[inline]
    fn capacity(&self) -> usize {
        self.storage().len()
    }

    /// Returns a pointer to the slot at position `index`.
    ///
    /// The resulting pointer does not need to be in bounds, and even when it
    /// is, the value it points to may not be initialized.
    #[inline]
    fn get_ptr(&self, index: usize) -> *const T {
        debug_assert!(index <= self.storage().len());
        self.storage().as_ptr().wrapping_add(index) as _
    }

    /// Returns a mutable pointer to the slot at position `index`.
    ///
    /// The resulting pointer does not need to be in bounds, and even when it
    /// is, the value it points to may not be initialized.
    #[inline]
    fn get_mut_ptr(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.storage_mut().len());
        self.storage_mut().as_mut_ptr().wrapping_add(index) as _
    }
}

/// Shorthand for [`alloc::Box<[MaybeUninit<T>]>`](alloc::boxed::Box), the
/// single heap allocation owned by a [`RingDeque`](crate::RingDeque).
///
/// Dropping it releases the memory block but never drops any `T` inside it;
/// tracking which slots are initialized is the owner's job.
pub type HeapStorage<T> = Box<[MaybeUninit<T>]>;

unsafe impl<T> ContiguousStorage<T> for HeapStorage<T> {
    #[inline]
    fn storage(&self) -> &[MaybeUninit<T>] {
        self
    }
    #[inline]
    fn storage_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

/// Allocates a block of `capacity` uninitialized slots.
pub(crate) fn heap_storage<T>(capacity: usize) -> HeapStorage<T> {
    let mut slots = alloc::vec::Vec::with_capacity(capacity);
    slots.resize_with(capacity, MaybeUninit::uninit);
    slots.into_boxed_slice()
}

/// The zero-sized block held by a moved-from deque. Does not allocate.
#[inline]
pub(crate) fn empty_storage<T>() -> HeapStorage<T> {
    Box::new([])
}

#[inline(always)]
pub(crate) fn ptr_at_index<T, S: ContiguousStorage<T>>(buf: &S, index: usize) -> *const T {
    debug_assert!(index < buf.capacity());
    buf.get_ptr(index)
}

#[inline(always)]
pub(crate) fn mut_ptr_at_index<T, S: ContiguousStorage<T>>(buf: &mut S, index: usize) -> *mut T {
    debug_assert!(index < buf.capacity());
    buf.get_mut_ptr(index)
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
