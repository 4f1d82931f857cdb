//! A double-ended queue implemented with a fixed-capacity ring buffer.
//!
//! This queue has O(1) inserts and removals from both ends of the sequence.
//! It also has O(1) indexing like a vector. It never reallocates: pushing onto
//! a full deque fails and hands the element back.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::slice;

use alloc::vec::Vec;
use tracing::warn;

use crate::error::{Access, CapacityError, EmptyError, End, OutOfBounds};
use crate::storage::{
    capacity_overflow, empty_storage, heap_storage, mut_ptr_at_index, ptr_at_index, ContiguousStorage,
    HeapStorage,
};

/// Number of slots allocated by [`RingDeque::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A double-ended queue implemented with a ring buffer.
///
/// The "default" usage of this type as a queue is to use [`push_back`](RingDeque::push_back)
/// to add to the queue, and [`pop_front`](RingDeque::pop_front) to remove from it.
///
/// # Capacity
///
/// A `RingDeque` owns exactly one heap block of [`capacity`](RingDeque::capacity)
/// slots, and one of them always stays vacant: the deque is full when
/// `len() == capacity() - 1`. Pushes onto a full deque return a
/// [`CapacityError`] instead of growing the buffer.
///
/// # Examples
/// ```
/// use ringdeque::RingDeque;
///
/// let mut deque = RingDeque::new();
/// deque.push_back(100).unwrap();
/// deque.push_back(200).unwrap();
/// deque.push_back(300).unwrap();
///
/// assert_eq!(deque.pop_front(), Ok(100));
/// assert_eq!(deque.pop_back(), Ok(300));
/// assert_eq!(deque[0], 200);
/// ```
pub struct RingDeque<T> {
    buf: HeapStorage<T>,
    front: usize,
    back: usize,
    len: usize,
}

/// Slot count for a deque built from `len` initial values.
fn list_capacity(len: usize) -> usize {
    if len == 0 {
        return DEFAULT_CAPACITY;
    }
    len.checked_mul(2).unwrap_or_else(|| capacity_overflow())
}

#[inline(never)]
#[cold]
#[track_caller]
fn index_out_of_bounds(err: OutOfBounds) -> ! {
    panic!("{}", err)
}

impl<T> RingDeque<T> {
    fn from_storage(buf: HeapStorage<T>) -> Self {
        RingDeque {
            buf,
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// A deque with no storage at all, as left behind by [`take`](RingDeque::take).
    fn shell() -> Self {
        Self::from_storage(empty_storage())
    }

    /// Builds a deque holding the first `len` values of `values`, with
    /// `2 * len` slots.
    fn from_exact<It: Iterator<Item = T>>(values: It, len: usize) -> Self {
        let mut deque = Self::from_storage(heap_storage(list_capacity(len)));
        values.take(len).for_each(|value| deque.push_back_unchecked(value));
        deque
    }

    /// Creates an empty deque with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::RingDeque::<u32>::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::from_storage(heap_storage(DEFAULT_CAPACITY))
    }

    /// Creates a deque that already holds `size` default-valued elements, with
    /// room for `2 * size` slots.
    ///
    /// Indices `0..size` are readable and writable right away without any
    /// prior push. A `size` of zero yields the same deque as [`new`](RingDeque::new).
    ///
    /// # Panics
    /// Panics if `2 * size` overflows a `usize`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::<i32>::with_size(5);
    /// assert_eq!(deque.len(), 5);
    /// assert_eq!(deque.capacity(), 10);
    ///
    /// deque[4] = 9;
    /// assert_eq!(deque, [0, 0, 0, 0, 9]);
    /// ```
    pub fn with_size(size: usize) -> Self
    where
        T: Default,
    {
        if size == 0 {
            return Self::new();
        }

        let capacity = size.checked_mul(2).unwrap_or_else(|| capacity_overflow());
        let mut deque = Self::from_storage(heap_storage(capacity));
        for _ in 0..size {
            deque.push_back_unchecked(T::default());
        }
        deque
    }

    /// Creates a deque from a slice of initial values, cloning each into a
    /// buffer with `2 * values.len()` slots.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::RingDeque::from_slice(&[1, 2, 3, 4, 5]);
    /// assert_eq!(deque.len(), 5);
    /// assert_eq!(deque.capacity(), 10);
    /// assert_eq!((deque[0], deque[4]), (1, 5));
    /// ```
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_exact(values.iter().cloned(), values.len())
    }

    /// Moves the contents out of `self`, leaving behind an empty deque with no
    /// storage.
    ///
    /// The returned deque keeps the exact buffer and indices `self` had. The
    /// emptied shell rejects every push, reports every pop and peek as empty,
    /// and can be dropped or reassigned like any other deque.
    ///
    /// # Examples
    /// ```
    /// let mut source = ringdeque::RingDeque::from([1, 2, 3]);
    /// let target = source.take();
    /// assert_eq!(target, [1, 2, 3]);
    /// assert!(source.is_shell());
    /// assert!(source.push_back(4).is_err());
    /// ```
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::shell())
    }

    /// Releases the current buffer and takes over the contents of `source`,
    /// which is left as an empty shell.
    ///
    /// # Examples
    /// ```
    /// let mut source = ringdeque::RingDeque::from([7, 8]);
    /// let mut target = ringdeque::RingDeque::from([1, 2, 3]);
    /// target.move_from(&mut source);
    /// assert_eq!(target, [7, 8]);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    pub fn move_from(&mut self, source: &mut Self) {
        self.release();
        *self = source.take();
    }

    /// Releases the current buffer and refills the deque from `values`, with
    /// `2 * n` slots for `n` values, starting at physical slot 0.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(1).unwrap();
    /// deque.assign(vec![10, 20, 30]);
    /// assert_eq!(deque, [10, 20, 30]);
    /// assert_eq!(deque.capacity(), 6);
    /// ```
    pub fn assign<It: IntoIterator<Item = T>>(&mut self, values: It) {
        self.release();
        *self = values.into_iter().collect();
    }

    fn release(&mut self) {
        drop(self.take());
    }

    /// Returns the number of slots in the buffer, including the one that is
    /// always kept vacant.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` exactly when every slot but one is occupied, or when the
    /// deque has no storage.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity() == 0 || self.len == self.capacity() - 1
    }

    /// Returns `true` if this deque was emptied by [`take`](RingDeque::take)
    /// or [`move_from`](RingDeque::move_from) and owns no storage.
    #[inline]
    pub fn is_shell(&self) -> bool {
        self.capacity() == 0
    }

    #[inline(always)]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        debug_assert!(addend <= self.capacity());
        (index + addend) % self.capacity()
    }

    #[inline(always)]
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        debug_assert!(subtrahend <= self.capacity());
        (index + self.capacity() - subtrahend) % self.capacity()
    }

    #[inline(always)]
    fn physical_index(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        Some(self.wrap_add(self.front, index))
    }

    fn full(&self, element: T, end: End) -> CapacityError<T> {
        let err = CapacityError { element, end };
        warn!(
            end = end.as_str(),
            len = self.len,
            capacity = self.capacity(),
            "{}",
            err
        );
        err
    }

    fn empty(&self, access: Access, end: End) -> EmptyError {
        let err = EmptyError { access, end };
        warn!(end = end.as_str(), capacity = self.capacity(), "{}", err);
        err
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let index = self.physical_index(index)?;
        unsafe { ptr_at_index(&self.buf, index).as_ref() }
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let index = self.physical_index(index)?;
        unsafe { mut_ptr_at_index(&mut self.buf, index).as_mut() }
    }

    /// Returns a reference to the element at the given index, or an
    /// [`OutOfBounds`] error describing the failed access.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{OutOfBounds, RingDeque};
    ///
    /// let deque = RingDeque::from([1, 2]);
    /// assert_eq!(deque.at(1), Ok(&2));
    /// assert_eq!(deque.at(2), Err(OutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfBounds> {
        let len = self.len;
        self.get(index).ok_or(OutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at the given index, or an
    /// [`OutOfBounds`] error describing the failed access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(OutOfBounds { index, len })
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    fn push_back_unchecked(&mut self, element: T) {
        debug_assert!(!self.is_full());
        let back = self.back;
        unsafe {
            mut_ptr_at_index(&mut self.buf, back).write(element);
        }
        self.back = self.wrap_add(back, 1);
        self.len += 1;
    }

    /// Prepends an element to the front of the deque, returning it inside a
    /// [`CapacityError`] if the deque is full.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::from([2]);
    /// assert_eq!(deque.capacity(), 2);
    /// assert_eq!(deque.push_front(1).unwrap_err().into_inner(), 1);
    /// assert_eq!(deque, [2]);
    /// ```
    pub fn push_front(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(self.full(element, End::Front));
        }

        let front = self.wrap_sub(self.front, 1);
        unsafe {
            mut_ptr_at_index(&mut self.buf, front).write(element);
        }
        self.front = front;
        self.len += 1;

        Ok(())
    }

    /// Appends an element to the back of the deque, returning it inside a
    /// [`CapacityError`] if the deque is full.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// for i in 0..9 {
    ///     assert!(deque.push_back(i).is_ok());
    /// }
    /// assert!(deque.is_full());
    /// assert!(deque.push_back(9).is_err());
    /// assert_eq!(deque.len(), 9);
    /// ```
    pub fn push_back(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(self.full(element, End::Back));
        }

        self.push_back_unchecked(element);
        Ok(())
    }

    fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let front = self.front;
        let result = unsafe { ptr_at_index(&self.buf, front).read() };
        self.front = self.wrap_add(front, 1);
        self.len -= 1;

        Some(result)
    }

    fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let back = self.wrap_sub(self.back, 1);
        let result = unsafe { ptr_at_index(&self.buf, back).read() };
        self.back = back;
        self.len -= 1;

        Some(result)
    }

    /// Removes the first element and returns it, or an [`EmptyError`] if the
    /// deque is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(1).unwrap();
    /// deque.push_back(2).unwrap();
    /// assert_eq!(deque.pop_front(), Ok(1));
    /// assert_eq!(deque.pop_front(), Ok(2));
    /// assert!(deque.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        self.take_front()
            .ok_or_else(|| self.empty(Access::Pop, End::Front))
    }

    /// Removes the last element and returns it, or an [`EmptyError`] if the
    /// deque is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(1).unwrap();
    /// deque.push_back(3).unwrap();
    /// assert_eq!(deque.pop_back(), Ok(3));
    /// assert_eq!(deque.pop_back(), Ok(1));
    /// assert!(deque.pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyError> {
        self.take_back()
            .ok_or_else(|| self.empty(Access::Pop, End::Back))
    }

    /// Returns a reference to the front element without removing it, or an
    /// [`EmptyError`] if the deque is empty.
    pub fn peek_front(&self) -> Result<&T, EmptyError> {
        if self.is_empty() {
            return Err(self.empty(Access::Peek, End::Front));
        }

        Ok(unsafe { &*ptr_at_index(&self.buf, self.front) })
    }

    /// Returns a reference to the back element without removing it, or an
    /// [`EmptyError`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::RingDeque::from([1, 2, 3, 4, 5]);
    /// assert_eq!(deque.peek_front(), Ok(&1));
    /// assert_eq!(deque.peek_back(), Ok(&5));
    /// assert_eq!(deque.len(), 5);
    /// ```
    pub fn peek_back(&self) -> Result<&T, EmptyError> {
        if self.is_empty() {
            return Err(self.empty(Access::Peek, End::Back));
        }

        let back = self.wrap_sub(self.back, 1);
        Ok(unsafe { &*ptr_at_index(&self.buf, back) })
    }

    /// Clears the deque, dropping all values. The buffer is kept.
    pub fn clear(&mut self) {
        let (a, b) = self.as_mut_slices();
        let (a, b) = (a as *mut [T], b as *mut [T]);

        self.front = 0;
        self.back = 0;
        self.len = 0;

        unsafe {
            core::ptr::drop_in_place(a);
            core::ptr::drop_in_place(b);
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the deque.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::from([2, 1]);
    /// deque.push_front(3).unwrap();
    /// assert_eq!(deque.as_slices(), (&[3][..], &[2, 1][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let cap = self.capacity();
        let front = self.front;
        let ptr = self.buf.get_ptr(0);

        if front + self.len <= cap {
            let slice = unsafe { slice::from_raw_parts(ptr.add(front), self.len) };
            (slice, &[])
        } else {
            let head = cap - front;
            let fst = unsafe { slice::from_raw_parts(ptr.add(front), head) };
            let snd = unsafe { slice::from_raw_parts(ptr, self.len - head) };
            (fst, snd)
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the deque.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let cap = self.capacity();
        let front = self.front;
        let len = self.len;
        let ptr = self.buf.get_mut_ptr(0);

        if front + len <= cap {
            let slice = unsafe { slice::from_raw_parts_mut(ptr.add(front), len) };
            (slice, &mut [])
        } else {
            let head = cap - front;
            let fst = unsafe { slice::from_raw_parts_mut(ptr.add(front), head) };
            let snd = unsafe { slice::from_raw_parts_mut(ptr, len - head) };
            (fst, snd)
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(5).unwrap();
    /// deque.push_back(3).unwrap();
    /// deque.push_front(4).unwrap();
    ///
    /// let mut it = deque.iter();
    /// assert_eq!(it.next(), Some(&4));
    /// assert_eq!(it.next(), Some(&5));
    /// assert_eq!(it.next(), Some(&3));
    /// assert!(it.next().is_none());
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.front,
            len: self.len,
            buf: &self.buf,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::from([5, 3, 4]);
    /// for num in deque.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(deque, [3, 1, 2]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.front,
            len: self.len,
            cap: self.capacity(),
            ptr: self.buf.get_mut_ptr(0),
            _ref: PhantomData,
        }
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(element) => element,
            Err(err) => index_out_of_bounds(err),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(element) => element,
            None => index_out_of_bounds(OutOfBounds { index, len }),
        }
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    /// Copies the elements in logical order into a fresh buffer of the same
    /// capacity, starting at physical slot 0.
    fn clone(&self) -> Self {
        let mut copy = Self::from_storage(heap_storage(self.capacity()));
        self.iter()
            .cloned()
            .for_each(|element| copy.push_back_unchecked(element));
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.release();
        *self = source.clone();
    }
}

impl<T> From<Vec<T>> for RingDeque<T> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Self::from_exact(values.into_iter(), len)
    }
}

impl<T, const N: usize> From<[T; N]> for RingDeque<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_exact(IntoIterator::into_iter(values), N)
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    /// Collects the values into a deque with twice as many slots as values.
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Debug> Debug for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}

impl<T: Display> Display for RingDeque<T> {
    /// Writes the elements front to back, separated by single spaces.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut it = self.iter();
        if let Some(first) = it.next() {
            Display::fmt(first, f)?;
            for element in it {
                f.write_str(" ")?;
                Display::fmt(element, f)?;
            }
        }
        Ok(())
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        // element by element, so the split point of the ring never reaches the hasher
        self.iter().for_each(|element| element.hash(state));
    }
}

impl<A: PartialEq<B>, B> PartialEq<RingDeque<B>> for RingDeque<A> {
    /// Compares logical contents only; capacity and physical layout are ignored.
    fn eq(&self, other: &RingDeque<B>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: PartialEq, R: AsRef<[T]>> PartialEq<R> for RingDeque<T> {
    fn eq(&self, other: &R) -> bool {
        let other = other.as_ref();
        if self.len() != other.len() {
            return false;
        }

        let (front, back) = self.as_slices();
        let mid = front.len();
        front == &other[..mid] && back == &other[mid..]
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](RingDeque::iter) method on [`RingDeque`].
pub struct Iter<'a, T> {
    front: usize,
    len: usize,
    buf: &'a HeapStorage<T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            len: self.len,
            buf: self.buf,
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        let front = self.front;
        self.front = (front + 1) % self.buf.capacity();
        self.len -= 1;
        unsafe { ptr_at_index(self.buf, front).as_ref() }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        let idx = (self.front + self.len - 1) % self.buf.capacity();
        self.len -= 1;
        unsafe { ptr_at_index(self.buf, idx).as_ref() }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter_mut`](RingDeque::iter_mut) method on [`RingDeque`].
pub struct IterMut<'a, T> {
    front: usize,
    len: usize,
    cap: usize,
    // taken once, so references already yielded stay valid
    ptr: *mut T,
    _ref: PhantomData<&'a mut T>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }

        let front = self.front;
        self.front = (front + 1) % self.cap;
        self.len -= 1;
        unsafe { self.ptr.add(front).as_mut() }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }

        let idx = (self.front + self.len - 1) % self.cap;
        self.len -= 1;
        unsafe { self.ptr.add(idx).as_mut() }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a deque.
///
/// This `struct` is created by the `into_iter` method on [`RingDeque`]
/// (provided by the `IntoIterator` trait).
pub struct IntoIter<T> {
    inner: RingDeque<T>,
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Converts the deque into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
