//! Error types reported by [`RingDeque`](crate::RingDeque).
//!
//! Two channels are kept apart on purpose. Running out of room or out of
//! elements is an expected outcome reported through [`CapacityError`] and
//! [`EmptyError`]; indexing past the end is a caller bug reported through
//! [`OutOfBounds`], which [`Index`](core::ops::Index) turns into a panic.

use core::fmt;

/// One of the two ends of a deque.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum End {
    /// The end holding logical index 0.
    Front,
    /// The end holding logical index `len() - 1`.
    Back,
}

impl End {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            End::Front => "front",
            End::Back => "back",
        }
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error value indicating a push onto a full deque.
///
/// The rejected element is handed back unchanged.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct CapacityError<T> {
    /// The element that could not be pushed.
    pub element: T,
    /// The end that was pushed to.
    pub end: End,
}

impl<T> CapacityError<T> {
    /// Consumes the error, returning the rejected element.
    pub fn into_inner(self) -> T {
        self.element
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deque is full, cannot push to {}", self.end)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapacityError: {}", self)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl<T> std::error::Error for CapacityError<T> {}

/// The operation that found a deque empty.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Access {
    /// Removal of an element.
    Pop,
    /// Inspection of an element without removing it.
    Peek,
}

impl Access {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Access::Pop => "pop",
            Access::Peek => "peek",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error value indicating a pop or peek on an empty deque.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EmptyError {
    /// What was attempted.
    pub access: Access,
    /// The end it was attempted on.
    pub end: End,
}

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deque is empty, cannot {} from {}", self.access, self.end)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for EmptyError {}

/// Error value indicating an index at or past the deque's length.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OutOfBounds {
    /// The requested logical index.
    pub index: usize,
    /// The deque's length at the time of the access.
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index out of bounds: the len is {} but the index is {}",
            self.len, self.index
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for OutOfBounds {}
