#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A double-ended queue on a single fixed-capacity ring buffer.
//!
//! [`RingDeque`] owns one heap block, allocated when it is constructed or
//! reassigned, and never grows it. One slot of that block is always kept
//! vacant, so a deque with `capacity()` slots holds at most `capacity() - 1`
//! elements.
//!
//! Failures come in two kinds, kept apart on purpose:
//!
//! - pushing onto a full deque, or popping or peeking an empty one, returns a
//!   [`CapacityError`] or [`EmptyError`]; these are expected outcomes, and
//!   each one is also reported as a `tracing` warning;
//! - indexing at or past `len()` is a caller bug: `deque[i]` panics with the
//!   [`OutOfBounds`] description, and [`RingDeque::at`] returns it as an error.
//!
//! # Feature Flags
//!
//! - `std` (default): implements `std::error::Error` for the error types and
//!   enables `tracing/std`. Without it the crate only needs `alloc`.
//! - `unstable`: builds the nightly-only benchmarks.
//!
//! # Examples
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque = RingDeque::from([1, 2, 3, 4, 5]);
//! assert_eq!(deque.len(), 5);
//! assert_eq!(deque.capacity(), 10);
//!
//! deque.push_front(0).unwrap();
//! deque.push_back(6).unwrap();
//! assert_eq!(deque.to_string(), "0 1 2 3 4 5 6");
//!
//! let mut copy = deque.clone();
//! copy[0] = 42;
//! assert_eq!(deque[0], 0);
//! ```

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod deque;
pub mod error;
pub mod storage;

pub use crate::deque::{RingDeque, DEFAULT_CAPACITY};
pub use crate::error::{Access, CapacityError, EmptyError, End, OutOfBounds};
