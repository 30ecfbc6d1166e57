// MIT License
//
// Copyright (c) 2024 Nils Ahlberg (https://github.com/nahlberg/atombytes)
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]
#![no_std]

//! Two low-level primitives for networking, crypto, and buffer-management
//! code: ordered atomic cells and non-owning byte views.
//!
//! # Atomics
//!
//! [`AtomicCell`] is a machine-word storage cell accessed exclusively
//! through atomic operations, each parameterized by an explicit
//! [`Ordering`]. The cell is specialized for an integer payload
//! ([`AtomicWord`]) or a pointer payload ([`AtomicPtr`]); the payload
//! type is fixed at construction, so the two cannot be confused over the
//! cell's lifetime. A standalone [`fence`] provides the same ordering
//! guarantees without touching a cell.
//!
//! ```
//! use atombytes::{AtomicWord, Ordering};
//!
//! let refcount = AtomicWord::new(1);
//! assert_eq!(refcount.fetch_add(1, Ordering::Relaxed), 1);
//! assert_eq!(refcount.fetch_sub(1, Ordering::AcqRel), 2);
//! ```
//!
//! # Byte views
//!
//! [`ByteView`] is a fixed pointer-and-length window over caller-owned
//! memory; [`ByteCursor`] is a movable read position over such a window.
//! Neither owns or copies anything. Cursor advancement is bounds-checked,
//! and [`ByteCursor::advance_nospec`] additionally defeats speculative
//! out-of-bounds reads (Spectre-class attacks) when the advance length
//! comes from untrusted input, using the branchless [`nospec_index`]
//! clamp.
//!
//! ```
//! use atombytes::ByteView;
//!
//! // A length-prefixed frame off the wire.
//! let frame = ByteView::from_slice(b"\x03abcrest");
//! let mut cursor = frame.cursor();
//!
//! let len = cursor.advance(1).as_slice()[0] as usize;
//! let body = cursor.advance_nospec(len);
//! assert_eq!(body.as_slice(), b"abc");
//! assert_eq!(cursor.as_slice(), b"rest");
//! ```
//!
//! Failed advances report in-band: they return the empty cursor and
//! leave the original untouched. Nothing in the crate allocates, blocks,
//! or suspends; `AtomicCell` is the only type with cross-thread
//! semantics.

#[cfg(feature = "std")]
extern crate std;

mod atomic;
mod cursor;
mod fmt;
mod nospec;
mod order;
mod view;

pub use crate::atomic::{fence, AtomicCell, AtomicPtr, AtomicWord, Payload};
pub use crate::cursor::ByteCursor;
pub use crate::nospec::nospec_index;
pub use crate::order::Ordering;
pub use crate::view::ByteView;

// Optional Serde support
#[cfg(feature = "serde")]
mod serde;
