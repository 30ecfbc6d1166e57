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

use core::marker::PhantomData;
use core::slice;

use crate::nospec_index;
use crate::ByteView;

/// Lengths above this risk wrap-around in the bounds arithmetic, so both
/// advance variants reject them outright.
const HALF_RANGE: usize = usize::MAX >> 1;

/// A movable read position within a [`ByteView`].
///
/// A cursor is the current position plus the number of bytes remaining.
/// Its remaining length only ever decreases, and its pointer only ever
/// moves forward within the bounds of the original view; the only
/// transition is an advance, which either fails (no state change) or
/// consumes a prefix. Once the cursor is exhausted, every advance with a
/// non-zero length fails.
///
/// Advancing with a trusted, program-controlled length goes through
/// [`advance`]; a length parsed out of untrusted input (a frame header
/// off the network, say) goes through [`advance_nospec`], which has the
/// identical observable contract but keeps mispredicted speculative
/// execution from carrying the pointer out of bounds.
///
/// Failure is reported in-band as the empty cursor — null pointer, zero
/// length — and the original cursor is left untouched, so the caller can
/// treat it as end-of-data or retry.
///
/// [`advance`]: ByteCursor::advance
/// [`advance_nospec`]: ByteCursor::advance_nospec
///
/// # Examples
///
/// ```
/// use atombytes::ByteView;
///
/// let view = ByteView::from_slice(b"hello world");
/// let mut cursor = view.cursor();
///
/// assert_eq!(cursor.advance(5).as_slice(), b"hello");
/// assert_eq!(cursor.advance(6).as_slice(), b" world");
///
/// // Exhausted: further reads fail and leave the cursor alone.
/// let overrun = cursor.advance(1);
/// assert!(overrun.is_null());
/// assert_eq!(cursor.remaining(), 0);
/// ```
#[derive(Clone, Copy)]
pub struct ByteCursor<'a> {
    ptr: *const u8,
    len: usize,
    _marker: PhantomData<&'a [u8]>,
}

// Semantically a shared borrow of immutable bytes, same as &[u8].
unsafe impl Send for ByteCursor<'_> {}
unsafe impl Sync for ByteCursor<'_> {}

impl<'a> ByteCursor<'a> {
    /// Creates the empty cursor: null pointer, zero bytes remaining.
    ///
    /// This is the value both advance variants return on failure.
    #[inline]
    pub const fn empty() -> ByteCursor<'a> {
        ByteCursor {
            ptr: core::ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Initializes a cursor referencing the entirety of `view`.
    ///
    /// A cursor derived from the null view starts out empty.
    #[inline]
    pub fn from_view(view: ByteView<'a>) -> ByteCursor<'a> {
        ByteCursor {
            ptr: view.as_ptr(),
            len: view.len(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.len
    }

    /// Returns true if no bytes remain.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if this is the null cursor, the value advances return
    /// on failure.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the cursor's current position. Null for the empty cursor.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Borrows the unconsumed bytes as a slice. The null cursor yields
    /// the empty slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        if self.ptr.is_null() {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    /// Consumes the first `len` remaining bytes.
    ///
    /// On success, returns a cursor referencing exactly those `len` bytes
    /// and moves `self` forward past them. If `len` exceeds the remaining
    /// length, or either value exceeds half the range of `usize` (a guard
    /// against wrap-around in the bounds arithmetic), returns
    /// [`ByteCursor::empty`] and leaves `self` unmodified.
    ///
    /// The bounds check here is an ordinary branch, which is fine when
    /// `len` is a trusted, program-controlled value. When `len` comes from
    /// untrusted input, use [`advance_nospec`] instead.
    ///
    /// [`advance_nospec`]: ByteCursor::advance_nospec
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::ByteView;
    ///
    /// let view = ByteView::from_slice(b"\x02abc");
    /// let mut cursor = view.cursor();
    ///
    /// let header = cursor.advance(1);
    /// assert_eq!(header.as_slice(), b"\x02");
    /// assert_eq!(cursor.remaining(), 3);
    /// ```
    #[inline]
    pub fn advance(&mut self, len: usize) -> ByteCursor<'a> {
        if self.len > HALF_RANGE || len > HALF_RANGE || len > self.len {
            return ByteCursor::empty();
        }

        let rv = ByteCursor {
            ptr: self.ptr,
            len,
            _marker: PhantomData,
        };

        // In bounds: len <= self.len, and the null cursor only gets here
        // with len == 0.
        self.ptr = unsafe { self.ptr.add(len) };
        self.len -= len;

        rv
    }

    /// Consumes the first `len` remaining bytes, hardened against
    /// speculative out-of-bounds reads.
    ///
    /// The observable contract is identical to [`advance`], byte for
    /// byte. Internally, once the branch has accepted `len`, the value is
    /// re-derived through [`nospec_index`] before any pointer arithmetic,
    /// so even on a mispredicted path the new pointer and length stay
    /// within the cursor's bounds. Use this variant whenever `len` is
    /// derived from untrusted or attacker-influenced input.
    ///
    /// [`advance`]: ByteCursor::advance
    /// [`nospec_index`]: crate::nospec_index
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::ByteView;
    ///
    /// let view = ByteView::from_slice(b"\x05hello");
    /// let mut cursor = view.cursor();
    ///
    /// // Wire-derived length field: take the hardened path.
    /// let body_len = cursor.advance(1).as_slice()[0] as usize;
    /// let body = cursor.advance_nospec(body_len);
    /// assert_eq!(body.as_slice(), b"hello");
    /// ```
    #[inline]
    pub fn advance_nospec(&mut self, len: usize) -> ByteCursor<'a> {
        if len <= self.len && len <= HALF_RANGE && self.len <= HALF_RANGE {
            // Clamp only after the accept branch; clamping first would
            // turn an out-of-bounds request into a zero-length success.
            let len = nospec_index(len, self.len + 1);

            let rv = ByteCursor {
                ptr: self.ptr,
                len,
                _marker: PhantomData,
            };

            self.ptr = unsafe { self.ptr.add(len) };
            self.len -= len;

            rv
        } else {
            ByteCursor::empty()
        }
    }
}

#[cfg(feature = "std")]
impl std::io::Read for ByteCursor<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = core::cmp::min(buf.len(), self.remaining());
        let chunk = self.advance(n);
        buf[..n].copy_from_slice(chunk.as_slice());
        Ok(n)
    }
}

impl Default for ByteCursor<'_> {
    fn default() -> Self {
        ByteCursor::empty()
    }
}

impl<'a> From<ByteView<'a>> for ByteCursor<'a> {
    fn from(view: ByteView<'a>) -> Self {
        ByteCursor::from_view(view)
    }
}

impl AsRef<[u8]> for ByteCursor<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for ByteCursor<'_> {
    fn eq(&self, other: &ByteCursor<'_>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ByteCursor<'_> {}

impl PartialEq<[u8]> for ByteCursor<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for ByteCursor<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}
