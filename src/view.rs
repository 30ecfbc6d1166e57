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

use core::ffi::CStr;
use core::marker::PhantomData;
use core::slice;

use crate::ByteCursor;

/// A fixed, non-owning window over a contiguous run of bytes.
///
/// A `ByteView` is a pointer and a length; it never owns, allocates, or
/// copies the memory it refers to, and construction performs no
/// validation. The caller keeps the underlying storage alive for the
/// view's lifetime — the borrow carried by `'a` makes that the compiler's
/// problem for the safe constructors.
///
/// The conventional empty/invalid view is a null pointer with zero
/// length, as produced by [`ByteView::empty`].
///
/// Reading framed data out of a view goes through a [`ByteCursor`]:
///
/// ```
/// use atombytes::ByteView;
///
/// let view = ByteView::from_slice(b"hello world");
/// let mut cursor = view.cursor();
///
/// let word = cursor.advance(5);
/// assert_eq!(word.as_slice(), b"hello");
/// assert_eq!(cursor.remaining(), 6);
/// ```
#[derive(Clone, Copy)]
pub struct ByteView<'a> {
    ptr: *const u8,
    len: usize,
    _marker: PhantomData<&'a [u8]>,
}

// Semantically a shared borrow of immutable bytes, same as &[u8].
unsafe impl Send for ByteView<'_> {}
unsafe impl Sync for ByteView<'_> {}

impl<'a> ByteView<'a> {
    /// Creates the conventional empty view: null pointer, zero length.
    #[inline]
    pub const fn empty() -> ByteView<'a> {
        ByteView {
            ptr: core::ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Wraps an existing byte slice. No copy is made.
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::ByteView;
    ///
    /// let view = ByteView::from_slice(b"abc");
    /// assert_eq!(view.len(), 3);
    /// ```
    #[inline]
    pub const fn from_slice(bytes: &'a [u8]) -> ByteView<'a> {
        ByteView {
            ptr: bytes.as_ptr(),
            len: bytes.len(),
            _marker: PhantomData,
        }
    }

    /// Wraps the bytes of a null-terminated string, excluding the
    /// terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::ByteView;
    /// use core::ffi::CStr;
    ///
    /// let s = CStr::from_bytes_with_nul(b"abc\0").unwrap();
    /// assert_eq!(ByteView::from_c_str(s).as_slice(), b"abc");
    /// ```
    #[inline]
    pub fn from_c_str(s: &'a CStr) -> ByteView<'a> {
        ByteView::from_slice(s.to_bytes())
    }

    /// Wraps a raw pointer and length. No bounds or null checks are
    /// performed.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` bytes for the lifetime `'a`,
    /// or be null with `len == 0`. The memory must not be mutated through
    /// a unique reference while the view (or anything derived from it) is
    /// live.
    #[inline]
    pub const unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> ByteView<'a> {
        ByteView {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Returns the number of bytes the view covers.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if this is the null (invalid) view.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the view's data pointer. Null for the empty view.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Borrows the viewed bytes as a slice. The null view yields the
    /// empty slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        if self.ptr.is_null() {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    /// Derives a cursor referencing the entirety of this view.
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::ByteView;
    ///
    /// let view = ByteView::from_slice(b"abc");
    /// let cursor = view.cursor();
    /// assert_eq!(cursor.remaining(), 3);
    /// ```
    #[inline]
    pub fn cursor(&self) -> ByteCursor<'a> {
        ByteCursor::from_view(*self)
    }
}

impl Default for ByteView<'_> {
    fn default() -> Self {
        ByteView::empty()
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteView::from_slice(bytes)
    }
}

impl AsRef<[u8]> for ByteView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for ByteView<'_> {
    fn eq(&self, other: &ByteView<'_>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ByteView<'_> {}

impl PartialEq<[u8]> for ByteView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for ByteView<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}
