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

use core::fmt;
use core::sync::atomic;

use crate::Ordering;

mod sealed {
    pub trait Sealed {}

    impl Sealed for usize {}
    impl<T> Sealed for *mut T {}
}

/// A word-sized value that can live in an [`AtomicCell`].
///
/// Implemented for exactly two types: `usize` (the integer cell) and
/// `*mut T` (the pointer cell). The trait is sealed; the payload type
/// chosen at construction is the cell's logical type for its entire
/// lifetime, and the arithmetic/bitwise operations exist only on the
/// integer specialization.
pub trait Payload: sealed::Sealed + Copy {
    #[doc(hidden)]
    type Repr;

    #[doc(hidden)]
    fn init(repr: &mut Self::Repr, value: Self);

    #[doc(hidden)]
    fn load(repr: &Self::Repr, order: atomic::Ordering) -> Self;

    #[doc(hidden)]
    fn store(repr: &Self::Repr, value: Self, order: atomic::Ordering);

    #[doc(hidden)]
    fn swap(repr: &Self::Repr, value: Self, order: atomic::Ordering) -> Self;

    #[doc(hidden)]
    fn compare_exchange(
        repr: &Self::Repr,
        current: Self,
        new: Self,
        success: atomic::Ordering,
        failure: atomic::Ordering,
    ) -> Result<Self, Self>;
}

impl Payload for usize {
    type Repr = atomic::AtomicUsize;

    fn init(repr: &mut Self::Repr, value: usize) {
        *repr.get_mut() = value;
    }

    fn load(repr: &Self::Repr, order: atomic::Ordering) -> usize {
        repr.load(order)
    }

    fn store(repr: &Self::Repr, value: usize, order: atomic::Ordering) {
        repr.store(value, order);
    }

    fn swap(repr: &Self::Repr, value: usize, order: atomic::Ordering) -> usize {
        repr.swap(value, order)
    }

    fn compare_exchange(
        repr: &Self::Repr,
        current: usize,
        new: usize,
        success: atomic::Ordering,
        failure: atomic::Ordering,
    ) -> Result<usize, usize> {
        repr.compare_exchange(current, new, success, failure)
    }
}

impl<T> Payload for *mut T {
    type Repr = atomic::AtomicPtr<T>;

    fn init(repr: &mut Self::Repr, value: *mut T) {
        *repr.get_mut() = value;
    }

    fn load(repr: &Self::Repr, order: atomic::Ordering) -> *mut T {
        repr.load(order)
    }

    fn store(repr: &Self::Repr, value: *mut T, order: atomic::Ordering) {
        repr.store(value, order);
    }

    fn swap(repr: &Self::Repr, value: *mut T, order: atomic::Ordering) -> *mut T {
        repr.swap(value, order)
    }

    fn compare_exchange(
        repr: &Self::Repr,
        current: *mut T,
        new: *mut T,
        success: atomic::Ordering,
        failure: atomic::Ordering,
    ) -> Result<*mut T, *mut T> {
        repr.compare_exchange(current, new, success, failure)
    }
}

/// A fixed-size storage cell accessed exclusively through ordered atomic
/// operations.
///
/// The cell holds either a machine-word integer ([`AtomicWord`]) or a
/// pointer ([`AtomicPtr`]); the payload type parameter fixes the logical
/// type for the cell's lifetime, so an integer cell cannot be re-read as a
/// pointer. Both specializations occupy a single machine word.
///
/// `AtomicCell` is intended to be embedded wherever cross-thread
/// coordination is needed without a lock: flags, counters, reference
/// counts, the links of lock-free structures. Sharing a cell between
/// threads requires no external synchronization; the visibility guarantees
/// of each operation are exactly those of the [`Ordering`] passed to it.
///
/// # Examples
///
/// ```
/// use atombytes::{AtomicWord, Ordering};
///
/// let flag = AtomicWord::new(0);
/// flag.store(1, Ordering::Release);
/// assert_eq!(flag.load(Ordering::Acquire), 1);
/// ```
pub struct AtomicCell<T: Payload> {
    repr: T::Repr,
}

/// An [`AtomicCell`] holding a machine-word unsigned integer.
pub type AtomicWord = AtomicCell<usize>;

/// An [`AtomicCell`] holding a raw pointer.
pub type AtomicPtr<T> = AtomicCell<*mut T>;

impl AtomicCell<usize> {
    /// Creates an integer cell holding `value`.
    ///
    /// Construction happens-before any sharing of the cell, so no ordering
    /// is involved.
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::{AtomicWord, Ordering};
    ///
    /// let counter = AtomicWord::new(10);
    /// assert_eq!(counter.load(Ordering::Relaxed), 10);
    /// ```
    #[inline]
    pub const fn new(value: usize) -> AtomicWord {
        AtomicCell {
            repr: atomic::AtomicUsize::new(value),
        }
    }

    /// Atomically adds `n` to the cell (wrapping on overflow) and returns
    /// the value it held before the addition.
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::{AtomicWord, Ordering};
    ///
    /// let counter = AtomicWord::new(7);
    /// assert_eq!(counter.fetch_add(3, Ordering::SeqCst), 7);
    /// assert_eq!(counter.load(Ordering::SeqCst), 10);
    /// ```
    #[inline]
    pub fn fetch_add(&self, n: usize, order: Ordering) -> usize {
        self.repr.fetch_add(n, order.xlate())
    }

    /// Atomically subtracts `n` from the cell (wrapping on overflow) and
    /// returns the value it held before the subtraction.
    #[inline]
    pub fn fetch_sub(&self, n: usize, order: Ordering) -> usize {
        self.repr.fetch_sub(n, order.xlate())
    }

    /// Atomically ORs `n` into the cell and returns the previous value.
    #[inline]
    pub fn fetch_or(&self, n: usize, order: Ordering) -> usize {
        self.repr.fetch_or(n, order.xlate())
    }

    /// Atomically ANDs `n` into the cell and returns the previous value.
    #[inline]
    pub fn fetch_and(&self, n: usize, order: Ordering) -> usize {
        self.repr.fetch_and(n, order.xlate())
    }

    /// Atomically XORs `n` into the cell and returns the previous value.
    #[inline]
    pub fn fetch_xor(&self, n: usize, order: Ordering) -> usize {
        self.repr.fetch_xor(n, order.xlate())
    }
}

impl<T> AtomicCell<*mut T> {
    /// Creates a pointer cell holding `ptr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::{AtomicPtr, Ordering};
    ///
    /// let mut target = 5u32;
    /// let cell = AtomicPtr::new(&mut target as *mut u32);
    /// assert_eq!(cell.load(Ordering::Relaxed), &mut target as *mut u32);
    /// ```
    #[inline]
    pub const fn new(ptr: *mut T) -> AtomicPtr<T> {
        AtomicCell {
            repr: atomic::AtomicPtr::new(ptr),
        }
    }
}

impl<T: Payload> AtomicCell<T> {
    /// Resets the cell to `value` without an atomic operation.
    ///
    /// The exclusive receiver makes the precondition a compile-time fact:
    /// no other thread can hold a reference to the cell while it is being
    /// re-initialized, and the borrow's end happens-before any subsequent
    /// sharing.
    #[inline]
    pub fn init(&mut self, value: T) {
        T::init(&mut self.repr, value);
    }

    /// Atomically reads the cell.
    ///
    /// # Panics
    ///
    /// Panics if `order` is `Release` or `AcqRel`; neither has meaning for
    /// a pure load.
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::{AtomicWord, Ordering};
    ///
    /// let cell = AtomicWord::new(3);
    /// assert_eq!(cell.load(Ordering::Acquire), 3);
    /// ```
    #[inline]
    pub fn load(&self, order: Ordering) -> T {
        assert!(
            order.is_load_order(),
            "load ordering must be Relaxed, Acquire, or SeqCst, got {:?}",
            order,
        );
        T::load(&self.repr, order.xlate())
    }

    /// Atomically writes `value` into the cell.
    ///
    /// # Panics
    ///
    /// Panics if `order` is `Acquire` or `AcqRel`; neither has meaning for
    /// a pure store.
    #[inline]
    pub fn store(&self, value: T, order: Ordering) {
        assert!(
            order.is_store_order(),
            "store ordering must be Relaxed, Release, or SeqCst, got {:?}",
            order,
        );
        T::store(&self.repr, value, order.xlate());
    }

    /// Atomically replaces the cell's value with `value` and returns the
    /// value it held before. All five orderings are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::{AtomicWord, Ordering};
    ///
    /// let cell = AtomicWord::new(1);
    /// assert_eq!(cell.exchange(2, Ordering::AcqRel), 1);
    /// assert_eq!(cell.load(Ordering::Relaxed), 2);
    /// ```
    #[inline]
    pub fn exchange(&self, value: T, order: Ordering) -> T {
        T::swap(&self.repr, value, order.xlate())
    }

    /// Atomically compares the cell to `*expected`; on a match, stores
    /// `desired` with `success` ordering and returns `true`. On a
    /// mismatch, writes the cell's actual value into `*expected` with
    /// `failure` ordering and returns `false`.
    ///
    /// This is a single-attempt compare-and-swap; callers that need a
    /// retry loop write it themselves, re-using the updated `*expected`.
    ///
    /// # Panics
    ///
    /// Panics if `failure` is `Release` or `AcqRel`, or is stronger than
    /// `success` (the failure path performs no store and cannot order one).
    ///
    /// # Examples
    ///
    /// ```
    /// use atombytes::{AtomicWord, Ordering};
    ///
    /// let cell = AtomicWord::new(5);
    ///
    /// let mut expected = 5;
    /// assert!(cell.compare_exchange(&mut expected, 8, Ordering::AcqRel, Ordering::Acquire));
    /// assert_eq!(expected, 5);
    ///
    /// // `expected` is now stale; the attempt fails and reports the
    /// // actual value.
    /// assert!(!cell.compare_exchange(&mut expected, 9, Ordering::AcqRel, Ordering::Acquire));
    /// assert_eq!(expected, 8);
    /// ```
    #[inline]
    pub fn compare_exchange(
        &self,
        expected: &mut T,
        desired: T,
        success: Ordering,
        failure: Ordering,
    ) -> bool {
        assert!(
            failure.may_fail_with(success),
            "compare_exchange failure ordering {:?} must not be Release or AcqRel \
             and must be no stronger than the success ordering {:?}",
            failure,
            success,
        );
        match T::compare_exchange(
            &self.repr,
            *expected,
            desired,
            success.xlate(),
            failure.xlate(),
        ) {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            }
        }
    }
}

impl<T: Payload + fmt::Debug> fmt::Debug for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicCell")
            .field(&T::load(&self.repr, atomic::Ordering::Relaxed))
            .finish()
    }
}

/// A standalone ordering barrier.
///
/// Establishes the same inter-thread visibility guarantees as an atomic
/// operation with ordering `order`, without reading or writing any cell.
/// A `Relaxed` fence is a no-op, since a relaxed atomic operation carries
/// no ordering either.
///
/// # Examples
///
/// ```
/// use atombytes::{fence, Ordering};
///
/// fence(Ordering::SeqCst);
/// ```
#[inline]
pub fn fence(order: Ordering) {
    match order {
        Ordering::Relaxed => {}
        _ => atomic::fence(order.xlate()),
    }
}
