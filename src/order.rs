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

use core::sync::atomic;

/// Memory ordering for operations on an [`AtomicCell`].
///
/// Every atomic operation in this crate takes its ordering as an explicit
/// argument; there are no implicit defaults. The five values form a partial
/// strength order: `Relaxed` is the weakest, `SeqCst` the strongest, and
/// `Acquire`/`Release` sit between them but are not comparable to each
/// other.
///
/// [`AtomicCell`]: crate::AtomicCell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ordering {
    /// No ordering constraint; only the atomicity of the access itself is
    /// guaranteed.
    Relaxed,
    /// A load with this ordering synchronizes-with a `Release` store of the
    /// value it observes, making every write that preceded that store
    /// visible to this thread.
    Acquire,
    /// A store with this ordering makes every prior write of this thread
    /// visible to any thread that performs an `Acquire` load observing the
    /// stored value.
    Release,
    /// Both `Acquire` and `Release`; meaningful for read-modify-write
    /// operations.
    AcqRel,
    /// Like `AcqRel`, and additionally participates in a single total order
    /// over all `SeqCst` operations program-wide.
    SeqCst,
}

impl Ordering {
    /// Maps this ordering onto the token the host's atomic primitives
    /// consume. The match is exhaustive over the closed enum, so there is
    /// no unmapped-value path.
    pub(crate) fn xlate(self) -> atomic::Ordering {
        match self {
            Ordering::Relaxed => atomic::Ordering::Relaxed,
            Ordering::Acquire => atomic::Ordering::Acquire,
            Ordering::Release => atomic::Ordering::Release,
            Ordering::AcqRel => atomic::Ordering::AcqRel,
            Ordering::SeqCst => atomic::Ordering::SeqCst,
        }
    }

    /// `Release` and `AcqRel` have no meaning for a pure load.
    pub(crate) fn is_load_order(self) -> bool {
        matches!(
            self,
            Ordering::Relaxed | Ordering::Acquire | Ordering::SeqCst
        )
    }

    /// `Acquire` and `AcqRel` have no meaning for a pure store.
    pub(crate) fn is_store_order(self) -> bool {
        matches!(
            self,
            Ordering::Relaxed | Ordering::Release | Ordering::SeqCst
        )
    }

    /// Whether `self` is a legal failure ordering for a compare-exchange
    /// whose success ordering is `success`: it must not be `Release` or
    /// `AcqRel` (the failure path performs no store), and it must be no
    /// stronger than `success`. `Acquire` and `Release` are incomparable,
    /// so an `Acquire` failure requires at least an `Acquire` component on
    /// the success side.
    pub(crate) fn may_fail_with(self, success: Ordering) -> bool {
        match self {
            Ordering::Relaxed => true,
            Ordering::Acquire => matches!(
                success,
                Ordering::Acquire | Ordering::AcqRel | Ordering::SeqCst
            ),
            Ordering::SeqCst => success == Ordering::SeqCst,
            Ordering::Release | Ordering::AcqRel => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ordering;

    #[test]
    fn load_store_validity() {
        assert!(Ordering::Relaxed.is_load_order());
        assert!(Ordering::Acquire.is_load_order());
        assert!(Ordering::SeqCst.is_load_order());
        assert!(!Ordering::Release.is_load_order());
        assert!(!Ordering::AcqRel.is_load_order());

        assert!(Ordering::Relaxed.is_store_order());
        assert!(Ordering::Release.is_store_order());
        assert!(Ordering::SeqCst.is_store_order());
        assert!(!Ordering::Acquire.is_store_order());
        assert!(!Ordering::AcqRel.is_store_order());
    }

    #[test]
    fn failure_order_table() {
        use Ordering::*;

        let all = [Relaxed, Acquire, Release, AcqRel, SeqCst];

        // Relaxed fails with anything; Release/AcqRel fail with nothing.
        for &success in &all {
            assert!(Relaxed.may_fail_with(success));
            assert!(!Release.may_fail_with(success));
            assert!(!AcqRel.may_fail_with(success));
        }

        assert!(Acquire.may_fail_with(Acquire));
        assert!(Acquire.may_fail_with(AcqRel));
        assert!(Acquire.may_fail_with(SeqCst));
        assert!(!Acquire.may_fail_with(Relaxed));
        assert!(!Acquire.may_fail_with(Release));

        assert!(SeqCst.may_fail_with(SeqCst));
        assert!(!SeqCst.may_fail_with(AcqRel));
    }
}
