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

use core::hint;

/// Clamps `index` into `[0, bound)` without branching.
///
/// Returns `index` if `index < bound` and both values are at most
/// `usize::MAX / 2`; otherwise returns 0. The result is computed purely
/// from the two integers via bitwise masking, so the in-range and
/// out-of-range paths execute identical instructions and a mispredicting
/// CPU cannot be steered into using an out-of-range value. This is the
/// building block for guarding memory accesses whose index is derived
/// from untrusted input; see [`ByteCursor::advance_nospec`].
///
/// The half-range restriction exists because the range check is done with
/// a subtraction: a value with the top bit set could otherwise appear
/// in-range after the sign bit is inverted away.
///
/// Note that this function only hardens the index computation itself. A
/// call site that branches on whether the index was in range *before*
/// using the result gets no speculation protection from it.
///
/// [`ByteCursor::advance_nospec`]: crate::ByteCursor::advance_nospec
///
/// # Examples
///
/// ```
/// use atombytes::nospec_index;
///
/// assert_eq!(nospec_index(4, 10), 4);
/// assert_eq!(nospec_index(10, 10), 0);
/// ```
#[inline]
pub fn nospec_index(index: usize, bound: usize) -> usize {
    /*
     * Hide the index from the optimizer, so it cannot prove the index
     * in-range and fold the masking away.
     */
    let index = hint::black_box(index);

    /*
     * negative_mask has the top bit set if either value is above half the
     * range. toobig_mask = bound - index - 1 has the top bit set exactly
     * when index >= bound, provided both values passed the half-range
     * check.
     */
    let negative_mask = index | bound;
    let toobig_mask = bound.wrapping_sub(index).wrapping_sub(1);
    let combined_mask = negative_mask | toobig_mask;

    /*
     * In range iff the combined top bit is off. Flip it, shift it down to
     * the ones position, and replicate it across the register to get an
     * all-ones or all-zeros mask to AND into the index.
     */
    let in_range = (!combined_mask) >> (usize::BITS - 1);

    index & in_range.wrapping_mul(usize::MAX)
}
