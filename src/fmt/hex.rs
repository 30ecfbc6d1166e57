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
use core::fmt::{Formatter, LowerHex, Result, UpperHex};

use super::BytesRef;
use crate::{ByteCursor, ByteView};

impl LowerHex for BytesRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for &b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl UpperHex for BytesRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for &b in self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl LowerHex for ByteView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(&BytesRef(self.as_slice()), f)
    }
}

impl UpperHex for ByteView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        UpperHex::fmt(&BytesRef(self.as_slice()), f)
    }
}

impl LowerHex for ByteCursor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(&BytesRef(self.as_slice()), f)
    }
}

impl UpperHex for ByteCursor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        UpperHex::fmt(&BytesRef(self.as_slice()), f)
    }
}
