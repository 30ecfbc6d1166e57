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
#![warn(rust_2018_idioms)]

use atombytes::{ByteCursor, ByteView};

const HALF: usize = usize::MAX >> 1;

#[test]
fn hello_world_walk() {
    let view = ByteView::from_slice(b"hello world");
    let mut cursor = view.cursor();

    let hello = cursor.advance(5);
    assert_eq!(hello.as_slice(), b"hello");
    assert_eq!(hello.remaining(), 5);
    assert_eq!(cursor.as_slice(), b" world");
    assert_eq!(cursor.remaining(), 6);

    let world = cursor.advance(6);
    assert_eq!(world.as_slice(), b" world");
    assert_eq!(cursor.remaining(), 0);

    let past_end = cursor.advance(1);
    assert!(past_end.is_null());
    assert_eq!(past_end.remaining(), 0);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn failed_advance_leaves_cursor_untouched() {
    let view = ByteView::from_slice(b"hello world");
    let mut cursor = view.cursor();
    let ptr_before = cursor.as_ptr();

    let overrun = cursor.advance(12);
    assert!(overrun.is_null());
    assert_eq!(overrun.remaining(), 0);
    assert_eq!(cursor.as_ptr(), ptr_before);
    assert_eq!(cursor.remaining(), 11);

    let overrun = cursor.advance_nospec(12);
    assert!(overrun.is_null());
    assert_eq!(cursor.as_ptr(), ptr_before);
    assert_eq!(cursor.remaining(), 11);
}

#[test]
fn huge_lengths_are_treated_as_overflow() {
    let view = ByteView::from_slice(b"abc");
    let mut cursor = view.cursor();

    for &len in &[HALF + 1, usize::MAX - 1, usize::MAX] {
        assert!(cursor.advance(len).is_null());
        assert!(cursor.advance_nospec(len).is_null());
        assert_eq!(cursor.remaining(), 3);
    }
}

#[test]
fn zero_length_advance_succeeds() {
    let view = ByteView::from_slice(b"abc");
    let mut cursor = view.cursor();

    let nothing = cursor.advance(0);
    assert!(!nothing.is_null());
    assert_eq!(nothing.remaining(), 0);
    assert_eq!(cursor.remaining(), 3);

    // Still fine once the cursor is exhausted.
    cursor.advance(3);
    let nothing = cursor.advance(0);
    assert!(!nothing.is_null());
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn cursor_from_empty_view_starts_empty() {
    let mut cursor = ByteView::empty().cursor();
    assert!(cursor.is_empty());
    assert!(cursor.is_null());
    assert!(cursor.advance(1).is_null());
    assert!(cursor.advance_nospec(1).is_null());
}

#[test]
fn cursor_consumes_whole_view_at_once() {
    let view = ByteView::from_slice(b"abc");
    let mut cursor = view.cursor();

    let all = cursor.advance(3);
    assert_eq!(all.as_slice(), b"abc");
    assert!(cursor.is_empty());
    assert!(!cursor.is_null());
}

#[test]
fn advance_nospec_matches_advance_exhaustively() {
    let storage: Vec<u8> = (0..64u8).collect();

    for buf_len in 0..=16usize {
        let base = &storage[..buf_len];

        let mut requests: Vec<usize> = (0..=buf_len + 4).collect();
        requests.extend_from_slice(&[HALF - 1, HALF, HALF + 1, usize::MAX - 1, usize::MAX]);

        for &len in &requests {
            let mut plain = ByteView::from_slice(base).cursor();
            let mut hardened = ByteView::from_slice(base).cursor();

            let a = plain.advance(len);
            let b = hardened.advance_nospec(len);

            assert_eq!(a.as_ptr(), b.as_ptr(), "buf_len={} len={}", buf_len, len);
            assert_eq!(a.remaining(), b.remaining(), "buf_len={} len={}", buf_len, len);
            assert_eq!(a.is_null(), b.is_null(), "buf_len={} len={}", buf_len, len);

            assert_eq!(plain.as_ptr(), hardened.as_ptr());
            assert_eq!(plain.remaining(), hardened.remaining());
        }
    }
}

#[test]
fn advance_nospec_matches_advance_over_a_walk() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let steps = [3usize, 0, 1, 7, 100, 2, 5, usize::MAX, 4, 9, 0, 12, 1, 3];

    let mut plain = ByteView::from_slice(data).cursor();
    let mut hardened = ByteView::from_slice(data).cursor();

    for &step in &steps {
        let a = plain.advance(step);
        let b = hardened.advance_nospec(step);
        assert_eq!(a.as_slice(), b.as_slice());
        assert_eq!(a.is_null(), b.is_null());
        assert_eq!(plain.as_slice(), hardened.as_slice());
    }
}

#[test]
fn untrusted_length_frame_parse() {
    // Two length-prefixed frames followed by a lying length field.
    let wire = ByteView::from_slice(b"\x05hello\x05world\xffx");
    let mut cursor = wire.cursor();

    let mut frames = Vec::new();
    loop {
        let header = cursor.advance(1);
        if header.is_null() {
            break;
        }
        let len = header.as_slice()[0] as usize;
        let body = cursor.advance_nospec(len);
        if body.is_null() {
            break;
        }
        frames.push(body);
    }

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].as_slice(), b"hello");
    assert_eq!(frames[1].as_slice(), b"world");
    // The bogus frame consumed its header byte, then failed cleanly.
    assert_eq!(cursor.as_slice(), b"x");
}

#[test]
fn cursor_equality_is_by_content() {
    let a = ByteView::from_slice(b"abc").cursor();
    let b = ByteView::from_slice(b"abc").cursor();
    assert_eq!(a, b);
    assert_eq!(a, b"abc"[..]);

    assert_eq!(ByteCursor::empty(), ByteCursor::default());
}

#[test]
fn cursor_reads_like_io_read() {
    use std::io::Read;

    let view = ByteView::from_slice(b"abcdef");
    let mut cursor = view.cursor();

    let mut buf = [0u8; 4];
    assert_eq!(cursor.read(&mut buf).unwrap(), 4);
    assert_eq!(&buf, b"abcd");
    assert_eq!(cursor.read(&mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"ef");
    assert_eq!(cursor.read(&mut buf).unwrap(), 0);
}
