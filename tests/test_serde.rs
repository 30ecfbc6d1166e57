#![cfg(feature = "serde")]
#![warn(rust_2018_idioms)]

use serde_test::{assert_de_tokens, assert_tokens, Token};

use atombytes::{ByteCursor, ByteView};

#[test]
fn test_ser_de_empty() {
    let v = ByteView::empty();
    assert_tokens(&v, &[Token::BorrowedBytes(b"")]);
    let c = ByteCursor::empty();
    assert_tokens(&c, &[Token::BorrowedBytes(b"")]);
}

#[test]
fn test_ser_de() {
    let v = ByteView::from_slice(b"bytes");
    assert_tokens(&v, &[Token::BorrowedBytes(b"bytes")]);
    let c = v.cursor();
    assert_tokens(&c, &[Token::BorrowedBytes(b"bytes")]);
}

#[test]
fn test_de_borrowed_str() {
    let v = ByteView::from_slice(b"abc");
    assert_de_tokens(&v, &[Token::BorrowedStr("abc")]);
}

#[test]
fn test_ser_de_partially_consumed_cursor() {
    let view = ByteView::from_slice(b"hello world");
    let mut cursor = view.cursor();
    cursor.advance(6);
    assert_tokens(&cursor, &[Token::BorrowedBytes(b"world")]);
}
