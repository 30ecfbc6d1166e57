#![warn(rust_2018_idioms)]

use atombytes::ByteView;

#[test]
fn debug_escapes_like_a_byte_literal() {
    let view = ByteView::from_slice(b"hello\nworld\0\xffa\tb\\\"");
    assert_eq!(
        format!("{:?}", view),
        "b\"hello\\nworld\\0\\xffa\\tb\\\\\\\"\"",
    );
}

#[test]
fn debug_null_view_prints_empty() {
    assert_eq!(format!("{:?}", ByteView::empty()), "b\"\"");
}

#[test]
fn debug_cursor_shows_remaining_bytes() {
    let view = ByteView::from_slice(b"hello world");
    let mut cursor = view.cursor();
    cursor.advance(6);
    assert_eq!(format!("{:?}", cursor), "b\"world\"");
}

#[test]
fn hex_formats() {
    let view = ByteView::from_slice(b"\x00\x01\xab");
    assert_eq!(format!("{:x}", view), "0001ab");
    assert_eq!(format!("{:X}", view), "0001AB");

    let cursor = view.cursor();
    assert_eq!(format!("{:x}", cursor), "0001ab");
}
