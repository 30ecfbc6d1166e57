#![warn(rust_2018_idioms)]

use std::ffi::CStr;

use atombytes::ByteView;

#[test]
fn from_slice_wraps_without_copying() {
    let data = b"hello";
    let view = ByteView::from_slice(data);
    assert_eq!(view.as_ptr(), data.as_ptr());
    assert_eq!(view.len(), 5);
    assert!(!view.is_empty());
    assert!(!view.is_null());
    assert_eq!(view.as_slice(), b"hello");
}

#[test]
fn empty_view_is_null() {
    let view = ByteView::empty();
    assert!(view.is_empty());
    assert!(view.is_null());
    assert_eq!(view.len(), 0);
    assert_eq!(view.as_slice(), b"");
    assert_eq!(ByteView::default(), view);
}

#[test]
fn from_c_str_excludes_terminator() {
    let s = CStr::from_bytes_with_nul(b"hello\0").unwrap();
    let view = ByteView::from_c_str(s);
    assert_eq!(view.as_slice(), b"hello");
    assert_eq!(view.len(), 5);
}

#[test]
fn from_raw_parts_roundtrip() {
    let data = b"xyz";
    let view = unsafe { ByteView::from_raw_parts(data.as_ptr(), data.len()) };
    assert_eq!(view.as_slice(), b"xyz");
    assert_eq!(view.as_ptr(), data.as_ptr());
}

#[test]
fn views_are_plain_copies() {
    let view = ByteView::from_slice(b"abc");
    let copy = view;
    assert_eq!(view, copy);
    assert_eq!(copy.as_ptr(), view.as_ptr());
}

#[test]
fn equality_is_by_content() {
    assert_eq!(ByteView::from_slice(b"abc"), ByteView::from_slice(b"abc"));
    assert_ne!(ByteView::from_slice(b"abc"), ByteView::from_slice(b"abd"));
    assert_eq!(ByteView::from_slice(b"abc"), b"abc"[..]);

    // The null view and a zero-length slice view compare equal: both
    // cover no bytes.
    assert_eq!(ByteView::empty(), ByteView::from_slice(b""));
}

#[test]
fn view_from_slice_via_from_impl() {
    let view: ByteView<'_> = (&b"abc"[..]).into();
    assert_eq!(view.as_slice(), b"abc");
    assert_eq!(view.as_ref(), b"abc");
}
