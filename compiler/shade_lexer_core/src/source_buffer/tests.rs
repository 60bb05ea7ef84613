use super::*;
use crate::SourceCursor;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.as_str(), "");
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn sentinel_follows_content() {
    let buf = SourceBuffer::new("float4 main()");
    let bytes = buf.as_sentinel_bytes();
    assert_eq!(buf.as_bytes(), b"float4 main()");
    assert_eq!(bytes[buf.len() as usize], 0);
}

#[test]
fn padded_to_cache_line() {
    for len in [0usize, 1, 61, 62, 63, 64, 65, 127, 200] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        let total = buf.as_sentinel_bytes().len();
        assert_eq!(total % CACHE_LINE, 0, "len {len}: total {total}");
        assert!(total >= len + 2, "len {len}: no peek padding");
        assert!(buf.as_sentinel_bytes()[len..].iter().all(|&b| b == 0));
    }
}

#[test]
fn no_terminator_in_plain_text() {
    let buf = SourceBuffer::new("void main() {}\n");
    assert_eq!(buf.terminator(), None);
}

#[test]
fn first_embedded_terminator_recorded() {
    let buf = SourceBuffer::new("ab\0cd\0");
    assert_eq!(buf.terminator(), Some(2));
    assert_eq!(buf.len(), 6);
}

#[test]
fn multibyte_content_preserved() {
    let buf = SourceBuffer::new("// héllo\nx");
    assert_eq!(buf.as_str(), "// héllo\nx");
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'a');
}
