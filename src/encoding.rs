//! Byte-stream decoding for non-UTF-8 documents.
//!
//! Detection order: byte-order mark, then a `charset` declaration in the
//! first 1024 bytes, then UTF-8 with lossy replacement. Decoding never
//! fails; mojibake from a wrong guess is the parser's problem, not a
//! hard error.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

const DETECTION_WINDOW: usize = 1024;

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?\s*([a-zA-Z0-9._:+-]+)"#).expect("META_CHARSET regex")
});

/// Decode raw document bytes into a UTF-8 string.
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = detect(bytes).unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

fn detect(bytes: &[u8]) -> Option<&'static Encoding> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return Some(encoding);
    }
    let head = &bytes[..bytes.len().min(DETECTION_WINDOW)];
    let captures = META_CHARSET.captures(head)?;
    Encoding::for_label(captures.get(1)?.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8_passes_through() {
        let html = "<html><body><p>café</p></body></html>";
        assert_eq!(decode_html(html.as_bytes()), html);
    }

    #[test]
    fn meta_charset_drives_decoding() {
        // "séance" in ISO-8859-1: é is 0xE9.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"<html><head><meta charset=\"iso-8859-1\"></head><body><p>s");
        bytes.push(0xE9);
        bytes.extend_from_slice(b"ance</p></body></html>");

        let decoded = decode_html(&bytes);
        assert!(decoded.contains("s\u{e9}ance"));
    }

    #[test]
    fn utf8_bom_is_respected() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("<p>text</p>".as_bytes());
        assert!(decode_html(&bytes).contains("<p>text</p>"));
    }

    #[test]
    fn unknown_labels_fall_back_to_utf8() {
        let bytes = b"<meta charset=\"not-a-charset\"><p>ok</p>";
        assert!(decode_html(bytes).contains("<p>ok</p>"));
    }
}
