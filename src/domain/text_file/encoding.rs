use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

/// Decodes raw file bytes into text.
///
/// A byte-order mark wins over everything else and is stripped from the
/// result. Without one, valid UTF-8 is taken as is and anything else is
/// handed to the charset detector. Malformed sequences are replaced with
/// U+FFFD, so decoding never fails.
#[must_use]
pub fn decode(bytes: &[u8]) -> (&'static Encoding, String) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            log::debug!("malformed {} sequences replaced", encoding.name());
        }
        return (encoding, text.into_owned());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (UTF_8, text.to_owned());
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    log::debug!("content isn't UTF-8, guessed {}", encoding.name());

    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        log::debug!("malformed {} sequences replaced", encoding.name());
    }

    (encoding, text.into_owned())
}

/// Text is always written back as UTF-8 without a byte-order mark.
#[must_use]
pub fn encode(text: &str) -> Cow<'_, [u8]> {
    let (bytes, _, _) = UTF_8.encode(text);
    bytes
}

#[cfg(test)]
mod tests {
    use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{decode, encode};

    #[rstest]
    #[case::plain(b"hello\nworld".to_vec())]
    #[case::utf8_bom(b"\xEF\xBB\xBFhello\nworld".to_vec())]
    fn decodes_utf8(#[case] bytes: Vec<u8>) {
        let (encoding, text) = decode(&bytes);

        assert_eq!(encoding, UTF_8);
        assert_eq!(text, "hello\nworld");
    }

    #[test]
    fn decodes_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "héllo".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        let (encoding, text) = decode(&bytes);

        assert_eq!(encoding, UTF_16LE);
        assert_eq!(text, "héllo");
    }

    #[test]
    fn decodes_utf16be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "こんにちは".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }

        let (encoding, text) = decode(&bytes);

        assert_eq!(encoding, UTF_16BE);
        assert_eq!(text, "こんにちは");
    }

    #[test]
    fn decodes_legacy_single_byte_text() {
        let bytes = b"Le caf\xe9 est tr\xe8s bon, \xe0 bient\xf4t. Le gar\xe7on appr\xe9cie la cr\xe8me br\xfbl\xe9e.";

        let (encoding, text) = decode(bytes);

        assert_ne!(encoding, UTF_8);
        assert!(text.contains("caf\u{e9}"), "unexpected decode: {text}");
        assert!(!text.contains('\u{FFFD}'));
    }

    #[test]
    fn decodes_empty_input_as_utf8() {
        let (encoding, text) = decode(&[]);

        assert_eq!(encoding, UTF_8);
        assert_eq!(text, "");
    }

    #[test]
    fn encodes_as_utf8_without_bom() {
        assert_eq!(encode("grüße").as_ref(), "grüße".as_bytes());
        assert_eq!(encode("").as_ref(), b"");
    }
}
