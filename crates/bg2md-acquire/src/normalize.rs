use unicode_normalization::UnicodeNormalization;

/// Normalize a retrieved page body to a single consistent text form.
///
/// Strips a leading byte-order mark and puts the text into NFC, so the same
/// visible character always has the same code points when the parser's
/// patterns look for it (curly quotes, dashes, accented names).
pub fn normalize_text(input: &str) -> String {
    let body = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    body.nfc().collect()
}

/// Decode raw bytes as UTF-8, replacing invalid sequences, then normalize.
pub fn decode_bytes(bytes: &[u8]) -> String {
    normalize_text(&String::from_utf8_lossy(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_nfc() {
        // e + combining acute accent -> é (precomposed)
        let decomposed = "Mose\u{0301}";
        assert_eq!(normalize_text(decomposed), "Mosé");
    }

    #[test]
    fn test_strips_bom() {
        assert_eq!(normalize_text("\u{FEFF}<html>"), "<html>");
    }

    #[test]
    fn test_keeps_nbsp_and_quotes() {
        let input = "\u{00A0}20 \u{201C}Rabbi\u{201D}";
        assert_eq!(normalize_text(input), input);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let bytes = b"ok \xFF done";
        assert_eq!(decode_bytes(bytes), "ok \u{FFFD} done");
    }
}
