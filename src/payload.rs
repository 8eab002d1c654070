//! Payload validation, decoding, and encoding.
//!
//! A data URI payload is stored in its encoded form: percent-encoded text,
//! or base64 text (which may itself contain percent escapes) when the
//! `base64` flag is set. The functions here are pure; all validation is
//! eager and surfaces [`PayloadError`] at the call site.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode as pct};

use crate::error::PayloadError;

/// Everything except unreserved characters gets escaped when encoding,
/// matching the strictest common form of percent-encoding.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Checks that every character is a URI character or a `%HH` escape.
///
/// # Errors
///
/// Returns `PayloadError` on a `%` not followed by two hex digits, or on a
/// character outside the allowed set.
pub fn validate_percent_encoded(text: &str) -> Result<(), PayloadError> {
    let bytes = text.as_bytes();
    let mut i = 0;
    for (pos, c) in text.char_indices() {
        if pos < i {
            continue;
        }
        if c == '%' {
            let valid = bytes.len() >= pos + 3
                && bytes[pos + 1].is_ascii_hexdigit()
                && bytes[pos + 2].is_ascii_hexdigit();
            if !valid {
                return Err(PayloadError::InvalidPercentEncoding { position: pos });
            }
            i = pos + 3;
        } else if is_uric_char(c) {
            i = pos + c.len_utf8();
        } else {
            return Err(PayloadError::InvalidChar { char: c, position: pos });
        }
    }
    Ok(())
}

/// Returns true if the text is syntactically valid percent-encoded payload.
#[must_use]
pub fn is_valid_percent_encoded(text: &str) -> bool {
    validate_percent_encoded(text).is_ok()
}

/// Checks base64 alphabet, padding, and length without keeping the decoded
/// bytes.
///
/// # Errors
///
/// Returns `PayloadError::InvalidBase64` if the text does not decode.
pub fn validate_base64(text: &[u8]) -> Result<(), PayloadError> {
    STANDARD
        .decode(text)
        .map(|_| ())
        .map_err(|e| PayloadError::InvalidBase64 { reason: e.to_string() })
}

/// Returns true if the text is valid standard-alphabet base64.
#[must_use]
pub fn is_valid_base64(text: &str) -> bool {
    validate_base64(text.as_bytes()).is_ok()
}

/// Decodes percent-encoded text to raw bytes.
///
/// # Errors
///
/// Returns `PayloadError` if the text fails percent-encoding validation.
pub fn decode_percent(text: &str) -> Result<Vec<u8>, PayloadError> {
    validate_percent_encoded(text)?;
    Ok(percent_decode_str(text).collect())
}

/// Decodes base64 text to raw bytes.
///
/// # Errors
///
/// Returns `PayloadError::InvalidBase64` on invalid alphabet or padding.
pub fn decode_base64(text: &[u8]) -> Result<Vec<u8>, PayloadError> {
    STANDARD
        .decode(text)
        .map_err(|e| PayloadError::InvalidBase64 { reason: e.to_string() })
}

/// Percent-encodes raw bytes, escaping everything but unreserved characters.
#[must_use]
pub fn percent_encode(bytes: &[u8]) -> String {
    pct(bytes, ENCODE_SET).to_string()
}

/// Base64-encodes raw bytes with the standard alphabet and padding.
#[must_use]
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Returns true if the character may appear unescaped in a data URI payload.
#[must_use]
pub const fn is_uric_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '_' | '.' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ','
                | ';' | '=' | ':' | '/' | '?' | '@'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_plain_text() {
        assert!(is_valid_percent_encoded("Bonjour%20le%20monde%21"));
    }

    #[test]
    fn validate_empty() {
        assert!(is_valid_percent_encoded(""));
    }

    #[test]
    fn validate_truncated_escape_fails() {
        let result = validate_percent_encoded("abc%2");
        assert_eq!(result, Err(PayloadError::InvalidPercentEncoding { position: 3 }));
    }

    #[test]
    fn validate_bad_hex_fails() {
        let result = validate_percent_encoded("%GG");
        assert_eq!(result, Err(PayloadError::InvalidPercentEncoding { position: 0 }));
    }

    #[test]
    fn validate_raw_space_fails() {
        let result = validate_percent_encoded("hello world");
        assert_eq!(result, Err(PayloadError::InvalidChar { char: ' ', position: 5 }));
    }

    #[test]
    fn validate_non_ascii_fails() {
        let result = validate_percent_encoded("°28");
        assert!(matches!(result, Err(PayloadError::InvalidChar { char: '°', position: 0 })));
    }

    #[test]
    fn decode_percent_roundtrip() {
        let decoded = decode_percent("Bonjour%20le%20monde%21").unwrap();
        assert_eq!(decoded, b"Bonjour le monde!");
    }

    #[test]
    fn encode_matches_decode() {
        let encoded = percent_encode(b"Bonjour le monde!");
        assert_eq!(encoded, "Bonjour%20le%20monde%21");
        assert_eq!(decode_percent(&encoded).unwrap(), b"Bonjour le monde!");
    }

    #[test]
    fn base64_valid() {
        assert!(is_valid_base64("R0lGODlh"));
    }

    #[test]
    fn base64_empty_is_valid() {
        assert!(is_valid_base64(""));
    }

    #[test]
    fn base64_bad_alphabet_fails() {
        assert!(!is_valid_base64("°28"));
    }

    #[test]
    fn base64_bad_padding_fails() {
        assert!(!is_valid_base64("abcde"));
    }

    #[test]
    fn base64_roundtrip() {
        let encoded = base64_encode(b"hello");
        assert_eq!(decode_base64(encoded.as_bytes()).unwrap(), b"hello");
    }
}
