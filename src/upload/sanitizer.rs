// file: src/upload/sanitizer.rs
// description: ASCII-safe upload filenames via NFC normalization and percent-encoding
// reference: https://docs.rs/percent-encoding, https://unicode.org/reports/tr15/

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Everything except ASCII alphanumerics and `-._~` is encoded.
const UPLOAD_NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub struct FilenameSanitizer;

impl FilenameSanitizer {
    /// Pure-ASCII names pass through untouched.
    pub fn needs_encoding(name: &str) -> bool {
        !name.is_ascii()
    }

    /// NFC-normalizes `name` and percent-encodes the result.
    ///
    /// Composed and decomposed spellings of the same name produce the same
    /// output; `.` is never encoded.
    pub fn encode(name: &str) -> String {
        let composed: String = name.nfc().collect();
        utf8_percent_encode(&composed, UPLOAD_NAME_ENCODE_SET).to_string()
    }

    pub fn sanitize(name: &str) -> Cow<'_, str> {
        if Self::needs_encoding(name) {
            Cow::Owned(Self::encode(name))
        } else {
            Cow::Borrowed(name)
        }
    }
}
