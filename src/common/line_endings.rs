//! Line ending helpers shared by the generator and the validator.
//!
//! F-Droid's linter rejects metadata with carriage returns, so every file we
//! write goes through [`to_lf`] and every file we read back is scanned with
//! [`contains_crlf`] and [`contains_lf`].

use std::borrow::Cow;

const CRLF: &[u8] = b"\r\n";

/// Check whether any carriage-return + line-feed pair occurs in `bytes`
pub fn contains_crlf(bytes: &[u8]) -> bool {
    bytes.windows(CRLF.len()).any(|pair| pair == CRLF)
}

/// Check whether at least one line-feed byte occurs in `bytes`
pub fn contains_lf(bytes: &[u8]) -> bool {
    bytes.contains(&b'\n')
}

/// Normalize every `\r\n` in `text` to a bare `\n`
///
/// Text without any carriage return is returned borrowed. Lone `\r` bytes
/// that are not followed by `\n` are left untouched.
pub fn to_lf(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
