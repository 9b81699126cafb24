//! # String Utilities

/// Convert bytes to a [`String`], replacing invalid UTF-8 with `U+FFFD`.
///
/// Reuses the buffer when the bytes are already valid.
pub fn string_from_utf8_lossy(v: Vec<u8>) -> String {
    match String::from_utf8(v) {
        Ok(string) => string,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
