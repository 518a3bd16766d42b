//! Reading schedule files.
//!
//! SSIM files are single-byte Latin-1. Every byte maps to the Unicode
//! scalar of the same value, so decoding cannot fail and column positions
//! counted in characters match the original byte columns.

use std::path::Path;

/// Decode ISO-8859-1 bytes into a `String`.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Split text into lines on `\n`, dropping one trailing `\r` from each.
///
/// A trailing newline does not produce a final empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.strip_suffix('\n')
        .unwrap_or(text)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(move |_| !text.is_empty())
}

/// Read a schedule file from disk as Latin-1 text.
pub fn read_schedule(path: &Path) -> std::io::Result<String> {
    std::fs::read(path).map(|bytes| decode_latin1(&bytes))
}
