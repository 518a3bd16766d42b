//! Decode error types.
//!
//! Decoding is the only stage of the pipeline that can reject input. Every
//! later stage degrades to a shorter or unmatched result instead of failing.

use std::fmt;

use serde::Serialize;

/// Why a schedule line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Line is neither wide enough for the fixed layout nor has enough tokens
    #[error("line too short: {len} characters")]
    TooShort { len: usize },

    /// Record type marker or carrier code is missing or wrong
    #[error("bad record prefix: {0}")]
    BadPrefix(String),

    /// Flight-number/date compound field is truncated or has no flight number
    #[error("incomplete compound field: {0:?}")]
    IncompleteCompoundField(String),

    /// A period date is not shaped like DDMMMYY
    #[error("bad date format: {0:?}")]
    BadDateFormat(String),
}

impl DecodeError {
    /// The reason category, without the offending text.
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::TooShort { .. } => DecodeErrorKind::TooShort,
            DecodeError::BadPrefix(_) => DecodeErrorKind::BadPrefix,
            DecodeError::IncompleteCompoundField(_) => DecodeErrorKind::IncompleteCompoundField,
            DecodeError::BadDateFormat(_) => DecodeErrorKind::BadDateFormat,
        }
    }
}

/// Reason category of a [`DecodeError`], used for rejection tallies.
///
/// Ordered by how far into a line decoding got before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeErrorKind {
    TooShort,
    BadPrefix,
    IncompleteCompoundField,
    BadDateFormat,
}

impl DecodeErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeErrorKind::TooShort => "too_short",
            DecodeErrorKind::BadPrefix => "bad_prefix",
            DecodeErrorKind::IncompleteCompoundField => "incomplete_compound_field",
            DecodeErrorKind::BadDateFormat => "bad_date_format",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
