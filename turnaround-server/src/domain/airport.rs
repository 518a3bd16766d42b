//! Airport code type.

use std::fmt;

/// An airport code taken from an SSIM station field.
///
/// SSIM stations are normally 3-letter IATA codes, but source files are not
/// reliably clean, so the only guarantee is that the code is non-empty and
/// carries no surrounding whitespace. `AirportCode::parse` returns `None` for
/// blank input rather than an error: a blank station is a missing value, not
/// a malformed one.
///
/// # Examples
///
/// ```
/// use turnaround_server::domain::AirportCode;
///
/// let cgh = AirportCode::parse("CGH").unwrap();
/// assert_eq!(cgh.as_str(), "CGH");
///
/// // Surrounding whitespace is dropped
/// assert_eq!(AirportCode::parse(" SDU ").unwrap().as_str(), "SDU");
///
/// // Blank input is a missing station
/// assert!(AirportCode::parse("   ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode(String);

impl AirportCode {
    /// Parse an airport code, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(AirportCode(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.0)
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
