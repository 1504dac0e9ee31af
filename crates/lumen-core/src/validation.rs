//! Validation of numeric text entered by users.
//!
//! Illuminance comes in as free text from spin boxes and command lines.
//! Only plain decimal numbers are accepted: digits, optionally followed by a
//! single `.` and more digits. Signs, exponents and blanks are rejected.

use tracing::trace;

use crate::error::{Error, Result};

/// Whether `text` is an unsigned decimal number with at most one `.`.
///
/// ```
/// use lumen_core::validation::is_numeric;
///
/// assert!(is_numeric("250"));
/// assert!(is_numeric("12.5"));
/// assert!(!is_numeric("1.2.3"));
/// assert!(!is_numeric("-4"));
/// ```
pub fn is_numeric(text: &str) -> bool {
    text.splitn(2, '.').all(|part| {
        let ok = !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !ok {
            trace!("Rejecting non-numeric part '{}' of '{}'", part, text);
        }
        ok
    })
}

/// Parse user-entered illuminance.
///
/// Any fractional part is dropped since lux is handled in whole units.
pub fn parse_lux(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if !is_numeric(trimmed) {
        return Err(Error::NotNumeric(text.to_string()));
    }
    let whole = trimmed.split('.').next().unwrap_or(trimmed);
    // Digits only at this point, so the only failure is overflow.
    whole
        .parse::<i64>()
        .map_err(|_| Error::NotNumeric(text.to_string()))
}
