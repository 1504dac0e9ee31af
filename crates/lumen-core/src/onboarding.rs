//! Onboarding payload handling.
//!
//! A Matter onboarding payload reads `MT:<code>`, where `<code>` is the
//! Base38 text a QR code carries. Only the split between prefix and code is
//! handled here; rendering the QR image is left to the caller.

use serde::Serialize;

use lumen_types::protocol::{SETUP_PAYLOAD_PREFIX, SETUP_PAYLOAD_SEPARATOR};

use crate::error::{Error, Result, SetupPayloadReason};

/// Kind of onboarding payload, derived from its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PayloadKind {
    /// `MT:` Matter payload.
    Matter,
    /// Any other prefix.
    Other(String),
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadKind::Matter => write!(f, "Matter"),
            PayloadKind::Other(prefix) if prefix.is_empty() => write!(f, "unprefixed"),
            PayloadKind::Other(prefix) => write!(f, "{}", prefix),
        }
    }
}

/// An onboarding payload split into prefix and setup code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetupPayload<'a> {
    /// Text before the first `:`.
    pub prefix: &'a str,
    /// Text after the first `:`.
    pub code: &'a str,
}

impl<'a> SetupPayload<'a> {
    /// Split a payload at its first `:`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// ```
    /// use lumen_core::onboarding::{PayloadKind, SetupPayload};
    ///
    /// let payload = SetupPayload::parse("MT:Y.K9042C00KA0648G00").unwrap();
    /// assert_eq!(payload.code, "Y.K9042C00KA0648G00");
    /// assert_eq!(payload.kind(), PayloadKind::Matter);
    /// ```
    pub fn parse(payload: &'a str) -> Result<Self> {
        let trimmed = payload.trim();
        let (prefix, code) = trimmed
            .split_once(SETUP_PAYLOAD_SEPARATOR)
            .ok_or_else(|| {
                Error::invalid_setup_payload(payload, SetupPayloadReason::MissingSeparator)
            })?;
        if code.is_empty() {
            return Err(Error::invalid_setup_payload(
                payload,
                SetupPayloadReason::EmptyCode,
            ));
        }
        Ok(Self { prefix, code })
    }

    /// Classify the payload by prefix (case-insensitive).
    pub fn kind(&self) -> PayloadKind {
        if self.prefix.eq_ignore_ascii_case(SETUP_PAYLOAD_PREFIX) {
            PayloadKind::Matter
        } else {
            PayloadKind::Other(self.prefix.to_string())
        }
    }
}

/// Return the setup code carried by an onboarding payload.
pub fn setup_code(payload: &str) -> Result<&str> {
    SetupPayload::parse(payload).map(|p| p.code)
}
