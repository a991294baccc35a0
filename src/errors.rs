//! # Error Types
//!
//! Error handling for the Refactoring Bridge client.
//! A single error type carries a [`BridgeErrorKind`] so callers branch on the
//! kind of failure instead of matching message text.

use rmcp::model::ErrorData;
use std::fmt;

/// Fixed message used for every connectivity failure
pub const CONNECT_ERROR_MESSAGE: &str = "Cannot connect to PyCharm";
/// Fixed hint attached to every connectivity failure
pub const CONNECT_ERROR_HINT: &str =
    "Is PyCharm running with the Refactoring Bridge plugin installed?";

/// Classification of a failed bridge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeErrorKind {
    /// The bridge could not be reached (refused, unresolvable, timed out)
    Connectivity,
    /// The bridge answered and rejected the operation
    Application,
    /// The bridge answered "success" with a payload that does not match the
    /// expected schema
    Decode,
}

impl fmt::Display for BridgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeErrorKind::Connectivity => write!(f, "connectivity"),
            BridgeErrorKind::Application => write!(f, "application"),
            BridgeErrorKind::Decode => write!(f, "decode"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeError {
    pub kind: BridgeErrorKind,
    pub message: String,
    pub details: Option<String>,
}

impl BridgeError {
    /// The bridge is unreachable. The message and hint never depend on the
    /// underlying transport error.
    pub fn connectivity() -> Self {
        Self {
            kind: BridgeErrorKind::Connectivity,
            message: CONNECT_ERROR_MESSAGE.to_string(),
            details: Some(CONNECT_ERROR_HINT.to_string()),
        }
    }

    /// The bridge rejected the operation
    pub fn application(message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            kind: BridgeErrorKind::Application,
            message: message.into(),
            details,
        }
    }

    /// Rejection synthesized from a bare HTTP status with no usable body
    pub fn from_status(status: u16) -> Self {
        Self::application(format!("HTTP {status}"), None)
    }

    /// Payload did not match the response schema
    pub fn decode(endpoint: &str, err: impl fmt::Display) -> Self {
        Self {
            kind: BridgeErrorKind::Decode,
            message: format!("Unexpected response from {endpoint}"),
            details: Some(err.to_string()),
        }
    }

    pub fn is_connectivity(&self) -> bool {
        self.kind == BridgeErrorKind::Connectivity
    }

    pub fn is_application(&self) -> bool {
        self.kind == BridgeErrorKind::Application
    }

    pub fn is_decode(&self) -> bool {
        self.kind == BridgeErrorKind::Decode
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {details}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<BridgeError> for ErrorData {
    fn from(err: BridgeError) -> Self {
        ErrorData::internal_error(
            err.to_string(),
            Some(serde_json::json!({ "kind": err.kind.to_string() })),
        )
    }
}
