// Operation-level errors crossing the dispatch boundary.
//
// Per-strategy failures inside the launcher never reach this type; only the
// terminal outcomes do. Each variant maps to a stable wire code so the
// frontend can branch on `code` and show `message` as-is.

use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Caller omitted a required field; never retried.
    #[error("File path is null")]
    InvalidArgument,

    /// Issuing the media scan request failed, or its completion can
    /// provably never fire.
    #[error("Failed to scan file: {0}")]
    Scan(String),

    /// Every launch strategy was tried and none succeeded.
    #[error("No suitable file manager found (tried: {})", .attempted.join(", "))]
    NoFileManager { attempted: Vec<&'static str> },

    /// A failure outside the per-strategy boundaries escaped the whole
    /// launch sequence.
    #[error("Failed to open file manager: {0}")]
    Open(String),
}

impl BridgeError {
    /// Stable error code carried over the dispatch boundary.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::InvalidArgument => "INVALID_ARGUMENT",
            BridgeError::Scan(_) => "SCAN_ERROR",
            BridgeError::NoFileManager { .. } => "NO_FILE_MANAGER",
            BridgeError::Open(_) => "OPEN_ERROR",
        }
    }
}

// The boundary expects `{ code, message }`, not Rust enum structure.
impl Serialize for BridgeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("BridgeError", 2)?;
        s.serialize_field("code", self.code())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(BridgeError::InvalidArgument.code(), "INVALID_ARGUMENT");
        assert_eq!(BridgeError::Scan("x".into()).code(), "SCAN_ERROR");
        assert_eq!(
            BridgeError::NoFileManager { attempted: vec![] }.code(),
            "NO_FILE_MANAGER"
        );
        assert_eq!(BridgeError::Open("x".into()).code(), "OPEN_ERROR");
    }

    #[test]
    fn test_wire_shape() {
        let err = BridgeError::Scan("disk on fire".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "SCAN_ERROR");
        assert_eq!(json["message"], "Failed to scan file: disk on fire");
    }

    #[test]
    fn test_exhaustion_message_lists_attempts() {
        let err = BridgeError::NoFileManager {
            attempted: vec!["a", "b"],
        };
        assert!(err.to_string().contains("a, b"));
    }
}
