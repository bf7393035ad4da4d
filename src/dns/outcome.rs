//! The value type returned by every state-mutating operation.

use serde::Serialize;

use crate::network::PlatformError;

/// Outcome of a resolver mutation: a success flag plus a human-readable
/// message.
///
/// Always returned as a value, never raised: the core does not terminate
/// the process or unwind across its boundary on any platform failure.
/// Low-level causes (command stderr, I/O error text) are folded into
/// `message` for display and logging; callers branch only on `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct OperationResult {
    /// Whether the operation took effect.
    pub success: bool,
    /// Human-readable description of what happened.
    pub message: String,
}

impl OperationResult {
    /// Creates a successful result.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Creates a failed result.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<PlatformError> for OperationResult {
    fn from(err: PlatformError) -> Self {
        Self::fail(err.to_string())
    }
}

impl std::fmt::Display for OperationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = if self.success { "ok" } else { "failed" };
        write!(f, "{tag}: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_flag() {
        assert!(OperationResult::ok("done").success);
        assert!(!OperationResult::fail("nope").success);
    }

    #[test]
    fn platform_error_folds_into_message() {
        let err = PlatformError::CommandFailed {
            program: "netsh".into(),
            code: 1,
            stderr: "bad interface".into(),
        };
        let result = OperationResult::from(err);
        assert!(!result.success);
        assert!(result.message.contains("netsh"));
        assert!(result.message.contains("bad interface"));
    }

    #[test]
    fn display_prefixes_outcome() {
        assert_eq!(OperationResult::ok("set").to_string(), "ok: set");
        assert_eq!(OperationResult::fail("x").to_string(), "failed: x");
    }
}
