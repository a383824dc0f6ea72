//! Lifecycle status for externally-resolved asynchronous operations.
//!
//! Reducers never await anything. When a slice kicks off an async operation
//! (an order fetch, a submission), it records the phase here and returns an
//! effect; the runtime later feeds the succeeded/failed action back in.

use serde::{Deserialize, Serialize};

/// Phase of an externally-resolved asynchronous operation.
///
/// Transitions: `Idle → Pending` on start, `Pending → Succeeded` on resolve,
/// `Pending → Failed` on reject, and `Succeeded`/`Failed` `→ Pending` on the
/// next start. There is no terminal phase; the cycle repeats per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsyncStatus {
    /// No operation has started yet
    #[default]
    Idle,

    /// An operation is in flight
    Pending,

    /// The most recent operation resolved
    Succeeded,

    /// The most recent operation was rejected
    Failed,
}

impl AsyncStatus {
    /// Check if no operation has started
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if an operation is in flight
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Check if the most recent operation resolved
    #[must_use]
    pub const fn is_succeeded(self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Check if the most recent operation was rejected
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl std::fmt::Display for AsyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert!(AsyncStatus::default().is_idle());
    }

    #[test]
    fn predicates_match_variants() {
        assert!(AsyncStatus::Pending.is_pending());
        assert!(AsyncStatus::Succeeded.is_succeeded());
        assert!(AsyncStatus::Failed.is_failed());
        assert!(!AsyncStatus::Succeeded.is_pending());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(AsyncStatus::Pending.to_string(), "pending");
        assert_eq!(AsyncStatus::Idle.to_string(), "idle");
    }
}
