//! Error taxonomy for host capability operations.

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Errors from host capability operations.
///
/// Dialog cancellation is deliberately not an error: operations with a
/// natural "no selection" outcome resolve to an empty/`None` result
/// instead. Notification permission denial is likewise swallowed by the
/// providers, since there is no actionable recovery for the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostError {
    /// The native bridge call rejected, or a required backend failed to
    /// load despite its presence marker being set
    HostUnavailable(String),

    /// The browser denied access to a guarded capability (clipboard,
    /// notifications)
    PermissionDenied(String),

    /// A browser local storage write exceeded the available quota
    QuotaExceeded,
}

impl HostError {
    /// Create a host-unavailable error with context.
    pub fn host_unavailable(context: impl Into<String>) -> Self {
        Self::HostUnavailable(context.into())
    }

    /// Create a permission-denied error with context.
    pub fn permission_denied(context: impl Into<String>) -> Self {
        Self::PermissionDenied(context.into())
    }

    /// Check if this is a host-availability failure.
    pub fn is_host_unavailable(&self) -> bool {
        matches!(self, HostError::HostUnavailable(_))
    }

    /// Check if this is a permission failure.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, HostError::PermissionDenied(_))
    }

    /// Check if this is a storage quota failure.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, HostError::QuotaExceeded)
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::HostUnavailable(context) => {
                write!(f, "host unavailable: {}", context)
            }
            HostError::PermissionDenied(context) => {
                write!(f, "permission denied: {}", context)
            }
            HostError::QuotaExceeded => write!(f, "storage quota exceeded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let err = HostError::host_unavailable("bridge rejected fs.read");
        match err {
            HostError::HostUnavailable(context) => {
                assert_eq!(context, "bridge rejected fs.read");
            }
            _ => panic!("Expected HostUnavailable"),
        }
    }

    #[test]
    fn test_predicates() {
        assert!(HostError::host_unavailable("x").is_host_unavailable());
        assert!(HostError::permission_denied("x").is_permission_denied());
        assert!(HostError::QuotaExceeded.is_quota_exceeded());

        assert!(!HostError::QuotaExceeded.is_host_unavailable());
        assert!(!HostError::host_unavailable("x").is_permission_denied());
    }

    #[test]
    fn test_display() {
        let err = HostError::permission_denied("clipboard read rejected");
        assert_eq!(
            alloc::format!("{}", err),
            "permission denied: clipboard read rejected"
        );
        assert_eq!(
            alloc::format!("{}", HostError::QuotaExceeded),
            "storage quota exceeded"
        );
    }
}
