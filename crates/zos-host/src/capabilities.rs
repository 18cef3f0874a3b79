//! Capability flags for a host session.
//!
//! The capability set is computed exactly once when the router initializes
//! and is read-only for the rest of the session. Re-detection only happens
//! on re-initialization (page reload).

use serde::{Deserialize, Serialize};

/// Browser API availability, as observed by the environment probe.
///
/// This is the explicit input to capability computation: the probe runs
/// once at startup and hands its result here, so the routing rules stay
/// free of ambient environment access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserFeatures {
    /// `navigator.clipboard` is present
    pub clipboard: bool,
    /// The `Notification` API is present
    pub notifications: bool,
}

impl BrowserFeatures {
    /// Features for an environment with no guarded browser APIs at all
    /// (e.g. a worker context with no `window`).
    pub fn none() -> Self {
        Self::default()
    }
}

/// The per-session capability record exposed to application code.
///
/// Field names serialize in the camelCase shape the shell hands to
/// applications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCapabilities {
    /// A native host bridge is present for this session
    pub is_native: bool,
    /// Real filesystem access is available
    pub has_file_system: bool,
    /// Notifications can be displayed
    pub has_notifications: bool,
    /// The clipboard can be read and written
    pub has_clipboard: bool,
    /// Open/save dialogs are available
    pub has_dialog: bool,
    /// External links can be opened through the host shell
    pub has_shell: bool,
}

impl HostCapabilities {
    /// Capabilities for a session with a native bridge.
    ///
    /// The native provider supplies every capability uniformly, so all six
    /// flags are set regardless of underlying browser support.
    pub fn native() -> Self {
        Self {
            is_native: true,
            has_file_system: true,
            has_notifications: true,
            has_clipboard: true,
            has_dialog: true,
            has_shell: true,
        }
    }

    /// Capabilities for a browser-only session.
    ///
    /// Native-only capabilities (filesystem, dialogs, shell) are never
    /// claimed; clipboard and notifications reflect the probed browser API
    /// availability.
    pub fn browser(features: BrowserFeatures) -> Self {
        Self {
            is_native: false,
            has_file_system: false,
            has_notifications: features.notifications,
            has_clipboard: features.clipboard,
            has_dialog: false,
            has_shell: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_claims_everything() {
        let caps = HostCapabilities::native();
        assert!(caps.is_native);
        assert!(caps.has_file_system);
        assert!(caps.has_notifications);
        assert!(caps.has_clipboard);
        assert!(caps.has_dialog);
        assert!(caps.has_shell);
    }

    #[test]
    fn test_browser_never_claims_native_capabilities() {
        // Even with every browser feature present, native-only flags stay off
        let caps = HostCapabilities::browser(BrowserFeatures {
            clipboard: true,
            notifications: true,
        });
        assert!(!caps.is_native);
        assert!(!caps.has_file_system);
        assert!(!caps.has_dialog);
        assert!(!caps.has_shell);
        assert!(caps.has_clipboard);
        assert!(caps.has_notifications);
    }

    #[test]
    fn test_browser_flags_track_probe() {
        let caps = HostCapabilities::browser(BrowserFeatures {
            clipboard: true,
            notifications: false,
        });
        assert!(caps.has_clipboard);
        assert!(!caps.has_notifications);

        let caps = HostCapabilities::browser(BrowserFeatures::none());
        assert!(!caps.has_clipboard);
        assert!(!caps.has_notifications);
    }

    #[test]
    fn test_serializes_camel_case() {
        let caps = HostCapabilities::browser(BrowserFeatures {
            clipboard: true,
            notifications: false,
        });
        let json = serde_json::to_string(&caps).unwrap();
        assert!(json.contains("\"isNative\":false"));
        assert!(json.contains("\"hasClipboard\":true"));
        assert!(json.contains("\"hasFileSystem\":false"));
    }
}
