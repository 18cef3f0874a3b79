//! The host capability router.
//!
//! `Host` is the single surface application code talks to. It picks a
//! provider exactly once, when constructed: a `NativeBridge` when the
//! `ZosNative` marker is injected, a `BrowserHost` otherwise. The choice
//! and the capability flags never change for the rest of the session.

use zos_host::{
    BrowserFeatures, HostCapabilities, HostError, OpenDialogOptions, SaveDialogOptions,
};

use crate::browser::BrowserHost;
use crate::console;
use crate::native::NativeBridge;
use crate::probe;

/// The provider serving this session, fixed at initialization.
enum Provider {
    Native(NativeBridge),
    Browser(BrowserHost),
}

/// Uniform asynchronous capability surface for host access.
pub struct Host {
    capabilities: HostCapabilities,
    provider: Provider,
}

impl Host {
    /// Detect the hosting environment and build the router for it.
    ///
    /// Detection is synchronous and side-effect-free: the absence of the
    /// native marker is the normal browser-only case, not an error.
    pub fn detect() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        match NativeBridge::from_global() {
            Some(bridge) => {
                console::log("native bridge detected, routing to host");
                Self::with_bridge(bridge)
            }
            None => {
                let features = probe::browser_features();
                console::log(&format!(
                    "no native bridge, using browser fallbacks (clipboard: {}, notifications: {})",
                    features.clipboard, features.notifications
                ));
                Self::browser(features)
            }
        }
    }

    /// Build a native-bridge session from an explicit bridge handle.
    pub fn with_bridge(bridge: NativeBridge) -> Self {
        Self {
            capabilities: HostCapabilities::native(),
            provider: Provider::Native(bridge),
        }
    }

    /// Build a browser-only session from an explicit feature probe.
    pub fn browser(features: BrowserFeatures) -> Self {
        Self {
            capabilities: HostCapabilities::browser(features),
            provider: Provider::Browser(BrowserHost::new()),
        }
    }

    /// The capability flags computed at initialization.
    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    /// Whether a native bridge serves this session.
    pub fn is_native(&self) -> bool {
        self.capabilities.is_native
    }

    /// Read file content. Under the browser fallback, a path never written
    /// reads as the empty string.
    pub async fn read_file(&self, path: &str) -> Result<String, HostError> {
        match &self.provider {
            Provider::Native(bridge) => bridge.read_file(path).await,
            Provider::Browser(host) => host.read_file(path),
        }
    }

    /// Write file content.
    pub async fn write_file(&self, path: &str, content: &str) -> Result<(), HostError> {
        match &self.provider {
            Provider::Native(bridge) => bridge.write_file(path, content).await,
            Provider::Browser(host) => host.write_file(path, content),
        }
    }

    /// Display a notification. Permission denial is a silent no-op; this
    /// operation never fails the caller.
    pub async fn notify(&self, title: &str, body: Option<&str>) {
        match &self.provider {
            Provider::Native(bridge) => bridge.notify(title, body).await,
            Provider::Browser(host) => host.notify(title, body).await,
        }
    }

    /// Write text to the clipboard.
    pub async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError> {
        match &self.provider {
            Provider::Native(bridge) => bridge.copy_to_clipboard(text).await,
            Provider::Browser(host) => host.copy_to_clipboard(text).await,
        }
    }

    /// Read text from the clipboard. An empty clipboard reads as the
    /// empty string.
    pub async fn read_from_clipboard(&self) -> Result<String, HostError> {
        match &self.provider {
            Provider::Native(bridge) => bridge.read_from_clipboard().await,
            Provider::Browser(host) => host.read_from_clipboard().await,
        }
    }

    /// Show an open dialog and resolve with the selected path(s), reduced
    /// to file names under the browser fallback. Cancellation resolves to
    /// an empty list; this operation never rejects.
    pub async fn show_open_dialog(&self, options: OpenDialogOptions) -> Vec<String> {
        match &self.provider {
            Provider::Native(bridge) => bridge.show_open_dialog(&options).await,
            Provider::Browser(host) => host.show_open_dialog(&options).await,
        }
    }

    /// Show a save dialog and resolve with the chosen path. Cancellation
    /// resolves to `None`; this operation never rejects.
    pub async fn show_save_dialog(&self, options: SaveDialogOptions) -> Option<String> {
        match &self.provider {
            Provider::Native(bridge) => bridge.show_save_dialog(&options).await,
            Provider::Browser(host) => host.show_save_dialog(&options),
        }
    }

    /// Open a URL externally: through the host shell natively, in a new
    /// tab under the browser fallback. Never fails the caller.
    pub async fn open_external(&self, url: &str) {
        match &self.provider {
            Provider::Native(bridge) => bridge.open_external(url).await,
            Provider::Browser(host) => host.open_external(url),
        }
    }
}
