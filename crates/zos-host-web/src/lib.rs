//! Browser-based Host Capability Router for Zero OS
//!
//! This crate runs in the browser's main thread and gives application code
//! one stable asynchronous surface for host capabilities (file I/O,
//! notifications, clipboard, dialogs, external links), hiding whether a
//! native desktop bridge or a browser API serves each call.
//!
//! ## Module Structure
//!
//! - `host` - The `Host` router and per-session provider selection
//! - `native` - Provider backed by the injected `ZosNative` bridge object
//! - `browser` - Provider backed by standard browser APIs
//! - `probe` - Side-effect-free environment detection
//! - `console` - Prefixed console logging
//!
//! ## Architecture
//!
//! Detection runs once, at `Host::detect()`: if the `ZosNative` global is
//! present the native provider serves every operation for the session;
//! otherwise the browser provider does, with capability flags reflecting
//! actual browser API availability. The provider choice never changes
//! mid-session: a native failure propagates to the caller instead of
//! silently falling back.

// =============================================================================
// Module declarations
// =============================================================================

pub(crate) mod browser;
pub(crate) mod console;
pub(crate) mod host;
pub(crate) mod native;
pub(crate) mod probe;

// =============================================================================
// Public re-exports
// =============================================================================

// Re-export the Host router (main public API)
pub use host::Host;

// Re-export the provider types for direct construction in tests and tooling
pub use browser::BrowserHost;
pub use native::NativeBridge;

// Re-export the core capability model for convenience
pub use zos_host::{
    BrowserFeatures, HostCapabilities, HostError, OpenDialogOptions, SaveDialogOptions,
};
