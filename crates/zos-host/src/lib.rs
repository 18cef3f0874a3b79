//! Zero OS Host Capability Model
//!
//! Platform-agnostic core of the zOS host compatibility shim:
//!
//! - **Capabilities**: the per-session capability flag record and the
//!   browser feature probe it is computed from
//! - **Errors**: the host error taxonomy shared by all providers
//! - **Dialog**: option records for the open/save dialog operations
//! - **Store**: namespaced key-value file emulation used by the browser
//!   fallback provider
//!
//! The browser/WASM providers and the `Host` router live in `zos-host-web`;
//! this crate holds everything that can be reasoned about (and tested)
//! without a browser.
//!
//! # Design Principles
//!
//! 1. **Detect once**: capabilities are computed at session start from an
//!    explicit probe result and never change afterwards
//! 2. **Provider-neutral**: nothing here knows whether a native bridge or a
//!    browser API ultimately serves an operation
//! 3. **Swappable storage**: file emulation is written against the
//!    `KeyValueStore` trait so any keyed backend with last-write-wins
//!    semantics can serve it

#![no_std]
extern crate alloc;

pub mod capabilities;
pub mod dialog;
pub mod error;
pub mod store;
pub mod testing;

// Convenient re-exports at crate root
pub use capabilities::{BrowserFeatures, HostCapabilities};
pub use dialog::{OpenDialogOptions, SaveDialogOptions};
pub use error::HostError;
pub use store::{file_key, FileStore, KeyValueStore, FILE_KEY_PREFIX};
