//! Namespaced key-value file emulation.
//!
//! When no native filesystem is available, file reads and writes are
//! emulated over whatever local key-value store the session has. Each file
//! path owns exactly one key; writes are last-write-wins per key.

use alloc::format;
use alloc::string::String;

use crate::error::HostError;

/// Key namespace for emulated file content.
pub const FILE_KEY_PREFIX: &str = "zos:file:";

/// Store key for a file path: `zos:file:<path>`.
pub fn file_key(path: &str) -> String {
    format!("{}{}", FILE_KEY_PREFIX, path)
}

/// A keyed string store with last-write-wins semantics.
///
/// `localStorage` backs this in the browser; tests use the in-memory
/// double from `crate::testing`. Any backend satisfying the write-then-read
/// round-trip property can serve.
pub trait KeyValueStore {
    /// Read the value for a key, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write the value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
}

/// File read/write emulation over a key-value backend.
pub struct FileStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FileStore<S> {
    /// Wrap a key-value backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read emulated file content.
    ///
    /// A path that was never written reads as the empty string, matching
    /// what applications expect from a fresh profile.
    pub fn read(&self, path: &str) -> Result<String, HostError> {
        Ok(self.store.get(&file_key(path))?.unwrap_or_default())
    }

    /// Write emulated file content.
    pub fn write(&self, path: &str, content: &str) -> Result<(), HostError> {
        self.store.set(&file_key(path), content)
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &S {
        &self.store
    }
}
