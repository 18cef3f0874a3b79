//! Option records for the dialog operations.

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Options for the open-file dialog.
///
/// Serializes in the camelCase shape the native bridge expects as the
/// `dialog.open` payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenDialogOptions {
    /// Allow selecting more than one file
    pub multiple: bool,
    /// Select a directory instead of files
    pub directory: bool,
}

impl OpenDialogOptions {
    /// Single-file selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi-file selection.
    pub fn multiple() -> Self {
        Self {
            multiple: true,
            directory: false,
        }
    }

    /// Directory selection.
    pub fn directory() -> Self {
        Self {
            multiple: false,
            directory: true,
        }
    }
}

/// Options for the save-file dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDialogOptions {
    /// Suggested path or filename to pre-fill
    pub default_path: Option<String>,
}

impl SaveDialogOptions {
    /// No suggestion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the dialog with a suggested path.
    pub fn with_default_path(path: impl Into<String>) -> Self {
        Self {
            default_path: Some(path.into()),
        }
    }
}
