//! Native bridge provider.
//!
//! When a desktop shell wraps the page it injects a `ZosNative` global
//! carrying a generic `invoke(command, payload) -> Promise` entry point,
//! the same host-object shape zOS uses for its other injected services.
//! This provider captures the object and its `invoke` function once at
//! detection and serves every capability through it for the session.

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use zos_host::{HostError, OpenDialogOptions, SaveDialogOptions};

use crate::console;
use crate::probe;

// Native command names
const CMD_FS_READ: &str = "fs.read";
const CMD_FS_WRITE: &str = "fs.write";
const CMD_NOTIFICATION_SEND: &str = "notification.send";
const CMD_CLIPBOARD_READ: &str = "clipboard.read";
const CMD_CLIPBOARD_WRITE: &str = "clipboard.write";
const CMD_DIALOG_OPEN: &str = "dialog.open";
const CMD_DIALOG_SAVE: &str = "dialog.save";
const CMD_SHELL_OPEN: &str = "shell.open";

#[derive(Serialize)]
struct PathArgs<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct WriteArgs<'a> {
    path: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct NotifyArgs<'a> {
    title: &'a str,
    body: Option<&'a str>,
}

#[derive(Serialize)]
struct ClipboardWriteArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct ShellOpenArgs<'a> {
    url: &'a str,
}

/// Provider backed by the injected native bridge.
pub struct NativeBridge {
    /// The `ZosNative` object, used as `this` for invoke calls
    target: JsValue,
    /// The captured `invoke` function
    invoke_fn: Function,
}

impl NativeBridge {
    /// Capture the bridge from the global marker, if one is injected.
    pub fn from_global() -> Option<Self> {
        let (target, invoke_fn) = probe::find_native_marker()?;
        Some(Self { target, invoke_fn })
    }

    /// Build a bridge from an explicit target object and invoke function.
    ///
    /// Used by tests and by embedders that hold the bridge handle
    /// themselves instead of publishing it as a global.
    pub fn from_parts(target: JsValue, invoke_fn: Function) -> Self {
        Self { target, invoke_fn }
    }

    /// Invoke a named native command and await its promise.
    ///
    /// A synchronous throw and a rejected promise both surface as
    /// `HostUnavailable`; there is no fallback to browser behavior once the
    /// native provider is selected.
    async fn invoke(&self, command: &str, payload: &JsValue) -> Result<JsValue, HostError> {
        let result = self
            .invoke_fn
            .call2(&self.target, &JsValue::from_str(command), payload)
            .map_err(|e| {
                HostError::host_unavailable(format!("{} threw: {:?}", command, e))
            })?;

        // Promise::resolve flattens both plain values and thenables
        JsFuture::from(js_sys::Promise::resolve(&result))
            .await
            .map_err(|e| HostError::host_unavailable(format!("{} rejected: {:?}", command, e)))
    }

    /// Read file content through the bridge.
    pub async fn read_file(&self, path: &str) -> Result<String, HostError> {
        let result = self
            .invoke(CMD_FS_READ, &payload(&PathArgs { path }))
            .await?;
        Ok(result.as_string().unwrap_or_default())
    }

    /// Write file content through the bridge.
    pub async fn write_file(&self, path: &str, content: &str) -> Result<(), HostError> {
        self.invoke(CMD_FS_WRITE, &payload(&WriteArgs { path, content }))
            .await?;
        Ok(())
    }

    /// Send a notification through the bridge. Never fails the caller.
    pub async fn notify(&self, title: &str, body: Option<&str>) {
        if let Err(e) = self
            .invoke(CMD_NOTIFICATION_SEND, &payload(&NotifyArgs { title, body }))
            .await
        {
            console::log(&format!("notification dropped: {}", e));
        }
    }

    /// Write the clipboard through the bridge.
    pub async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError> {
        self.invoke(CMD_CLIPBOARD_WRITE, &payload(&ClipboardWriteArgs { text }))
            .await?;
        Ok(())
    }

    /// Read the clipboard through the bridge. An empty native clipboard
    /// reads as the empty string.
    pub async fn read_from_clipboard(&self) -> Result<String, HostError> {
        let result = self.invoke(CMD_CLIPBOARD_READ, &JsValue::NULL).await?;
        Ok(result.as_string().unwrap_or_default())
    }

    /// Show the native open dialog. Cancellation and bridge failure both
    /// resolve to an empty list; this operation never rejects.
    pub async fn show_open_dialog(&self, options: &OpenDialogOptions) -> Vec<String> {
        match self.invoke(CMD_DIALOG_OPEN, &payload(options)).await {
            Ok(result) => js_string_array(&result),
            Err(e) => {
                console::log(&format!("open dialog failed: {}", e));
                Vec::new()
            }
        }
    }

    /// Show the native save dialog. Cancellation and bridge failure both
    /// resolve to `None`; this operation never rejects.
    pub async fn show_save_dialog(&self, options: &SaveDialogOptions) -> Option<String> {
        match self.invoke(CMD_DIALOG_SAVE, &payload(options)).await {
            Ok(result) => result.as_string(),
            Err(e) => {
                console::log(&format!("save dialog failed: {}", e));
                None
            }
        }
    }

    /// Open a URL through the host shell. Never fails the caller.
    pub async fn open_external(&self, url: &str) {
        if let Err(e) = self
            .invoke(CMD_SHELL_OPEN, &payload(&ShellOpenArgs { url }))
            .await
        {
            console::log(&format!("shell open dropped: {}", e));
        }
    }
}

/// Serialize a command payload into a plain JS object.
fn payload<T: Serialize>(args: &T) -> JsValue {
    serde_json::to_string(args)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}

/// Collect a JS string array, treating `null`/`undefined` as empty
/// (the bridge's cancellation shape).
fn js_string_array(value: &JsValue) -> Vec<String> {
    if value.is_undefined() || value.is_null() {
        return Vec::new();
    }

    js_sys::Array::from(value)
        .iter()
        .filter_map(|entry| entry.as_string())
        .collect()
}
