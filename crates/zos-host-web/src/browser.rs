//! Browser fallback provider.
//!
//! Serves the capability surface with standard browser APIs when no native
//! bridge is injected: file I/O is emulated over `localStorage` under the
//! `zos:file:` namespace, notifications go through the Notification
//! permission flow, the clipboard through `navigator.clipboard`, and the
//! dialogs through a transient file input and `window.prompt`. Dialog
//! cancellation is an ordinary outcome here, never an error.

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Clipboard, HtmlInputElement, Notification, NotificationOptions, NotificationPermission,
    Storage,
};

use zos_host::{FileStore, HostError, KeyValueStore, OpenDialogOptions, SaveDialogOptions};

use crate::console;

/// `localStorage` as a `KeyValueStore` backend.
pub(crate) struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the session's `localStorage`, if the browser exposes one.
    pub(crate) fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        self.storage
            .get_item(key)
            .map_err(|e| HostError::host_unavailable(format!("localStorage read failed: {:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.storage.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                HostError::QuotaExceeded
            } else {
                HostError::host_unavailable(format!("localStorage write failed: {:?}", e))
            }
        })
    }
}

/// Provider backed by standard browser APIs.
pub struct BrowserHost {
    /// File emulation over `localStorage`, `None` when the browser
    /// withholds storage (e.g. blocked third-party context)
    files: Option<FileStore<LocalStorageStore>>,
}

impl Default for BrowserHost {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserHost {
    /// Bind the fallback provider to this session's browser APIs.
    pub fn new() -> Self {
        Self {
            files: LocalStorageStore::open().map(FileStore::new),
        }
    }

    /// Read emulated file content. A path never written reads as the
    /// empty string.
    pub fn read_file(&self, path: &str) -> Result<String, HostError> {
        match &self.files {
            Some(files) => files.read(path),
            None => Err(HostError::host_unavailable("localStorage is not available")),
        }
    }

    /// Write emulated file content, keyed by path.
    pub fn write_file(&self, path: &str, content: &str) -> Result<(), HostError> {
        match &self.files {
            Some(files) => files.write(path, content),
            None => Err(HostError::host_unavailable("localStorage is not available")),
        }
    }

    /// Display a notification, requesting permission first if it is still
    /// undetermined. Permission denial is a silent no-op; this operation
    /// never fails the caller.
    pub async fn notify(&self, title: &str, body: Option<&str>) {
        // The permission getter is a non-catch binding: touching it with no
        // Notification global would throw across the wasm boundary. A
        // missing API gets the same silent treatment as denial.
        if !notification_api_present() {
            return;
        }

        match Notification::permission() {
            NotificationPermission::Granted => show_notification(title, body),
            NotificationPermission::Default => {
                let Ok(promise) = Notification::request_permission() else {
                    return;
                };
                if let Ok(outcome) = JsFuture::from(promise).await {
                    if outcome.as_string().as_deref() == Some("granted") {
                        show_notification(title, body);
                    }
                }
            }
            // Denied (or API withheld): silent by design
            _ => {}
        }
    }

    /// Write text to the system clipboard.
    pub async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError> {
        let clipboard = clipboard()
            .ok_or_else(|| HostError::permission_denied("clipboard API is not available"))?;

        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| {
                HostError::permission_denied(format!("clipboard write rejected: {:?}", e))
            })
    }

    /// Read text from the system clipboard.
    pub async fn read_from_clipboard(&self) -> Result<String, HostError> {
        let clipboard = clipboard()
            .ok_or_else(|| HostError::permission_denied("clipboard API is not available"))?;

        let value = JsFuture::from(clipboard.read_text()).await.map_err(|e| {
            HostError::permission_denied(format!("clipboard read rejected: {:?}", e))
        })?;

        Ok(value.as_string().unwrap_or_default())
    }

    /// Present a file-selection control and resolve with the selected file
    /// names. Browsers do not expose full paths, and cancellation resolves
    /// to an empty list; this operation never rejects.
    pub async fn show_open_dialog(&self, options: &OpenDialogOptions) -> Vec<String> {
        let Some(input) = file_input(options) else {
            return Vec::new();
        };

        let promise = js_sys::Promise::new(&mut |resolve: Function, _reject: Function| {
            let picker = input.clone();
            let resolve_selected = resolve.clone();
            // One of the two listeners fires per invocation; the other is
            // intentionally leaked with the element.
            let on_change = Closure::once_into_js(move |_: web_sys::Event| {
                let names = js_sys::Array::new();
                if let Some(files) = picker.files() {
                    for i in 0..files.length() {
                        if let Some(file) = files.get(i) {
                            names.push(&JsValue::from_str(&file.name()));
                        }
                    }
                }
                let _ = resolve_selected.call1(&JsValue::NULL, &names);
            });
            let _ = input.add_event_listener_with_callback("change", on_change.unchecked_ref());

            let on_cancel = Closure::once_into_js(move |_: web_sys::Event| {
                let _ = resolve.call1(&JsValue::NULL, &js_sys::Array::new());
            });
            let _ = input.add_event_listener_with_callback("cancel", on_cancel.unchecked_ref());
        });

        input.click();

        match JsFuture::from(promise).await {
            Ok(value) => js_sys::Array::from(&value)
                .iter()
                .filter_map(|entry| entry.as_string())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Prompt for a filename. Returns `None` when the user cancels; this
    /// operation never rejects.
    pub fn show_save_dialog(&self, options: &SaveDialogOptions) -> Option<String> {
        let window = web_sys::window()?;
        let default = options.default_path.as_deref().unwrap_or("");

        window
            .prompt_with_message_and_default("Save file as:", default)
            .ok()
            .flatten()
    }

    /// Open a URL in a new tab. Never fails the caller; a blocked popup is
    /// logged and dropped.
    pub fn open_external(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };

        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => console::log(&format!("open_external blocked by the browser: {}", url)),
            Err(e) => console::log(&format!("open_external failed: {:?}", e)),
        }
    }
}

/// Whether the `Notification` global exists in this session.
fn notification_api_present() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &"Notification".into()).ok())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// `navigator.clipboard`, when the browser exposes it.
///
/// Presence is the guard; no instanceof check, so embedder-provided
/// clipboard objects pass through.
fn clipboard() -> Option<Clipboard> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(window.navigator().as_ref(), &"clipboard".into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into::<Clipboard>())
}

fn show_notification(title: &str, body: Option<&str>) {
    let options = NotificationOptions::new();
    if let Some(body) = body {
        options.set_body(body);
    }
    if let Err(e) = Notification::new_with_options(title, &options) {
        console::log(&format!("notification dropped: {:?}", e));
    }
}

/// Build the transient file input backing the open dialog.
fn file_input(options: &OpenDialogOptions) -> Option<HtmlInputElement> {
    let document = web_sys::window()?.document()?;
    let input: HtmlInputElement = document.create_element("input").ok()?.dyn_into().ok()?;

    input.set_type("file");
    input.set_multiple(options.multiple);
    if options.directory {
        // Non-standard attribute, but the only directory picker browsers have
        let _ = input.set_attribute("webkitdirectory", "");
    }

    Some(input)
}

/// Classify a rejected storage write: quota exhaustion vs. anything else.
fn is_quota_error(e: &JsValue) -> bool {
    let named_quota = js_sys::Reflect::get(e, &"name".into())
        .ok()
        .and_then(|v| v.as_string())
        .map(|name| name == "QuotaExceededError")
        .unwrap_or(false);

    // Legacy DOMException code for quota errors
    let code_quota = js_sys::Reflect::get(e, &"code".into())
        .ok()
        .and_then(|v| v.as_f64())
        .map(|code| code == 22.0)
        .unwrap_or(false);

    named_quota || code_quota
}
