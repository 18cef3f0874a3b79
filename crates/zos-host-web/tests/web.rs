//! Browser integration tests for the host capability router.
//!
//! A scripted `ZosNative` object stands in for the desktop bridge so both
//! provider paths can be exercised in one browser session. Tests run
//! sequentially in the same page, so each native test installs the mock
//! and removes it before finishing.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

use zos_host_web::{Host, OpenDialogOptions, SaveDialogOptions};

wasm_bindgen_test_configure!(run_in_browser);

type CallLog = Rc<RefCell<Vec<(String, JsValue)>>>;

/// Install a scripted `ZosNative` mock and return its call log.
///
/// With `reject` set, every command rejects; otherwise `fs.read` resolves
/// to `"native content"`, `clipboard.read` and `dialog.save` resolve to
/// `null`, `dialog.open` resolves to `null` (the cancellation shape) and
/// everything else resolves to `undefined`.
fn install_bridge(reject: bool) -> CallLog {
    let calls: CallLog = Rc::new(RefCell::new(Vec::new()));

    let log = calls.clone();
    let invoke = Closure::<dyn FnMut(JsValue, JsValue) -> JsValue>::new(
        move |command: JsValue, payload: JsValue| -> JsValue {
            let command = command.as_string().unwrap_or_default();
            log.borrow_mut().push((command.clone(), payload));

            if reject {
                return Promise::reject(&JsValue::from_str("bridge down")).into();
            }

            match command.as_str() {
                "fs.read" => Promise::resolve(&JsValue::from_str("native content")).into(),
                "clipboard.read" | "dialog.save" | "dialog.open" => {
                    Promise::resolve(&JsValue::NULL).into()
                }
                _ => Promise::resolve(&JsValue::UNDEFINED).into(),
            }
        },
    );

    let bridge = js_sys::Object::new();
    js_sys::Reflect::set(&bridge, &"invoke".into(), invoke.as_ref().unchecked_ref()).unwrap();
    invoke.forget();

    let window = web_sys::window().unwrap();
    js_sys::Reflect::set(&window, &"ZosNative".into(), &bridge).unwrap();

    calls
}

fn remove_bridge() {
    let window = web_sys::window().unwrap();
    let _ = js_sys::Reflect::delete_property(window.unchecked_ref(), &"ZosNative".into());
}

/// Replace `navigator.clipboard` with a recording stub whose `writeText`
/// resolves immediately. Returns the log of written strings.
///
/// `clipboard` is a prototype getter, so the stub goes in as an own
/// property via `Object.defineProperty`; deleting it restores the real one.
fn install_clipboard_stub() -> Rc<RefCell<Vec<String>>> {
    let writes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let log = writes.clone();
    let write_text = Closure::<dyn FnMut(JsValue) -> JsValue>::new(move |text: JsValue| {
        log.borrow_mut().push(text.as_string().unwrap_or_default());
        JsValue::from(Promise::resolve(&JsValue::UNDEFINED))
    });

    let stub = js_sys::Object::new();
    js_sys::Reflect::set(&stub, &"writeText".into(), write_text.as_ref().unchecked_ref()).unwrap();
    write_text.forget();

    let descriptor = js_sys::Object::new();
    js_sys::Reflect::set(&descriptor, &"value".into(), &stub).unwrap();
    js_sys::Reflect::set(&descriptor, &"configurable".into(), &JsValue::TRUE).unwrap();

    let navigator = web_sys::window().unwrap().navigator();
    js_sys::Object::define_property(navigator.unchecked_ref(), &"clipboard".into(), &descriptor);

    writes
}

fn remove_clipboard_stub() {
    let navigator = web_sys::window().unwrap().navigator();
    let _ = js_sys::Reflect::delete_property(navigator.unchecked_ref(), &"clipboard".into());
}

fn local_storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn payload_field(payload: &JsValue, field: &str) -> Option<String> {
    js_sys::Reflect::get(payload, &field.into())
        .ok()
        .and_then(|v| v.as_string())
}

// =============================================================================
// Capability detection
// =============================================================================

#[wasm_bindgen_test]
fn browser_session_never_claims_native_capabilities() {
    remove_bridge();
    let host = Host::detect();
    let caps = host.capabilities();

    assert!(!caps.is_native);
    assert!(!caps.has_file_system);
    assert!(!caps.has_dialog);
    assert!(!caps.has_shell);

    // Clipboard and notification flags must reflect actual API presence
    let window = web_sys::window().unwrap();
    let clipboard_present =
        !js_sys::Reflect::get(window.navigator().as_ref(), &"clipboard".into())
            .unwrap()
            .is_undefined();
    let notification_present = !js_sys::Reflect::get(&window, &"Notification".into())
        .unwrap()
        .is_undefined();

    assert_eq!(caps.has_clipboard, clipboard_present);
    assert_eq!(caps.has_notifications, notification_present);
}

#[wasm_bindgen_test]
fn native_session_claims_all_capabilities() {
    let _calls = install_bridge(false);
    let host = Host::detect();
    let caps = host.capabilities();
    remove_bridge();

    assert!(host.is_native());
    assert!(caps.is_native);
    assert!(caps.has_file_system);
    assert!(caps.has_notifications);
    assert!(caps.has_clipboard);
    assert!(caps.has_dialog);
    assert!(caps.has_shell);
}

#[wasm_bindgen_test]
fn marker_without_invoke_function_counts_as_absent() {
    let window = web_sys::window().unwrap();
    let marker = js_sys::Object::new();
    js_sys::Reflect::set(&window, &"ZosNative".into(), &marker).unwrap();

    let host = Host::detect();
    remove_bridge();

    assert!(!host.is_native());
}

// =============================================================================
// Browser fallback: file emulation
// =============================================================================

#[wasm_bindgen_test]
async fn browser_file_write_then_read_round_trips() {
    remove_bridge();
    let host = Host::detect();

    host.write_file("/test/file.txt", "content").await.unwrap();
    assert_eq!(host.read_file("/test/file.txt").await.unwrap(), "content");

    // Persisted under the namespaced key, raw content as the value
    let stored = local_storage().get_item("zos:file:/test/file.txt").unwrap();
    assert_eq!(stored.as_deref(), Some("content"));

    local_storage().remove_item("zos:file:/test/file.txt").unwrap();
}

#[wasm_bindgen_test]
async fn browser_unwritten_path_reads_empty() {
    remove_bridge();
    let host = Host::detect();

    assert_eq!(host.read_file("/never/written.txt").await.unwrap(), "");
}

#[wasm_bindgen_test]
async fn browser_last_write_wins_per_path() {
    remove_bridge();
    let host = Host::detect();

    host.write_file("/test/lww.txt", "first").await.unwrap();
    host.write_file("/test/lww.txt", "second").await.unwrap();
    assert_eq!(host.read_file("/test/lww.txt").await.unwrap(), "second");

    local_storage().remove_item("zos:file:/test/lww.txt").unwrap();
}

// =============================================================================
// Browser fallback: clipboard
// =============================================================================

#[wasm_bindgen_test]
async fn browser_clipboard_write_calls_navigator_exactly_once() {
    remove_bridge();
    let writes = install_clipboard_stub();
    let host = Host::detect();

    let result = host.copy_to_clipboard("test text").await;
    remove_clipboard_stub();

    assert!(result.is_ok());
    let writes = writes.borrow();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0], "test text");
}

// =============================================================================
// Browser fallback: dialogs and notifications
// =============================================================================

#[wasm_bindgen_test]
async fn browser_save_dialog_cancel_resolves_none() {
    remove_bridge();
    let host = Host::detect();

    // Headless runners auto-dismiss prompts, which is the cancel path
    let chosen = host
        .show_save_dialog(SaveDialogOptions::with_default_path("/tmp/out.txt"))
        .await;
    assert_eq!(chosen, None);
}

#[wasm_bindgen_test]
async fn browser_notify_never_fails_the_caller() {
    remove_bridge();
    let host = Host::detect();

    // Permission is denied (or auto-dismissed) in test runners; the call
    // must still resolve silently.
    host.notify("build finished", Some("3 warnings")).await;
    host.notify("no body", None).await;
}

#[wasm_bindgen_test]
async fn browser_notify_without_notification_api_is_a_silent_noop() {
    remove_bridge();
    let window = web_sys::window().unwrap();
    let saved = js_sys::Reflect::get(&window, &"Notification".into()).unwrap();
    let _ = js_sys::Reflect::delete_property(window.unchecked_ref(), &"Notification".into());

    let host = Host::detect();
    assert!(!host.capabilities().has_notifications);

    // Must resolve without reaching the Notification bindings at all;
    // touching them with the global gone throws a ReferenceError.
    host.notify("hidden", Some("api withdrawn")).await;

    js_sys::Reflect::set(&window, &"Notification".into(), &saved).unwrap();
}

// =============================================================================
// Native delegation
// =============================================================================

#[wasm_bindgen_test]
async fn native_read_file_delegates_to_bridge() {
    let calls = install_bridge(false);
    let host = Host::detect();

    let content = host.read_file("/test/file.txt").await.unwrap();
    remove_bridge();

    assert_eq!(content, "native content");
    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "fs.read");
    assert_eq!(
        payload_field(&calls[0].1, "path").as_deref(),
        Some("/test/file.txt")
    );
}

#[wasm_bindgen_test]
async fn native_write_file_carries_path_and_content() {
    let calls = install_bridge(false);
    let host = Host::detect();

    host.write_file("/notes.txt", "hello").await.unwrap();
    remove_bridge();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "fs.write");
    assert_eq!(payload_field(&calls[0].1, "path").as_deref(), Some("/notes.txt"));
    assert_eq!(payload_field(&calls[0].1, "content").as_deref(), Some("hello"));
}

#[wasm_bindgen_test]
async fn native_clipboard_write_invokes_bridge_exactly_once() {
    let calls = install_bridge(false);
    let host = Host::detect();

    host.copy_to_clipboard("test text").await.unwrap();
    remove_bridge();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "clipboard.write");
    assert_eq!(payload_field(&calls[0].1, "text").as_deref(), Some("test text"));
}

#[wasm_bindgen_test]
async fn native_empty_clipboard_reads_as_empty_string() {
    let _calls = install_bridge(false);
    let host = Host::detect();

    let text = host.read_from_clipboard().await.unwrap();
    remove_bridge();

    assert_eq!(text, "");
}

#[wasm_bindgen_test]
async fn native_dialog_cancellation_shapes() {
    let calls = install_bridge(false);
    let host = Host::detect();

    let selected = host.show_open_dialog(OpenDialogOptions::multiple()).await;
    let chosen = host.show_save_dialog(SaveDialogOptions::new()).await;
    remove_bridge();

    assert!(selected.is_empty());
    assert_eq!(chosen, None);

    let calls = calls.borrow();
    assert_eq!(calls[0].0, "dialog.open");
    assert_eq!(calls[1].0, "dialog.save");
    // Option flags are forwarded verbatim
    let multiple = js_sys::Reflect::get(&calls[0].1, &"multiple".into()).unwrap();
    assert_eq!(multiple.as_bool(), Some(true));
}

#[wasm_bindgen_test]
async fn native_rejection_maps_to_host_unavailable() {
    let _calls = install_bridge(true);
    let host = Host::detect();

    let read_err = host.read_file("/test/file.txt").await.unwrap_err();
    let write_err = host.write_file("/test/file.txt", "x").await.unwrap_err();
    let clip_err = host.copy_to_clipboard("x").await.unwrap_err();
    remove_bridge();

    assert!(read_err.is_host_unavailable());
    assert!(write_err.is_host_unavailable());
    assert!(clip_err.is_host_unavailable());
}

#[wasm_bindgen_test]
async fn native_never_reject_operations_swallow_bridge_failures() {
    let _calls = install_bridge(true);
    let host = Host::detect();

    // notify, dialogs and open_external resolve to their neutral results
    // even when the bridge rejects.
    host.notify("title", None).await;
    let selected = host.show_open_dialog(OpenDialogOptions::new()).await;
    let chosen = host.show_save_dialog(SaveDialogOptions::new()).await;
    host.open_external("https://example.com").await;
    remove_bridge();

    assert!(selected.is_empty());
    assert_eq!(chosen, None);
}
