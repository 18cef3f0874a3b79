//! Environment detection for provider selection.
//!
//! Everything here is side-effect-free and never throws: a missing marker
//! or a missing `window` is the normal browser-only (or worker) case, not
//! an error. Detection runs once per session, at router initialization.

use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};

use zos_host::BrowserFeatures;

/// Name of the injected global object marking a native bridge session.
pub(crate) const NATIVE_MARKER: &str = "ZosNative";

/// Look up the native bridge marker.
///
/// Returns the `ZosNative` object and its `invoke` function when both are
/// present and well-formed. A marker object without a callable `invoke`
/// counts as absent.
pub(crate) fn find_native_marker() -> Option<(JsValue, Function)> {
    let window = web_sys::window()?;

    let marker = js_sys::Reflect::get(&window, &NATIVE_MARKER.into()).ok()?;
    if marker.is_undefined() || marker.is_null() {
        return None;
    }

    let invoke = js_sys::Reflect::get(&marker, &"invoke".into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())?;

    Some((marker, invoke))
}

/// Probe which guarded browser APIs exist in this session.
pub(crate) fn browser_features() -> BrowserFeatures {
    let Some(window) = web_sys::window() else {
        return BrowserFeatures::none();
    };

    let clipboard = js_sys::Reflect::get(window.navigator().as_ref(), &"clipboard".into())
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);

    let notifications = js_sys::Reflect::get(&window, &"Notification".into())
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);

    BrowserFeatures {
        clipboard,
        notifications,
    }
}
