//! Console logging for the host router.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

/// Write a `[zos-host]`-prefixed message to the browser console.
pub(crate) fn log(msg: &str) {
    console_log(&format!("[zos-host] {}", msg));
}
