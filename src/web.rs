//! Browser Helpers
//!
//! localStorage, location hash and `JsValue` error conversion.

use std::cmp::Ordering;

use dashboard_core::FlagStorage;
use wasm_bindgen::{JsCast, JsValue};

/// Readable message out of a thrown JS value
pub fn js_error(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// `window.localStorage`, resolved on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl FlagStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}

/// String order of the browser's default locale (`String.prototype.localeCompare`)
#[cfg(target_arch = "wasm32")]
pub fn collate(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

/// Outside the browser, the ICU-root approximation from the core crate
#[cfg(not(target_arch = "wasm32"))]
pub fn collate(a: &str, b: &str) -> Ordering {
    dashboard_core::locale_compare(a, b)
}

/// `#/dashboard/users` -> `/dashboard/users`; empty hash -> `/`
pub fn path_from_hash(hash: &str) -> &str {
    let path = hash.trim_start_matches('#');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// Path encoded in the current location hash
pub fn current_path() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().map_err(js_error))
        .unwrap_or_default();
    path_from_hash(&hash).to_string()
}

/// Navigate, adding a history entry
pub fn push_path(path: &str) {
    let result = window().and_then(|w| w.location().set_hash(path).map_err(js_error));
    if let Err(e) = result {
        log::warn!("failed to navigate to {}: {}", path, e);
    }
}

/// Navigate, replacing the current history entry
pub fn replace_path(path: &str) {
    let result = window().and_then(|w| w.location().replace(&format!("#{}", path)).map_err(js_error));
    if let Err(e) = result {
        log::warn!("failed to redirect to {}: {}", path, e);
    }
}
