//! REST API Wrappers
//!
//! Read-only bindings to the demo API, organized by collection.

mod posts;
mod todos;
mod users;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use dashboard_core::models::{Post, Todo, User};

use crate::config::AppConfig;
use crate::web::js_error;

// Re-export all public items
pub use posts::*;
pub use todos::*;
pub use users::*;

/// GET `url` and decode the JSON body
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("GET {} failed with status {}", url, response.status()));
    }

    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Users, posts and todos fetched concurrently. Any failure fails the whole load.
pub async fn load_overview_sources(
    config: &AppConfig,
) -> Result<(Vec<User>, Vec<Post>, Vec<Todo>), String> {
    futures_util::future::try_join3(list_users(config), list_posts(config), list_todos(config)).await
}
