//! Todo Endpoints

use dashboard_core::models::Todo;

use super::get_json;
use crate::config::AppConfig;

pub async fn list_todos(config: &AppConfig) -> Result<Vec<Todo>, String> {
    get_json(&config.endpoint("todos")).await
}
