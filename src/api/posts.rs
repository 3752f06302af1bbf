//! Post Endpoints

use dashboard_core::models::Post;

use super::get_json;
use crate::config::AppConfig;

pub async fn list_posts(config: &AppConfig) -> Result<Vec<Post>, String> {
    get_json(&config.endpoint("posts")).await
}
