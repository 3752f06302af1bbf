//! User Endpoints

use dashboard_core::models::User;

use super::get_json;
use crate::config::AppConfig;

pub async fn list_users(config: &AppConfig) -> Result<Vec<User>, String> {
    let users: Vec<User> = get_json(&config.endpoint("users")).await?;
    log::debug!("fetched {} users", users.len());
    Ok(users)
}
