//! Posts and Todos
//!
//! Only consumed by the overview counts; never edited.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_api_payloads() {
        let post: Post = serde_json::from_value(json!({
            "userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"
        }))
        .unwrap();
        assert_eq!(post.user_id, 1);

        let todos: Vec<Todo> = serde_json::from_value(json!([
            { "userId": 1, "id": 1, "title": "delectus aut autem", "completed": false },
            { "userId": 2, "id": 21, "title": "suscipit repellat esse", "completed": true }
        ]))
        .unwrap();
        assert_eq!(todos.len(), 2);
        assert!(todos[1].completed);
        assert_eq!(todos[1].user_id, 2);
    }
}
