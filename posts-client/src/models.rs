use serde::{Deserialize, Serialize};

/// A post as the server returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Database-assigned identifier.
    pub id: i32,
    /// Author reference.
    pub user_id: i32,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// Payload for creating a post; the server assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    /// Author reference.
    pub user_id: i32,
    /// Post title, must be non-empty.
    pub title: String,
    /// Post body, must be non-empty.
    pub content: String,
}
