//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies. Response envelopes are
//! unwrapped in `net::api` so pages only ever see `User`, `Blog`, and
//! `BlogPage`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An account as returned by `/login`, `/signup`, and `/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    /// Owning user; compared against the session user for edit/delete.
    pub user_id: i64,
    /// Owner's username, when the server could resolve it.
    #[serde(default)]
    pub author: Option<String>,
}

impl Blog {
    /// Whether the post has been edited since creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// Page metadata attached to list responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, pages: 0, per_page: 0, total: 0, has_next: false, has_prev: false }
    }
}

/// One page of posts from `/blogs` or `/my-blogs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPage {
    pub blogs: Vec<Blog>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /blogs` and `PUT /blogs/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
}

/// `{ "user": ... }` envelope used by `/signup` and `/profile`.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// `{ "blog": ... }` envelope used by single-post endpoints.
#[derive(Debug, Deserialize)]
pub struct BlogEnvelope {
    pub blog: Blog,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    /// JWT middleware rejections use `msg` instead of `error`.
    #[serde(default, alias = "msg")]
    pub error: Option<String>,
    /// Field → messages on validation failures; free text otherwise.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
