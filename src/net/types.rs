//! Wire DTOs for the blog REST API and the chat endpoint.
//!
//! DESIGN
//! ======
//! These types mirror the remote service's JSON exactly (`_id`, `createdAt`,
//! `userMessage`) so serde stays schema-driven. The client never serializes
//! a full [`BlogRecord`]; mutations go through dedicated request payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single blog post as returned by the remote API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BlogRecord {
    /// Unique record identifier. The API spells this field `_id`.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    /// Creation timestamp as an ISO-8601 string, when the API provides one.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Response envelope for `GET /all`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlogListResponse {
    #[serde(default)]
    pub blogs: Vec<BlogRecord>,
}

/// Response envelope for `POST /getById`.
#[derive(Clone, Debug, Deserialize)]
pub struct BlogByIdResponse {
    pub blog: BlogRecord,
}

/// Payload for `POST /create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Payload for `POST /updateById`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateBlogRequest {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Payload for `POST /getById` and `POST /deleteById`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlogIdRequest {
    pub id: String,
}

/// Error body the API attaches to non-OK responses, when it does.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Speaker of a [`ChatTurn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// One message exchanged with the chat endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Bot, content: content.into() }
    }
}

/// Payload for `POST /api/v1/AiAgent/Chat`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_message: String,
    pub history: Vec<ChatTurn>,
}

/// Response from the chat endpoint: the reply text plus the server's view
/// of the full transcript.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default)]
    pub messages: Vec<ChatTurn>,
}
