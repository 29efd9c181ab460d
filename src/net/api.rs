//! REST calls for the blog API and the chat endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is one of two kinds: [`ApiError::Network`] when the request
//! never produced a response, or [`ApiError::Api`] when the server answered
//! with a non-OK status (optionally carrying a `message` body). Callers turn
//! either kind into a toast; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BlogRecord, ChatReply, ChatRequest, CreateBlogRequest, UpdateBlogRequest};
#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, BlogByIdResponse, BlogIdRequest, BlogListResponse};

#[cfg(any(test, feature = "hydrate"))]
const BLOG_BASE: &str = "/api/v1/blog";

/// Path of the conversational endpoint.
pub const CHAT_ENDPOINT: &str = "/api/v1/AiAgent/Chat";

#[cfg(any(test, feature = "hydrate"))]
fn blog_endpoint(action: &str) -> String {
    format!("{BLOG_BASE}/{action}")
}

/// A failed API call, classified by whether a response was received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed: fetch rejected, or the body could not
    /// be decoded.
    Network(String),
    /// The server answered with a non-OK status.
    Api { status: u16, message: Option<String> },
}

impl ApiError {
    /// Text to show the user: the server-provided message when present,
    /// otherwise the caller's generic fallback.
    pub fn toast_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message: Some(m), .. } if !m.trim().is_empty() => m.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp.json::<ApiErrorBody>().await.ok().and_then(|body| body.message);
    ApiError::Api { status, message }
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(resp)
    } else {
        Err(error_from_response(resp).await)
    }
}

/// Fetch the full blog collection via `GET /all`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status.
pub async fn fetch_blogs() -> Result<Vec<BlogRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&blog_endpoint("all"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: BlogListResponse =
            resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(body.blogs)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a blog via `POST /create`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status.
pub async fn create_blog(payload: &CreateBlogRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&blog_endpoint("create"), payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch a single blog via `POST /getById`.
///
/// The API uses POST for reads by id; that convention is the server's,
/// honored here as-is.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status.
pub async fn fetch_blog_by_id(id: &str) -> Result<BlogRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = BlogIdRequest { id: id.to_owned() };
        let resp = post_json(&blog_endpoint("getById"), &payload).await?;
        let body: BlogByIdResponse =
            resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(body.blog)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update a blog via `POST /updateById`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status.
pub async fn update_blog(payload: &UpdateBlogRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&blog_endpoint("updateById"), payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a blog via `POST /deleteById`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status.
pub async fn delete_blog(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = BlogIdRequest { id: id.to_owned() };
        post_json(&blog_endpoint("deleteById"), &payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Send one chat message plus the retained history to the chat endpoint.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status.
pub async fn send_chat_message(payload: &ChatRequest) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(CHAT_ENDPOINT, payload).await?;
        resp.json().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
