//! Networking modules for the remote REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and classifies failures; `types` defines
//! the wire schema shared with the blog and chat endpoints.

pub mod api;
pub mod types;
