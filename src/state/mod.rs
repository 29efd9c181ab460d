//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`blogs`, `form`, `chat`, `ui`) so the two
//! controllers share nothing and each can be tested without a live DOM.
//! Transition logic lives on the structs as plain methods; components only
//! read fields and call those methods through `RwSignal` context.

pub mod blogs;
pub mod chat;
pub mod form;
pub mod ui;
