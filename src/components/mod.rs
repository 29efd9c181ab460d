//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod blog_card;
pub mod blog_form;
pub mod chat_widget;
pub mod delete_modal;
pub mod toast;
