//! Card component for one blog in the list section.
//!
//! DESIGN
//! ======
//! Rendering goes through [`BlogCardView`], a pure record-to-view-model
//! mapping, so truncation and fallback rules are unit-testable without a
//! browser.

#[cfg(test)]
#[path = "blog_card_test.rs"]
mod blog_card_test;

use leptos::prelude::*;

use crate::net::types::BlogRecord;

/// Longest content snippet shown on a card, in characters.
const SNIPPET_CHARS: usize = 500;

/// Renderable fields derived from a [`BlogRecord`].
#[derive(Clone, Debug, PartialEq)]
pub struct BlogCardView {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Date part of `createdAt`, or empty when the API omitted it.
    pub date: String,
    /// Content capped at 500 characters with a trailing ellipsis.
    pub snippet: String,
}

impl BlogCardView {
    pub fn from_record(record: &BlogRecord) -> Self {
        let title = if record.title.trim().is_empty() {
            "Untitled".to_owned()
        } else {
            record.title.clone()
        };
        let author = if record.author.trim().is_empty() {
            "Unknown".to_owned()
        } else {
            record.author.clone()
        };
        let date = record
            .created_at
            .as_deref()
            .and_then(|ts| ts.split('T').next())
            .unwrap_or_default()
            .to_owned();

        Self {
            id: record.id.clone(),
            title,
            author,
            date,
            snippet: snippet(&record.content),
        }
    }

    /// Byline shown under the title.
    pub fn byline(&self) -> String {
        if self.date.is_empty() {
            format!("By {}", self.author)
        } else {
            format!("By {} on {}", self.author, self.date)
        }
    }
}

/// Cap `content` at [`SNIPPET_CHARS`] characters on a char boundary,
/// appending an ellipsis when anything was cut.
fn snippet(content: &str) -> String {
    match content.char_indices().nth(SNIPPET_CHARS) {
        Some((byte_idx, _)) => format!("{}...", &content[..byte_idx]),
        None => content.to_owned(),
    }
}

/// A card showing one blog with edit and delete actions.
#[component]
pub fn BlogCard(
    view: BlogCardView,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let edit_id = view.id.clone();
    let delete_id = view.id.clone();

    view! {
        <div class="blog-card">
            <h2 class="blog-card__title">{view.title.clone()}</h2>
            <span class="blog-card__id">{format!("ID: {}", view.id)}</span>
            <p class="blog-card__byline">{view.byline()}</p>
            <p class="blog-card__snippet">{view.snippet.clone()}</p>
            <div class="blog-card__actions">
                <button
                    class="btn blog-card__edit"
                    on:click=move |_| on_edit.run(edit_id.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--danger blog-card__delete"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
