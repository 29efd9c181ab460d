//! Blog form state shared by the create and update flows.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{BlogRecord, CreateBlogRequest, UpdateBlogRequest};

/// Editable form fields. A non-empty `id` means the next submit takes the
/// update path; an empty `id` means create.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogFormState {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

impl BlogFormState {
    /// Clear all fields for a fresh create.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Populate the form from a server record for editing.
    pub fn populate(&mut self, record: &BlogRecord) {
        self.id = record.id.clone();
        self.title = record.title.clone();
        self.author = record.author.clone();
        self.content = record.content.clone();
    }

    /// Whether submitting takes the update path rather than create.
    pub fn is_update(&self) -> bool {
        !self.id.is_empty()
    }

    /// Heading for the form section.
    pub fn heading(&self) -> &'static str {
        if self.is_update() { "Update Blog" } else { "Create New Blog" }
    }

    /// Build the create payload from the current fields.
    pub fn create_request(&self) -> CreateBlogRequest {
        CreateBlogRequest {
            title: self.title.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
        }
    }

    /// Build the update payload from the current fields.
    pub fn update_request(&self) -> UpdateBlogRequest {
        UpdateBlogRequest {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
        }
    }
}
