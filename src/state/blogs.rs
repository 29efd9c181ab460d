//! Blog list state: the cached collection and the two-phase delete flow.
//!
//! DESIGN
//! ======
//! The list is a display cache invalidated by a full re-fetch after every
//! successful mutation; nothing is patched in place. `in_flight` is the
//! request guard checked at the start of each mutating handler — disabled
//! controls are an affordance, this boolean is the guarantee.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use crate::net::types::BlogRecord;

/// Shared blog-list state backed by the remote REST service.
#[derive(Clone, Debug, Default)]
pub struct BlogsState {
    pub items: Vec<BlogRecord>,
    /// Whether the loading spinner is visible.
    pub loading: bool,
    /// At-most-one-concurrent-request guard for this controller.
    pub in_flight: bool,
    /// Id captured when a delete confirmation is pending.
    pub pending_delete_id: Option<String>,
}

impl BlogsState {
    /// First phase of delete: remember the target and open the modal.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete_id = Some(id.into());
    }

    /// Cancel a pending delete without touching the server.
    pub fn cancel_delete(&mut self) {
        self.pending_delete_id = None;
    }

    /// Second phase of delete: consume the pending id exactly once.
    pub fn take_pending_delete(&mut self) -> Option<String> {
        self.pending_delete_id.take()
    }
}
