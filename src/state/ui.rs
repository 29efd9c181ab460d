//! Local UI chrome state: section toggling, dark mode, and the toast slot.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`blogs`,
//! `chat`) so either controller can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which of the two mutually exclusive page sections is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivePage {
    #[default]
    List,
    Form,
}

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient, auto-dismissing status notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// UI state for the single admin page.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub page: ActivePage,
    pub dark_mode: bool,
    pub toast: Option<Toast>,
    /// Bumped on every new toast so an older toast's dismissal timer
    /// cannot clear a newer toast.
    pub toast_seq: u64,
}

impl UiState {
    /// Show a toast, superseding any toast currently displayed.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast { message: message.into(), kind });
        self.toast_seq = self.toast_seq.wrapping_add(1);
    }

    /// Dismiss the toast shown at `seq`; a newer toast stays up.
    pub fn clear_toast(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }
}
