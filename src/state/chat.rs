//! Chat widget state: visible transcript plus the bounded request history.
//!
//! DESIGN
//! ======
//! The server owns the conversation; the client re-sends whatever transcript
//! the server last returned, truncated to its newest [`HISTORY_LIMIT`]
//! turns. The visible transcript is display-only and also carries the
//! greeting and failure turns, which never enter the request history.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatTurn;

/// Maximum number of turns re-sent to the chat endpoint.
pub const HISTORY_LIMIT: usize = 15;

/// Greeting shown when the widget first renders.
pub const GREETING: &str = "Hello! I am Echo AI Agent. How can I help with your blogs? 🤖";

/// Fixed reply shown when a chat request fails.
pub const FAILURE_REPLY: &str =
    "Sorry, I'm having trouble connecting. Please try again later. 😟";

/// State for the floating chat widget.
#[derive(Clone, Debug)]
pub struct ChatState {
    /// Turns shown in the transcript pane, oldest first.
    pub transcript: Vec<ChatTurn>,
    /// History re-sent with the next request; capped at [`HISTORY_LIMIT`].
    pub history: Vec<ChatTurn>,
    /// In-flight guard: exactly one request per widget at a time.
    pub sending: bool,
    /// Whether the widget panel is open.
    pub open: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            transcript: vec![ChatTurn::bot(GREETING)],
            history: Vec::new(),
            sending: false,
            open: false,
        }
    }
}

impl ChatState {
    /// Begin a send: trims the input and rejects empty text or a send while
    /// one is already in flight. On acceptance the user's turn is appended
    /// to the transcript, the in-flight guard is set, and the trimmed
    /// message to post is returned.
    pub fn try_begin_send(&mut self, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() || self.sending {
            return None;
        }
        self.transcript.push(ChatTurn::user(message));
        self.sending = true;
        Some(message.to_owned())
    }

    /// Apply a successful reply: show the bot's message and replace the
    /// retained history with the server's transcript, keeping only its
    /// newest [`HISTORY_LIMIT`] turns.
    pub fn apply_reply(&mut self, message: String, messages: Vec<ChatTurn>) {
        self.transcript.push(ChatTurn::bot(message));
        let skip = messages.len().saturating_sub(HISTORY_LIMIT);
        self.history = messages.into_iter().skip(skip).collect();
        self.sending = false;
    }

    /// Apply a failed request: show the fixed apology and leave the
    /// retained history exactly as it was.
    pub fn apply_failure(&mut self) {
        self.transcript.push(ChatTurn::bot(FAILURE_REPLY));
        self.sending = false;
    }
}
