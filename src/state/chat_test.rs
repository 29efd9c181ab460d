use super::*;
use crate::net::types::ChatRole;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_transcript_starts_with_greeting() {
    let state = ChatState::default();
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.transcript[0].role, ChatRole::Bot);
    assert_eq!(state.transcript[0].content, GREETING);
}

#[test]
fn default_history_is_empty_and_not_sending() {
    let state = ChatState::default();
    assert!(state.history.is_empty());
    assert!(!state.sending);
    assert!(!state.open);
}

// =============================================================
// try_begin_send
// =============================================================

#[test]
fn begin_send_trims_and_appends_user_turn() {
    let mut state = ChatState::default();
    let message = state.try_begin_send("  hi  ");
    assert_eq!(message.as_deref(), Some("hi"));
    assert!(state.sending);
    let last = state.transcript.last().unwrap();
    assert_eq!(last.role, ChatRole::User);
    assert_eq!(last.content, "hi");
}

#[test]
fn begin_send_rejects_empty_input() {
    let mut state = ChatState::default();
    assert_eq!(state.try_begin_send(""), None);
    assert_eq!(state.try_begin_send("   \t\n"), None);
    assert_eq!(state.transcript.len(), 1);
    assert!(!state.sending);
}

#[test]
fn begin_send_rejects_while_in_flight() {
    let mut state = ChatState::default();
    assert!(state.try_begin_send("first").is_some());
    assert_eq!(state.try_begin_send("second"), None);
    // Only the first user turn made it into the transcript.
    assert_eq!(state.transcript.len(), 2);
}

// =============================================================
// apply_reply
// =============================================================

#[test]
fn apply_reply_appends_bot_turn_and_stores_history() {
    let mut state = ChatState::default();
    state.try_begin_send("hi").unwrap();
    let messages = vec![ChatTurn::user("hi"), ChatTurn::bot("hello")];
    state.apply_reply("hello".to_owned(), messages.clone());

    assert!(!state.sending);
    assert_eq!(state.transcript.last().unwrap(), &ChatTurn::bot("hello"));
    assert_eq!(state.history, messages);
}

#[test]
fn apply_reply_truncates_history_to_newest_fifteen() {
    let mut state = ChatState::default();
    let messages: Vec<ChatTurn> =
        (0..40).map(|i| ChatTurn::user(format!("m{i}"))).collect();
    state.apply_reply("done".to_owned(), messages);

    assert_eq!(state.history.len(), HISTORY_LIMIT);
    assert_eq!(state.history[0].content, "m25");
    assert_eq!(state.history.last().unwrap().content, "m39");
}

#[test]
fn history_never_exceeds_limit_across_sends() {
    let mut state = ChatState::default();
    let mut server_transcript = Vec::new();
    for i in 0..30 {
        let text = format!("q{i}");
        state.try_begin_send(&text).unwrap();
        server_transcript.push(ChatTurn::user(text));
        server_transcript.push(ChatTurn::bot(format!("a{i}")));
        state.apply_reply(format!("a{i}"), server_transcript.clone());
        assert!(state.history.len() <= HISTORY_LIMIT);
    }
    assert_eq!(state.history.len(), HISTORY_LIMIT);
}

// =============================================================
// apply_failure
// =============================================================

#[test]
fn apply_failure_appends_apology_and_keeps_history() {
    let mut state = ChatState::default();
    state.apply_reply("hello".to_owned(), vec![ChatTurn::bot("hello")]);
    let history_before = state.history.clone();

    state.try_begin_send("hi again").unwrap();
    state.apply_failure();

    assert!(!state.sending);
    assert_eq!(state.transcript.last().unwrap(), &ChatTurn::bot(FAILURE_REPLY));
    assert_eq!(state.history, history_before);
}

#[test]
fn send_can_resume_after_failure() {
    let mut state = ChatState::default();
    state.try_begin_send("hi").unwrap();
    state.apply_failure();
    assert!(state.try_begin_send("hi again").is_some());
}
