use super::*;

// =============================================================
// BlogRecord deserialization
// =============================================================

#[test]
fn blog_record_parses_underscore_id_and_created_at() {
    let record: BlogRecord = serde_json::from_value(serde_json::json!({
        "_id": "42",
        "title": "A",
        "author": "B",
        "content": "C",
        "createdAt": "2025-03-01T12:00:00.000Z"
    }))
    .unwrap();
    assert_eq!(record.id, "42");
    assert_eq!(record.title, "A");
    assert_eq!(record.author, "B");
    assert_eq!(record.content, "C");
    assert_eq!(record.created_at.as_deref(), Some("2025-03-01T12:00:00.000Z"));
}

#[test]
fn blog_record_tolerates_missing_created_at() {
    let record: BlogRecord = serde_json::from_value(serde_json::json!({
        "_id": "7",
        "title": "T",
        "author": "A",
        "content": "C"
    }))
    .unwrap();
    assert_eq!(record.created_at, None);
}

#[test]
fn blog_record_accepts_plain_id_alias() {
    let record: BlogRecord = serde_json::from_value(serde_json::json!({
        "id": "9",
        "title": "T",
        "author": "A",
        "content": "C"
    }))
    .unwrap();
    assert_eq!(record.id, "9");
}

// =============================================================
// Response envelopes
// =============================================================

#[test]
fn blog_list_response_defaults_to_empty_when_blogs_missing() {
    let resp: BlogListResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(resp.blogs.is_empty());
}

#[test]
fn api_error_body_parses_message() {
    let body: ApiErrorBody =
        serde_json::from_value(serde_json::json!({"message": "title required"})).unwrap();
    assert_eq!(body.message.as_deref(), Some("title required"));
}

#[test]
fn api_error_body_tolerates_empty_object() {
    let body: ApiErrorBody = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(body.message, None);
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn update_request_serializes_all_four_fields() {
    let payload = UpdateBlogRequest {
        id: "42".to_owned(),
        title: "A".to_owned(),
        author: "B".to_owned(),
        content: "C".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({"id": "42", "title": "A", "author": "B", "content": "C"})
    );
}

#[test]
fn blog_id_request_serializes_bare_id() {
    let payload = BlogIdRequest { id: "42".to_owned() };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({"id": "42"}));
}

// =============================================================
// Chat wire types
// =============================================================

#[test]
fn chat_request_serializes_camel_case_user_message() {
    let payload = ChatRequest {
        user_message: "hi".to_owned(),
        history: vec![],
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({"userMessage": "hi", "history": []})
    );
}

#[test]
fn chat_turn_roles_serialize_lowercase() {
    assert_eq!(
        serde_json::to_value(ChatTurn::user("q")).unwrap(),
        serde_json::json!({"role": "user", "content": "q"})
    );
    assert_eq!(
        serde_json::to_value(ChatTurn::bot("a")).unwrap(),
        serde_json::json!({"role": "bot", "content": "a"})
    );
}

#[test]
fn chat_reply_parses_message_and_transcript() {
    let reply: ChatReply = serde_json::from_value(serde_json::json!({
        "message": "hello",
        "messages": [
            {"role": "user", "content": "hi"},
            {"role": "bot", "content": "hello"}
        ]
    }))
    .unwrap();
    assert_eq!(reply.message, "hello");
    assert_eq!(reply.messages.len(), 2);
    assert_eq!(reply.messages[0].role, ChatRole::User);
    assert_eq!(reply.messages[1].role, ChatRole::Bot);
}

#[test]
fn chat_reply_tolerates_missing_messages() {
    let reply: ChatReply =
        serde_json::from_value(serde_json::json!({"message": "hello"})).unwrap();
    assert!(reply.messages.is_empty());
}
