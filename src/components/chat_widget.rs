//! Floating chat widget backed by the remote conversational endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each send posts the user's message plus the retained history from
//! [`ChatState`] and renders the reply. The `sending` flag in state is the
//! in-flight guard; the disabled send button is only its visual echo.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::net::types::{ChatRequest, ChatRole};
use crate::state::chat::ChatState;

/// Chat widget: a floating toggle button plus the conversation panel.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the transcript scrolled to the newest turn.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.transcript.len();
        let _ = state.sending;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Focus the input whenever the panel opens.
    Effect::new(move || {
        if chat.get().open {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input_el) = input_ref.get() {
                    let _ = input_el.focus();
                }
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let mut started = None;
        chat.update(|c| started = c.try_begin_send(&text));
        let Some(message) = started else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let history = chat.get_untracked().history.clone();
            leptos::task::spawn_local(async move {
                let payload = ChatRequest { user_message: message, history };
                match crate::net::api::send_chat_message(&payload).await {
                    Ok(reply) => chat.update(|c| c.apply_reply(reply.message, reply.messages)),
                    Err(err) => {
                        log::error!("chat request failed: {err:?}");
                        chat.update(|c| c.apply_failure());
                    }
                }
                // Re-enable the send control no matter which branch ran.
                chat.update(|c| c.sending = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().sending;

    view! {
        <button
            class="chat-float-btn"
            on:click=move |_| chat.update(|c| c.open = !c.open)
            title="Chat with Echo"
            aria-label="Toggle chat"
        >
            {move || if chat.get().open { "✕" } else { "💬" }}
        </button>

        <Show when=move || chat.get().open>
            <div class="chat-widget">
                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || {
                        chat.get()
                            .transcript
                            .iter()
                            .map(|turn| {
                                let is_bot = turn.role == ChatRole::Bot;
                                let content = turn.content.clone();

                                view! {
                                    <div
                                        class="chat-widget__message"
                                        class:chat-widget__message--bot=is_bot
                                    >
                                        {if is_bot {
                                            let rendered = render_markdown_html(&content);
                                            view! {
                                                <div class="chat-widget__markdown" inner_html=rendered></div>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <span>{content}</span> }.into_any()
                                        }}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}

                    {move || {
                        chat.get().sending.then(|| {
                            view! {
                                <div class="chat-widget__message chat-widget__message--bot">
                                    <div class="loading-dots" aria-label="Typing">
                                        <div class="loading-dot"></div>
                                        <div class="loading-dot"></div>
                                        <div class="loading-dot"></div>
                                    </div>
                                </div>
                            }
                        })
                    }}
                </div>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Ask about your blogs..."
                        node_ref=input_ref
                        disabled=move || chat.get().sending
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary chat-widget__send"
                        on:click=on_click
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
