//! The single admin page: blog list/form sections, delete modal, toast,
//! and the floating chat widget.
//!
//! ARCHITECTURE
//! ============
//! This page owns the blog controller. Every mutating handler checks and
//! sets the `in_flight` guard before spawning its task, awaits its calls
//! sequentially (mutation, then one full list re-fetch), and clears the
//! guard on every exit path. Failures toast and leave prior state alone.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::blog_card::{BlogCard, BlogCardView};
use crate::components::blog_form::BlogForm;
use crate::components::chat_widget::ChatWidget;
use crate::components::delete_modal::DeleteModal;
use crate::components::toast::ToastHost;
use crate::state::blogs::BlogsState;
use crate::state::form::BlogFormState;
use crate::state::ui::{ActivePage, ToastKind, UiState};

#[cfg(any(test, feature = "hydrate"))]
const FETCH_LIST_FALLBACK: &str = "Failed to fetch blogs";
#[cfg(any(test, feature = "hydrate"))]
const FETCH_ONE_FALLBACK: &str = "Failed to fetch blog";
#[cfg(any(test, feature = "hydrate"))]
const CREATE_FALLBACK: &str = "Create failed";
#[cfg(any(test, feature = "hydrate"))]
const UPDATE_FALLBACK: &str = "Update failed";
#[cfg(any(test, feature = "hydrate"))]
const DELETE_FALLBACK: &str = "Delete failed";

#[cfg(any(test, feature = "hydrate"))]
fn submit_success_toast(is_update: bool) -> &'static str {
    if is_update { "Blog updated!" } else { "Blog created!" }
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_fallback(is_update: bool) -> &'static str {
    if is_update { UPDATE_FALLBACK } else { CREATE_FALLBACK }
}

/// Re-fetch the entire collection; the only read path for the list.
#[cfg(feature = "hydrate")]
async fn load_blogs(blogs: RwSignal<BlogsState>, ui: RwSignal<UiState>) {
    blogs.update(|b| b.loading = true);
    match crate::net::api::fetch_blogs().await {
        Ok(items) => blogs.update(|b| b.items = items),
        Err(err) => {
            log::error!("blog list fetch failed: {err:?}");
            ui.update(|u| u.show_toast(err.toast_message(FETCH_LIST_FALLBACK), ToastKind::Error));
        }
    }
    blogs.update(|b| b.loading = false);
}

/// Atomically claim the controller's in-flight slot. Returns `false` when a
/// request is already running and the handler must bail out.
fn claim_in_flight(blogs: RwSignal<BlogsState>) -> bool {
    let mut claimed = false;
    blogs.update(|b| {
        if !b.in_flight {
            b.in_flight = true;
            claimed = true;
        }
    });
    claimed
}

/// The admin page.
#[component]
pub fn HomePage() -> impl IntoView {
    let blogs = expect_context::<RwSignal<BlogsState>>();
    let form = expect_context::<RwSignal<BlogFormState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Apply the persisted theme preference once at startup.
    let theme_initialized = RwSignal::new(false);
    Effect::new(move || {
        if theme_initialized.get() {
            return;
        }
        theme_initialized.set(true);
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    // Initial list fetch, once per page load.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() {
            return;
        }
        requested_list.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_blogs(blogs, ui));
    });

    let show_list = move || {
        ui.update(|u| u.page = ActivePage::List);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_blogs(blogs, ui));
    };

    let on_nav_all = move |_| show_list();

    let on_nav_new = move |_| {
        form.update(BlogFormState::reset);
        ui.update(|u| u.page = ActivePage::Form);
    };

    let on_cancel_form = Callback::new(move |()| {
        ui.update(|u| u.page = ActivePage::List);
    });

    let on_submit = Callback::new(move |()| {
        if !claim_in_flight(blogs) {
            return;
        }
        let snapshot = form.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let is_update = snapshot.is_update();
            let outcome = if is_update {
                crate::net::api::update_blog(&snapshot.update_request()).await
            } else {
                crate::net::api::create_blog(&snapshot.create_request()).await
            };
            match outcome {
                Ok(()) => {
                    ui.update(|u| {
                        u.show_toast(submit_success_toast(is_update), ToastKind::Success);
                        u.page = ActivePage::List;
                    });
                    load_blogs(blogs, ui).await;
                }
                Err(err) => {
                    log::error!("blog submit failed: {err:?}");
                    ui.update(|u| {
                        u.show_toast(err.toast_message(submit_fallback(is_update)), ToastKind::Error);
                    });
                }
            }
            blogs.update(|b| b.in_flight = false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = snapshot;
            blogs.update(|b| b.in_flight = false);
        }
    });

    // Edit round-trips through getById so the form always shows canonical
    // server state, not the possibly stale rendered card.
    let on_edit = Callback::new(move |id: String| {
        if !claim_in_flight(blogs) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            blogs.update(|b| b.loading = true);
            match crate::net::api::fetch_blog_by_id(&id).await {
                Ok(record) => {
                    form.update(|f| f.populate(&record));
                    ui.update(|u| u.page = ActivePage::Form);
                }
                Err(err) => {
                    log::error!("blog fetch by id failed: {err:?}");
                    ui.update(|u| {
                        u.show_toast(err.toast_message(FETCH_ONE_FALLBACK), ToastKind::Error);
                    });
                }
            }
            blogs.update(|b| {
                b.loading = false;
                b.in_flight = false;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            blogs.update(|b| b.in_flight = false);
        }
    });

    let on_delete_request = Callback::new(move |id: String| {
        blogs.update(|b| b.request_delete(id));
    });

    let on_delete_cancel = Callback::new(move |()| {
        blogs.update(BlogsState::cancel_delete);
    });

    let on_delete_confirm = Callback::new(move |()| {
        if !claim_in_flight(blogs) {
            return;
        }
        let mut pending = None;
        blogs.update(|b| pending = b.take_pending_delete());
        let Some(id) = pending else {
            blogs.update(|b| b.in_flight = false);
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_blog(&id).await {
                Ok(()) => {
                    ui.update(|u| u.show_toast("Blog deleted!", ToastKind::Success));
                    load_blogs(blogs, ui).await;
                }
                Err(err) => {
                    log::error!("blog delete failed: {err:?}");
                    ui.update(|u| {
                        u.show_toast(err.toast_message(DELETE_FALLBACK), ToastKind::Error);
                    });
                }
            }
            blogs.update(|b| b.in_flight = false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            blogs.update(|b| b.in_flight = false);
        }
    });

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <span class="toolbar__title">"Blog Admin"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <button class="btn toolbar__all-blogs" on:click=on_nav_all>
                    "All Blogs"
                </button>
                <button class="btn toolbar__new-blog" on:click=on_nav_new>
                    "+ New Blog"
                </button>

                <span class="toolbar__spacer"></span>

                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </header>

            <main class="home-page__body">
                <Show when=move || blogs.get().loading>
                    <div class="home-page__loading" aria-label="Loading">"Loading..."</div>
                </Show>

                <Show when=move || ui.get().page == ActivePage::List>
                    <section class="blogs-section">
                        {move || {
                            let items = blogs.get().items;
                            if items.is_empty() {
                                return view! {
                                    <p class="blogs-section__empty">"No blogs yet."</p>
                                }
                                    .into_any();
                            }

                            items
                                .iter()
                                .map(|record| {
                                    view! {
                                        <BlogCard
                                            view=BlogCardView::from_record(record)
                                            on_edit=on_edit
                                            on_delete=on_delete_request
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </section>
                </Show>

                <Show when=move || ui.get().page == ActivePage::Form>
                    <section class="form-section">
                        <BlogForm on_submit=on_submit on_cancel=on_cancel_form/>
                    </section>
                </Show>
            </main>

            <Show when=move || blogs.get().pending_delete_id.is_some()>
                <DeleteModal on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>

            <ToastHost/>
            <ChatWidget/>
        </div>
    }
}
