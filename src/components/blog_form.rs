//! Create/update form for the blog section.

use leptos::prelude::*;

use crate::state::form::BlogFormState;

/// The blog form. Whether submit creates or updates is decided by the
/// hidden id carried in [`BlogFormState`], never by which button was
/// clicked.
#[component]
pub fn BlogForm(on_submit: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let form = expect_context::<RwSignal<BlogFormState>>();

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="blog-form" on:submit=on_form_submit>
            <h2 class="blog-form__heading">{move || form.get().heading()}</h2>
            <label class="blog-form__label">
                "Title"
                <input
                    class="blog-form__input"
                    type="text"
                    required
                    prop:value=move || form.get().title
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </label>
            <label class="blog-form__label">
                "Author"
                <input
                    class="blog-form__input"
                    type="text"
                    required
                    prop:value=move || form.get().author
                    on:input=move |ev| form.update(|f| f.author = event_target_value(&ev))
                />
            </label>
            <label class="blog-form__label">
                "Content"
                <textarea
                    class="blog-form__textarea"
                    rows="8"
                    required
                    prop:value=move || form.get().content
                    on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                >
                </textarea>
            </label>
            <div class="blog-form__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit">
                    {move || if form.get().is_update() { "Update" } else { "Create" }}
                </button>
            </div>
        </form>
    }
}
