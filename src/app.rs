//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::{blogs::BlogsState, chat::ChatState, form::BlogFormState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts. There is no router: the single page
/// toggles between its list and form sections through [`UiState`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let blogs = RwSignal::new(BlogsState::default());
    let form = RwSignal::new(BlogFormState::default());
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(blogs);
    provide_context(form);
    provide_context(chat);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/blog-admin.css"/>
        <Title text="Blog Admin"/>

        <HomePage/>
    }
}
