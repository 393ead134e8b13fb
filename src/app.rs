mod about;
mod contact;
mod dom;
mod footer;
mod hero;
mod homepage;
mod icons;
mod navbar;
mod projects;
mod reveal;
mod scroll_top;
mod skills;
mod widgets;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::profile;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/folio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-text-main font-sans antialiased selection:bg-primary/30 selection:text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} | {title}", profile::NAME) />
        <Meta
            name="description"
            content="Full-stack engineer and security specialist building fast, resilient web platforms."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
