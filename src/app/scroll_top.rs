use leptos::prelude::*;

use super::icons::{Glyph, GlyphView};
use crate::viewport::ViewState;

#[component]
pub fn ScrollToTop(view_state: ReadSignal<ViewState>, scroll_to_top: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || view_state.with(|s| s.show_scroll_to_top)>
            <button
                on:click=move |_| scroll_to_top.run(())
                class="fixed bottom-8 right-8 z-40 p-3 bg-surface border border-border rounded-full text-primary hover:bg-primary hover:text-white transition-colors duration-300 shadow-lg animate-fade-up"
                aria-label="Scroll to top"
            >
                <GlyphView glyph=Glyph::ArrowUp size=24 />
            </button>
        </Show>
    }
}
