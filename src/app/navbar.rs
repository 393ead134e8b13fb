use leptos::{ev::MouseEvent, prelude::*};

use super::icons::{Glyph, GlyphView, IconView};
use crate::content::{profile, Icon, NavItem, SectionId, HIRE_ME, NAV_ITEMS};
use crate::viewport::ViewState;

#[component]
pub fn Navbar(
    view_state: ReadSignal<ViewState>,
    menu_open: ReadSignal<bool>,
    navigate: Callback<SectionId>,
    toggle_menu: Callback<()>,
) -> impl IntoView {
    let go = move |target: SectionId| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            navigate.run(target);
        }
    };

    let nav_link = move |item: NavItem, class: &'static str| {
        view! {
            <a href=item.target.href() on:click=go(item.target) class=class>
                {item.label}
            </a>
        }
    };

    view! {
        <header class=move || {
            if view_state.with(|s| s.is_scrolled) {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 border-b glass-nav border-border/50 py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 border-b bg-transparent border-transparent py-6"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                <a
                    href=SectionId::Hero.href()
                    on:click=go(SectionId::Hero)
                    class="flex items-center gap-2 font-mono text-xl font-bold tracking-tighter text-white group"
                >
                    <div class="p-1.5 bg-white text-black rounded-md group-hover:shadow-[0_0_15px_rgba(255,255,255,0.5)] transition-shadow duration-300">
                        <IconView icon=Icon::Terminal size=18 />
                    </div>
                    <span>{profile::HANDLE}</span>
                </a>

                <nav class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            nav_link(
                                item,
                                "text-sm font-medium text-text-muted hover:text-white transition-colors duration-200 nav-underline",
                            )
                        })
                        .collect_view()}
                    {nav_link(
                        HIRE_ME,
                        "px-4 py-2 text-sm font-medium text-black bg-white rounded hover:bg-gray-200 transition-colors duration-200",
                    )}
                </nav>

                <button
                    class="md:hidden text-white"
                    on:click=move |_| toggle_menu.run(())
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    {move || {
                        if menu_open.get() {
                            view! { <GlyphView glyph=Glyph::Close /> }.into_any()
                        } else {
                            view! { <GlyphView glyph=Glyph::Menu /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <div
                class="absolute bottom-0 left-0 right-0 h-[2px] bg-gradient-to-r from-primary to-accent origin-left transition-transform duration-150 ease-out"
                style=move || format!("transform: scaleX({});", view_state.with(|s| s.scroll_progress))
            ></div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden glass-nav border-b border-border/50 overflow-hidden animate-menu-open">
                    <nav class="flex flex-col p-6 space-y-4">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                nav_link(
                                    item,
                                    "text-lg font-medium text-text-muted hover:text-white transition-colors",
                                )
                            })
                            .collect_view()}
                        {nav_link(
                            HIRE_ME,
                            "inline-block text-center px-4 py-3 text-sm font-medium text-black bg-white rounded mt-4",
                        )}
                    </nav>
                </div>
            </Show>
        </header>
    }
}
