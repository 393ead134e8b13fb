use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_resize_observer, use_window_scroll, use_window_size, UseWindowSizeReturn};

use super::about::About;
use super::contact::Contact;
use super::dom::{self, BrowserHost};
use super::footer::Footer;
use super::hero::Hero;
use super::navbar::Navbar;
use super::projects::Projects;
use super::scroll_top::ScrollToTop;
use super::skills::Skills;
use crate::content::SectionId;
use crate::viewport::{ViewState, ViewportController};

/// The single page. Owns the viewport controller and mirrors its state into
/// signals for the navbar and the scroll-to-top button.
#[component]
pub fn HomePage() -> impl IntoView {
    let controller = StoredValue::new(ViewportController::new(BrowserHost));
    let (view_state, set_view_state) = signal(ViewState::default());
    let (menu_open, set_menu_open) = signal(false);

    // Progress also depends on document and viewport height: resample on
    // window resize and page reflow, not just on scroll.
    let page = NodeRef::<html::Div>::new();
    let (reflows, set_reflows) = signal(0u32);
    use_resize_observer(page, move |_, _| set_reflows.update(|n| *n = n.wrapping_add(1)));
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        reflows.track();
        height.track();
        let Some(metrics) = dom::sample_metrics(scroll_y.get()) else {
            return;
        };
        if let Some(state) = controller.try_update_value(|c| c.on_scroll(metrics)) {
            set_view_state.set(state);
        }
    });

    let sync_menu = move || set_menu_open.set(controller.with_value(|c| c.menu_open()));

    let navigate = Callback::new(move |section: SectionId| {
        controller.update_value(|c| c.navigate_to(section));
        sync_menu();
    });
    let toggle_menu = Callback::new(move |_: ()| {
        controller.update_value(|c| {
            c.toggle_menu();
        });
        sync_menu();
    });
    let scroll_to_top = Callback::new(move |_: ()| controller.with_value(|c| c.scroll_to_top()));

    // Deep links such as `/#contact` land on their section once hydrated.
    Effect::new(move |_| {
        if let Some(section) = dom::location_section() {
            navigate.run(section);
        }
    });

    view! {
        <Title text="Full-Stack Developer & Security Engineer" />
        <div node_ref=page class="min-h-screen flex flex-col">
            <Navbar view_state menu_open navigate toggle_menu />
            <main class="flex-grow">
                <ErrorBoundary fallback=|errors| {
                    view! {
                        <div class="max-w-3xl mx-auto px-6 py-32 text-center text-text-muted">
                            <p class="text-white font-bold mb-4">"Something went wrong."</p>
                            <ul class="text-sm font-mono">
                                {move || {
                                    errors
                                        .get()
                                        .into_iter()
                                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                        .collect_view()
                                }}
                            </ul>
                        </div>
                    }
                }>
                    <Hero navigate />
                    <About />
                    <Skills />
                    <Projects />
                    <Contact />
                </ErrorBoundary>
            </main>
            <Footer />
            <ScrollToTop view_state scroll_to_top />
        </div>
    }
}
