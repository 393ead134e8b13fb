use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer, UseIntersectionObserverReturn};

use super::dom::prefers_reduced_motion;
use crate::motion::Motion;

/// Holds its children in `motion.from` until they first scroll into view, then
/// transitions to `motion.to`. Plays once.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (shown, set_shown) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } =
        use_intersection_observer(target, move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_shown.set(true);
            }
        });

    Effect::new(move |_| {
        if prefers_reduced_motion() {
            set_shown.set(true);
        }
        if shown.get() {
            stop();
        }
    });

    view! {
        <div node_ref=target class=class style=move || motion.style(shown.get())>
            {children()}
        </div>
    }
}
