use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::BadgeVariant;
use crate::motion::FADE_UP;

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    let align = if centered { "text-center mx-auto" } else { "" };
    view! {
        <Reveal motion=FADE_UP class=format!("mb-12 max-w-2xl {align}")>
            <h2 class="text-3xl md:text-4xl font-bold text-white tracking-tight mb-4">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-lg text-text-muted">{s}</p> })}
            <div class=format!(
                "h-1 w-20 mt-6 bg-gradient-to-r from-primary to-accent rounded-full {}",
                if centered { "mx-auto" } else { "" },
            )></div>
        </Reveal>
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium font-mono {}",
            variant.classes(),
        )>{children()}</span>
    }
}
