use leptos::prelude::*;

use crate::content::Icon;

/// Presentation-only glyphs that never appear in the content records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ArrowRight,
    ArrowUp,
    CheckCircle,
    Close,
    Copy,
    ExternalLink,
    Github,
    Linkedin,
    Mail,
    Menu,
    Send,
    ShieldCheck,
}

const SHIELD: &str = "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z";

/// Filled path for the X (Twitter) logo.
const X_LOGO: &str = "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z";

fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Atom => &[
            "M12 12m-1 0a1 1 0 1 0 2 0a1 1 0 1 0 -2 0",
            "M20.2 20.2c2.04-2.03.02-7.36-4.5-11.9-4.54-4.52-9.87-6.54-11.9-4.5-2.04 2.03-.02 7.36 4.5 11.9 4.54 4.52 9.87 6.54 11.9 4.5Z",
            "M15.7 15.7c4.52-4.54 6.54-9.87 4.5-11.9-2.03-2.04-7.36-.02-11.9 4.5-4.52 4.54-6.54 9.87-4.5 11.9 2.03 2.04 7.36.02 11.9-4.5Z",
        ],
        Icon::Box => &[
            "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
            "m3.3 7 8.7 5 8.7-5",
            "M12 22V12",
        ],
        Icon::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
        Icon::Database => &[
            "M3 5a9 3 0 1 0 18 0a9 3 0 1 0 -18 0",
            "M3 5V19A9 3 0 0 0 21 19V5",
            "M3 12A9 3 0 0 0 21 12",
        ],
        Icon::FileCode => &[
            "M10 12.5 8 15l2 2.5",
            "m14 12.5 2 2.5-2 2.5",
            "M14 2v4a2 2 0 0 0 2 2h4",
            "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z",
        ],
        Icon::GitBranch => &[
            "M6 3v12",
            "M18 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M15 6a9 9 0 0 0-9 9",
        ],
        Icon::Globe => &[
            "M12 12m-10 0a10 10 0 1 0 20 0a10 10 0 1 0 -20 0",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        Icon::Hash => &["M4 9h16", "M4 15h16", "M10 3 8 21", "M16 3l-2 18"],
        Icon::Heart => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        ],
        Icon::Layers => &[
            "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
            "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
            "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
        ],
        Icon::Layout => &[
            "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M3 9h18",
            "M9 21V9",
        ],
        Icon::Palette => &[
            "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z",
            "M13.5 6.5m-.5 0a.5.5 0 1 0 1 0a.5.5 0 1 0 -1 0",
            "M8.5 7.5m-.5 0a.5.5 0 1 0 1 0a.5.5 0 1 0 -1 0",
        ],
        Icon::Server => &[
            "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
            "M6 6h.01",
            "M6 18h.01",
        ],
        Icon::Shield => &[SHIELD],
        Icon::ShieldAlert => &[SHIELD, "M12 8v4", "M12 16h.01"],
        Icon::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
        Icon::Zap => &[
            "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
        ],
    }
}

fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Glyph::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
        Glyph::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
        Glyph::Copy => &[
            "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
            "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
        ],
        Glyph::ExternalLink => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        Glyph::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        Glyph::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 4m-2 0a2 2 0 1 0 4 0a2 2 0 1 0 -4 0",
        ],
        Glyph::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Glyph::Send => &[
            "M14.536 21.686a.5.5 0 0 0 .937-.024l6.5-19a.496.496 0 0 0-.635-.635l-19 6.5a.5.5 0 0 0-.024.937l7.93 3.18a2 2 0 0 1 1.112 1.11z",
            "m21.854 2.147-10.94 10.939",
        ],
        Glyph::ShieldCheck => &[SHIELD, "m9 12 2 2 4-4"],
    }
}

#[component]
fn Svg(
    paths: &'static [&'static str],
    size: u32,
    stroke_width: f64,
    class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width=stroke_width.to_string()
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[component]
pub fn IconView(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(default = 2.0)] stroke_width: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <Svg paths=icon_paths(icon) size stroke_width class /> }
}

#[component]
pub fn GlyphView(
    glyph: Glyph,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <Svg paths=glyph_paths(glyph) size stroke_width=2.0 class /> }
}

#[component]
pub fn XLogo(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" aria-hidden="true" class=class>
            <path d=X_LOGO />
        </svg>
    }
}
