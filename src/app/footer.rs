use leptos::prelude::*;

use super::icons::{Glyph, GlyphView, IconView, XLogo};
use crate::content::{profile, Icon};

const SOCIAL_LINK_CLASS: &str = "text-text-muted hover:text-white transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border bg-background">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-4">
                <div class="flex items-center gap-2 text-sm text-text-muted">
                    <IconView icon=Icon::Terminal size=14 />
                    <span>
                        {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), profile::NAME)}
                    </span>
                </div>

                <div class="flex items-center gap-6">
                    <a
                        href=profile::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=SOCIAL_LINK_CLASS
                        aria-label="GitHub"
                    >
                        <GlyphView glyph=Glyph::Github size=20 />
                    </a>
                    <a
                        href=profile::LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=SOCIAL_LINK_CLASS
                        aria-label="LinkedIn"
                    >
                        <GlyphView glyph=Glyph::Linkedin size=20 />
                    </a>
                    <a
                        href=profile::X_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=SOCIAL_LINK_CLASS
                        aria-label="X"
                    >
                        <XLogo class="w-5 h-5 fill-current" />
                    </a>
                </div>
            </div>
        </footer>
    }
}
