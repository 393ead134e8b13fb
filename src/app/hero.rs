use leptos::{ev::MouseEvent, prelude::*};

use super::icons::{Glyph, GlyphView, IconView, XLogo};
use super::reveal::Reveal;
use crate::content::{profile, Icon, SectionId};
use crate::motion::{HERO_RISE, PORTRAIT_IN};

// Hero lines rise one after another.
const STAGGER_MS: u32 = 100;
const FIRST_DELAY_MS: u32 = 200;

#[component]
pub fn Hero(navigate: Callback<SectionId>) -> impl IntoView {
    let go = move |target: SectionId| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            navigate.run(target);
        }
    };
    let rise = |index: usize| HERO_RISE.delayed(FIRST_DELAY_MS).staggered(index, STAGGER_MS);

    view! {
        <section
            id=SectionId::Hero.anchor()
            class="relative min-h-screen flex items-center pt-20 overflow-hidden"
        >
            <div class="absolute inset-0 z-0 pointer-events-none overflow-hidden">
                <div class="absolute inset-0 hero-grid"></div>
                <div class="absolute -top-[10%] -left-[10%] w-[50vw] h-[50vw] rounded-full bg-gradient-to-tr from-primary/20 to-transparent blur-[120px] drift-slow"></div>
                <div class="absolute -bottom-[10%] -right-[10%] w-[40vw] h-[40vw] rounded-full bg-gradient-to-bl from-accent/20 to-transparent blur-[120px] drift-slower"></div>
            </div>

            <div class="max-w-7xl mx-auto px-6 w-full relative z-10">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <Reveal motion=rise(0)>
                            <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-surface border border-border text-xs font-mono text-text-muted mb-6">
                                <span class="relative flex h-2 w-2">
                                    <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75"></span>
                                    <span class="relative inline-flex rounded-full h-2 w-2 bg-green-500"></span>
                                </span>
                                "Available for new projects"
                            </div>
                        </Reveal>
                        <Reveal motion=rise(1)>
                            <h1 class="text-5xl md:text-7xl font-bold text-white tracking-tight leading-[1.1] mb-6">
                                "Building fast, cool, "
                                <br />
                                <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-accent">
                                    "and secure web apps."
                                </span>
                            </h1>
                        </Reveal>
                        <Reveal motion=rise(2)>
                            <p class="text-lg md:text-xl text-text-muted max-w-xl mb-10 leading-relaxed">
                                "Hi, I'm " <strong class="text-white font-medium">{profile::NAME}</strong>
                                ". I combine Full-Stack Engineering with Ethical Hacking to create digital experiences that perform flawlessly and stay secure."
                            </p>
                        </Reveal>
                        <Reveal motion=rise(3) class="flex flex-wrap items-center gap-4">
                            <a
                                href=SectionId::Projects.href()
                                on:click=go(SectionId::Projects)
                                class="group inline-flex items-center gap-2 px-8 py-4 bg-white text-black font-semibold rounded-lg hover:bg-gray-200 hover:scale-105 active:scale-95 transition-all"
                            >
                                "View Projects"
                                <GlyphView
                                    glyph=Glyph::ArrowRight
                                    size=18
                                    class="group-hover:translate-x-1 transition-transform"
                                />
                            </a>
                            <a
                                href=SectionId::Contact.href()
                                on:click=go(SectionId::Contact)
                                class="px-8 py-4 border border-border text-white font-semibold rounded-lg hover:bg-surface hover:scale-105 active:scale-95 transition-all"
                            >
                                "Contact Me"
                            </a>
                        </Reveal>
                        <Reveal motion=rise(4) class="flex items-center gap-6 mt-12 text-text-muted">
                            <a
                                href=profile::GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-white transition-colors"
                                aria-label="GitHub Profile"
                            >
                                <GlyphView glyph=Glyph::Github size=20 />
                            </a>
                            <a
                                href=profile::X_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-white transition-colors"
                                aria-label="X Profile"
                            >
                                <XLogo class="h-5 w-5 fill-current" />
                            </a>
                        </Reveal>
                    </div>

                    <Reveal motion=PORTRAIT_IN class="relative mx-auto w-full max-w-md">
                        <div class="absolute inset-0 bg-gradient-to-tr from-primary/30 to-accent/30 rounded-3xl blur-2xl glow-pulse"></div>
                        <div class="relative rounded-3xl overflow-hidden border border-border bg-surface shadow-2xl hover:-translate-y-1 hover:rotate-1 transition-transform duration-300">
                            <img
                                src=profile::AVATAR_URL
                                alt=profile::NAME
                                class="w-full aspect-square object-cover"
                            />
                            <div class="absolute bottom-0 inset-x-0 p-6 bg-gradient-to-t from-black/90 to-transparent">
                                <div class="flex items-center gap-2 mb-1">
                                    <span class="w-2 h-2 rounded-full bg-green-400"></span>
                                    <span class="text-xs font-mono text-green-400">"Online & Coding"</span>
                                </div>
                                <h3 class="text-xl font-bold text-white">{profile::NAME}</h3>
                                <p class="text-sm text-text-muted">"@" {profile::HANDLE}</p>
                            </div>
                        </div>
                        <div class="absolute -right-4 top-10 flex items-center gap-3 px-4 py-3 bg-surface/90 backdrop-blur border border-border rounded-xl shadow-xl float-badge">
                            <div class="p-2 rounded-lg bg-green-500/10 text-green-400">
                                <IconView icon=Icon::Shield size=20 />
                            </div>
                            <div>
                                <div class="text-xs text-text-muted">"Security"</div>
                                <div class="text-sm font-bold text-white">"Certified"</div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
