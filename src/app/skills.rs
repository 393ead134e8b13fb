use leptos::prelude::*;

use super::icons::{Glyph, GlyphView, IconView};
use super::reveal::Reveal;
use super::widgets::SectionHeading;
use crate::content::{
    skill_icon, Certification, Logo, SectionId, SkillCategory, CERTIFICATIONS,
    SKILL_CATEGORIES,
};
use crate::motion::{FADE_UP, SCALE_IN};

#[component]
pub fn Skills() -> impl IntoView {
    let (active, set_active) = signal(0usize);

    view! {
        <section
            id=SectionId::Skills.anchor()
            class="py-24 bg-surface/30 relative border-y border-border/50"
        >
            <div class="absolute inset-0 dot-mask"></div>
            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <SectionHeading
                    title="Technical Arsenal"
                    subtitle="A dual-threat expertise in building secure, high-performance systems and breaking them to ensure safety."
                />

                <div class="flex flex-wrap justify-center gap-4 mb-12" role="tablist">
                    {SKILL_CATEGORIES
                        .into_iter()
                        .enumerate()
                        .map(|(i, category)| {
                            let is_active = move || active.get() == i;
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || is_active().to_string()
                                    on:click=move |_| set_active.set(i)
                                    class=move || {
                                        if is_active() {
                                            "flex items-center gap-2 px-6 py-3 rounded-full text-sm font-medium transition-all duration-300 border bg-primary/10 border-primary text-primary shadow-[0_0_15px_rgba(59,130,246,0.3)]"
                                        } else {
                                            "flex items-center gap-2 px-6 py-3 rounded-full text-sm font-medium transition-all duration-300 border bg-surface border-border text-text-muted hover:border-primary/50 hover:text-white"
                                        }
                                    }
                                >
                                    <IconView icon=category.icon size=18 />
                                    {category.title}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="min-h-[350px]">
                    {move || {
                        SKILL_CATEGORIES
                            .get(active.get())
                            .copied()
                            .map(|category| view! { <CategoryPanel category /> })
                    }}
                </div>

                <Certifications />
            </div>
        </section>
    }
}

#[component]
fn CategoryPanel(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-surface/50 backdrop-blur-sm border border-border rounded-2xl p-8 md:p-12 shadow-2xl animate-panel-in">
            <div class="flex flex-col md:flex-row gap-8 items-start">
                <div class="hidden md:flex flex-shrink-0 p-6 bg-surfaceHighlight rounded-2xl border border-white/5 shadow-inner">
                    <IconView icon=category.icon size=64 stroke_width=1.5 class="text-primary" />
                </div>
                <div class="flex-grow w-full">
                    <div class="flex items-center gap-4 mb-8">
                        <div class="md:hidden p-3 bg-surfaceHighlight rounded-xl border border-white/5">
                            <IconView icon=category.icon size=32 class="text-primary" />
                        </div>
                        <div>
                            <h3 class="text-2xl font-bold text-white">{category.title}</h3>
                            <p class="text-sm text-text-muted mt-1">
                                {format!("{} specialized skills", category.skills.len())}
                            </p>
                        </div>
                    </div>
                    <div class="flex flex-wrap gap-3">
                        {category
                            .skills
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <Reveal motion=SCALE_IN.delayed(100).staggered(i, 50)>
                                        <div class="flex items-center gap-2 px-4 py-2.5 bg-surface border border-white/10 rounded-lg hover:border-primary/50 hover:bg-surfaceHighlight hover:shadow-lg hover:shadow-primary/5 hover:scale-105 hover:-translate-y-0.5 transition-all duration-300 cursor-default group">
                                            <IconView
                                                icon=skill_icon(skill)
                                                size=16
                                                class="text-primary/70 group-hover:text-primary transition-colors"
                                            />
                                            <span class="text-text-main text-sm font-medium group-hover:text-white transition-colors">
                                                {*skill}
                                            </span>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Certifications() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<&'static str>);

    view! {
        <div class="mt-24 pt-10 border-t border-border/30">
            <Reveal motion=FADE_UP class="flex flex-col items-center justify-center text-center mb-12">
                <div class="inline-flex items-center justify-center p-3 mb-4 rounded-2xl bg-accent/5 border border-accent/10">
                    <GlyphView glyph=Glyph::ShieldCheck size=32 class="text-accent" />
                </div>
                <h3 class="text-3xl font-bold text-white mb-3">"Professional Certifications"</h3>
                <p class="text-text-muted max-w-xl mx-auto text-lg">
                    "Industry-recognized credentials validating expertise in network security, ethical hacking, and systems architecture."
                </p>
            </Reveal>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {CERTIFICATIONS
                    .into_iter()
                    .enumerate()
                    .map(|(i, cert)| {
                        view! {
                            <Reveal motion=FADE_UP.staggered(i, 100)>
                                <CertificationCard cert hovered set_hovered />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CertificationCard(
    cert: Certification,
    hovered: ReadSignal<Option<&'static str>>,
    set_hovered: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    let is_hovered = move || hovered.get() == Some(cert.name);
    let glow = cert.glow_color;

    view! {
        <div
            on:mouseenter=move |_| set_hovered.set(Some(cert.name))
            on:mouseleave=move |_| set_hovered.set(None)
            class="group relative flex flex-col p-6 bg-surface/40 backdrop-blur-md border border-white/5 rounded-2xl hover:bg-surface/60 hover:border-white/10 hover:-translate-y-1 transition-all duration-300 overflow-hidden h-full"
        >
            <div
                class="absolute inset-0 opacity-0 group-hover:opacity-10 transition-opacity duration-500 pointer-events-none"
                style=format!("background: linear-gradient(to bottom right, {glow}, transparent);")
            ></div>
            <div class="flex items-start justify-between mb-6 z-10">
                <div
                    class="relative w-16 h-16 rounded-2xl bg-[#0F0F0F] border border-white/10 flex items-center justify-center p-3 transition-all duration-300"
                    style=move || {
                        if is_hovered() {
                            format!("box-shadow: 0 0 20px {glow}40; border-color: {glow}60;")
                        } else {
                            "box-shadow: none; border-color: rgba(255,255,255,0.1);".to_string()
                        }
                    }
                >
                    {match cert.logo {
                        Logo::Image(src) => {
                            view! {
                                <img
                                    src=src
                                    alt=cert.issuer
                                    class="w-full h-full object-contain filter grayscale group-hover:grayscale-0 transition-all duration-300"
                                />
                            }
                                .into_any()
                        }
                        Logo::Icon(icon) => {
                            view! {
                                <IconView
                                    icon=icon
                                    size=32
                                    class=format!(
                                        "{} opacity-80 group-hover:opacity-100 transition-opacity",
                                        cert.color_class,
                                    )
                                />
                            }
                                .into_any()
                        }
                    }}
                </div>
                <div class="opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div
                        class="text-[10px] font-mono font-bold px-2 py-1 rounded border uppercase tracking-wider bg-white/5"
                        style=format!("color: {glow}; border-color: {glow}40;")
                    >
                        "Verified"
                    </div>
                </div>
            </div>
            <div class="relative z-10 mt-auto">
                <h4 class="font-bold text-white text-lg leading-tight mb-2">
                    {cert.display_name()}
                </h4>
                <p class="text-sm text-text-muted font-medium flex items-center gap-2">
                    <span
                        class="w-1.5 h-1.5 rounded-full bg-white/20 transition-colors duration-300"
                        style=move || {
                            if is_hovered() { format!("background-color: {glow};") } else { String::new() }
                        }
                    ></span>
                    {cert.issuer}
                </p>
            </div>
        </div>
    }
}
