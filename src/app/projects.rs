use leptos::prelude::*;

use super::icons::{Glyph, GlyphView, IconView};
use super::reveal::Reveal;
use super::widgets::{Badge, SectionHeading};
use crate::content::{profile, BadgeVariant, Icon, Project, SectionId, PROJECTS};
use crate::motion::{CARD_RISE, FADE_IN};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.anchor() class="py-24 bg-background">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    title="Featured Work"
                    subtitle="A selection of engineering and security projects showcasing technical depth."
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal motion=CARD_RISE.staggered(i, 150) class="h-full">
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal motion=FADE_IN.delayed(600) class="mt-16 text-center">
                    <a
                        href=profile::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 text-text-muted hover:text-white transition-colors border-b border-transparent hover:border-primary pb-0.5 group"
                    >
                        <span>"View more on GitHub"</span>
                        <span class="nudge-x">
                            <GlyphView glyph=Glyph::ArrowRight size=16 />
                        </span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="group relative h-full bg-surface border border-border rounded-xl overflow-hidden hover:border-primary/50 hover:-translate-y-2 transition-all duration-300 hover:shadow-2xl hover:shadow-primary/5 flex flex-col">
            <div class="aspect-video w-full overflow-hidden bg-surfaceHighlight relative">
                <div class="absolute inset-0 bg-black/40 group-hover:bg-transparent transition-colors duration-500 z-10"></div>
                <div class="absolute inset-0 flex items-center justify-center z-20 opacity-0 group-hover:opacity-100 transition-opacity duration-500">
                    <div class="bg-primary/20 p-3 rounded-full backdrop-blur-md border border-primary/50 scale-90 group-hover:scale-100 transition-transform duration-500">
                        <IconView icon=Icon::Terminal size=32 class="text-white" />
                    </div>
                </div>
                <img
                    src=project.image_url
                    alt=project.title
                    loading="lazy"
                    class="relative z-0 w-full h-full object-cover transform group-hover:scale-105 transition-transform duration-700 opacity-80 group-hover:opacity-100"
                />
            </div>

            <div class="p-6 flex flex-col flex-grow">
                <div class="flex justify-between items-start mb-4">
                    <div class="flex flex-col gap-2">
                        <h3 class="text-xl font-bold text-white group-hover:text-primary transition-colors duration-300">
                            {project.title}
                        </h3>
                        {project
                            .featured
                            .then(|| view! { <Badge variant=BadgeVariant::Glow>"Featured"</Badge> })}
                    </div>
                    <div class="flex gap-3">
                        {project
                            .github_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-text-muted hover:text-white transition-colors hover:scale-110 transform"
                                        title="View Source"
                                    >
                                        <GlyphView glyph=Glyph::Github size=18 />
                                    </a>
                                }
                            })}
                        {project
                            .demo_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-text-muted hover:text-white transition-colors hover:scale-110 transform"
                                        title="Live Demo"
                                    >
                                        <GlyphView glyph=Glyph::ExternalLink size=18 />
                                    </a>
                                }
                            })}
                    </div>
                </div>

                <p class="text-sm text-text-muted mb-6 line-clamp-3 leading-relaxed">
                    {project.description}
                </p>

                <div class="flex flex-wrap gap-2 mt-auto">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <Badge variant=BadgeVariant::Outline>{*tag}</Badge> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
