use leptos::prelude::*;

use super::icons::IconView;
use super::reveal::Reveal;
use super::widgets::SectionHeading;
use crate::content::{SectionId, FEATURES};
use crate::motion::{FADE_UP, SLIDE_IN_RIGHT};

#[component]
pub fn About() -> impl IntoView {
    let paragraph = |index: usize| FADE_UP.delayed(100).staggered(index, 200);

    view! {
        <section id=SectionId::About.anchor() class="py-24 relative bg-background overflow-hidden">
            <div class="absolute top-1/2 left-0 w-1/3 h-1/2 bg-primary/5 blur-[120px] rounded-full pointer-events-none -translate-y-1/2"></div>

            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <SectionHeading
                    title="About Me"
                    subtitle="Engineering digital solutions with precision and purpose."
                />

                <div class="grid grid-cols-1 md:grid-cols-3 gap-10 mt-12">
                    <div class="col-span-1 md:col-span-2 space-y-6 text-lg text-text-muted leading-relaxed">
                        <Reveal motion=paragraph(0)>
                            <p>
                                "I am a " <span class="text-white font-medium">"Full-Stack Engineer"</span>
                                " and " <span class="text-white font-medium">"Ethical Hacker"</span>
                                " with a deep focus on user interface engineering. I don't just write code; I craft digital experiences that are intuitive, accessible, and performant."
                            </p>
                        </Reveal>
                        <Reveal motion=paragraph(1)>
                            <p>
                                "My journey began in the world of cybersecurity, understanding how systems break so I could build them stronger. This background gives me a unique perspective on "
                                <span class="text-primary">"secure coding practices"</span>
                                " while my passion for design pushes me to create pixel-perfect interfaces."
                            </p>
                        </Reveal>
                        <Reveal motion=paragraph(2)>
                            <p>
                                "I specialize in the " <span class="text-white font-medium">"React/Next.js"</span>
                                " ecosystem, leveraging modern tools to build scalable web applications. Whether it's a complex dashboard or a marketing site, I bring a level of polish that distinguishes good software from great software."
                            </p>
                        </Reveal>
                    </div>

                    <div class="col-span-1 space-y-6">
                        {FEATURES
                            .into_iter()
                            .enumerate()
                            .map(|(i, feature)| {
                                view! {
                                    <Reveal motion=SLIDE_IN_RIGHT.staggered(i, 150)>
                                        <div class="flex items-start gap-4 p-6 bg-surface border border-border rounded-xl hover:border-primary/30 hover:scale-[1.02] hover:translate-x-1 transition-all duration-300 group cursor-default">
                                            <div class="p-3 rounded-lg bg-white/5 group-hover:bg-white/10 transition-colors">
                                                <IconView icon=feature.icon class=feature.accent_class />
                                            </div>
                                            <div>
                                                <h3 class="text-white font-bold text-lg mb-2 group-hover:text-primary transition-colors">
                                                    {feature.title}
                                                </h3>
                                                <p class="text-sm text-text-muted leading-relaxed">
                                                    {feature.description}
                                                </p>
                                            </div>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
