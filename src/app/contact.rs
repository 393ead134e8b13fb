use std::time::Duration;

use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::dom;
use super::icons::{Glyph, GlyphView};
use super::reveal::Reveal;
use super::widgets::SectionHeading;
use crate::contact::{copy_email, ContactForm, CopyFeedback, FormPhase, SUBMIT_DELAY_MS};
use crate::content::{profile, SectionId};
use crate::motion::FADE_UP;

const INPUT_CLASS: &str = "w-full bg-background border border-border rounded-lg px-4 py-3 text-white focus:outline-none focus:border-primary/50 focus:ring-1 focus:ring-primary/50 transition-all";

#[component]
pub fn Contact() -> impl IntoView {
    let (phase, set_phase) = signal(FormPhase::Idle);
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        let next = match phase.get_untracked().submit() {
            Ok(next) => next,
            Err(e) => {
                log::debug!("{e}");
                return;
            }
        };
        set_error.set(None);
        set_phase.set(next);
        dom::open_mail_client(&current.mailto_uri(profile::EMAIL));

        // Optimistic: success follows the delay whether or not a client opened.
        set_timeout(
            move || match phase.get_untracked().settle() {
                Ok(next) => {
                    set_phase.set(next);
                    form.set(ContactForm::default());
                }
                Err(e) => log::debug!("{e}"),
            },
            Duration::from_millis(SUBMIT_DELAY_MS),
        );
    };

    let show_form_again = move |_| match phase.get_untracked().reset() {
        Ok(next) => set_phase.set(next),
        Err(e) => log::debug!("{e}"),
    };

    view! {
        <section id=SectionId::Contact.anchor() class="py-24 relative overflow-hidden">
            <div class="absolute bottom-0 left-1/2 -translate-x-1/2 w-[500px] h-[500px] bg-primary/5 rounded-full blur-[100px] pointer-events-none"></div>

            <div class="max-w-3xl mx-auto px-6 relative z-10">
                <SectionHeading
                    title="Let's Build & Secure"
                    subtitle="Whether it's building a new platform or securing an existing one, I'm ready to help."
                    centered=true
                />

                <Reveal motion=FADE_UP>
                    <div class="mt-12 bg-surface/50 backdrop-blur-sm border border-border p-8 md:p-10 rounded-2xl shadow-2xl">
                        <Show
                            when=move || phase.get() == FormPhase::Success
                            fallback=move || {
                                view! {
                                    <form on:submit=on_submit class="space-y-6" novalidate>
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                            <div class="space-y-2">
                                                <label for="name" class="text-sm font-medium text-text-muted">
                                                    "Name"
                                                </label>
                                                <input
                                                    type="text"
                                                    id="name"
                                                    required
                                                    placeholder="John Doe"
                                                    class=INPUT_CLASS
                                                    prop:value=move || form.with(|f| f.name.clone())
                                                    on:input=move |ev| {
                                                        form.update(|f| f.name = event_target_value(&ev))
                                                    }
                                                />
                                            </div>
                                            <div class="space-y-2">
                                                <label for="email" class="text-sm font-medium text-text-muted">
                                                    "Email"
                                                </label>
                                                <input
                                                    type="email"
                                                    id="email"
                                                    required
                                                    placeholder="john@example.com"
                                                    class=INPUT_CLASS
                                                    prop:value=move || form.with(|f| f.email.clone())
                                                    on:input=move |ev| {
                                                        form.update(|f| f.email = event_target_value(&ev))
                                                    }
                                                />
                                            </div>
                                        </div>

                                        <div class="space-y-2">
                                            <label for="message" class="text-sm font-medium text-text-muted">
                                                "Message"
                                            </label>
                                            <textarea
                                                id="message"
                                                rows="5"
                                                required
                                                placeholder="Tell me about your project..."
                                                class=format!("{INPUT_CLASS} resize-none")
                                                prop:value=move || form.with(|f| f.message.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.message = event_target_value(&ev))
                                                }
                                            ></textarea>
                                        </div>

                                        {move || {
                                            error
                                                .get()
                                                .map(|e| {
                                                    view! {
                                                        <p class="text-sm text-red-400" role="alert">
                                                            {e}
                                                        </p>
                                                    }
                                                })
                                        }}

                                        <button
                                            type="submit"
                                            disabled=move || phase.get().is_submitting()
                                            class="w-full bg-white text-black font-bold py-4 rounded-lg hover:bg-gray-200 transition-all flex items-center justify-center gap-2 disabled:opacity-70 disabled:cursor-not-allowed group"
                                        >
                                            {move || {
                                                if phase.get().is_submitting() {
                                                    view! {
                                                        <span class="animate-pulse">"Opening Mail Client..."</span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <span>"Send Message"</span>
                                                        <GlyphView
                                                            glyph=Glyph::Send
                                                            size=18
                                                            class="group-hover:translate-x-1 transition-transform"
                                                        />
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="text-center py-16">
                                <div class="inline-flex items-center justify-center w-16 h-16 rounded-full bg-green-500/10 text-green-500 mb-6">
                                    <GlyphView glyph=Glyph::CheckCircle size=32 />
                                </div>
                                <h3 class="text-2xl font-bold text-white mb-2">"Redirecting to Email..."</h3>
                                <p class="text-text-muted mb-8">
                                    "Your email client should have opened. If not, you can copy my email below."
                                </p>
                                <button
                                    on:click=show_form_again
                                    class="text-primary hover:text-primaryGlow text-sm font-medium"
                                >
                                    "Show form again"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Reveal>

                <CopyEmail />
            </div>
        </section>
    }
}

#[component]
fn CopyEmail() -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());

    let host = dom::BrowserCopy::new(feedback);
    let on_copy = move |_| spawn_local(async move { copy_email(&host).await });

    view! {
        <div class="mt-12 flex justify-center">
            <div class="inline-flex items-center gap-4 px-6 py-3 bg-surface/30 rounded-full border border-border/50 hover:border-primary/30 transition-colors">
                <div class="flex items-center gap-3 text-text-muted">
                    <GlyphView glyph=Glyph::Mail size=18 />
                    <span class="text-sm">{profile::EMAIL}</span>
                </div>
                <button
                    on:click=on_copy
                    class="p-1.5 hover:bg-white/10 rounded-md transition-colors text-white relative"
                    aria-label="Copy email"
                >
                    {move || {
                        if feedback.with(|f| f.is_copied()) {
                            view! {
                                <GlyphView glyph=Glyph::CheckCircle size=16 class="text-green-500" />
                            }
                                .into_any()
                        } else {
                            view! { <GlyphView glyph=Glyph::Copy size=16 /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
