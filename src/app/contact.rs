use leptos::prelude::*;
use leptos_meta::Title;

use super::icons::GlyphIcon;
use crate::{config::SiteConfig, links::social_links};

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let socials = social_links(&config);
    let mailto = format!("mailto:{}", config.email);

    view! {
        <Title text="Contact" />
        <div class="mx-auto w-full max-w-2xl px-4 py-8 text-center">
            <h1 class="font-heading text-3xl font-bold mb-4">"Say hello"</h1>
            <p class="mb-6 text-fg-muted">
                "The quickest way to reach me is email. I read everything, and reply to most."
            </p>
            <a
                href=mailto
                class="inline-block rounded-md border border-brand-primary/40 bg-brand-primary/10 px-6 py-3 font-medium text-brand-primary hover:bg-brand-primary/20 transition-colors duration-200"
            >
                {config.email.clone()}
            </a>
            <ul class="mt-8 flex flex-col gap-3 items-center">
                {socials
                    .into_iter()
                    .map(|social| {
                        view! {
                            <li>
                                <a
                                    href=social.href.clone()
                                    target=social.target()
                                    rel=social.rel()
                                    class="inline-flex items-center gap-2 text-fg-muted hover:text-brand-primary"
                                >
                                    <GlyphIcon glyph=social.icon />
                                    {social.name}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
