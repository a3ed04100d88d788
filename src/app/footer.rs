use leptos::prelude::*;
use leptos_router::components::*;

use super::icons::GlyphIcon;
use crate::{
    config::SiteConfig,
    links::{footer_links, social_links},
};

#[component]
pub fn Footer(#[prop(optional)] config: SiteConfig, year: i32) -> impl IntoView {
    let socials = social_links(&config);
    let SiteConfig {
        brand_name,
        tagline,
        ..
    } = config;

    view! {
        <footer class="mt-auto border-t border-subtle bg-bg-subtle">
            <div class="mx-auto max-w-6xl px-4 py-12 flex flex-col gap-8">
                <div class="flex flex-col md:flex-row gap-8 items-center md:items-start justify-between w-full">
                    <div class="flex flex-col gap-4 items-center md:items-start">
                        <p class="font-heading text-xl font-bold text-brand-primary">
                            {brand_name.clone()}
                        </p>
                        <p class="text-sm text-fg-muted text-center md:text-left max-w-[300px]">
                            {tagline}
                        </p>
                    </div>

                    <div class="flex flex-col gap-4 items-center md:items-start">
                        <FooterHeading text="Quick Links" />
                        <ul class="flex flex-col gap-2 items-center md:items-start">
                            {footer_links()
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <A
                                                href=link.href
                                                attr:class="text-sm text-fg-muted hover:text-brand-primary hover:translate-x-0.5 inline-block transition-all duration-200"
                                            >
                                                {link.name}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="flex flex-col gap-4 items-center md:items-start">
                        <FooterHeading text="Connect" />
                        <div class="flex gap-3">
                            {socials
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href.clone()
                                            target=social.target()
                                            rel=social.rel()
                                            aria-label=social.name
                                            class="inline-flex h-8 w-8 items-center justify-center rounded-md text-fg-muted hover:text-brand-primary hover:bg-bg-emphasized hover:-translate-y-0.5 transition-all duration-200"
                                        >
                                            <GlyphIcon glyph=social.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="h-px bg-border-subtle"></div>

                <div class="flex flex-col md:flex-row items-center justify-between w-full gap-4 text-sm text-fg-muted text-center">
                    <p>{format!("© {year} {brand_name}. All rights reserved.")}</p>
                    <p>"Built with ❤️ using Rust & Leptos"</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterHeading(text: &'static str) -> impl IntoView {
    view! {
        <p class="text-sm font-semibold uppercase tracking-wide text-fg">{text}</p>
    }
}
