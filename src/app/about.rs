use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::avatar::AvatarSticker;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="mx-auto w-full max-w-4xl px-4 py-8">
            <section class="flex flex-col md:flex-row items-center md:items-start gap-8">
                <AvatarSticker
                    width="140px"
                    height="140px"
                    image_sizes="140px"
                    border_width="3px"
                    rotation="3deg"
                />
                <div class="flex flex-col gap-4">
                    <h1 class="font-heading text-3xl font-bold">"About me"</h1>
                    <p class="leading-relaxed">
                        "I'm a software engineer who enjoys building small, sturdy things for the web: "
                        "fast pages, honest tools, and interfaces that stay out of the way."
                    </p>
                    <p class="leading-relaxed">
                        "Away from the keyboard you'll find me hiking, brewing pour-over coffee, "
                        "or sketching topographic maps like the one behind my avatar."
                    </p>
                    <p class="leading-relaxed">
                        "Have a question or an idea? "
                        <A href="/contact" attr:class="text-brand-primary hover:underline">
                            "Get in touch"
                        </A> "."
                    </p>
                </div>
            </section>
        </div>
    }
}
