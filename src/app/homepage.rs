use leptos::prelude::*;
use leptos_meta::Title;

use super::avatar::AvatarSticker;
use crate::config::SiteConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <Title text="Home" />
        <div class="mx-auto w-full max-w-4xl px-4 py-8 flex flex-col gap-8">
            <h1 class="font-heading text-5xl font-bold">{config.brand_name}</h1>
            <AvatarSticker width="200px" height="200px" image_sizes="200px" />
            <p class="text-lg">"Welcome to my site."</p>
        </div>
    }
}
