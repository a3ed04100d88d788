use leptos::prelude::*;

use crate::links::Glyph;

/// Icon font class for each glyph. Brands come from devicon, the envelope is
/// drawn by `input.css`.
pub fn glyph_class(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::GitHub => "devicon-github-original",
        Glyph::LinkedIn => "devicon-linkedin-plain",
        Glyph::Twitter => "devicon-twitter-original",
        Glyph::Envelope => "icon-envelope",
    }
}

#[component]
pub fn GlyphIcon(glyph: Glyph) -> impl IntoView {
    view! { <i class=glyph_class(glyph) aria-hidden="true"></i> }
}
