use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::ColorMode;

/// Shared by everything that reads or flips the color mode.
#[derive(Debug, Clone, Copy)]
pub struct ColorModeContext {
    pub mode: Signal<ColorMode>,
    set_stored: WriteSignal<Option<ColorMode>>,
}

impl ColorModeContext {
    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        log::debug!("color mode -> {}", next.class());
        self.set_stored.set(Some(next));
    }
}

/// Applies the color mode class to its subtree. The browser build remembers the
/// visitor's choice; the server always renders the light default.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) =
        use_local_storage::<Option<ColorMode>, JsonSerdeWasmCodec>("color_mode");
    #[cfg(not(feature = "hydrate"))]
    let (stored, set_stored) = signal(None::<ColorMode>);

    let prefers_dark = use_preferred_dark();
    let mode = Signal::derive(move || ColorMode::effective(stored.get(), prefers_dark.get()));
    provide_context(ColorModeContext { mode, set_stored });

    view! {
        <div class=move || {
            format!("{} bg-bg text-fg transition-colors duration-200", mode.get().class())
        }>{children()}</div>
    }
}

#[component]
pub fn ColorModeButton() -> impl IntoView {
    let ctx = expect_context::<ColorModeContext>();
    view! {
        <button
            type="button"
            class="inline-flex h-9 w-9 items-center justify-center rounded-md text-fg-muted hover:bg-bg-emphasized hover:text-brand-primary transition-colors duration-200"
            aria-label=move || ctx.mode.get().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            {move || match ctx.mode.get() {
                ColorMode::Light => "☾",
                ColorMode::Dark => "☀",
            }}
        </button>
    }
}
