use leptos::{either::Either, prelude::*};
use leptos_router::components::*;
use leptos_use::{breakpoints_tailwind, use_breakpoints, BreakpointsTailwind};

use super::theme::ColorModeButton;
use crate::{
    config::DEFAULT_BRAND_NAME,
    links::NavLink,
    nav::{select_navigation, NavMode, ViewportClass},
};

#[component]
pub fn NavigationBar(
    #[prop(into, default = DEFAULT_BRAND_NAME.to_string())] brand_name: String,
) -> impl IntoView {
    let screen = use_breakpoints(breakpoints_tailwind());
    // both are false until the browser reports a width, which selects desktop
    let is_mobile = screen.lt(BreakpointsTailwind::Md);
    let fits_small = screen.ge(BreakpointsTailwind::Sm);
    let selection = Memo::new(move |_| {
        select_navigation(
            ViewportClass::from_is_mobile(is_mobile.get()),
            fits_small.get(),
        )
    });

    view! {
        <header class="sticky top-0 z-50 border-b border-subtle bg-bg/80 backdrop-blur-md">
            <div class="mx-auto max-w-6xl px-4 py-4">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="hover:no-underline">
                        <span class="font-heading text-2xl font-bold text-brand-primary inline-block hover:text-brand-secondary hover:scale-105 transition-all duration-200">
                            {brand_name}
                        </span>
                    </A>
                    {move || {
                        let sel = selection.get();
                        let toggle = sel.show_color_toggle.then(|| view! { <ColorModeButton /> });
                        match sel.mode {
                            NavMode::Desktop => {
                                Either::Left(
                                    view! {
                                        <nav class="flex items-center gap-8">
                                            <NavItems
                                                links=sel.links
                                                list_class="flex gap-6"
                                                link_class="text-base font-medium text-fg-muted hover:text-brand-primary hover:-translate-y-px inline-block transition-all duration-200"
                                            />
                                            {toggle}
                                        </nav>
                                    },
                                )
                            }
                            NavMode::Mobile => {
                                Either::Right(
                                    view! {
                                        <nav class="flex items-center gap-2">
                                            {toggle}
                                            <NavItems
                                                links=sel.links
                                                list_class="flex gap-4"
                                                link_class="text-sm font-medium text-fg-muted hover:text-brand-primary"
                                            />
                                        </nav>
                                    },
                                )
                            }
                        }
                    }}
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavItems(
    links: &'static [NavLink],
    list_class: &'static str,
    link_class: &'static str,
) -> impl IntoView {
    (!links.is_empty()).then(|| {
        view! {
            <ul class=list_class>
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <A href=link.href attr:class=link_class>
                                    {link.name}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
    })
}
