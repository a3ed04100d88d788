mod about;
mod avatar;
mod blog;
mod contact;
mod footer;
mod homepage;
mod icons;
mod navigation_bar;
mod projects;
mod theme;

use chrono::Utc;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use about::AboutPage;
use blog::{BlogHome, BlogPage, BlogWrapper};
use contact::ContactPage;
use footer::Footer;
use homepage::HomePage;
use navigation_bar::NavigationBar;
use projects::ProjectsPage;
use theme::ThemeProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Sora:wght@400;600;700&family=Zen+Maru+Gothic:wght@400;500;700&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="alternate" type="application/rss+xml" title="RSS" href="/rss.xml" />
                <link rel="stylesheet" id="leptos" href="/pkg/itsatoshi-site.css" />
                <MetaTags />
            </head>
            <body class="font-body">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::load();
    // the clock is read here, once, and handed down as a plain value
    let year = config.footer_year(Utc::now());
    let brand_name = config.brand_name.clone();
    let title_brand = config.brand_name.clone();
    provide_context(config.clone());

    view! {
        <Title formatter=move |title| format!("{title} | {title_brand}") />

        <ThemeProvider>
            <Router>
                <div class="flex flex-col min-h-screen">
                    <NavigationBar brand_name />
                    <main class="flex flex-col flex-grow w-full">
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/about") view=AboutPage />
                            <ParentRoute path=path!("/blog") view=BlogWrapper>
                                <Route path=path!("") view=BlogHome />
                                <Route path=path!(":post") view=BlogPage />
                            </ParentRoute>
                            <Route path=path!("/projects") view=ProjectsPage />
                            <Route path=path!("/contact") view=ContactPage />
                        </Routes>
                    </main>
                    <Footer config year />
                </div>
            </Router>
        </ThemeProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="mx-auto max-w-4xl px-4 py-16 text-center">
            <h1 class="font-heading text-3xl font-bold mb-4">"Page not found."</h1>
            <A href="/" attr:class="text-brand-primary hover:underline">
                "Back home"
            </A>
        </div>
    }
}
