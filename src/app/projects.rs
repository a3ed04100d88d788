use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

struct Project {
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    /// Site-relative write-up, if there is one.
    write_up: Option<&'static str>,
}

static PROJECTS: &[Project] = &[
    Project {
        name: "itsatoshi.com",
        description: "This site. Server-rendered with axum, hydrated with Leptos, styled with Tailwind.",
        tags: &["rust", "leptos", "web"],
        write_up: Some("/blog/responsive-nav-in-leptos"),
    },
    Project {
        name: "Topography tiles",
        description: "Generator for the contour-line backgrounds used around the site.",
        tags: &["svg", "generative"],
        write_up: None,
    },
    Project {
        name: "Brew log",
        description: "A tiny CLI for logging coffee recipes and tasting notes.",
        tags: &["rust", "cli"],
        write_up: None,
    },
];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="mx-auto w-full max-w-4xl px-4 py-8">
            <h1 class="font-heading text-3xl font-bold mb-8">"Projects"</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {PROJECTS.iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="rounded-lg border border-subtle bg-bg-subtle p-6 flex flex-col gap-3">
            <h2 class="font-heading text-xl font-semibold">{project.name}</h2>
            <p class="text-fg-muted">{project.description}</p>
            <div class="flex flex-wrap gap-2">
                {project
                    .tags
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="rounded-md bg-bg-emphasized px-2 py-1 text-xs">{*t}</span>
                        }
                    })
                    .collect_view()}
            </div>
            {project
                .write_up
                .map(|href| {
                    view! {
                        <A href=href attr:class="text-brand-primary hover:underline text-sm">
                            "Read the write-up →"
                        </A>
                    }
                })}
        </article>
    }
}
