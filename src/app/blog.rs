use leptos::{
    either::{Either, EitherOf3},
    prelude::*,
    server_fn::codec::GetUrl,
};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::blog::{load_post, posts_tagged};
use crate::blog::{tag_href, Post, PostMeta};

#[server(input = GetUrl)]
pub async fn list_posts_server(tag: String) -> Result<Vec<PostMeta>, ServerFnError> {
    posts_tagged(&tag).map_err(|e| {
        tracing::error!("listing posts (tag {tag:?}) failed: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[server(input = GetUrl)]
pub async fn load_post_server(slug: String) -> Result<Post, ServerFnError> {
    load_post(&slug).map_err(|e| {
        tracing::warn!("loading post {slug:?} failed: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn BlogWrapper() -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-4xl px-4 py-8">
            <div class="flex items-center gap-4 mb-8">
                <h1 class="font-heading text-3xl font-bold">
                    <A href="/blog" attr:class="hover:text-brand-primary transition-colors duration-200">
                        "Blog"
                    </A>
                </h1>
                <a
                    href="/rss.xml"
                    target="_blank"
                    class="text-sm rounded-md border border-subtle px-2 py-1 text-fg-muted hover:text-brand-secondary"
                    aria-label="RSS Feed"
                >
                    "RSS"
                </a>
            </div>
            <Outlet />
        </div>
    }
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let query = use_query_map();
    let tag = move || query.get().get("tag").unwrap_or_default();
    let posts = Resource::new(tag, list_posts_server);

    view! {
        <Title text="Blog" />
        {move || {
            let tag = tag();
            (!tag.is_empty())
                .then(|| {
                    view! {
                        <p class="mb-6 text-fg-muted">
                            "Posts tagged " <span class="font-semibold text-fg">{tag}</span> " · "
                            <A href="/blog" attr:class="text-brand-primary hover:underline">
                                "show all"
                            </A>
                        </p>
                    }
                })
        }}
        <Transition fallback=move || {
            view! {
                <div class="space-y-4">
                    <div class="h-8 rounded bg-bg-emphasized animate-pulse"></div>
                    <div class="h-6 w-3/4 rounded bg-bg-emphasized animate-pulse"></div>
                    <div class="h-8 rounded bg-bg-emphasized animate-pulse"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match posts.await {
                    Ok(posts) if posts.is_empty() => {
                        EitherOf3::A(view! { <p class="text-fg-muted">"Nothing here yet."</p> })
                    }
                    Ok(posts) => {
                        EitherOf3::B(
                            view! {
                                <ul class="flex flex-col gap-6">
                                    {posts
                                        .into_iter()
                                        .map(|post| view! { <PostSummary post /> })
                                        .collect_view()}
                                </ul>
                            },
                        )
                    }
                    Err(e) => EitherOf3::C(view! { <p class="text-red-600">{e.to_string()}</p> }),
                }
            })}
        </Transition>
    }
}

#[component]
fn PostSummary(post: PostMeta) -> impl IntoView {
    let date = post.display_date();
    view! {
        <li class="rounded-md p-3 hover:bg-bg-subtle transition-colors duration-200">
            <A href=format!("/blog/{}", post.slug) attr:class="block">
                <p class="text-sm text-fg-muted">{date}</p>
                <h2 class="font-heading text-xl font-semibold text-brand-primary">{post.title}</h2>
                <p class="mt-1">{post.summary}</p>
            </A>
            <TagList tags=post.tags />
        </li>
    }
}

#[component]
fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="mt-2 flex flex-wrap gap-2">
            {tags
                .into_iter()
                .map(|tag| {
                    view! {
                        <A
                            href=tag_href(&tag)
                            attr:class="rounded-md bg-bg-emphasized px-2 py-1 text-xs hover:text-brand-primary"
                        >
                            {format!("#{tag}")}
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("post").unwrap_or_default();
    let post = Resource::new(slug, load_post_server);

    view! {
        <Suspense fallback=|| view! { <p class="text-fg-muted">"Loading…"</p> }>
            {move || Suspend::new(async move {
                match post.await {
                    Ok(post) => {
                        let date = post.meta.display_date();
                        Either::Left(
                            view! {
                                <Title text=post.meta.title.clone() />
                                <article>
                                    <header class="mb-8 border-b border-subtle pb-4">
                                        <h1 class="font-heading text-4xl font-bold mb-2">
                                            {post.meta.title}
                                        </h1>
                                        <p class="text-sm text-fg-muted">{date}</p>
                                        <TagList tags=post.meta.tags />
                                    </header>
                                    <div class="prose dark:prose-invert max-w-none" inner_html=post.html></div>
                                </article>
                            },
                        )
                    }
                    Err(_) => {
                        Either::Right(
                            view! {
                                <Title text="Post not found" />
                                <p>
                                    "That post doesn't exist. "
                                    <A href="/blog" attr:class="text-brand-primary hover:underline">
                                        "Back to all posts"
                                    </A>
                                </p>
                            },
                        )
                    }
                }
            })}
        </Suspense>
    }
}
