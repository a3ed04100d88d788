use chrono::{DateTime, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use dashmap::DashMap;
#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use std::sync::LazyLock;

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::render_markdown;

/// Holds only the full index under `""`; tag listings are filtered from it per call.
#[cfg(any(feature = "ssr", feature = "rss"))]
static LISTING_CACHE: LazyLock<DashMap<String, Vec<PostMeta>>> = LazyLock::new(DashMap::new);
#[cfg(any(feature = "ssr", feature = "rss"))]
static POST_CACHE: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct PostFiles;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    summary: String,
    date: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub html: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("No post named {0}")]
    NotFound(String),
    #[error("Invalid front matter in {0}")]
    InvalidFrontMatter(String),
    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(String),
}

/// Slugs of every embedded post, derived from file names. Available in every
/// build, including the metadata-only WASM bundle.
pub fn post_slugs() -> Vec<String> {
    PostFiles::iter()
        .filter_map(|file| file.strip_suffix(".md").map(str::to_string))
        .collect()
}

impl PostMeta {
    /// e.g. `Jan 5, 2025`
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

fn fold_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Keeps posts carrying `tag` (case-insensitive, Unicode-aware), preserving order.
pub fn filter_tagged(posts: &[PostMeta], tag: &str) -> Vec<PostMeta> {
    let key = fold_tag(tag);
    posts
        .iter()
        .filter(|p| p.tags.iter().any(|t| fold_tag(t) == key))
        .cloned()
        .collect()
}

/// Blog index link filtered to `tag`, with the tag percent-encoded.
pub fn tag_href(tag: &str) -> String {
    format!("/blog?tag={}", urlencoding::encode(tag))
}

/// Splits a post file into metadata and rendered HTML body.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn parse_post(slug: &str, source: &str) -> Result<Post, BlogError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| BlogError::InvalidFrontMatter(slug.to_string()))?;
    let fm = parsed.data;
    Ok(Post {
        meta: PostMeta {
            slug: slug.to_string(),
            title: fm.title,
            summary: fm.summary,
            date: fm.date,
            tags: fm.tags,
        },
        html: render_markdown(&parsed.content),
    })
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn read_source(slug: &str) -> Result<String, BlogError> {
    let file = PostFiles::get(&format!("{slug}.md"))
        .ok_or_else(|| BlogError::NotFound(slug.to_string()))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|_| BlogError::InvalidUtf8(slug.to_string()))
}

/// Every post, newest first.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn list_posts() -> Result<Vec<PostMeta>, BlogError> {
    if let Some(cached) = LISTING_CACHE.get("") {
        return Ok(cached.clone());
    }
    let mut posts = post_slugs()
        .into_iter()
        .map(|slug| load_post(&slug).map(|p| p.meta))
        .collect::<Result<Vec<_>, _>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    LISTING_CACHE.insert(String::new(), posts.clone());
    Ok(posts)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn posts_tagged(tag: &str) -> Result<Vec<PostMeta>, BlogError> {
    if fold_tag(tag).is_empty() {
        return list_posts();
    }
    Ok(filter_tagged(&list_posts()?, tag))
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn load_post(slug: &str) -> Result<Post, BlogError> {
    if let Some(cached) = POST_CACHE.get(slug) {
        return Ok(cached.clone());
    }
    let post = parse_post(slug, &read_source(slug)?)?;
    POST_CACHE.insert(slug.to_string(), post.clone());
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta(slug: &str, tags: &[&str]) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            summary: String::new(),
            date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_filter_tagged() {
        let posts = vec![
            meta("a", &["rust", "web"]),
            meta("b", &["life"]),
            meta("c", &["Rust"]),
        ];
        let slugs = filter_tagged(&posts, "rust")
            .into_iter()
            .map(|p| p.slug)
            .collect::<Vec<_>>();
        assert_eq!(slugs, vec!["a", "c"]);
        assert!(filter_tagged(&posts, "missing").is_empty());
    }

    #[test]
    fn test_filter_tagged_non_ascii() {
        let posts = vec![meta("a", &["Über"]), meta("b", &["uber"]), meta("c", &["ÉTÉ"])];
        let slugs = |tag| {
            filter_tagged(&posts, tag)
                .into_iter()
                .map(|p| p.slug)
                .collect::<Vec<_>>()
        };
        assert_eq!(slugs("Über"), vec!["a"]);
        assert_eq!(slugs("über"), vec!["a"]);
        assert_eq!(slugs(" été "), vec!["c"]);
    }

    #[test]
    fn test_tag_href_encodes() {
        assert_eq!(tag_href("rust"), "/blog?tag=rust");
        assert_eq!(tag_href("c++ & go"), "/blog?tag=c%2B%2B%20%26%20go");
        assert_eq!(tag_href("#1"), "/blog?tag=%231");
        assert_eq!(tag_href("Über"), "/blog?tag=%C3%9Cber");
    }

    #[test]
    fn test_display_date_has_no_padding() {
        let post = PostMeta {
            date: Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap(),
            ..meta("a", &[])
        };
        assert_eq!(post.display_date(), "Jan 5, 2025");
    }

    #[test]
    fn test_post_slugs_strip_extension() {
        let slugs = post_slugs();
        assert!(!slugs.is_empty());
        assert!(slugs.iter().all(|s| !s.ends_with(".md")));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_parse_post() {
        let source = "---\ntitle: Hello\nsummary: First post\ndate: 2025-03-04T00:00:00Z\ntags: [intro]\n---\n# Heading\n\nBody text.\n";
        let post = parse_post("hello", source).unwrap();
        assert_eq!(post.meta.slug, "hello");
        assert_eq!(post.meta.title, "Hello");
        assert_eq!(post.meta.tags, vec!["intro"]);
        assert_eq!(
            post.meta.date,
            Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap()
        );
        assert!(post.html.contains("<h1>Heading</h1>"));
        assert!(!post.html.contains("summary:"));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_parse_post_without_front_matter() {
        let err = parse_post("bare", "# Just markdown\n").unwrap_err();
        assert_eq!(err, BlogError::InvalidFrontMatter("bare".to_string()));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_list_posts_newest_first() {
        let posts = list_posts().unwrap();
        assert_eq!(posts.len(), post_slugs().len());
        assert!(posts.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_missing_post() {
        assert_eq!(
            load_post("does-not-exist"),
            Err(BlogError::NotFound("does-not-exist".to_string()))
        );
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_posts_tagged_matches_filter() {
        let all = list_posts().unwrap();
        let rust = posts_tagged("Rust").unwrap();
        assert_eq!(rust, filter_tagged(&all, "rust"));
        assert_eq!(posts_tagged("  ").unwrap(), all);
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_unknown_tags_do_not_grow_cache() {
        list_posts().unwrap();
        let before = LISTING_CACHE.len();
        for i in 0..100 {
            assert!(posts_tagged(&format!("nosuchtag{i}")).unwrap().is_empty());
        }
        posts_tagged("rust").unwrap();
        assert_eq!(LISTING_CACHE.len(), before);
        assert_eq!(before, 1);
    }
}
