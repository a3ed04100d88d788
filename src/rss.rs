use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::{blog::PostMeta, config::SiteConfig};

pub const FEED_PATH: &str = "/rss.xml";

pub fn build_channel(config: &SiteConfig, posts: &[PostMeta]) -> Channel {
    let site = config.site_url.trim_end_matches('/');
    let items = posts
        .iter()
        .map(|p| {
            let link = format!("{site}/blog/{}", p.slug);
            ItemBuilder::default()
                .title(p.title.clone())
                .description(p.summary.clone())
                .author(format!("{} ({})", config.email, config.brand_name))
                .pub_date(p.date.to_rfc2822())
                .categories(
                    p.tags
                        .iter()
                        .map(|t| CategoryBuilder::default().name(t.clone()).build())
                        .collect::<Vec<_>>(),
                )
                .guid(GuidBuilder::default().value(&link).permalink(true).build())
                .link(link)
                .build()
        })
        .collect::<Vec<_>>();

    let mut self_link = Link::default();
    self_link.set_rel("self");
    self_link.set_href(format!("{site}{FEED_PATH}"));
    self_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{} blog", config.brand_name))
        .description(config.tagline.clone())
        .link(format!("{site}/blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![self_link]).build())
        .items(items)
        .build()
}
