use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Site sections in display order. The navigation bar shows all or a prefix of
/// these; the footer shows everything after Home.
pub static NAV_LINKS: [NavLink; 5] = [
    NavLink {
        name: "Home",
        href: "/",
    },
    NavLink {
        name: "About",
        href: "/about",
    },
    NavLink {
        name: "Blog",
        href: "/blog",
    },
    NavLink {
        name: "Projects",
        href: "/projects",
    },
    NavLink {
        name: "Contact",
        href: "/contact",
    },
];

pub fn footer_links() -> &'static [NavLink] {
    &NAV_LINKS[1..]
}

/// Which icon to draw next to a social link. Resolved to an icon class by the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    GitHub,
    LinkedIn,
    Twitter,
    Envelope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: Glyph,
    pub href: String,
}

impl SocialLink {
    /// Mail links stay in the current browsing context, everything else opens a
    /// new isolated one.
    pub fn opens_new_context(&self) -> bool {
        !self.href.starts_with("mailto:")
    }

    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("noopener noreferrer")
    }
}

/// Always four entries: GitHub, LinkedIn, Twitter, Email.
pub fn social_links(config: &SiteConfig) -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "GitHub",
            icon: Glyph::GitHub,
            href: config.github_url.clone(),
        },
        SocialLink {
            name: "LinkedIn",
            icon: Glyph::LinkedIn,
            href: config.linkedin_url.clone(),
        },
        SocialLink {
            name: "Twitter",
            icon: Glyph::Twitter,
            href: config.twitter_url.clone(),
        },
        SocialLink {
            name: "Email",
            icon: Glyph::Envelope,
            href: format!("mailto:{}", config.email),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_links_order_and_uniqueness() {
        let names = NAV_LINKS.iter().map(|l| l.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Home", "About", "Blog", "Projects", "Contact"]);
        let unique = names.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), NAV_LINKS.len());
    }

    #[test]
    fn test_footer_links_skip_home() {
        let names = footer_links().iter().map(|l| l.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["About", "Blog", "Projects", "Contact"]);
        assert_eq!(footer_links()[0].href, "/about");
    }

    #[test]
    fn test_default_social_links() {
        let links = social_links(&SiteConfig::default());
        let summary = links
            .iter()
            .map(|l| (l.name, l.href.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("GitHub", "https://github.com"),
                ("LinkedIn", "https://linkedin.com"),
                ("Twitter", "https://twitter.com"),
                ("Email", "mailto:hello@itsatoshi.com"),
            ]
        );
        assert_eq!(links[3].icon, Glyph::Envelope);
    }

    #[test]
    fn test_email_override_only_changes_email() {
        let defaults = social_links(&SiteConfig::default());
        let config = SiteConfig {
            email: "me@example.com".to_string(),
            ..SiteConfig::default()
        };
        let links = social_links(&config);
        assert_eq!(links[3].href, "mailto:me@example.com");
        assert_eq!(links[..3], defaults[..3]);
    }

    #[test]
    fn test_link_targets() {
        let links = social_links(&SiteConfig::default());
        for link in &links[..3] {
            assert_eq!(link.target(), Some("_blank"));
            assert_eq!(link.rel(), Some("noopener noreferrer"));
        }
        assert_eq!(links[3].target(), None);
        assert_eq!(links[3].rel(), None);
    }
}
