use http::Uri;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BRAND_NAME: &str = "@itsatoshi";
pub const DEFAULT_EMAIL: &str = "hello@itsatoshi.com";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com";
pub const DEFAULT_LINKEDIN_URL: &str = "https://linkedin.com";
pub const DEFAULT_TWITTER_URL: &str = "https://twitter.com";
pub const DEFAULT_SITE_URL: &str = "https://itsatoshi.com";
pub const DEFAULT_TAGLINE: &str =
    "Building digital experiences with passion and precision. Welcome to my corner of the internet.";

static EMBEDDED_CONFIG: &str = include_str!("../site.json");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Couldn't parse site config: {0}")]
    Parse(String),
    #[error("{field} is empty")]
    Empty { field: &'static str },
    #[error("{field} is not an http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("not a valid email address: {0}")]
    InvalidEmail(String),
}

/// Everything the site derives its brand, footer and social links from.
///
/// Missing keys in `site.json` take the literal defaults above; present but
/// malformed values are replaced by [`SiteConfig::resolved`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub site_url: String,
    pub tagline: String,
    /// Overrides the copyright year shown in the footer.
    pub year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            github_url: DEFAULT_GITHUB_URL.to_string(),
            linkedin_url: DEFAULT_LINKEDIN_URL.to_string(),
            twitter_url: DEFAULT_TWITTER_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            year: None,
        }
    }
}

impl SiteConfig {
    /// Loads the config compiled into the binary from `site.json`.
    ///
    /// The server and the WASM bundle embed the same file, so both sides render
    /// identical links.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config.resolved(),
            Err(e) => {
                log::error!("{e}, falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Replaces every invalid field with its default, logging what was dropped.
    pub fn resolved(self) -> Self {
        let brand_name = fallback(
            validate_non_empty("brand_name", self.brand_name),
            DEFAULT_BRAND_NAME,
        );
        let email = fallback(validate_email(self.email), DEFAULT_EMAIL);
        let github_url = fallback(validate_url("github_url", self.github_url), DEFAULT_GITHUB_URL);
        let linkedin_url = fallback(
            validate_url("linkedin_url", self.linkedin_url),
            DEFAULT_LINKEDIN_URL,
        );
        let twitter_url = fallback(
            validate_url("twitter_url", self.twitter_url),
            DEFAULT_TWITTER_URL,
        );
        let site_url = fallback(validate_url("site_url", self.site_url), DEFAULT_SITE_URL);
        let tagline = fallback(validate_non_empty("tagline", self.tagline), DEFAULT_TAGLINE);
        Self {
            brand_name,
            email,
            github_url,
            linkedin_url,
            twitter_url,
            site_url,
            tagline,
            year: self.year,
        }
    }

    /// The year printed in the footer: the configured override, else the year of `now`.
    pub fn footer_year(&self, now: chrono::DateTime<chrono::Utc>) -> i32 {
        use chrono::Datelike;
        self.year.unwrap_or_else(|| now.year())
    }
}

fn fallback(res: Result<String, ConfigError>, default: &str) -> String {
    res.unwrap_or_else(|e| {
        log::warn!("{e}, using default {default:?}");
        default.to_string()
    })
}

fn validate_non_empty(field: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { field });
    }
    Ok(trimmed.to_string())
}

pub fn validate_url(field: &'static str, value: String) -> Result<String, ConfigError> {
    let value = validate_non_empty(field, value)?;
    let is_web = value.parse::<Uri>().is_ok_and(|uri| {
        matches!(uri.scheme_str(), Some("http" | "https"))
            && uri.authority().is_some_and(|a| !a.host().is_empty())
    });
    if is_web {
        Ok(value)
    } else {
        Err(ConfigError::InvalidUrl { field, value })
    }
}

pub fn validate_email(value: String) -> Result<String, ConfigError> {
    let value = validate_non_empty("email", value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEmail(value));
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ConfigError::InvalidEmail(value));
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok {
        return Err(ConfigError::InvalidEmail(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = SiteConfig::from_json("{}").unwrap().resolved();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.brand_name, "@itsatoshi");
        assert_eq!(config.email, "hello@itsatoshi.com");
    }

    #[test]
    fn test_overrides_are_kept() {
        let config = SiteConfig::from_json(
            r#"{ "email": "me@example.com", "github_url": "https://github.com/itsatoshi" }"#,
        )
        .unwrap()
        .resolved();
        assert_eq!(config.email, "me@example.com");
        assert_eq!(config.github_url, "https://github.com/itsatoshi");
        assert_eq!(config.linkedin_url, DEFAULT_LINKEDIN_URL);
        assert_eq!(config.twitter_url, DEFAULT_TWITTER_URL);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = SiteConfig::from_json(
            r#"{
                "brand_name": "   ",
                "email": "not-an-email",
                "github_url": "",
                "linkedin_url": "ftp://linkedin.com",
                "twitter_url": "twitter dot com"
            }"#,
        )
        .unwrap()
        .resolved();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("f", "https://github.com".to_string()).is_ok());
        assert!(validate_url("f", "http://example.com/a/b".to_string()).is_ok());
        assert!(validate_url("f", "/relative/path".to_string()).is_err());
        assert!(validate_url("f", "mailto:me@example.com".to_string()).is_err());
        assert_eq!(
            validate_url("github_url", " ".to_string()),
            Err(ConfigError::Empty { field: "github_url" })
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("me@example.com".to_string()).is_ok());
        assert!(validate_email("@example.com".to_string()).is_err());
        assert!(validate_email("me@example".to_string()).is_err());
        assert!(validate_email("me@.com".to_string()).is_err());
        assert!(validate_email("me@a@b.com".to_string()).is_err());
        assert!(validate_email("me @example.com".to_string()).is_err());
    }

    #[test]
    fn test_footer_year() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let config = SiteConfig::default();
        assert_eq!(config.footer_year(now), 2025);

        let pinned = SiteConfig {
            year: Some(2020),
            ..SiteConfig::default()
        };
        assert_eq!(pinned.footer_year(now), 2020);
    }

    #[test]
    fn test_embedded_config_loads() {
        let config = SiteConfig::load();
        assert!(validate_email(config.email.clone()).is_ok());
        assert!(validate_url("github_url", config.github_url.clone()).is_ok());
    }
}
