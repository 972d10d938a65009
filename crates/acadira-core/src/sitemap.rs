//! Sitemap and robots.txt
//!
//! Generated from the route table so crawlers see exactly the pages the
//! router resolves.

use chrono::NaiveDate;

use crate::error::{Result, SiteError};
use crate::route::Route;

/// Characters that would need escaping inside `<loc>` or end the origin early
const FORBIDDEN: &[char] = &['?', '#', '&', '<', '>', '"', '\'', '\\'];

/// Absolute origin the site is served from, without a trailing slash
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            None => {
                return Err(SiteError::Config(format!(
                    "base URL must start with http:// or https://, got '{raw}'"
                )));
            }
            Some("") => return Err(SiteError::Config(format!("base URL has no host: '{raw}'"))),
            Some(rest) => {
                if let Some(c) = rest
                    .chars()
                    .find(|c| FORBIDDEN.contains(c) || c.is_whitespace() || c.is_control())
                {
                    return Err(SiteError::Config(format!(
                        "base URL may not contain {c:?}: '{raw}'"
                    )));
                }
            }
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL of a route
    pub fn join(&self, route: Route) -> String {
        match route {
            Route::Home => format!("{}/", self.0),
            _ => format!("{}{}", self.0, route.path()),
        }
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// XML sitemap of every indexable route
pub fn render_sitemap(base: &BaseUrl, lastmod: NaiveDate) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    let routes = Route::ALL.into_iter().filter(|r| r.is_indexable());
    for route in routes {
        let priority = if route == Route::Home { "1.0" } else { "0.8" };
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <priority>{priority}</priority>\n  </url>\n",
            base.join(route),
            lastmod.format("%Y-%m-%d"),
        ));
    }

    xml.push_str("</urlset>\n");
    tracing::debug!(bytes = xml.len(), "rendered sitemap");
    xml
}

pub fn render_robots(base: &BaseUrl) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: {}\n\nSitemap: {base}/sitemap.xml\n",
        Route::Login.path()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseUrl {
        BaseUrl::parse("https://acadira.example/").unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    #[test]
    fn test_base_url_trims_slash() {
        assert_eq!(base().as_str(), "https://acadira.example");
        assert_eq!(base().join(Route::Home), "https://acadira.example/");
        assert_eq!(
            base().join(Route::Pricing),
            "https://acadira.example/pricing"
        );
    }

    #[test]
    fn test_base_url_rejects_bad_scheme() {
        assert!(matches!(
            BaseUrl::parse("acadira.example"),
            Err(SiteError::Config(_))
        ));
        assert!(BaseUrl::parse("https://").is_err());
        assert!(BaseUrl::parse("http://localhost:3000").is_ok());
    }

    #[test]
    fn test_base_url_rejects_query_fragment_and_markup() {
        for raw in [
            "https://acadira.example/?ref=x",
            "https://acadira.example/#top",
            "https://acadira.example/a&b",
            "https://acadira.example/<script>",
            "https://acadira .example",
            "https://acadira.example/\"x\"",
        ] {
            assert!(
                matches!(BaseUrl::parse(raw), Err(SiteError::Config(_))),
                "{raw} was accepted"
            );
        }
        assert!(BaseUrl::parse("https://acadira.example/school-site").is_ok());
    }

    #[test]
    fn test_sitemap_loc_is_well_formed() {
        let xml = render_sitemap(&base(), day());
        assert!(!xml.contains('&'));
        assert_eq!(xml.matches("<loc>").count(), xml.matches("</loc>").count());
    }

    #[test]
    fn test_sitemap_lists_indexable_routes_in_order() {
        let xml = render_sitemap(&base(), day());
        assert_eq!(xml.matches("<url>").count(), 7);
        assert!(!xml.contains("/login"));
        assert!(xml.contains("<lastmod>2026-10-01</lastmod>"));

        let features = xml.find("/features<").unwrap();
        let pricing = xml.find("/pricing<").unwrap();
        assert!(features < pricing);
    }

    #[test]
    fn test_sitemap_is_stable() {
        assert_eq!(render_sitemap(&base(), day()), render_sitemap(&base(), day()));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = render_robots(&base());
        assert!(robots.contains("Sitemap: https://acadira.example/sitemap.xml"));
        assert!(robots.contains("Disallow: /login"));
    }
}
