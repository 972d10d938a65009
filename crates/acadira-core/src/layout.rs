//! Page Layout
//!
//! Which sections a page is made of, and a flattened outline of what each
//! section renders. The outline has one block per text-bearing element of
//! the Leptos components, built from the same statics, so a page can be
//! inspected without a browser.

use serde::Serialize;

use crate::content::{
    BENEFITS, BENEFITS_INTRO, COMPLIANCE_BADGES, COPYRIGHT, FOOTER_COLUMNS, FOOTER_TAGLINE,
    HEADER_ACTIONS, HERO, LOGO, NAV_LINKS, TRUST_INDICATORS, TRUST_INTRO,
};
use crate::model::{
    Accent, Benefit, CallToAction, ComplianceBadge, DotLabel, FooterColumn, HeroContent, Logo,
    NavLink, SectionIntro, TrustIndicator,
};
use crate::route::Route;
use crate::BRAND;

/// A horizontal band of a page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Header,
    Hero,
    Benefits,
    Trust,
    /// Title and summary of a page that has no bespoke content yet
    RouteStub,
    Footer,
}

/// Section order of the index page, top to bottom
pub static INDEX_LAYOUT: [Section; 5] = [
    Section::Header,
    Section::Hero,
    Section::Benefits,
    Section::Trust,
    Section::Footer,
];

/// Section order of every other page
pub static STUB_LAYOUT: [Section; 3] = [Section::Header, Section::RouteStub, Section::Footer];

impl Section {
    /// Sections making up the page at `route`
    pub fn layout_for(route: Route) -> &'static [Self] {
        match route {
            Route::Home => &INDEX_LAYOUT,
            _ => &STUB_LAYOUT,
        }
    }

    /// Anchor id of the section's root element
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Header => "top",
            Self::Hero => "hero",
            Self::Benefits => "benefits",
            Self::Trust => "trust",
            Self::RouteStub => "page",
            Self::Footer => "footer",
        }
    }
}

/// One rendered element in a section outline
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Image { src: &'static str, alt: &'static str },
    Heading { text: &'static str },
    /// Emphasized run following a heading or inside a paragraph
    Highlight { text: &'static str },
    Text { text: &'static str },
    Link { label: &'static str, href: &'static str },
    Badge {
        label: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        dot: Option<Accent>,
    },
    Card {
        icon: &'static str,
        title: &'static str,
        items: Vec<&'static str>,
    },
    /// Decorative placeholder panel
    Panel { caption: &'static str },
}

impl Block {
    const fn link(label: &'static str, href: &'static str) -> Self {
        Self::Link { label, href }
    }

    const fn badge(label: &'static str) -> Self {
        Self::Badge { label, dot: None }
    }

    const fn dot(item: &DotLabel) -> Self {
        Self::Badge {
            label: item.label,
            dot: Some(item.dot),
        }
    }

    /// Link destination, if the block is a link
    pub const fn href(&self) -> Option<&'static str> {
        match self {
            Self::Link { href, .. } => Some(*href),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionOutline {
    pub section: Section,
    pub blocks: Vec<Block>,
}

/// Flattened render of a whole page, one block per text-bearing element in
/// the order the components emit them
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageOutline {
    pub route: Route,
    pub title: String,
    pub sections: Vec<SectionOutline>,
}

impl PageOutline {
    pub fn for_route(route: Route) -> Self {
        let sections = Section::layout_for(route)
            .iter()
            .map(|&section| SectionOutline {
                section,
                blocks: outline_section(section, route),
            })
            .collect();

        Self {
            route,
            title: document_title(route),
            sections,
        }
    }

    pub fn section(&self, section: Section) -> Option<&SectionOutline> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Every link destination on the page, in render order
    pub fn hrefs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.blocks.iter().filter_map(Block::href))
    }
}

/// `<title>` text for a page
pub fn document_title(route: Route) -> String {
    match route {
        Route::Home => format!("{BRAND} | {}", route.title()),
        _ => format!("{} | {BRAND}", route.title()),
    }
}

fn outline_section(section: Section, route: Route) -> Vec<Block> {
    match section {
        Section::Header => header_blocks(&LOGO),
        Section::Hero => hero_blocks(&HERO),
        Section::Benefits => intro_blocks(&BENEFITS_INTRO)
            .into_iter()
            .chain(BENEFITS.iter().map(benefit_block))
            .collect(),
        Section::Trust => intro_blocks(&TRUST_INTRO)
            .into_iter()
            .chain(trust_blocks(&TRUST_INDICATORS, &COMPLIANCE_BADGES))
            .collect(),
        Section::RouteStub => vec![
            Block::Heading { text: route.title() },
            Block::Text { text: route.summary() },
            Block::link("Back to home", Route::Home.path()),
        ],
        Section::Footer => footer_blocks(&FOOTER_COLUMNS),
    }
}

fn header_blocks(logo: &Logo) -> Vec<Block> {
    [
        Block::Image {
            src: logo.src,
            alt: logo.alt,
        },
        Block::link(BRAND, Route::Home.path()),
    ]
    .into_iter()
    .chain(NAV_LINKS.iter().map(nav_block))
    .chain(HEADER_ACTIONS.iter().map(cta_block))
    .collect()
}

fn hero_blocks(hero: &HeroContent) -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading {
            text: hero.headline,
        },
        Block::Highlight {
            text: hero.highlight,
        },
        Block::Text {
            text: hero.subheadline,
        },
    ];
    blocks.extend(hero.actions.iter().map(cta_block));
    blocks.extend(hero.indicators.iter().map(Block::dot));
    blocks.push(Block::Panel {
        caption: hero.preview,
    });
    blocks
}

/// Badge, heading, then the paragraph split around its highlight
fn intro_blocks(intro: &SectionIntro) -> Vec<Block> {
    let (before, highlight, after) = intro.description_parts();
    let mut blocks = vec![
        Block::badge(intro.badge),
        Block::Heading { text: intro.title },
        Block::Text { text: before },
    ];
    if let Some(text) = highlight {
        blocks.push(Block::Highlight { text });
        if !after.is_empty() {
            blocks.push(Block::Text { text: after });
        }
    }
    blocks
}

fn benefit_block(benefit: &Benefit) -> Block {
    Block::Card {
        icon: benefit.icon.glyph(),
        title: benefit.category,
        items: benefit.features.to_vec(),
    }
}

fn trust_blocks(indicators: &[TrustIndicator], badges: &[ComplianceBadge]) -> Vec<Block> {
    indicators
        .iter()
        .map(|t| Block::Card {
            icon: t.icon.glyph(),
            title: t.title,
            items: vec![t.description],
        })
        .chain(badges.iter().map(Block::dot))
        .collect()
}

fn footer_blocks(columns: &[FooterColumn]) -> Vec<Block> {
    let mut blocks = vec![
        Block::link(BRAND, Route::Home.path()),
        Block::Text {
            text: FOOTER_TAGLINE,
        },
    ];
    for column in columns {
        blocks.push(Block::Heading {
            text: column.heading,
        });
        blocks.extend(column.links.iter().map(nav_block));
    }
    blocks.push(Block::Text { text: COPYRIGHT });
    blocks
}

fn nav_block(link: &NavLink) -> Block {
    Block::link(link.label, link.href())
}

fn cta_block(cta: &CallToAction) -> Block {
    Block::link(cta.label, cta.href())
}

/// Serializable snapshot of every static record on the site
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteContent {
    pub brand: &'static str,
    pub logo: &'static Logo,
    pub nav_links: &'static [NavLink],
    pub header_actions: &'static [CallToAction],
    pub hero: &'static HeroContent,
    pub benefits_intro: &'static SectionIntro,
    pub benefits: &'static [Benefit],
    pub trust_intro: &'static SectionIntro,
    pub trust_indicators: &'static [TrustIndicator],
    pub compliance_badges: &'static [ComplianceBadge],
    pub footer_columns: &'static [FooterColumn],
    pub layout: &'static [Section],
}

impl SiteContent {
    pub fn current() -> Self {
        Self {
            brand: BRAND,
            logo: &LOGO,
            nav_links: &NAV_LINKS,
            header_actions: &HEADER_ACTIONS,
            hero: &HERO,
            benefits_intro: &BENEFITS_INTRO,
            benefits: &BENEFITS,
            trust_intro: &TRUST_INTRO,
            trust_indicators: &TRUST_INDICATORS,
            compliance_badges: &COMPLIANCE_BADGES,
            footer_columns: &FOOTER_COLUMNS,
            layout: &INDEX_LAYOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(outline: &SectionOutline) -> Vec<&'static str> {
        outline
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Card { title, .. } => Some(*title),
                _ => None,
            })
            .collect()
    }

    fn dotted_badges(outline: &SectionOutline) -> Vec<(&'static str, Accent)> {
        outline
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Badge {
                    label,
                    dot: Some(dot),
                } => Some((*label, *dot)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_index_section_order() {
        let page = PageOutline::for_route(Route::Home);
        let order: Vec<_> = page.sections.iter().map(|s| s.section).collect();
        assert_eq!(order, INDEX_LAYOUT);
    }

    #[test]
    fn test_benefits_open_with_intro() {
        let page = PageOutline::for_route(Route::Home);
        let benefits = page.section(Section::Benefits).unwrap();
        assert_eq!(
            benefits.blocks[..3],
            [
                Block::badge("Key Benefits"),
                Block::Heading {
                    text: BENEFITS_INTRO.title
                },
                Block::Text {
                    text: BENEFITS_INTRO.description
                },
            ]
        );
    }

    #[test]
    fn test_trust_intro_highlights_vendor() {
        let page = PageOutline::for_route(Route::Home);
        let trust = page.section(Section::Trust).unwrap();
        assert_eq!(trust.blocks[0], Block::badge("Powered by Xovaxy"));
        assert_eq!(
            trust.blocks[1],
            Block::Heading {
                text: "Trusted by Educational Institutions"
            }
        );
        assert_eq!(trust.blocks[3], Block::Highlight { text: "Xovaxy" });
    }

    #[test]
    fn test_one_card_per_benefit_in_order() {
        let page = PageOutline::for_route(Route::Home);
        let benefits = page.section(Section::Benefits).unwrap();
        let expected: Vec<_> = BENEFITS.iter().map(|b| b.category).collect();
        assert_eq!(cards(benefits), expected);

        let card_blocks = benefits
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Card { .. }));
        for (block, benefit) in card_blocks.zip(&BENEFITS) {
            let Block::Card { icon, items, .. } = block else {
                panic!("expected a card");
            };
            assert_eq!(*icon, benefit.icon.glyph());
            assert_eq!(items.as_slice(), benefit.features);
        }
    }

    #[test]
    fn test_one_card_per_trust_indicator_then_badges() {
        let page = PageOutline::for_route(Route::Home);
        let trust = page.section(Section::Trust).unwrap();
        let expected: Vec<_> = TRUST_INDICATORS.iter().map(|t| t.title).collect();
        assert_eq!(cards(trust), expected);

        let expected: Vec<_> = COMPLIANCE_BADGES.iter().map(|b| (b.label, b.dot)).collect();
        assert_eq!(dotted_badges(trust), expected);
    }

    #[test]
    fn test_header_links_in_order() {
        let page = PageOutline::for_route(Route::Home);
        let header = page.section(Section::Header).unwrap();
        assert_eq!(
            header.blocks[0],
            Block::Image {
                src: "/assets/acadira-logo.jpg",
                alt: "Acadira"
            }
        );
        let hrefs: Vec<_> = header.blocks.iter().filter_map(Block::href).collect();
        assert_eq!(
            hrefs,
            [
                "/",
                "/",
                "/how-it-works",
                "/features",
                "/pricing",
                "/about",
                "/contact",
                "/login",
                "/demo"
            ]
        );
    }

    #[test]
    fn test_hero_outline() {
        let page = PageOutline::for_route(Route::Home);
        let hero = page.section(Section::Hero).unwrap();
        assert_eq!(
            hero.blocks[1],
            Block::Highlight {
                text: "Your Curriculum"
            }
        );
        let hrefs: Vec<_> = hero.blocks.iter().filter_map(Block::href).collect();
        assert_eq!(hrefs, ["/demo", "/pricing"]);

        let expected: Vec<_> = HERO.indicators.iter().map(|i| (i.label, i.dot)).collect();
        assert_eq!(dotted_badges(hero), expected);
        assert_eq!(
            hero.blocks.last(),
            Some(&Block::Panel {
                caption: "AI Tutor Preview"
            })
        );
    }

    #[test]
    fn test_all_hrefs_are_routes() {
        for route in Route::ALL {
            let page = PageOutline::for_route(route);
            for href in page.hrefs() {
                assert!(Route::from_path(href).is_ok(), "{href} on {route} is not a route");
            }
        }
    }

    #[test]
    fn test_stub_page() {
        let page = PageOutline::for_route(Route::Pricing);
        assert_eq!(page.sections.len(), 3);
        assert_eq!(page.title, "Pricing | Acadira");
        let stub = page.section(Section::RouteStub).unwrap();
        assert_eq!(stub.blocks[0], Block::Heading { text: "Pricing" });
        assert!(page.section(Section::Benefits).is_none());
    }

    #[test]
    fn test_home_title() {
        assert_eq!(
            document_title(Route::Home),
            "Acadira | The AI Tutor Built for Your Curriculum"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        for route in Route::ALL {
            assert_eq!(PageOutline::for_route(route), PageOutline::for_route(route));
        }
        let a = serde_json::to_string(&SiteContent::current()).unwrap();
        let b = serde_json::to_string(&SiteContent::current()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_content_snapshot_json() {
        let value = serde_json::to_value(SiteContent::current()).unwrap();
        assert_eq!(value["brand"], "Acadira");
        assert_eq!(value["logo"]["alt"], "Acadira");
        assert_eq!(value["nav_links"][0]["target"], "/");
        assert_eq!(value["benefits"].as_array().unwrap().len(), 3);
        assert_eq!(value["benefits"][1]["color"], "green");
        assert_eq!(value["benefits"][2]["icon"], "family");
        assert_eq!(value["benefits_intro"]["badge"], "Key Benefits");
        assert!(value["benefits_intro"].get("highlight").is_none());
        assert_eq!(value["trust_intro"]["highlight"], "Xovaxy");
        assert_eq!(value["trust_indicators"][0]["icon"], "lock");
        assert_eq!(value["compliance_badges"][0]["dot"], "green");
        assert_eq!(value["layout"][0], "header");
        assert_eq!(value["hero"]["actions"][1]["target"], "/pricing");
        assert_eq!(value["hero"]["actions"][1]["emphasis"], "outline");
    }

    #[test]
    fn test_badge_dot_omitted_when_absent() {
        let plain = serde_json::to_value(Block::badge("Key Benefits")).unwrap();
        assert_eq!(plain["kind"], "badge");
        assert!(plain.get("dot").is_none());
        let dotted = serde_json::to_value(Block::dot(&COMPLIANCE_BADGES[1])).unwrap();
        assert_eq!(dotted["dot"], "blue");
    }
}
