//! Trust indicators and the compliance badge row

use acadira_core::content::{COMPLIANCE_BADGES, TRUST_INDICATORS, TRUST_INTRO};
use acadira_core::{Section, TrustIndicator};
use leptos::prelude::*;

use crate::components::{DotBadge, IconGlyph, IntroHeader};

#[component]
pub fn TrustSection() -> impl IntoView {
    view! {
        <section id=Section::Trust.anchor() class="trust">
            <div class="container">
                <IntroHeader intro=&TRUST_INTRO />
                <div class="trust-grid">
                    {TRUST_INDICATORS
                        .iter()
                        .map(|indicator| view! { <TrustCard indicator=indicator /> })
                        .collect_view()}
                </div>
                <div class="compliance-row" aria-label="Certifications">
                    {COMPLIANCE_BADGES
                        .iter()
                        .map(|badge| view! { <DotBadge item=badge class="compliance-badge" /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TrustCard(indicator: &'static TrustIndicator) -> impl IntoView {
    view! {
        <div class="trust-card">
            <IconGlyph icon=indicator.icon class="trust-icon" />
            <h3 class="trust-title">{indicator.title}</h3>
            <p class="trust-description">{indicator.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <TrustSection /> }.to_html()
    }

    #[test]
    fn test_one_card_per_indicator_in_order() {
        let html = render();
        assert_eq!(
            html.matches("class=\"trust-card\"").count(),
            TRUST_INDICATORS.len()
        );

        let positions: Vec<_> = TRUST_INDICATORS
            .iter()
            .map(|t| html.find(&format!(">{}</h3>", t.title)).unwrap())
            .collect();
        assert!(positions.is_sorted(), "cards out of order: {positions:?}");
    }

    #[test]
    fn test_badges_follow_cards() {
        let html = render();
        assert_eq!(
            html.matches("class=\"compliance-badge\"").count(),
            COMPLIANCE_BADGES.len()
        );
        let last_card = html.rfind("class=\"trust-card\"").unwrap();
        for badge in &COMPLIANCE_BADGES {
            let at = html.find(&format!("<span>{}</span>", badge.label)).unwrap();
            assert!(at > last_card, "{} rendered before the cards", badge.label);
        }
    }

    #[test]
    fn test_intro_highlights_vendor() {
        let html = render();
        assert!(html.contains(">Powered by Xovaxy</span>"));
        assert!(html.contains("<span class=\"text-highlight\">Xovaxy</span>"));
    }
}
