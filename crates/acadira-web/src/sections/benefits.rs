//! Benefits grid: one card per audience segment

use acadira_core::content::{BENEFITS, BENEFITS_INTRO};
use acadira_core::{Benefit, Section};
use leptos::prelude::*;

use crate::components::{IconGlyph, IntroHeader};

#[component]
pub fn BenefitsSection() -> impl IntoView {
    view! {
        <section id=Section::Benefits.anchor() class="benefits">
            <div class="container">
                <IntroHeader intro=&BENEFITS_INTRO />
                <div class="benefits-grid">
                    {BENEFITS
                        .iter()
                        .map(|benefit| view! { <BenefitCard benefit=benefit /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitCard(benefit: &'static Benefit) -> impl IntoView {
    let category = format!("benefit-category {}", benefit.color.class());

    view! {
        <article class="benefit-card">
            <IconGlyph icon=benefit.icon class="benefit-icon" />
            <h3 class=category>{benefit.category}</h3>
            <ul class="benefit-features">
                {benefit
                    .features
                    .iter()
                    .map(|&feature| view! {
                        <li>
                            <span class="feature-dot" aria-hidden="true"></span>
                            <span>{feature}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <BenefitsSection /> }.to_html()
    }

    #[test]
    fn test_one_card_per_benefit_in_order() {
        let html = render();
        assert_eq!(html.matches("class=\"benefit-card\"").count(), BENEFITS.len());

        let positions: Vec<_> = BENEFITS
            .iter()
            .map(|b| html.find(&format!(">{}</h3>", b.category)).unwrap())
            .collect();
        assert!(positions.is_sorted(), "cards out of order: {positions:?}");

        for benefit in &BENEFITS {
            assert!(html.contains(benefit.color.class()));
            assert!(html.contains(benefit.icon.glyph()));
        }
    }

    #[test]
    fn test_every_feature_rendered() {
        let html = render();
        let total: usize = BENEFITS.iter().map(|b| b.features.len()).sum();
        assert_eq!(html.matches("class=\"feature-dot\"").count(), total);
        for feature in BENEFITS.iter().flat_map(|b| b.features) {
            assert!(html.contains(feature), "missing {feature}");
        }
    }

    #[test]
    fn test_intro_precedes_cards() {
        let html = render();
        let badge = html.find(">Key Benefits</span>").unwrap();
        let title = html.find(BENEFITS_INTRO.title).unwrap();
        let first_card = html.find("class=\"benefit-card\"").unwrap();
        assert!(badge < title && title < first_card);
    }
}
