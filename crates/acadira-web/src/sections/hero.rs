use acadira_core::content::HERO;
use acadira_core::Section;
use leptos::prelude::*;

use crate::components::{CtaLink, DotBadge};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id=Section::Hero.anchor() class="hero">
            <div class="container hero-inner">
                <div class="hero-copy">
                    <h1 class="hero-headline">
                        {HERO.headline}
                        " "
                        <span class="text-gradient">{HERO.highlight}</span>
                    </h1>
                    <p class="hero-subheadline">{HERO.subheadline}</p>

                    <div class="hero-cta">
                        {HERO
                            .actions
                            .iter()
                            .map(|cta| view! { <CtaLink cta=cta /> })
                            .collect_view()}
                    </div>

                    <div class="hero-indicators">
                        {HERO
                            .indicators
                            .iter()
                            .map(|item| view! { <DotBadge item=item class="indicator" /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero-visual" aria-hidden="true">
                    <div class="preview-card">
                        <div class="preview-screen">
                            <span class="preview-caption">{HERO.preview}</span>
                        </div>
                    </div>
                    <div class="glow glow-top"></div>
                    <div class="glow glow-bottom"></div>
                </div>
            </div>
        </section>
    }
}
