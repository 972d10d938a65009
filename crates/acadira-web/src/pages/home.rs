//! Home Page

use acadira_core::layout::document_title;
use acadira_core::{Route, Section};
use leptos::prelude::*;

use crate::components::DocumentTitle;
use crate::sections::{BenefitsSection, Footer, Header, HeroSection, TrustSection};

/// The index page, composed in `INDEX_LAYOUT` order
#[component]
pub fn HomePage() -> impl IntoView {
    let sections = Section::layout_for(Route::Home)
        .iter()
        .map(|section| match section {
            Section::Header => view! { <Header /> }.into_any(),
            Section::Hero => view! { <HeroSection /> }.into_any(),
            Section::Benefits => view! { <BenefitsSection /> }.into_any(),
            Section::Trust => view! { <TrustSection /> }.into_any(),
            Section::Footer => view! { <Footer /> }.into_any(),
            // Only placeholder pages carry a stub; INDEX_LAYOUT never lists it
            Section::RouteStub => ().into_any(),
        })
        .collect_view();

    view! {
        <DocumentTitle title=document_title(Route::Home) />
        <div class="home">{sections}</div>
    }
}
