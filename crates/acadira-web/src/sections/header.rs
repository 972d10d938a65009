//! Sticky site header: logo, primary navigation and the two header actions

use acadira_core::content::{HEADER_ACTIONS, LOGO, NAV_LINKS};
use acadira_core::{Route, Section, BRAND};
use leptos::prelude::*;

use crate::components::CtaLink;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header id=Section::Header.anchor() class="site-header">
            <div class="container header-inner">
                <a href=Route::Home.path() class="logo">
                    <img src=LOGO.src alt=LOGO.alt class="logo-image" />
                    <span class="logo-text">{BRAND}</span>
                </a>

                <nav class="nav" aria-label="Primary">
                    <ul class="nav-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! {
                                <li class="nav-item">
                                    <a href=link.href() class="nav-link">{link.label}</a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div class="header-actions">
                    {HEADER_ACTIONS
                        .iter()
                        .map(|cta| view! { <CtaLink cta=cta /> })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}
