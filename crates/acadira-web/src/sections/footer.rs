use acadira_core::content::{COPYRIGHT, FOOTER_COLUMNS, FOOTER_TAGLINE};
use acadira_core::{Route, Section, BRAND};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id=Section::Footer.anchor() class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <a href=Route::Home.path() class="footer-logo">{BRAND}</a>
                    <p class="footer-tagline">{FOOTER_TAGLINE}</p>
                </div>
                <div class="footer-columns">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| view! {
                            <div class="footer-column">
                                <h4>{column.heading}</h4>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| view! {
                                            <li>
                                                <a href=link.href() class="footer-link">{link.label}</a>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
