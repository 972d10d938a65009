//! Main App Component

use acadira_core::Route as SiteRoute;
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{HomePage, NotFoundPage, RoutePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route
                        path=path!("/how-it-works")
                        view=|| view! { <RoutePage route=SiteRoute::HowItWorks /> }
                    />
                    <Route
                        path=path!("/features")
                        view=|| view! { <RoutePage route=SiteRoute::Features /> }
                    />
                    <Route
                        path=path!("/pricing")
                        view=|| view! { <RoutePage route=SiteRoute::Pricing /> }
                    />
                    <Route
                        path=path!("/about")
                        view=|| view! { <RoutePage route=SiteRoute::About /> }
                    />
                    <Route
                        path=path!("/contact")
                        view=|| view! { <RoutePage route=SiteRoute::Contact /> }
                    />
                    <Route
                        path=path!("/login")
                        view=|| view! { <RoutePage route=SiteRoute::Login /> }
                    />
                    <Route
                        path=path!("/demo")
                        view=|| view! { <RoutePage route=SiteRoute::Demo /> }
                    />
                </Routes>
            </div>
        </Router>
    }
}
