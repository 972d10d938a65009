//! Placeholder body for pages without bespoke content

use acadira_core::{Route, Section};
use leptos::prelude::*;

#[component]
pub fn RouteStub(route: Route) -> impl IntoView {
    view! {
        <section id=Section::RouteStub.anchor() class="route-stub">
            <div class="container">
                <h1 class="section-title">{route.title()}</h1>
                <p class="section-description">{route.summary()}</p>
                <a href=Route::Home.path() class="btn btn-outline">"Back to home"</a>
            </div>
        </section>
    }
}
