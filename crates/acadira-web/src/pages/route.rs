use acadira_core::layout::document_title;
use acadira_core::Route;
use leptos::prelude::*;

use crate::components::DocumentTitle;
use crate::sections::{Footer, Header, RouteStub};

/// Any page other than the index
#[component]
pub fn RoutePage(route: Route) -> impl IntoView {
    view! {
        <DocumentTitle title=document_title(route) />
        <Header />
        <main class="page">
            <RouteStub route=route />
        </main>
        <Footer />
    }
}
