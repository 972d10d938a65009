use acadira_core::{Route, BRAND};
use leptos::prelude::*;

use crate::components::DocumentTitle;
use crate::sections::{Footer, Header};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <DocumentTitle title=format!("Page not found | {BRAND}") />
        <Header />
        <main class="page not-found">
            <div class="container">
                <h1 class="section-title">"Page not found"</h1>
                <p class="section-description">
                    "The page you are looking for does not exist or has moved."
                </p>
                <a href=Route::Home.path() class="btn btn-primary">"Back to home"</a>
            </div>
        </main>
        <Footer />
    }
}
