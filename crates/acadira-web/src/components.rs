//! Shared UI Components

use acadira_core::{CallToAction, DotLabel, Icon, SectionIntro};
use leptos::prelude::*;

/// Button-styled link
#[component]
pub fn CtaLink(cta: &'static CallToAction) -> impl IntoView {
    view! {
        <a href=cta.href() class=cta.class()>{cta.label}</a>
    }
}

/// Emoji glyph with an accessible label
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "icon" } else { class };

    view! {
        <span class=class role="img" aria-label=icon.label()>{icon.glyph()}</span>
    }
}

/// Label preceded by a colored dot
#[component]
pub fn DotBadge(item: &'static DotLabel, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "dot-label" } else { class };
    let dot = format!("dot {}", item.dot.dot_class());

    view! {
        <span class=class>
            <span class=dot aria-hidden="true"></span>
            <span>{item.label}</span>
        </span>
    }
}

/// Centered badge, heading and paragraph opening a section
#[component]
pub fn IntroHeader(intro: &'static SectionIntro) -> impl IntoView {
    let (before, highlight, after) = intro.description_parts();

    view! {
        <div class="section-header">
            <span class="section-badge">{intro.badge}</span>
            <h2 class="section-title">{intro.title}</h2>
            <p class="section-description">
                {before}
                {highlight.map(|text| view! { <span class="text-highlight">{text}</span> })}
                {after}
            </p>
        </div>
    }
}

/// Sets `document.title` once the page mounts
#[component]
pub fn DocumentTitle(title: String) -> impl IntoView {
    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });
}
