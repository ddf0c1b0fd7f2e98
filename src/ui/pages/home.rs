//! Home page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::SITE_NAME;

/// Landing page at `/`
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=SITE_NAME />
        <section id="home">
            <h2>"Welcome to " {SITE_NAME}</h2>
            <p>"Study with flashcards, one card at a time."</p>
            <A href="/flashcards">"Browse flashcards"</A>
        </section>
    }
}
