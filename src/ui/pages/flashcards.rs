//! Flashcards page component

use leptos::prelude::*;
use leptos_meta::Title;

/// Flashcard overview at `/flashcards`
#[component]
pub fn FlashcardsPage() -> impl IntoView {
    view! {
        <Title text="Flashcards | Coli-Cards" />
        <section id="flashcards">
            <h2>"Flashcards"</h2>
            <p>"No decks yet."</p>
        </section>
    }
}
