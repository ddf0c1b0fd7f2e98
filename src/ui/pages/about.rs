use leptos::prelude::*;
use leptos_meta::Title;

/// About page at `/about`
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About | Coli-Cards" />
        <section id="about">
            <h2>"About"</h2>
            <p>"Coli-Cards is a small flashcard site."</p>
        </section>
    }
}
