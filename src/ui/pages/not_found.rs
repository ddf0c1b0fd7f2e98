//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Let the SSR response carry a real 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | Coli-Cards" />
        <section id="not_found">
            <h2>"404"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <A href="/">"Go Home"</A>
        </section>
    }
}
