//! Register page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::FormMode;
use crate::ui::LoginForm;

/// Registration page at `/register`
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Title text="Register | Coli-Cards" />
        <LoginForm mode=FormMode::Register />
    }
}
