//! Login page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::FormMode;
use crate::ui::LoginForm;

/// Login page at `/login`
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login | Coli-Cards" />
        <LoginForm mode=FormMode::Login />
    }
}
