//! Login form component
//!
//! One form shared by the login and register pages. The mode only changes the
//! heading and the autocomplete hints; submission is left to the browser.

use leptos::prelude::*;

use crate::core::FormMode;

/// Username/password form
#[component]
pub fn LoginForm(
    /// Login or register flavour
    mode: FormMode,
) -> impl IntoView {
    let header = mode.header();
    let autocomplete = mode.autocomplete();

    // The submit label stays "Login" in register mode as well
    view! {
        <form method="post" id="login-form">
            <h1>{header}</h1>
            <div id="input">
                <label for="username">"Username"</label>
                <input type="text" id="username" autocomplete=autocomplete />
                <label for="password">"Password"</label>
                <input type="password" id="password" autocomplete=autocomplete />
            </div>
            <button type="submit">"Login"</button>
        </form>
    }
}
