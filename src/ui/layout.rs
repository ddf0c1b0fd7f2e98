//! Site layout component
//!
//! Renders the page chrome shared by every route: the top navigation bar,
//! the main content slot and the copyright footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{NAV_LINKS, SITE_NAME, copyright_line};

/// Page chrome wrapping the routed content
#[component]
pub fn Layout(
    /// Calendar year shown in the footer
    year: i32,
    /// Page content, inserted as-is into the main region
    children: Children,
) -> impl IntoView {
    view! {
        <nav id="top_nav">
            <A href="/">
                <h1>{SITE_NAME}</h1>
            </A>
            <ul>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <A href=link.href>{link.label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
        <main id="main_content">{children()}</main>
        <footer id="footer">
            <p>{copyright_line(year)}</p>
        </footer>
    }
}
