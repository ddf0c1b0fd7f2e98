//! Site-wide constants: brand name, navigation table and footer text.

use chrono::Datelike;

/// Brand shown in the navigation bar, the footer and the document title
pub const SITE_NAME: &str = "Coli-Cards";

/// A single entry of the top navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation links in display order.
///
/// Every entry has a matching route in [`crate::app::App`].
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Flashcards",
        href: "/flashcards",
    },
    NavLink {
        label: "About",
        href: "/about",
    },
    NavLink {
        label: "Login",
        href: "/login",
    },
    NavLink {
        label: "Register",
        href: "/register",
    },
];

/// Footer copyright text for the given year, e.g. `Coli-Cards © 2025`
pub fn copyright_line(year: i32) -> String {
    format!("{SITE_NAME} © {year}")
}

/// Current calendar year in local time.
///
/// This is the only clock read in the UI; the application shell calls it once
/// per render and hands the result to the layout.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "Flashcards", "About", "Login", "Register"]
        );
    }

    #[test]
    fn test_nav_links_hrefs() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(
            hrefs,
            vec!["/", "/flashcards", "/about", "/login", "/register"]
        );
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "Coli-Cards © 2025");
        assert_eq!(copyright_line(1999), "Coli-Cards © 1999");
    }

    #[test]
    fn test_current_year_matches_clock() {
        let before = chrono::Local::now().year();
        let year = current_year();
        let after = chrono::Local::now().year();

        assert!(year == before || year == after);
        assert_eq!(year.to_string().len(), 4);
    }
}
