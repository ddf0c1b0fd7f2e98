//! Core site model: navigation, form modes and server configuration

#[cfg(feature = "ssr")]
pub mod config;
mod form_mode;
mod site;

pub use form_mode::FormMode;
pub use site::{NAV_LINKS, NavLink, SITE_NAME, copyright_line, current_year};
