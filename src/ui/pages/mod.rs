//! Application pages module
//!
//! One page component per route:
//! - Home, Flashcards and About pages
//! - Login and Register pages (both built on `LoginForm`)
//! - Not found fallback

mod about;
mod flashcards;
mod home;
mod login;
mod not_found;
mod register;

pub use about::AboutPage;
pub use flashcards::FlashcardsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
