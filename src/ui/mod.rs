pub mod layout;
pub mod login_form;
pub mod pages;

pub use layout::Layout;
pub use login_form::LoginForm;
