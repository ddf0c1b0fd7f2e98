/// Which flavour of the credentials form to render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormMode {
    Login,
    Register,
}

impl FormMode {
    /// Every mode, in declaration order
    #[cfg(test)]
    pub const ALL: [FormMode; 2] = [FormMode::Login, FormMode::Register];

    /// Heading shown at the top of the form
    pub fn header(&self) -> &'static str {
        match self {
            FormMode::Login => "Login",
            FormMode::Register => "Register",
        }
    }

    /// Browser autocomplete hint, shared by the username and password inputs
    pub fn autocomplete(&self) -> &'static str {
        match self {
            FormMode::Login => "username",
            FormMode::Register => "new-password",
        }
    }
}
