//! Auth form state, shared by the login and registration views.

use crate::common::TextField;

/// Focusable fields of an auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Password,
}

impl AuthField {
    pub fn toggle(self) -> Self {
        match self {
            AuthField::Username => AuthField::Password,
            AuthField::Password => AuthField::Username,
        }
    }
}

/// Username/password form. One instance each for login and register.
#[derive(Debug)]
pub struct AuthFormState {
    pub username: TextField,
    pub password: TextField,
    pub focus: AuthField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self {
            username: TextField::default(),
            password: TextField::default(),
            focus: AuthField::Username,
            error: None,
            submitting: false,
        }
    }
}

impl AuthFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }
}
