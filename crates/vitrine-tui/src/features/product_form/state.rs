//! Add-product form state.

use crate::common::TextField;

/// Focusable fields of the add-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Price,
    Description,
}

impl ProductField {
    pub fn next(self) -> Self {
        match self {
            ProductField::Name => ProductField::Price,
            ProductField::Price => ProductField::Description,
            ProductField::Description => ProductField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ProductField::Name => ProductField::Description,
            ProductField::Price => ProductField::Name,
            ProductField::Description => ProductField::Price,
        }
    }
}

/// Add-product form: name, price text, description.
///
/// Price stays raw text until submit, where it is parsed to a decimal;
/// validation failures surface inline without any network call.
#[derive(Debug)]
pub struct ProductFormState {
    pub name: TextField,
    pub price: TextField,
    pub description: TextField,
    pub focus: ProductField,
    /// Inline error banner (validation or the generic server failure).
    pub error: Option<String>,
    /// True while the create call is in flight.
    pub submitting: bool,
}

impl Default for ProductFormState {
    fn default() -> Self {
        Self {
            name: TextField::default(),
            price: TextField::default(),
            description: TextField::default(),
            focus: ProductField::Name,
            error: None,
            submitting: false,
        }
    }
}

impl ProductFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            ProductField::Name => &mut self.name,
            ProductField::Price => &mut self.price,
            ProductField::Description => &mut self.description,
        }
    }
}
