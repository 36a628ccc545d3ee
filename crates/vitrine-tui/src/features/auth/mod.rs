pub mod render;
pub mod state;
pub mod update;

pub use state::{AuthField, AuthFormState};
