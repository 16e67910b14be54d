pub mod draft;
pub mod state;
pub mod validation;
