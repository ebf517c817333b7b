pub mod say;
pub mod settings;
