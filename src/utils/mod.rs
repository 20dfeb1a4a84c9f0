// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod display;
pub mod logging;
pub mod progress;
pub mod validation;

pub use progress::Spinner;
pub use validation::Validator;
