//! Command implementations

pub mod simple;
pub mod step;

pub use simple::run_simple;
pub use step::{StepRenderer, StepResponse, fields_from_json, parse_field, run_step};
