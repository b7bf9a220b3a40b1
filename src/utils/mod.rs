// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod format;
pub mod logging;
pub mod telemetry;
pub mod validation;

pub use format::{format_celsius, format_thousands, format_years};
pub use telemetry::{OperationTimer, StageMetrics};
pub use validation::Validator;
