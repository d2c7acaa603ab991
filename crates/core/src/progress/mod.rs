//! Progress module - derived metrics and the pure calculator.

mod progress_calculator;
mod progress_errors;
mod progress_model;


pub use progress_calculator::calculate;
pub use progress_errors::CalculatorError;
pub use progress_model::ProgressSummary;
