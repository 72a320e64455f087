//! Display formatting for terminal output

pub mod outcome;

pub use outcome::{format_outcome, format_progress};
