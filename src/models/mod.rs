//! Core data models for tobuddy
//!
//! Time-off quantities are kept in whole minutes; hours only appear at the
//! edges where users type them in or read them back.

pub mod minutes;
pub mod rate;

pub use minutes::{Minutes, MINUTES_PER_HOUR};
pub use rate::AccrualRate;
