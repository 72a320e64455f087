//! Service layer for tobuddy
//!
//! The service layer holds the calculation itself, on top of the validated
//! configuration.

pub mod accrual;

pub use accrual::{simulate, AccrualOutcome, AccrualService};
