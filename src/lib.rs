//! tobuddy - time-off accrual calculator
//!
//! Works out how many pay periods must pass before a time-off balance reaches
//! a target, given the current balance and the amount earned each pay period.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Accrual configuration, validation, saved defaults and paths
//! - `error`: Custom error types
//! - `models`: Minute-denominated quantities
//! - `services`: The pay-period simulation
//! - `interactive`: Prompt-driven option overrides
//! - `display`: Terminal output formatting
//! - `cli`: Argument parsing and command handling
//!
//! # Example
//!
//! ```rust
//! use tobuddy::config::AccrualConfig;
//! use tobuddy::services::{AccrualOutcome, AccrualService};
//!
//! let config = AccrualConfig {
//!     hours_per_pay_period: 1,
//!     ..AccrualConfig::default()
//! };
//! let outcome = AccrualService::new(&config).plan(&mut std::io::sink()).unwrap();
//! assert_eq!(outcome, AccrualOutcome::PayPeriods(40));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod interactive;
pub mod models;
pub mod services;

pub use error::{TobuddyError, TobuddyResult};
