//! Configuration module for tobuddy
//!
//! This module provides:
//! - The accrual configuration record and its validation rules
//! - Persisted default values
//! - Config directory resolution

pub mod accrual;
pub mod paths;
pub mod settings;

pub use accrual::{AccrualConfig, Invalidity, StandardOption, ValidatedConfig};
pub use paths::TobuddyPaths;
pub use settings::Settings;
