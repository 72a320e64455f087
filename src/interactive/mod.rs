//! Interactive mode
//!
//! Lets the user confirm or override each option at a prompt before the
//! calculation runs.

pub mod prompt;
pub mod session;

pub use prompt::Prompter;
pub use session::run_session;
