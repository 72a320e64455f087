//! Outcome formatting for terminal output

use crate::models::Minutes;
use crate::services::AccrualOutcome;

/// Format the final answer of a calculation
pub fn format_outcome(outcome: AccrualOutcome) -> String {
    match outcome {
        AccrualOutcome::PayPeriods(periods) => format!("{} pay periods", periods),
        AccrualOutcome::NoTimeOffEarned => "No Time Off Earned".to_string(),
    }
}

/// Format one step of a verbose simulation
pub fn format_progress(balance: Minutes) -> String {
    format!("{} earned", balance)
}
