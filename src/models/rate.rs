//! Accrual rate per pay period

use super::minutes::Minutes;

/// Minutes of time off earned each pay period, guaranteed to be positive
///
/// A zero or negative rate never reaches a target, so it cannot be
/// represented here; callers decide what a non-positive rate means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccrualRate(Minutes);

impl AccrualRate {
    /// Wrap a per-period quantity, or `None` if it is not positive
    pub fn new(per_period: Minutes) -> Option<Self> {
        per_period.is_positive().then_some(Self(per_period))
    }

    /// Get the per-period quantity
    pub const fn per_period(&self) -> Minutes {
        self.0
    }
}
