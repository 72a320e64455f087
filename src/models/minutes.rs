//! Minutes type for representing time-off balances
//!
//! Internally stores quantities as whole minutes (i64) so that hours and
//! minutes supplied separately can be combined without rounding.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Minutes in one hour
pub const MINUTES_PER_HOUR: i64 = 60;

/// A signed quantity of time off stored as whole minutes
///
/// Arithmetic saturates at the bounds of i64 instead of overflowing, so
/// absurd flag values degrade into large balances rather than panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Minutes(i64);

impl Minutes {
    /// Create a quantity from a raw minute count
    ///
    /// # Examples
    /// ```
    /// use tobuddy::models::Minutes;
    /// let balance = Minutes::new(90);
    /// assert_eq!(balance.hours(), 1);
    /// ```
    pub const fn new(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Create a quantity from separate hour and minute counts
    ///
    /// # Examples
    /// ```
    /// use tobuddy::models::Minutes;
    /// let balance = Minutes::from_hours_minutes(1, 30);
    /// assert_eq!(balance.total(), 90);
    /// ```
    pub const fn from_hours_minutes(hours: i64, minutes: i64) -> Self {
        Self(hours.saturating_mul(MINUTES_PER_HOUR).saturating_add(minutes))
    }

    /// Create a quantity from whole hours
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_hours_minutes(hours, 0)
    }

    /// Create a zero quantity
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the total number of minutes
    pub const fn total(&self) -> i64 {
        self.0
    }

    /// Get the whole hours portion (truncated toward zero)
    pub const fn hours(&self) -> i64 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Get the remaining minutes after whole hours (carries the sign of the total)
    pub const fn minutes_part(&self) -> i64 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Check if the quantity is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the quantity is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hrs {} minutes", self.hours(), self.minutes_part())
    }
}

impl Add for Minutes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Minutes {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Minutes {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}
