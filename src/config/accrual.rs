//! Accrual configuration and validation
//!
//! An [`AccrualConfig`] holds the raw integers a user supplies. Totals are
//! derived on demand in minutes and checked before any simulation runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{AccrualRate, Minutes};

/// Default target balance in hours
pub const DEFAULT_TARGET_HOURS: i64 = 40;

pub const EARNED_HOURS_HELP: &str = "Number of Hours accrued.";
pub const EARNED_MINUTES_HELP: &str = "Number of Minutes accrued.";
pub const HOURS_PER_PAY_PERIOD_HELP: &str = "Number of hours earned per pay period";
pub const MINUTES_PER_PAY_PERIOD_HELP: &str = "Number of minutes earned per pay period";
pub const TARGET_HOURS_HELP: &str = "Total time off time required in hours.";

/// Inputs for a single accrual calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualConfig {
    /// Hours already accrued
    #[serde(default)]
    pub earned_hours: i64,

    /// Minutes already accrued, on top of `earned_hours`
    #[serde(default)]
    pub earned_minutes: i64,

    /// Hours earned each pay period
    #[serde(default)]
    pub hours_per_pay_period: i64,

    /// Minutes earned each pay period, on top of `hours_per_pay_period`
    #[serde(default)]
    pub minutes_per_pay_period: i64,

    /// Balance to reach, in hours
    #[serde(default = "default_target_hours")]
    pub target_hours: i64,

    /// Print the running balance after every pay period
    #[serde(default)]
    pub verbose: bool,
}

fn default_target_hours() -> i64 {
    DEFAULT_TARGET_HOURS
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            earned_hours: 0,
            earned_minutes: 0,
            hours_per_pay_period: 0,
            minutes_per_pay_period: 0,
            target_hours: DEFAULT_TARGET_HOURS,
            verbose: false,
        }
    }
}

impl AccrualConfig {
    /// Total balance already accrued
    pub fn total_earned_minutes(&self) -> Minutes {
        Minutes::from_hours_minutes(self.earned_hours, self.earned_minutes)
    }

    /// Total accrued each pay period
    pub fn total_minutes_per_pay_period(&self) -> Minutes {
        Minutes::from_hours_minutes(self.hours_per_pay_period, self.minutes_per_pay_period)
    }

    /// Target balance
    pub fn target_minutes(&self) -> Minutes {
        Minutes::from_hours(self.target_hours)
    }

    pub fn total_earned_minutes_valid(&self) -> bool {
        !self.total_earned_minutes().is_negative()
    }

    pub fn total_minutes_per_pay_period_valid(&self) -> bool {
        self.total_minutes_per_pay_period().is_positive()
    }

    pub fn target_minutes_valid(&self) -> bool {
        self.target_minutes().is_positive()
    }

    /// True iff every individual check passes
    pub fn validate(&self) -> bool {
        self.total_earned_minutes_valid()
            && self.total_minutes_per_pay_period_valid()
            && self.target_minutes_valid()
    }

    /// The first failing check, in priority order: earned balance, then
    /// per-period accrual, then target
    pub fn describe_invalidity(&self) -> Option<Invalidity> {
        if !self.total_earned_minutes_valid() {
            Some(Invalidity::EarnedMinutes(self.total_earned_minutes().total()))
        } else if !self.total_minutes_per_pay_period_valid() {
            Some(Invalidity::MinutesPerPayPeriod(
                self.total_minutes_per_pay_period().total(),
            ))
        } else if !self.target_minutes_valid() {
            Some(Invalidity::TargetHours(self.target_hours))
        } else {
            None
        }
    }

    /// Validate and convert into the quantities the simulator works with
    pub fn check(&self) -> Result<ValidatedConfig, Invalidity> {
        if let Some(invalidity) = self.describe_invalidity() {
            return Err(invalidity);
        }

        let rate = AccrualRate::new(self.total_minutes_per_pay_period()).ok_or(
            Invalidity::MinutesPerPayPeriod(self.total_minutes_per_pay_period().total()),
        )?;

        Ok(ValidatedConfig {
            earned: self.total_earned_minutes(),
            rate,
            target: self.target_minutes(),
            verbose: self.verbose,
        })
    }

    /// Read one of the standard numeric options
    pub fn get(&self, option: StandardOption) -> i64 {
        match option {
            StandardOption::EarnedHours => self.earned_hours,
            StandardOption::EarnedMinutes => self.earned_minutes,
            StandardOption::HoursPerPayPeriod => self.hours_per_pay_period,
            StandardOption::MinutesPerPayPeriod => self.minutes_per_pay_period,
            StandardOption::TargetHours => self.target_hours,
        }
    }

    /// Copy of this configuration with one standard option replaced
    pub fn with(mut self, option: StandardOption, value: i64) -> Self {
        match option {
            StandardOption::EarnedHours => self.earned_hours = value,
            StandardOption::EarnedMinutes => self.earned_minutes = value,
            StandardOption::HoursPerPayPeriod => self.hours_per_pay_period = value,
            StandardOption::MinutesPerPayPeriod => self.minutes_per_pay_period = value,
            StandardOption::TargetHours => self.target_hours = value,
        }
        self
    }

    /// Copy of this configuration with the verbose flag replaced
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// A configuration that passed every check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub earned: Minutes,
    pub rate: AccrualRate,
    pub target: Minutes,
    pub verbose: bool,
}

/// Why a configuration was rejected, carrying the offending value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidity {
    /// Total earned minutes is negative
    EarnedMinutes(i64),
    /// Total minutes per pay period is zero or negative
    MinutesPerPayPeriod(i64),
    /// Target hours is zero or negative
    TargetHours(i64),
}

impl fmt::Display for Invalidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EarnedMinutes(v) => write!(f, "total earned minutes invalid: {}", v),
            Self::MinutesPerPayPeriod(v) => {
                write!(f, "total minutes per pay period invalid: {}", v)
            }
            Self::TargetHours(v) => write!(f, "target hours invalid: {}", v),
        }
    }
}

impl std::error::Error for Invalidity {}

/// The five numeric options a user can set, in prompting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardOption {
    EarnedHours,
    EarnedMinutes,
    HoursPerPayPeriod,
    MinutesPerPayPeriod,
    TargetHours,
}

impl StandardOption {
    pub const ALL: [StandardOption; 5] = [
        StandardOption::EarnedHours,
        StandardOption::EarnedMinutes,
        StandardOption::HoursPerPayPeriod,
        StandardOption::MinutesPerPayPeriod,
        StandardOption::TargetHours,
    ];

    /// Long flag name on the command line
    pub fn flag(&self) -> &'static str {
        match self {
            Self::EarnedHours => "ch",
            Self::EarnedMinutes => "cm",
            Self::HoursPerPayPeriod => "eh",
            Self::MinutesPerPayPeriod => "em",
            Self::TargetHours => "target",
        }
    }

    /// Human-readable description, shared by `--help` and the prompts
    pub fn description(&self) -> &'static str {
        match self {
            Self::EarnedHours => EARNED_HOURS_HELP,
            Self::EarnedMinutes => EARNED_MINUTES_HELP,
            Self::HoursPerPayPeriod => HOURS_PER_PAY_PERIOD_HELP,
            Self::MinutesPerPayPeriod => MINUTES_PER_PAY_PERIOD_HELP,
            Self::TargetHours => TARGET_HOURS_HELP,
        }
    }
}

impl fmt::Display for StandardOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.flag())
    }
}
