//! Accrual service
//!
//! Simulates pay periods until a time-off target is reached and decides
//! between a period count, "no time off earned", and an invalid configuration.

use std::io::Write;

use crate::config::AccrualConfig;
use crate::display::format_progress;
use crate::error::TobuddyResult;
use crate::models::{AccrualRate, Minutes};

/// What a calculation produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccrualOutcome {
    /// Full pay periods needed to reach the target
    PayPeriods(u64),
    /// Nothing accrues per pay period, so the target is never reached
    NoTimeOffEarned,
}

/// Count the pay periods needed for `earned` to reach `target`
///
/// The target is checked before each period is added, so a balance already at
/// or above the target needs zero periods. With `verbose` set, the running
/// balance is written to `out` before the first period, after every period,
/// and once more when the target is reached.
pub fn simulate<W: Write>(
    earned: Minutes,
    rate: AccrualRate,
    target: Minutes,
    verbose: bool,
    out: &mut W,
) -> TobuddyResult<u64> {
    if !verbose {
        return Ok(periods_until(earned, rate, target));
    }

    let mut balance = earned;
    let mut periods = 0u64;
    while balance < target {
        writeln!(out, "{}", format_progress(balance))?;
        balance += rate.per_period();
        periods += 1;
    }
    writeln!(out, "{}", format_progress(balance))?;

    log::debug!("simulated {} pay periods, final balance {}", periods, balance);
    Ok(periods)
}

/// Closed form of the simulation loop
fn periods_until(earned: Minutes, rate: AccrualRate, target: Minutes) -> u64 {
    if earned >= target {
        return 0;
    }
    let shortfall = (target - earned).total().unsigned_abs();
    let per_period = rate.per_period().total().unsigned_abs();
    shortfall.div_ceil(per_period)
}

/// Service running a calculation for one configuration
pub struct AccrualService<'a> {
    config: &'a AccrualConfig,
}

impl<'a> AccrualService<'a> {
    /// Create a new accrual service
    pub fn new(config: &'a AccrualConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and run the simulation
    ///
    /// A non-positive per-period accrual always yields
    /// [`AccrualOutcome::NoTimeOffEarned`], even when the earned balance or
    /// the target is also invalid. Any other invalid configuration is an error
    /// naming the first failing check.
    pub fn plan<W: Write>(&self, out: &mut W) -> TobuddyResult<AccrualOutcome> {
        match self.config.check() {
            Ok(valid) => {
                let periods =
                    simulate(valid.earned, valid.rate, valid.target, valid.verbose, out)?;
                log::debug!("configuration valid, {} pay periods", periods);
                Ok(AccrualOutcome::PayPeriods(periods))
            }
            Err(_) if !self.config.total_minutes_per_pay_period_valid() => {
                log::debug!(
                    "no accrual: {} per pay period",
                    self.config.total_minutes_per_pay_period().total()
                );
                Ok(AccrualOutcome::NoTimeOffEarned)
            }
            Err(invalidity) => {
                log::debug!("configuration rejected: {}", invalidity);
                Err(invalidity.into())
            }
        }
    }
}
