//! CLI surface
//!
//! Bridges clap argument parsing with the interactive session and the
//! accrual service.

use std::io::{BufRead, Write};

use clap::{ArgAction, Parser};

use crate::config::accrual::{
    EARNED_HOURS_HELP, EARNED_MINUTES_HELP, HOURS_PER_PAY_PERIOD_HELP,
    MINUTES_PER_PAY_PERIOD_HELP, TARGET_HOURS_HELP,
};
use crate::config::{AccrualConfig, Settings, TobuddyPaths};
use crate::display::format_outcome;
use crate::error::TobuddyResult;
use crate::interactive::{run_session, Prompter};
use crate::services::{AccrualOutcome, AccrualService};

/// Command-line arguments
///
/// Options left unset on the command line fall back to the environment, then
/// to the saved defaults. `--verbose=false` turns off a saved verbose default.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "tobuddy",
    version,
    about = "Calculate when you can take your next dream vacation",
    long_about = "Calculate when you can take your next dream vacation based on your \
                  current time off and time off earned each pay period."
)]
pub struct Cli {
    #[arg(
        long = "ch",
        env = "TOBUDDY_CH",
        allow_negative_numbers = true,
        help = EARNED_HOURS_HELP
    )]
    pub earned_hours: Option<i64>,

    #[arg(
        long = "cm",
        env = "TOBUDDY_CM",
        allow_negative_numbers = true,
        help = EARNED_MINUTES_HELP
    )]
    pub earned_minutes: Option<i64>,

    #[arg(
        long = "eh",
        env = "TOBUDDY_EH",
        allow_negative_numbers = true,
        help = HOURS_PER_PAY_PERIOD_HELP
    )]
    pub hours_per_pay_period: Option<i64>,

    #[arg(
        long = "em",
        env = "TOBUDDY_EM",
        allow_negative_numbers = true,
        help = MINUTES_PER_PAY_PERIOD_HELP
    )]
    pub minutes_per_pay_period: Option<i64>,

    #[arg(
        short = 't',
        long = "target",
        env = "TOBUDDY_TARGET",
        allow_negative_numbers = true,
        help = TARGET_HOURS_HELP
    )]
    pub target_hours: Option<i64>,

    /// Print verbose output.
    #[arg(
        short,
        long,
        env = "TOBUDDY_VERBOSE",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub verbose: Option<bool>,

    /// Start tobuddy in interactive mode.
    #[arg(short, long)]
    pub interactive: bool,

    /// Save the resolved options as the new defaults.
    #[arg(long)]
    pub save_defaults: bool,
}

impl Cli {
    /// Fill every unset option from `defaults`
    pub fn resolve(&self, defaults: &AccrualConfig) -> AccrualConfig {
        AccrualConfig {
            earned_hours: self.earned_hours.unwrap_or(defaults.earned_hours),
            earned_minutes: self.earned_minutes.unwrap_or(defaults.earned_minutes),
            hours_per_pay_period: self
                .hours_per_pay_period
                .unwrap_or(defaults.hours_per_pay_period),
            minutes_per_pay_period: self
                .minutes_per_pay_period
                .unwrap_or(defaults.minutes_per_pay_period),
            target_hours: self.target_hours.unwrap_or(defaults.target_hours),
            verbose: self.verbose.unwrap_or(defaults.verbose),
        }
    }
}

/// Build the configuration and run the calculation
///
/// In interactive mode the prompts read from `input` and are written to
/// `out`, followed by any verbose progress lines.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    paths: &TobuddyPaths,
    input: R,
    out: &mut W,
) -> TobuddyResult<AccrualOutcome> {
    log::debug!("config directory: {}", paths.base_dir().display());
    let settings = Settings::load_or_default(paths)?;
    let mut config = cli.resolve(&settings.defaults);

    if cli.interactive {
        let mut prompter = Prompter::new(input, &mut *out);
        config = run_session(&mut prompter, config)?;
    }
    log::debug!("resolved configuration: {:?}", config);

    let outcome = AccrualService::new(&config).plan(out)?;

    // Only configurations that produced an answer become defaults
    if cli.save_defaults {
        Settings::with_defaults(config).save(paths)?;
    }

    Ok(outcome)
}

/// Run the calculation and print its outcome
pub fn handle_command<R: BufRead, W: Write>(
    cli: &Cli,
    paths: &TobuddyPaths,
    input: R,
    out: &mut W,
) -> TobuddyResult<()> {
    let outcome = execute(cli, paths, input, out)?;
    writeln!(out, "{}", format_outcome(outcome))?;
    Ok(())
}
