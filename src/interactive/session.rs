//! Interactive override of the accrual options
//!
//! Walks the five numeric options in order, then asks about verbose output.

use std::io::{BufRead, Write};

use super::prompt::Prompter;
use crate::config::{AccrualConfig, StandardOption};
use crate::error::TobuddyResult;

pub const VERBOSE_PROMPT: &str = "Enable Verbose Logging? y/n:";

/// Prompt text for one numeric option showing its current value
pub fn option_prompt(option: StandardOption, current: i64) -> String {
    format!(
        "Enter an Integer for the following: {}: {}: ",
        option.description(),
        current
    )
}

/// Ask the user to confirm or override every option of `config`
///
/// An empty answer keeps the current value. Only `y` turns verbose output on;
/// any other answer leaves the flag as it was.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: AccrualConfig,
) -> TobuddyResult<AccrualConfig> {
    let mut config = config;

    for option in StandardOption::ALL {
        let prompt = option_prompt(option, config.get(option));
        if let Some(value) = prompter.prompt_integer(&prompt)? {
            log::debug!("{} set to {}", option, value);
            config = config.with(option, value);
        }
    }

    if prompter.prompt_line(VERBOSE_PROMPT)?.as_deref() == Some("y") {
        config = config.with_verbose(true);
    }

    Ok(config)
}
