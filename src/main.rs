use std::io;

use anyhow::{anyhow, Result};
use clap::Parser;

use tobuddy::cli::{handle_command, Cli};
use tobuddy::config::TobuddyPaths;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let paths = TobuddyPaths::new()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    handle_command(&cli, &paths, stdin.lock(), &mut stdout)
        .map_err(|e| anyhow!("failed to calculate pay periods: {}", e))?;

    Ok(())
}
