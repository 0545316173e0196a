//! Check that an action log replays identically

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use hexwarden_runtime::{ReplayLog, verify_determinism};

/// Replay a log several times and require identical fingerprints
#[derive(Parser, Debug)]
pub struct Verify {
    /// Path to the replay log (JSON)
    pub file: PathBuf,

    /// Number of independent replays
    #[arg(long, default_value_t = 3)]
    pub runs: usize,
}

impl Verify {
    pub fn execute(self) -> Result<()> {
        let log = ReplayLog::load(&self.file)
            .with_context(|| format!("Failed to load replay {}", self.file.display()))?;

        match verify_determinism(&log, self.runs) {
            Ok(print) => {
                println!(
                    "{} {} runs agree on {}",
                    style("✓").green().bold(),
                    self.runs,
                    style(print).green()
                );
                Ok(())
            }
            Err(error) => {
                eprintln!("{} {}", style("✗").red().bold(), error);
                Err(error.into())
            }
        }
    }
}
