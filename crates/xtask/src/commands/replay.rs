//! Replay an action log and print per-step fingerprints

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use hexwarden_runtime::{ReplayLog, replay};

use crate::render::Canvas;

/// Replay an action log from a fresh run
#[derive(Parser, Debug)]
pub struct Replay {
    /// Path to the replay log (JSON)
    pub file: PathBuf,

    /// Print the final arena after the summary
    #[arg(long)]
    pub map: bool,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let log = ReplayLog::load(&self.file)
            .with_context(|| format!("Failed to load replay {}", self.file.display()))?;
        let report = replay(&log);

        println!(
            "{} {} ({} actions, seed {})",
            style("Replaying").bold(),
            style(self.file.display()).cyan(),
            log.actions.len(),
            style(&log.seed).cyan()
        );

        if let Some(initial) = report.fingerprints.first() {
            println!("  {:>4}  {}  {}", 0, initial, style("start").dim());
        }
        for (step, (action, print)) in log
            .actions
            .iter()
            .zip(report.fingerprints.iter().skip(1))
            .enumerate()
        {
            println!("  {:>4}  {}  {}", step + 1, print, action.kind_name());
        }

        let state = &report.final_state;
        println!();
        println!(
            "  {} {}  floor {}  turn {}  hp {}/{}",
            style("Final").bold(),
            style(report.final_fingerprint()).green(),
            state.floor,
            state.turn,
            state.player.hp,
            state.player.max_hp
        );
        println!("  status {}", style(state.status).yellow());

        if self.map {
            println!();
            print!("{}", Canvas::from_state(state).render());
        }

        Ok(())
    }
}
