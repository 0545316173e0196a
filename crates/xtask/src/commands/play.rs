//! Apply a compact action script to a fresh run

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use hexwarden_core::RunStatus;
use hexwarden_runtime::{RuntimeConfig, Session};

use crate::dirs;
use crate::render::Canvas;
use crate::script::parse_script;

/// Play a scripted run
///
/// Tokens: `w`, `m:q,r`, `j:q,r`, `t:q,r`, `s:skill[:q,r]`, `u:upgrade`, `z`, `reset`.
#[derive(Parser, Debug)]
pub struct Play {
    /// Run seed (defaults to HEXWARDEN_SEED, then the built-in seed)
    #[arg(long)]
    pub seed: Option<String>,

    /// Save the replay log; without a path it goes to the platform data directory
    #[arg(long, num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Action tokens
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub actions: Vec<String>,
}

impl Play {
    pub fn execute(self) -> Result<()> {
        let mut config = RuntimeConfig::from_env();
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        let actions = parse_script(&self.actions)?;
        let mut session = Session::from_config(&config);

        for action in actions {
            let kind = action.kind_name();
            let before = session.state().messages.len();
            let state = session.execute(action);
            for message in state.messages.iter().skip(before) {
                println!("  {} {}", style(kind).dim(), message);
            }
            if matches!(state.status, RunStatus::Won | RunStatus::Lost) {
                break;
            }
        }

        let state = session.state();
        println!();
        print!("{}", Canvas::from_state(state).render());
        println!();
        println!(
            "  floor {}  turn {}  hp {}/{}  kills {}  status {}",
            state.floor,
            state.turn,
            state.player.hp,
            state.player.max_hp,
            state.kills.total,
            style(state.status).yellow()
        );
        if let Some(score) = state.score {
            println!("  score {}", style(score).green().bold());
        }
        if !state.upgrade_options.is_empty() {
            let options: Vec<String> = state
                .upgrade_options
                .iter()
                .map(|upgrade| format!("u:{upgrade}"))
                .collect();
            println!("  shrine offers {}", style(options.join("  ")).cyan());
        }
        println!("  fingerprint {}", style(state.fingerprint()).green());

        if let Some(target) = self.save {
            let path = target.unwrap_or_else(|| {
                dirs::replay_dir().join(format!("{}-{}.json", config.seed, state.turn))
            });
            let log = session.into_replay_log();
            log.save(&path)
                .with_context(|| format!("Failed to save replay to {}", path.display()))?;
            println!(
                "{} Saved {} actions to {}",
                style("✓").green().bold(),
                log.actions.len(),
                style(path.display()).cyan()
            );
        }

        Ok(())
    }
}
