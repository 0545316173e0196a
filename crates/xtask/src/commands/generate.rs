//! Print a generated floor layout

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use hexwarden_core::{DEFAULT_SEED, generate};

use crate::render::Canvas;

/// Print a generated floor layout
#[derive(Parser, Debug)]
pub struct Generate {
    /// Floor number (1-based)
    #[arg(long, default_value_t = 1)]
    pub floor: u32,

    /// Run seed
    #[arg(long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Emit the layout as JSON instead of a map
    #[arg(long)]
    pub json: bool,
}

impl Generate {
    pub fn execute(self) -> Result<()> {
        let layout = generate(self.floor, &self.seed);

        if self.json {
            let json =
                serde_json::to_string_pretty(&layout).context("Failed to encode layout")?;
            println!("{json}");
            return Ok(());
        }

        println!(
            "{} floor {} from seed {}",
            style("Arena").bold(),
            style(layout.floor).cyan(),
            style(&layout.seed).cyan()
        );
        println!();
        print!("{}", Canvas::from_layout(&layout).render());
        println!();
        println!(
            "  {} enemies, {} walls, {} hazards{}",
            style(layout.enemies.len()).yellow(),
            layout.walls.len(),
            layout.hazards.len(),
            if layout.shrine.is_some() {
                ", shrine"
            } else {
                ""
            }
        );
        for (archetype, position) in &layout.enemies {
            println!("    {} at ({}, {})", archetype, position.q, position.r);
        }

        Ok(())
    }
}
