//! Plain-text arena rendering shared by the commands.

use std::collections::BTreeMap;

use hexwarden_core::arena;
use hexwarden_core::{ArenaLayout, Archetype, GameConfig, GameState, ItemLocation, Position};

/// Glyph map for one floor. Rows are shifted half a cell per `r` so that axial
/// neighbours line up visually.
#[derive(Default)]
pub struct Canvas {
    glyphs: BTreeMap<Position, char>,
}

impl Canvas {
    pub fn from_layout(layout: &ArenaLayout) -> Self {
        let mut canvas = Self::default();
        canvas.terrain(&layout.walls, &layout.hazards, layout.stairs, layout.shrine);
        for (archetype, position) in &layout.enemies {
            canvas.put(*position, glyph(*archetype));
        }
        canvas.put(layout.player_spawn, '@');
        canvas
    }

    pub fn from_state(state: &GameState) -> Self {
        let mut canvas = Self::default();
        canvas.terrain(&state.walls, &state.hazards, state.stairs, state.shrine);
        if let ItemLocation::Ground(position) = state.spear {
            canvas.put(position, '/');
        }
        for enemy in &state.enemies {
            if let Some(target) = enemy.intent.target() {
                canvas.put(target, '!');
            }
        }
        for enemy in state.enemies.iter().filter(|enemy| enemy.visible) {
            canvas.put(enemy.position, glyph(enemy.archetype));
        }
        if state.player.is_alive() {
            canvas.put(state.player.position, '@');
        }
        canvas
    }

    fn terrain<'a>(
        &mut self,
        walls: impl IntoIterator<Item = &'a Position>,
        hazards: impl IntoIterator<Item = &'a Position>,
        stairs: Position,
        shrine: Option<Position>,
    ) {
        for position in walls {
            self.put(*position, '#');
        }
        for position in hazards {
            self.put(*position, '~');
        }
        self.put(stairs, '>');
        if let Some(shrine) = shrine {
            self.put(shrine, '+');
        }
    }

    fn put(&mut self, position: Position, glyph: char) {
        self.glyphs.insert(position, glyph);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for r in 0..GameConfig::GRID_HEIGHT {
            out.push_str(&" ".repeat(r as usize));
            for q in 0..GameConfig::GRID_WIDTH {
                let position = Position::new(q, r);
                let cell = if arena::contains(position) {
                    self.glyphs.get(&position).copied().unwrap_or('.')
                } else {
                    ' '
                };
                out.push(cell);
                out.push(' ');
            }
            out.truncate(out.trim_end().len());
            out.push('\n');
        }
        out
    }
}

fn glyph(archetype: Archetype) -> char {
    match archetype {
        Archetype::Hero => '@',
        Archetype::Footman => 'f',
        Archetype::Archer => 'a',
        Archetype::Bomber => 'b',
        Archetype::ShieldBearer => 's',
        Archetype::Warlock => 'w',
        Archetype::Assassin => 'x',
        Archetype::Golem => 'G',
        Archetype::Bomb => '*',
    }
}
