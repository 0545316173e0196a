//! Authoritative game state representation.
//!
//! [`GameState`] is a complete, self-contained snapshot: there is no hidden
//! state (timers, live generator objects) outside of it. The reducer never
//! mutates a snapshot it was handed; it clones, transforms the clone and
//! returns it, so snapshots referenced by the undo history stay intact.
mod fingerprint;
pub mod types;

use std::collections::{BTreeMap, BTreeSet};

use crate::action::Action;
use crate::arena;
use crate::config::GameConfig;
use crate::env::RngState;

pub use fingerprint::{Fingerprint, fingerprint};
pub use types::{
    ActorState, Archetype, ArchetypeStats, EntityId, HexDirection, Intent, IntentKind, Position,
    Role, SkillId, SkillSlot, SkillSlots, StatusEffect, StatusEffects, StatusKind, UpgradeError,
    UpgradeId, Upgrades, default_loadout,
};

/// Run status state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    #[default]
    Playing,
    ChoosingUpgrade,
    Won,
    Lost,
}

/// Where the player's throwable spear currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemLocation {
    #[default]
    Carried,
    Ground(Position),
}

/// Kind of item an effect can place on the ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    Spear,
}

/// Presentation-only hint emitted for renderers.
///
/// The engine writes these and never reads them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JuiceHint {
    Lunge { from: Position, to: Position },
    Projectile { from: Position, to: Position },
    Leap { from: Position, to: Position },
    Teleport { from: Position, to: Position },
    Impact { at: Position },
    Blocked { at: Position },
    Explosion { at: Position },
    Shake { intensity: u8 },
}

/// Kills credited to the player over the whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillCounters {
    pub total: u32,
    pub by_archetype: BTreeMap<Archetype, u32>,
}

impl KillCounters {
    pub fn record(&mut self, archetype: Archetype) {
        self.total += 1;
        *self.by_archetype.entry(archetype).or_insert(0) += 1;
    }
}

/// Snapshot taken before an accepted action, used for undo.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub action: Action,
    /// State before `action`, stored with its own history stripped.
    pub before: Box<GameState>,
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub rules: GameConfig,
    pub turn: u32,
    pub floor: u32,
    pub status: RunStatus,

    pub player: ActorState,
    /// Enemy evaluation order; semantically significant.
    pub enemies: Vec<ActorState>,

    pub width: i32,
    pub height: i32,
    pub hazards: BTreeSet<Position>,
    pub walls: BTreeSet<Position>,
    pub stairs: Position,
    pub shrine: Option<Position>,
    pub spear: ItemLocation,

    pub upgrades: Upgrades,
    pub upgrade_options: Vec<UpgradeId>,

    /// Seed used to generate the current floor.
    pub seed: String,
    /// Seed the run started from; constant across floor transitions.
    pub initial_seed: String,
    pub rng: RngState,

    pub messages: Vec<String>,
    pub action_log: Vec<Action>,
    pub kills: KillCounters,
    pub score: Option<u32>,

    // === Transient: cleared at the start of every reducer call ===
    pub dying: Vec<ActorState>,
    pub presentation_hints: Vec<JuiceHint>,

    pub history: Vec<HistoryEntry>,
}

impl GameState {
    /// Returns a reference to an actor by ID (player or enemy).
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.enemies.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by ID (player or enemy).
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.enemies.iter_mut().find(|actor| actor.id == id)
    }

    /// Actor standing on `position`, if any.
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        if self.player.position == position && self.player.is_alive() {
            return Some(&self.player);
        }
        self.enemies.iter().find(|actor| actor.position == position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.actor_at(position).is_some()
    }

    pub fn in_arena(&self, position: Position) -> bool {
        arena::contains(position)
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.contains(&position)
    }

    pub fn is_hazard(&self, position: Position) -> bool {
        self.hazards.contains(&position)
    }

    /// Inside the arena and not a wall.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.in_arena(position) && !self.is_wall(position)
    }

    /// Enemy ids in evaluation order.
    pub fn enemy_ids(&self) -> Vec<EntityId> {
        self.enemies.iter().map(|actor| actor.id).collect()
    }

    /// Remove an enemy, preserving the order of the rest.
    pub fn remove_enemy(&mut self, id: EntityId) -> Option<ActorState> {
        let index = self.enemies.iter().position(|actor| actor.id == id)?;
        Some(self.enemies.remove(index))
    }

    /// Append an enemy with an id drawn from the run's draw source.
    pub fn spawn_enemy(&mut self, archetype: Archetype, position: Position) -> EntityId {
        let id = self.draw_actor_id(archetype);
        self.enemies.push(ActorState::enemy(id, archetype, position));
        id
    }

    /// Draw a fresh `prefix-xxxxxx` id, redrawing on the rare collision.
    pub fn draw_actor_id(&mut self, archetype: Archetype) -> EntityId {
        loop {
            let suffix = self.rng.next_id(GameConfig::ACTOR_ID_SUFFIX_LEN);
            let id = EntityId::new(&format!("{}-{}", archetype.id_prefix(), suffix));
            if self.actor(id).is_none() {
                return id;
            }
        }
    }

    pub fn has_spear(&self) -> bool {
        self.spear == ItemLocation::Carried
    }

    /// Append to the bounded message log.
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        let capacity = self.rules.message_capacity.max(1);
        if self.messages.len() > capacity {
            let overflow = self.messages.len() - capacity;
            self.messages.drain(..overflow);
        }
    }

    pub fn push_hint(&mut self, hint: JuiceHint) {
        self.presentation_hints.push(hint);
    }

    /// Reset per-call transient fields.
    pub fn clear_transient(&mut self) {
        self.dying.clear();
        self.presentation_hints.clear();
    }

    /// Last message in the log.
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint(self)
    }

    /// Clone without the undo history, for storing inside a history entry.
    pub(crate) fn detached(&self) -> GameState {
        let mut snapshot = self.clone();
        snapshot.history.clear();
        snapshot
    }
}
