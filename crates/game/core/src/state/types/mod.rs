//! Core state type definitions.
//!
//! - `common`: ids, axial positions and hex directions
//! - `actor`: the shared player/enemy representation
//! - `status`: timed status effects
//! - `skills`: equipped skills, cooldowns and upgrades
mod actor;
mod common;
mod skills;
mod status;

pub use actor::{ActorState, Archetype, ArchetypeStats, Intent, IntentKind, Role};
pub use common::{EntityId, HexDirection, Position};
pub use skills::{
    SkillId, SkillSlot, SkillSlots, UpgradeError, UpgradeId, Upgrades, default_loadout,
};
pub use status::{StatusEffect, StatusEffects, StatusKind};
