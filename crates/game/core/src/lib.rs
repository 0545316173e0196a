//! Deterministic hex-grid tactics engine.
//!
//! `hexwarden-core` defines the canonical rules (actions, skills, enemy
//! policies, arena generation) and exposes a pure reducer: [`reduce`] takes a
//! snapshot and an [`Action`] and returns the next snapshot. Every random
//! decision flows through the counter-indexed draw source stored in
//! [`GameState`], so a seed plus an action log reproduces a run exactly.
pub mod action;
pub mod ai;
pub mod arena;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionTransition, CooldownChange, Effect, EffectTarget, MoveAction, MoveError,
    SkillAction, SkillError, SkillOutcome, TurnResult, WaitAction, apply_effects, run_skill,
    try_skill,
};
pub use arena::{ArenaLayout, generate};
pub use combat::{DamageOutcome, DamageSource, damage_actor};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, floor_seed, reduce, reject,
    try_reduce,
};
pub use env::{DEFAULT_SEED, RngState, draw, draw_id, draw_index};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use state::{
    ActorState, Archetype, EntityId, Fingerprint, GameState, HexDirection, HistoryEntry, Intent,
    IntentKind, ItemLocation, JuiceHint, KillCounters, Position, RunStatus, SkillId, SkillSlot,
    StatusKind, UpgradeError, UpgradeId, Upgrades, fingerprint,
};
