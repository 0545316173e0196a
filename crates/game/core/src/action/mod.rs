//! Action domain: the player-facing vocabulary and the skill/effect system.
//!
//! # Module Structure
//!
//! - `effect`: declarative effects emitted by skills
//! - `execute`: the interpreter folding effects into state
//! - `skills`: pure skill functions (validation + effect lists)
//! - `error`: rejection reasons (`SkillError`, `MoveError`)
//! - `movement`, `skill`, `wait`: transitions for the turn-consuming actions

pub mod effect;
pub mod error;
pub mod execute;
pub mod skills;

mod movement;
mod skill;
mod wait;

pub use effect::{CooldownChange, Effect, EffectTarget};
pub use error::{MoveError, SkillError};
pub use execute::apply_effects;
pub use movement::MoveAction;
pub use skill::SkillAction;
pub use skills::{SkillFn, SkillOutcome, run_skill, try_skill};
pub use wait::WaitAction;

use crate::state::{GameState, Position, SkillId, UpgradeId};

/// Every way to change a [`GameState`]. The reducer is the only consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    Move(Position),
    Jump(Position),
    UseSkill {
        skill: SkillId,
        target: Option<Position>,
    },
    /// Alias for `UseSkill { skill: SpearThrow, .. }`.
    Throw(Position),
    Wait,
    SelectUpgrade(UpgradeId),
    Reset,
    LoadState(Box<GameState>),
    Undo,
}

impl Action {
    /// Actions that advance the turn when accepted.
    pub fn is_turn_action(&self) -> bool {
        matches!(
            self,
            Action::Move(_)
                | Action::Jump(_)
                | Action::UseSkill { .. }
                | Action::Throw(_)
                | Action::Wait
        )
    }

    /// Whether an accepted action is appended to the action log.
    pub fn is_logged(&self) -> bool {
        self.is_turn_action() || matches!(self, Action::SelectUpgrade(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Jump(_) => "jump",
            Action::UseSkill { .. } => "use_skill",
            Action::Throw(_) => "throw",
            Action::Wait => "wait",
            Action::SelectUpgrade(_) => "select_upgrade",
            Action::Reset => "reset",
            Action::LoadState(_) => "load_state",
            Action::Undo => "undo",
        }
    }
}

/// What a turn-consuming transition reports back to the reducer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnResult {
    /// Skill whose cooldown must not tick down at the end of this turn.
    pub skill_used: Option<SkillId>,
}

/// Defines how a concrete action variant mutates game state.
///
/// The engine drives every turn action through
/// `pre_validate -> apply -> post_validate` on a scratch copy of the state;
/// an error from any phase discards the copy.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}
