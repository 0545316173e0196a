//! Declarative effects emitted by skills.
//!
//! A skill never touches state. It returns a list of [`Effect`]s that the
//! interpreter in [`crate::action::execute`] folds over the state strictly left
//! to right. Cross-cutting rules (shield blocks, armor, kill credit, spear
//! pickup) therefore live in exactly one place.

use crate::state::{EntityId, ItemKind, JuiceHint, Position, SkillId, StatusKind};

/// Who an effect applies to.
///
/// `Tile` resolves to whatever actor occupies the cell *when the effect is
/// applied*, so an earlier effect in the same list can change the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    Caster,
    Actor(EntityId),
    Tile(Position),
}

/// How a cooldown is modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CooldownChange {
    /// Relative change, saturating at zero.
    Add(i32),
    /// Exact value.
    Set(u32),
}

/// One atomic instruction for the interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    Displacement {
        subject: EffectTarget,
        destination: Position,
    },
    Damage {
        target: EffectTarget,
        amount: i32,
    },
    ApplyStatus {
        target: EffectTarget,
        status: StatusKind,
        duration: u32,
    },
    SpawnItem {
        kind: ItemKind,
        position: Position,
    },
    Message(String),
    /// Presentation only; the engine never branches on it.
    Juice(JuiceHint),
    ModifyCooldown {
        skill: SkillId,
        change: CooldownChange,
    },
}

impl Effect {
    pub fn message(text: impl Into<String>) -> Self {
        Effect::Message(text.into())
    }

    pub fn set_cooldown(skill: SkillId) -> Self {
        Effect::ModifyCooldown {
            skill,
            change: CooldownChange::Set(skill.cooldown()),
        }
    }
}
