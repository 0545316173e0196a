//! Skill definitions.
//!
//! A skill is a pure function `(state, actor, target, upgrades) -> outcome`.
//! It validates range, line, occupancy and terrain, and on success returns a
//! declarative effect list. It never mutates state, so every skill can be
//! tested by asserting the effects it emits.

mod attack;
mod bash;
mod jump;
mod spear;

use crate::state::{ActorState, GameState, Position, SkillId, Upgrades};

use super::effect::Effect;
use super::error::SkillError;

pub use attack::basic_attack;
pub use bash::shield_bash;
pub use jump::{jump, jump_range};
pub use spear::{spear_range, spear_throw};

/// What a successful skill produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillOutcome {
    pub effects: Vec<Effect>,
    pub messages: Vec<String>,
    pub consumes_turn: bool,
}

impl SkillOutcome {
    pub fn turn(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            messages: Vec::new(),
            consumes_turn: true,
        }
    }

    /// Empty effect list plus a rejection message; the turn is not consumed.
    pub fn rejected(skill: SkillId, error: SkillError) -> Self {
        Self {
            effects: Vec::new(),
            messages: vec![rejection_message(skill, &error)],
            consumes_turn: false,
        }
    }
}

/// Signature shared by every skill.
pub type SkillFn =
    fn(&GameState, &ActorState, Option<Position>, Upgrades) -> Result<SkillOutcome, SkillError>;

const SKILLS: &[(SkillId, SkillFn)] = &[
    (SkillId::BasicAttack, basic_attack),
    (SkillId::SpearThrow, spear_throw),
    (SkillId::Jump, jump),
    (SkillId::ShieldBash, shield_bash),
];

pub fn skill_fn(id: SkillId) -> SkillFn {
    SKILLS
        .iter()
        .find(|(skill, _)| *skill == id)
        .map_or(basic_attack as SkillFn, |(_, f)| *f)
}

pub fn rejection_message(skill: SkillId, error: &SkillError) -> String {
    format!("Cannot use {skill}: {error}.")
}

/// Validate the caster's slot and run the skill.
pub fn try_skill(
    state: &GameState,
    caster: &ActorState,
    skill: SkillId,
    target: Option<Position>,
) -> Result<SkillOutcome, SkillError> {
    let slot = caster.skill(skill).ok_or(SkillError::NotEquipped(skill))?;
    if !slot.is_ready() {
        return Err(SkillError::OnCooldown {
            skill,
            remaining: slot.cooldown,
        });
    }
    skill_fn(skill)(state, caster, target, slot.upgrades)
}

/// Like [`try_skill`], but folds a rejection into an empty outcome.
pub fn run_skill(
    state: &GameState,
    caster: &ActorState,
    skill: SkillId,
    target: Option<Position>,
) -> SkillOutcome {
    try_skill(state, caster, skill, target).unwrap_or_else(|error| SkillOutcome::rejected(skill, error))
}

// ============================================================================
// Shared validation
// ============================================================================

fn require_target(skill: SkillId, target: Option<Position>) -> Result<Position, SkillError> {
    target.ok_or(SkillError::MissingTarget(skill))
}

fn require_range(from: Position, target: Position, min: u32, max: u32) -> Result<u32, SkillError> {
    let distance = from.distance(target);
    if distance < min || distance > max {
        return Err(SkillError::OutOfRange {
            target,
            distance,
            min,
            max,
        });
    }
    Ok(distance)
}

fn require_floor(state: &GameState, target: Position) -> Result<(), SkillError> {
    if !state.in_arena(target) {
        return Err(SkillError::OutOfArena(target));
    }
    if state.is_wall(target) {
        return Err(SkillError::Wall(target));
    }
    Ok(())
}

/// Enemy of `caster` standing on `target`.
fn enemy_at<'a>(
    state: &'a GameState,
    caster: &ActorState,
    target: Position,
) -> Result<&'a ActorState, SkillError> {
    state
        .actor_at(target)
        .filter(|actor| actor.id != caster.id && actor.role != caster.role)
        .ok_or(SkillError::NoEnemy(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::empty_state;

    #[test]
    fn cooldown_blocks_before_validation() {
        let mut state = empty_state("cooldown");
        if let Some(slot) = state.player.skill_mut(SkillId::Jump) {
            slot.cooldown = 2;
        }
        let caster = state.player.clone();

        let outcome = run_skill(&state, &caster, SkillId::Jump, Some(Position::new(2, 8)));
        assert!(outcome.effects.is_empty());
        assert!(!outcome.consumes_turn);
        assert_eq!(
            outcome.messages,
            vec!["Cannot use jump: jump is recharging (2 turns left).".to_string()]
        );
    }

    #[test]
    fn every_skill_has_a_table_entry() {
        use strum::IntoEnumIterator;
        for id in SkillId::iter() {
            assert!(SKILLS.iter().any(|(skill, _)| *skill == id));
        }
    }
}
