use crate::action::error::SkillError;
use crate::action::execute::apply_effects;
use crate::action::skills::try_skill;
use crate::action::{ActionTransition, TurnResult};
use crate::state::{EntityId, GameState, Position, SkillId};

/// Use one of the player's equipped skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillAction {
    pub skill: SkillId,
    pub target: Option<Position>,
}

impl SkillAction {
    pub fn new(skill: SkillId, target: Option<Position>) -> Self {
        Self { skill, target }
    }
}

impl ActionTransition for SkillAction {
    type Error = SkillError;
    type Result = TurnResult;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let slot = state
            .player
            .skill(self.skill)
            .ok_or(SkillError::NotEquipped(self.skill))?;
        if !slot.is_ready() {
            return Err(SkillError::OnCooldown {
                skill: self.skill,
                remaining: slot.cooldown,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let caster = state.player.clone();
        let outcome = try_skill(state, &caster, self.skill, self.target)?;

        if let Some(target) = self.target.filter(|_| self.skill != SkillId::Jump) {
            state.player.face(target);
        }
        apply_effects(state, EntityId::player(), &outcome.effects);
        for message in outcome.messages {
            state.push_message(message);
        }

        Ok(TurnResult {
            skill_used: Some(self.skill),
        })
    }
}
