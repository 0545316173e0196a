use crate::config::GameConfig;
use crate::state::{ActorState, GameState, JuiceHint, Position, SkillId, Upgrades};

use super::{SkillOutcome, enemy_at, require_range, require_target};
use crate::action::effect::{Effect, EffectTarget};
use crate::action::error::SkillError;

/// Strike an adjacent enemy. Also used when the player bumps into one.
pub fn basic_attack(
    state: &GameState,
    caster: &ActorState,
    target: Option<Position>,
    _upgrades: Upgrades,
) -> Result<SkillOutcome, SkillError> {
    let target = require_target(SkillId::BasicAttack, target)?;
    require_range(caster.position, target, 1, 1)?;
    let victim = enemy_at(state, caster, target)?;

    Ok(SkillOutcome::turn(vec![
        Effect::Juice(JuiceHint::Lunge {
            from: caster.position,
            to: target,
        }),
        Effect::Damage {
            target: EffectTarget::Actor(victim.id),
            amount: GameConfig::AUTO_ATTACK_DAMAGE,
        },
    ]))
}
