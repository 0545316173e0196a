use crate::state::{ActorState, GameState, JuiceHint, Position, SkillId, StatusKind, Upgrades};

use super::{SkillOutcome, enemy_at, require_range, require_target};
use crate::action::effect::{Effect, EffectTarget};
use crate::action::error::SkillError;

const BLOCKED_PUSH_DAMAGE: i32 = 1;

/// Shove an adjacent enemy one cell back, raising the shield for the turn.
///
/// When the cell behind the target is a wall, another actor or off the
/// arena, the target is slammed for damage instead.
pub fn shield_bash(
    state: &GameState,
    caster: &ActorState,
    target: Option<Position>,
    upgrades: Upgrades,
) -> Result<SkillOutcome, SkillError> {
    let target = require_target(SkillId::ShieldBash, target)?;
    require_range(caster.position, target, 1, 1)?;
    let victim = enemy_at(state, caster, target)?;
    let direction = caster
        .position
        .direction_to(target)
        .ok_or(SkillError::NotInLine(target))?;
    let landing = target.neighbor(direction);

    let mut effects = vec![Effect::Juice(JuiceHint::Impact { at: target })];
    if state.is_walkable(landing) && !state.is_occupied(landing) {
        effects.push(Effect::Displacement {
            subject: EffectTarget::Actor(victim.id),
            destination: landing,
        });
    } else {
        effects.push(Effect::Damage {
            target: EffectTarget::Actor(victim.id),
            amount: BLOCKED_PUSH_DAMAGE,
        });
    }
    if upgrades.contains(Upgrades::BASH_STUN) {
        effects.push(Effect::ApplyStatus {
            target: EffectTarget::Actor(victim.id),
            status: StatusKind::Stunned,
            duration: 1,
        });
    }
    effects.push(Effect::ApplyStatus {
        target: EffectTarget::Caster,
        status: StatusKind::Shielded,
        duration: 1,
    });
    effects.push(Effect::set_cooldown(SkillId::ShieldBash));

    Ok(SkillOutcome::turn(effects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Archetype;
    use crate::test_support::empty_state;

    #[test]
    fn pushes_into_free_cell() {
        let mut state = empty_state("bash");
        let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 9));
        let caster = state.player.clone();

        let effects = shield_bash(&state, &caster, Some(Position::new(2, 9)), Upgrades::empty())
            .map(|o| o.effects)
            .unwrap_or_default();
        assert_eq!(
            effects[1],
            Effect::Displacement {
                subject: EffectTarget::Actor(id),
                destination: Position::new(2, 8),
            }
        );
    }

    #[test]
    fn blocked_push_damages_and_stuns() {
        let mut state = empty_state("bash");
        let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 9));
        state.walls.insert(Position::new(2, 8));
        let caster = state.player.clone();

        let effects = shield_bash(&state, &caster, Some(Position::new(2, 9)), Upgrades::BASH_STUN)
            .map(|o| o.effects)
            .unwrap_or_default();
        assert_eq!(
            &effects[1..3],
            &[
                Effect::Damage {
                    target: EffectTarget::Actor(id),
                    amount: 1,
                },
                Effect::ApplyStatus {
                    target: EffectTarget::Actor(id),
                    status: StatusKind::Stunned,
                    duration: 1,
                },
            ]
        );
    }
}
