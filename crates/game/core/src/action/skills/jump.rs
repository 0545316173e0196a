use crate::state::{ActorState, GameState, JuiceHint, Position, Role, SkillId, StatusKind, Upgrades};

use super::{SkillOutcome, require_floor, require_range, require_target};
use crate::action::effect::{Effect, EffectTarget};
use crate::action::error::SkillError;

const BASE_RANGE: u32 = 2;

pub fn jump_range(upgrades: Upgrades) -> u32 {
    if upgrades.contains(Upgrades::JUMP_RANGE) {
        BASE_RANGE + 1
    } else {
        BASE_RANGE
    }
}

/// Leap to an empty, safe cell; `jump_stun` dazes everything next to the
/// landing spot.
pub fn jump(
    state: &GameState,
    caster: &ActorState,
    target: Option<Position>,
    upgrades: Upgrades,
) -> Result<SkillOutcome, SkillError> {
    let target = require_target(SkillId::Jump, target)?;
    require_range(caster.position, target, 1, jump_range(upgrades))?;
    require_floor(state, target)?;
    if state.is_hazard(target) {
        return Err(SkillError::Hazard(target));
    }
    if state.is_occupied(target) {
        return Err(SkillError::Occupied(target));
    }

    let mut effects = vec![
        Effect::Juice(JuiceHint::Leap {
            from: caster.position,
            to: target,
        }),
        Effect::Displacement {
            subject: EffectTarget::Caster,
            destination: target,
        },
    ];

    if upgrades.contains(Upgrades::JUMP_STUN) {
        let mut stunned = 0;
        for cell in target.neighbors() {
            let Some(actor) = state.actor_at(cell) else {
                continue;
            };
            if actor.id == caster.id || actor.role == Role::Player {
                continue;
            }
            effects.push(Effect::ApplyStatus {
                target: EffectTarget::Actor(actor.id),
                status: StatusKind::Stunned,
                duration: 1,
            });
            stunned += 1;
        }
        if stunned > 0 {
            effects.push(Effect::Juice(JuiceHint::Shake { intensity: 2 }));
            effects.push(Effect::message("The impact staggers nearby enemies."));
        }
    }

    effects.push(Effect::set_cooldown(SkillId::Jump));
    Ok(SkillOutcome::turn(effects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Archetype;
    use crate::test_support::empty_state;

    #[test]
    fn landing_must_be_free_and_safe() {
        let mut state = empty_state("jump");
        state.hazards.insert(Position::new(2, 8));
        state.spawn_enemy(Archetype::Footman, Position::new(3, 8));
        let caster = state.player.clone();

        assert_eq!(
            jump(&state, &caster, Some(Position::new(2, 8)), Upgrades::empty()),
            Err(SkillError::Hazard(Position::new(2, 8)))
        );
        assert_eq!(
            jump(&state, &caster, Some(Position::new(3, 8)), Upgrades::empty()),
            Err(SkillError::Occupied(Position::new(3, 8)))
        );
        assert!(matches!(
            jump(&state, &caster, Some(Position::new(2, 7)), Upgrades::empty()),
            Err(SkillError::OutOfRange { .. })
        ));
        assert!(jump(&state, &caster, Some(Position::new(2, 7)), Upgrades::JUMP_RANGE).is_ok());
    }

    #[test]
    fn stun_upgrade_dazes_neighbours() {
        let mut state = empty_state("jump");
        let near = state.spawn_enemy(Archetype::Footman, Position::new(4, 8));
        state.spawn_enemy(Archetype::Footman, Position::new(6, 6));
        let caster = state.player.clone();

        let effects = jump(&state, &caster, Some(Position::new(4, 9)), Upgrades::JUMP_STUN)
            .map(|o| o.effects)
            .unwrap_or_default();

        let stuns: Vec<_> = effects
            .iter()
            .filter(|e| matches!(e, Effect::ApplyStatus { .. }))
            .collect();
        assert_eq!(
            stuns,
            vec![&Effect::ApplyStatus {
                target: EffectTarget::Actor(near),
                status: StatusKind::Stunned,
                duration: 1,
            }]
        );
        assert_eq!(effects.last(), Some(&Effect::set_cooldown(SkillId::Jump)));
    }
}
