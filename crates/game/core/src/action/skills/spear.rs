use crate::config::GameConfig;
use crate::state::{ActorState, GameState, ItemKind, JuiceHint, Position, SkillId, Upgrades};

use super::{SkillOutcome, require_floor, require_range, require_target};
use crate::action::effect::{Effect, EffectTarget};
use crate::action::error::SkillError;

const BASE_RANGE: u32 = 3;

pub fn spear_range(upgrades: Upgrades) -> u32 {
    if upgrades.contains(Upgrades::SPEAR_RANGE) {
        BASE_RANGE + 1
    } else {
        BASE_RANGE
    }
}

/// Throw the carried spear along a straight line.
///
/// An actor on the target cell is struck for lethal damage and the spear
/// returns to hand. Thrown at empty ground, the spear stays where it lands
/// until the player walks over it.
pub fn spear_throw(
    state: &GameState,
    caster: &ActorState,
    target: Option<Position>,
    upgrades: Upgrades,
) -> Result<SkillOutcome, SkillError> {
    let target = require_target(SkillId::SpearThrow, target)?;
    if caster.is_player() && !state.has_spear() {
        return Err(SkillError::SpearNotCarried);
    }
    require_range(caster.position, target, 1, spear_range(upgrades))?;
    require_floor(state, target)?;

    let between = caster
        .position
        .cells_between(target)
        .ok_or(SkillError::NotInLine(target))?;
    if let Some(blocked) = between
        .into_iter()
        .find(|cell| state.is_wall(*cell) || state.is_occupied(*cell))
    {
        return Err(SkillError::LineBlocked(blocked));
    }

    let flight = Effect::Juice(JuiceHint::Projectile {
        from: caster.position,
        to: target,
    });

    match state.actor_at(target) {
        Some(victim) if victim.id != caster.id => Ok(SkillOutcome::turn(vec![
            flight,
            Effect::Damage {
                target: EffectTarget::Tile(target),
                amount: GameConfig::LETHAL_DAMAGE,
            },
        ])),
        _ => Ok(SkillOutcome::turn(vec![
            flight,
            Effect::SpawnItem {
                kind: ItemKind::Spear,
                position: target,
            },
            Effect::message("The spear clatters to the ground."),
        ])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Archetype, ItemLocation};
    use crate::test_support::empty_state;

    #[test]
    fn kill_throw_targets_the_tile() {
        let mut state = empty_state("spear");
        state.spawn_enemy(Archetype::Footman, Position::new(2, 8));
        let caster = state.player.clone();

        let outcome = spear_throw(&state, &caster, Some(Position::new(2, 8)), Upgrades::empty());
        let effects = outcome.map(|o| o.effects).unwrap_or_default();
        assert_eq!(effects.len(), 2);
        assert!(matches!(
            effects[1],
            Effect::Damage {
                target: EffectTarget::Tile(_),
                amount: GameConfig::LETHAL_DAMAGE,
            }
        ));
    }

    #[test]
    fn requires_line_range_and_spear() {
        let mut state = empty_state("spear");
        let caster = state.player.clone();

        assert_eq!(
            spear_throw(&state, &caster, Some(Position::new(3, 8)), Upgrades::empty()),
            Err(SkillError::NotInLine(Position::new(3, 8)))
        );
        assert!(matches!(
            spear_throw(&state, &caster, Some(Position::new(2, 6)), Upgrades::empty()),
            Err(SkillError::OutOfRange { distance: 4, .. })
        ));
        assert!(spear_throw(&state, &caster, Some(Position::new(2, 6)), Upgrades::SPEAR_RANGE).is_ok());

        state.spawn_enemy(Archetype::Footman, Position::new(2, 9));
        assert_eq!(
            spear_throw(&state, &caster, Some(Position::new(2, 7)), Upgrades::empty()),
            Err(SkillError::LineBlocked(Position::new(2, 9)))
        );

        state.spear = ItemLocation::Ground(Position::new(5, 5));
        assert_eq!(
            spear_throw(&state, &caster, Some(Position::new(3, 10)), Upgrades::empty()),
            Err(SkillError::SpearNotCarried)
        );
    }
}
