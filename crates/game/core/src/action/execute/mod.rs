//! Effect interpreter.
//!
//! [`apply_effects`] folds an effect list over the state strictly left to
//! right. Effects are sequential, not batched: damage that kills an actor
//! removes it before the next effect is applied, so a later `Tile` target on
//! the same cell finds it empty.

use crate::combat::{DamageSource, damage_actor};
use crate::state::{
    EntityId, GameState, Intent, ItemKind, ItemLocation, JuiceHint, Position, StatusKind,
};

use super::effect::{CooldownChange, Effect, EffectTarget};

/// Apply `effects` in order on behalf of `caster`.
pub fn apply_effects(state: &mut GameState, caster: EntityId, effects: &[Effect]) {
    for effect in effects {
        apply_effect(state, caster, effect);
    }
}

fn resolve(state: &GameState, caster: EntityId, target: EffectTarget) -> Option<EntityId> {
    match target {
        EffectTarget::Caster => state.actor(caster).map(|actor| actor.id),
        EffectTarget::Actor(id) => state.actor(id).map(|actor| actor.id),
        EffectTarget::Tile(position) => state.actor_at(position).map(|actor| actor.id),
    }
}

fn apply_effect(state: &mut GameState, caster: EntityId, effect: &Effect) {
    match effect {
        Effect::Displacement {
            subject,
            destination,
        } => {
            if let Some(id) = resolve(state, caster, *subject) {
                displace(state, id, *destination);
            }
        }
        Effect::Damage { target, amount } => {
            let Some(id) = resolve(state, caster, *target) else {
                return;
            };
            let origin = state
                .actor(caster)
                .map_or(state.player.position, |actor| actor.position);
            let source = if caster.is_player() {
                DamageSource::player(origin)
            } else {
                DamageSource::enemy(origin)
            };
            damage_actor(state, id, *amount, source);
        }
        Effect::ApplyStatus {
            target,
            status,
            duration,
        } => {
            let Some(id) = resolve(state, caster, *target) else {
                return;
            };
            if let Some(actor) = state.actor_mut(id) {
                actor.statuses.apply(*status, *duration);
                if *status == StatusKind::Stunned {
                    actor.intent = Intent::Idle;
                }
            }
        }
        Effect::SpawnItem { kind, position } => match kind {
            ItemKind::Spear => state.spear = ItemLocation::Ground(*position),
        },
        Effect::Message(text) => state.push_message(text.clone()),
        Effect::Juice(hint) => state.push_hint(*hint),
        Effect::ModifyCooldown { skill, change } => {
            let Some(slot) = state
                .actor_mut(caster)
                .and_then(|actor| actor.skill_mut(*skill))
            else {
                return;
            };
            slot.cooldown = match change {
                CooldownChange::Add(delta) => slot.cooldown.saturating_add_signed(*delta),
                CooldownChange::Set(value) => *value,
            };
        }
    }
}

/// Move `id` to `destination` if the cell is free, picking up the spear when
/// the player lands on it.
fn displace(state: &mut GameState, id: EntityId, destination: Position) {
    if !state.is_walkable(destination) {
        return;
    }
    if state
        .actor_at(destination)
        .is_some_and(|occupant| occupant.id != id)
    {
        return;
    }
    let Some(actor) = state.actor_mut(id) else {
        return;
    };
    actor.step_to(destination);

    if id.is_player() && state.spear == ItemLocation::Ground(destination) {
        state.spear = ItemLocation::Carried;
        state.push_message("You pick up the spear.");
    }
}

/// Move the player onto `destination` for an ordinary step, emitting a hint.
pub fn step_player(state: &mut GameState, destination: Position) {
    let from = state.player.position;
    displace(state, EntityId::player(), destination);
    if state.player.position == destination {
        state.push_hint(JuiceHint::Lunge {
            from,
            to: destination,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{ActorState, Archetype, SkillId};
    use crate::test_support::empty_state;

    #[test]
    fn damage_removes_before_later_effects() {
        let mut state = empty_state("interpreter");
        let target = Position::new(2, 8);
        let id = state.spawn_enemy(Archetype::Footman, target);

        apply_effects(
            &mut state,
            EntityId::player(),
            &[
                Effect::Damage {
                    target: EffectTarget::Tile(target),
                    amount: GameConfig::LETHAL_DAMAGE,
                },
                Effect::ApplyStatus {
                    target: EffectTarget::Tile(target),
                    status: StatusKind::Stunned,
                    duration: 1,
                },
            ],
        );

        assert!(state.actor(id).is_none());
        assert_eq!(state.dying.len(), 1);
        assert_eq!(state.kills.total, 1);
        assert_eq!(state.last_message(), Some("Footman killed."));
    }

    #[test]
    fn stun_cancels_telegraph() {
        let mut state = empty_state("stun");
        let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 8));
        if let Some(enemy) = state.actor_mut(id) {
            enemy.intent = Intent::Telegraphing {
                kind: crate::state::IntentKind::Strike,
                target: Position::new(2, 9),
            };
        }

        apply_effects(
            &mut state,
            EntityId::player(),
            &[Effect::ApplyStatus {
                target: EffectTarget::Actor(id),
                status: StatusKind::Stunned,
                duration: 1,
            }],
        );

        let enemy = state.actor(id).cloned();
        assert!(enemy.as_ref().is_some_and(ActorState::is_stunned));
        assert!(enemy.is_some_and(|e| !e.intent.is_telegraphing()));
    }

    #[test]
    fn displacement_refuses_occupied_cells_and_picks_up_spear() {
        let mut state = empty_state("displace");
        state.spawn_enemy(Archetype::Footman, Position::new(2, 9));
        state.spear = ItemLocation::Ground(Position::new(3, 9));

        step_player(&mut state, Position::new(2, 9));
        assert_eq!(state.player.position, GameConfig::PLAYER_SPAWN);

        step_player(&mut state, Position::new(3, 9));
        assert_eq!(state.player.position, Position::new(3, 9));
        assert!(state.has_spear());
    }

    #[test]
    fn cooldowns_can_be_set_and_shifted() {
        let mut state = empty_state("cooldown");
        apply_effects(
            &mut state,
            EntityId::player(),
            &[
                Effect::set_cooldown(SkillId::Jump),
                Effect::ModifyCooldown {
                    skill: SkillId::Jump,
                    change: CooldownChange::Add(-5),
                },
            ],
        );
        assert_eq!(state.player.skill(SkillId::Jump).map(|s| s.cooldown), Some(0));
    }
}
