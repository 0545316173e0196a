//! One decision function per archetype.
//!
//! Each policy reads the state as left by the enemies evaluated before it,
//! draws from the shared draw source for tie-breaks, and returns the actor's
//! next state (or `None` when the actor leaves play, e.g. a detonated bomb).

use crate::combat::{DamageSource, damage_actor};
use crate::config::GameConfig;
use crate::state::{
    ActorState, GameState, HexDirection, Intent, IntentKind, JuiceHint, Position, StatusKind,
};

use super::movement::{approach, choose_step, clear_line, is_free_for, keep_band};

fn telegraph(actor: &mut ActorState, kind: IntentKind, target: Position) {
    actor.intent = Intent::Telegraphing { kind, target };
}

fn ranged_alignment(state: &GameState, cell: Position, target: Position) -> bool {
    (2..=4).contains(&cell.distance(target))
        && cell.is_in_line_with(target)
        && clear_line(state, cell, target)
}

/// Stand still; used for archetypes that never act.
pub fn idle(actor: &ActorState, _target: Position, _state: &mut GameState) -> Option<ActorState> {
    Some(actor.clone())
}

/// Strike when adjacent, otherwise close in.
pub fn melee(actor: &ActorState, target: Position, state: &mut GameState) -> Option<ActorState> {
    let mut next = actor.clone();
    if next.position.is_adjacent(target) {
        next.face(target);
        telegraph(&mut next, IntentKind::Strike, target);
        return Some(next);
    }
    let step = choose_step(state, actor, target, false, approach(target));
    next.step_to(step);
    Some(next)
}

/// Aim when lined up at distance 2-4, otherwise reposition onto a line.
pub fn ranged(actor: &ActorState, target: Position, state: &mut GameState) -> Option<ActorState> {
    let mut next = actor.clone();
    if ranged_alignment(state, next.position, target) {
        next.face(target);
        telegraph(&mut next, IntentKind::Aim, target);
        return Some(next);
    }
    let step = choose_step(state, actor, target, true, |state, cell| {
        let misaligned = if ranged_alignment(state, cell, target) { 0 } else { 10 };
        misaligned + cell.distance(target).abs_diff(3)
    });
    next.step_to(step);
    Some(next)
}

/// Hold distance 2-3 and lob a bomb next to the player.
pub fn bomber(actor: &ActorState, target: Position, state: &mut GameState) -> Option<ActorState> {
    let mut next = actor.clone();
    if next.lockout > 0 {
        next.lockout -= 1;
        return Some(next);
    }

    if (2..=3).contains(&next.position.distance(target)) {
        if let Some(side) = target.facing_towards(next.position) {
            next.face(target);
            telegraph(&mut next, IntentKind::Bomb, target.neighbor(side));
            return Some(next);
        }
    }

    let step = choose_step(state, actor, target, true, keep_band(target, 2, 3));
    next.step_to(step);
    Some(next)
}

/// Always face the player; strike when adjacent.
pub fn shield_bearer(
    actor: &ActorState,
    target: Position,
    state: &mut GameState,
) -> Option<ActorState> {
    let mut next = actor.clone();
    if next.position.is_adjacent(target) {
        telegraph(&mut next, IntentKind::Strike, target);
    } else {
        let step = choose_step(state, actor, target, false, approach(target));
        next.step_to(step);
    }
    next.face(target);
    Some(next)
}

/// Blink away when crowded or on a lucky draw, then cast from range.
pub fn warlock(actor: &ActorState, target: Position, state: &mut GameState) -> Option<ActorState> {
    let mut next = actor.clone();
    let roll = state.rng.chance(GameConfig::WARLOCK_TELEPORT_PERCENT);
    let crowded = next.position.distance(target) < 2;
    let mut teleported = false;

    if crowded || roll {
        let first = state.rng.next_index(HexDirection::ALL.len());
        let hop = 3 + state.rng.next_index(3) as i32;
        for turn in 0..HexDirection::ALL.len() {
            let direction = HexDirection::from_index(first + turn);
            let landing = next.position.offset(direction, hop);
            if is_free_for(state, &next, landing, target) {
                state.push_hint(JuiceHint::Teleport {
                    from: next.position,
                    to: landing,
                });
                next.position = landing;
                teleported = true;
                break;
            }
        }
    }

    if (2..=4).contains(&next.position.distance(target)) {
        next.face(target);
        telegraph(&mut next, IntentKind::Cast, target);
        return Some(next);
    }
    if !teleported {
        let step = choose_step(state, &next, target, true, keep_band(target, 3, 3));
        next.step_to(step);
    }
    Some(next)
}

/// Creep up unseen; reveal and telegraph a backstab once adjacent.
pub fn assassin(actor: &ActorState, target: Position, state: &mut GameState) -> Option<ActorState> {
    let mut next = actor.clone();
    if next.position.is_adjacent(target) {
        next.visible = true;
        next.face(target);
        telegraph(&mut next, IntentKind::Backstab, target);
        return Some(next);
    }
    let step = choose_step(state, actor, target, false, approach(target));
    next.step_to(step);
    next.visible = next.position.distance(target) <= 1;
    Some(next)
}

/// Smash along a line, then stay rooted while recovering.
pub fn golem(actor: &ActorState, target: Position, state: &mut GameState) -> Option<ActorState> {
    let mut next = actor.clone();
    if next.lockout > 0 {
        next.lockout -= 1;
        return Some(next);
    }

    let distance = next.position.distance(target);
    if (1..=3).contains(&distance) && clear_line(state, next.position, target) {
        next.face(target);
        telegraph(&mut next, IntentKind::Smash, target);
        next.lockout = GameConfig::GOLEM_LOCKOUT;
        return Some(next);
    }

    let step = choose_step(state, actor, target, false, approach(target));
    next.step_to(step);
    Some(next)
}

/// Burn down the fuse; detonate when it runs out.
pub fn bomb(actor: &ActorState, _target: Position, state: &mut GameState) -> Option<ActorState> {
    let mut next = actor.clone();
    let expired = next.statuses.tick_kind(StatusKind::Fuse) || !next.statuses.has(StatusKind::Fuse);
    if !expired {
        return Some(next);
    }

    state.push_message("A bomb explodes!");
    state.push_hint(JuiceHint::Explosion { at: next.position });
    state.push_hint(JuiceHint::Shake { intensity: 2 });
    for cell in next.position.neighbors() {
        let Some(victim) = state.actor_at(cell).map(|actor| actor.id) else {
            continue;
        };
        damage_actor(
            state,
            victim,
            GameConfig::BOMB_BLAST_DAMAGE,
            DamageSource::environment(false),
        );
    }
    None
}
