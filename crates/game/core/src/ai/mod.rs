//! Enemy decision logic.
//!
//! Archetypes are a tag on [`ActorState`], not separate types. Behaviour is
//! looked up in a static table of pure policy functions; adding an archetype
//! means adding a table entry.

mod movement;
mod policies;

use crate::state::{ActorState, Archetype, GameState, Intent, Position, StatusKind};

pub use movement::{approach, choose_step, clear_line, is_free_for, keep_band};
pub use policies::{
    assassin, bomb, bomber, golem, idle, melee, ranged, shield_bearer, warlock,
};

/// `(actor, player_destination, state) -> next actor`; `None` removes the actor.
pub type Policy = fn(&ActorState, Position, &mut GameState) -> Option<ActorState>;

const POLICIES: &[(Archetype, Policy)] = &[
    (Archetype::Footman, melee),
    (Archetype::Archer, ranged),
    (Archetype::Bomber, bomber),
    (Archetype::ShieldBearer, shield_bearer),
    (Archetype::Warlock, warlock),
    (Archetype::Assassin, assassin),
    (Archetype::Golem, golem),
    (Archetype::Bomb, bomb),
];

pub fn policy_for(archetype: Archetype) -> Policy {
    POLICIES
        .iter()
        .find(|(entry, _)| *entry == archetype)
        .map_or(idle as Policy, |(_, policy)| *policy)
}

/// Run one enemy's decision for this turn.
///
/// A stunned actor skips its policy; the stun ticks down instead.
pub fn take_turn(
    actor: &ActorState,
    player_destination: Position,
    state: &mut GameState,
) -> Option<ActorState> {
    if actor.is_stunned() {
        let mut next = actor.clone();
        next.statuses.tick_kind(StatusKind::Stunned);
        next.intent = Intent::Idle;
        if next.archetype.lurks() {
            next.visible = next.position.distance(player_destination) <= 1;
        }
        return Some(next);
    }
    policy_for(actor.archetype)(actor, player_destination, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::empty_state;

    #[test]
    fn stunned_actor_skips_policy() {
        let mut state = empty_state("stunned");
        let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 8));
        let mut footman = state.actor(id).cloned().expect("spawned enemy");
        footman.statuses.apply(StatusKind::Stunned, 1);
        let counter = state.rng.counter;

        let next = take_turn(&footman, Position::new(2, 9), &mut state).expect("footman");

        assert_eq!(next.position, Position::new(2, 8));
        assert!(!next.is_stunned());
        assert_eq!(next.intent, Intent::Idle);
        assert_eq!(state.rng.counter, counter);
    }

    #[test]
    fn stunned_assassin_stays_hidden_at_range() {
        let mut state = empty_state("stunned-assassin");
        let id = state.spawn_enemy(Archetype::Assassin, Position::new(2, 6));
        let mut assassin = state.actor(id).cloned().expect("spawned enemy");
        assert!(!assassin.visible);
        assassin.visible = true;
        assassin.statuses.apply(StatusKind::Stunned, 1);

        let next = take_turn(&assassin, Position::new(2, 10), &mut state).expect("assassin");

        assert!(!next.visible);
    }

    #[test]
    fn every_spawnable_archetype_has_a_policy() {
        use strum::IntoEnumIterator;
        for archetype in Archetype::iter().filter(|a| a.stats().cost > 0) {
            assert!(POLICIES.iter().any(|(entry, _)| *entry == archetype));
        }
    }
}
