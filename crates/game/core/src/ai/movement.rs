//! Step selection shared by every walking policy.

use crate::state::{ActorState, GameState, Position};

/// Whether `actor` may stand on `cell` this turn.
///
/// `player_destination` is excluded even before the player has been drawn
/// there, and lava is avoided.
pub fn is_free_for(
    state: &GameState,
    actor: &ActorState,
    cell: Position,
    player_destination: Position,
) -> bool {
    cell != player_destination
        && state.is_walkable(cell)
        && !state.is_hazard(cell)
        && state
            .actor_at(cell)
            .is_none_or(|occupant| occupant.id == actor.id)
}

/// Pick the free neighbour (or, with `allow_stay`, the current cell) with the
/// lowest `score`. Ties are broken by one draw over the tied set, in
/// direction order; a single best cell consumes no draw.
pub fn choose_step(
    state: &mut GameState,
    actor: &ActorState,
    player_destination: Position,
    allow_stay: bool,
    score: impl Fn(&GameState, Position) -> u32,
) -> Position {
    let mut candidates: Vec<Position> = actor
        .position
        .neighbors()
        .into_iter()
        .filter(|cell| is_free_for(&*state, actor, *cell, player_destination))
        .collect();
    if allow_stay {
        candidates.push(actor.position);
    }

    let scores: Vec<u32> = candidates.iter().map(|cell| score(&*state, *cell)).collect();
    let Some(best) = scores.iter().copied().min() else {
        return actor.position;
    };
    let tied: Vec<Position> = candidates
        .into_iter()
        .zip(scores)
        .filter(|(_, cell_score)| *cell_score == best)
        .map(|(cell, _)| cell)
        .collect();

    tied[state.rng.next_index(tied.len())]
}

/// Close the distance to the player.
pub fn approach(target: Position) -> impl Fn(&GameState, Position) -> u32 {
    move |_, cell| cell.distance(target)
}

/// Keep a preferred `band` distance, doubled so half-steps stay integral.
///
/// Scores `|2d - (low + high)|`, i.e. `|d - midpoint|` scaled by two.
pub fn keep_band(target: Position, low: u32, high: u32) -> impl Fn(&GameState, Position) -> u32 {
    move |_, cell| (2 * cell.distance(target)).abs_diff(low + high)
}

/// Whether `from` sees `target` along a straight line not crossing walls.
pub fn clear_line(state: &GameState, from: Position, target: Position) -> bool {
    from.cells_between(target)
        .is_some_and(|cells| cells.iter().all(|cell| !state.is_wall(*cell)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Archetype;
    use crate::test_support::empty_state;

    #[test]
    fn single_best_step_consumes_no_draw() {
        let mut state = empty_state("step");
        let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 6));
        let actor = state.actor(id).cloned().expect("spawned enemy");
        let counter = state.rng.counter;

        let step = choose_step(
            &mut state,
            &actor,
            Position::new(2, 10),
            false,
            approach(Position::new(2, 10)),
        );

        assert_eq!(step, Position::new(2, 7));
        assert_eq!(state.rng.counter, counter);
    }

    #[test]
    fn ties_consume_exactly_one_draw() {
        let mut state = empty_state("tie");
        let id = state.spawn_enemy(Archetype::Footman, Position::new(4, 6));
        let actor = state.actor(id).cloned().expect("spawned enemy");
        let counter = state.rng.counter;

        // (3, 7) and (4, 7) are both one step closer to (2, 9).
        let step = choose_step(
            &mut state,
            &actor,
            Position::new(2, 9),
            false,
            approach(Position::new(2, 9)),
        );

        assert!([Position::new(3, 7), Position::new(4, 7)].contains(&step));
        assert_eq!(state.rng.counter, counter + 1);
    }

    #[test]
    fn band_scoring_prefers_midpoint() {
        let state = empty_state("band");
        let score = keep_band(Position::new(2, 10), 2, 3);
        assert_eq!(score(&state, Position::new(2, 8)), 1);
        assert_eq!(score(&state, Position::new(2, 7)), 1);
        assert_eq!(score(&state, Position::new(2, 5)), 5);
    }
}
