use crate::action::Action;
use crate::state::GameState;

use super::{ExecuteError, GameEngine};

/// Produce the snapshot that follows `state` under `action`.
///
/// `state` is never mutated. A rejected action yields [`reject`]: a copy of
/// `state` with the rejection appended to the message log and nothing else
/// changed. No turn passes, no draw is consumed and nothing is logged.
pub fn reduce(state: &GameState, action: &Action) -> GameState {
    try_reduce(state, action).unwrap_or_else(|error| reject(state, &error))
}

/// Like [`reduce`], but surfaces the rejection reason to the caller.
pub fn try_reduce(state: &GameState, action: &Action) -> Result<GameState, ExecuteError> {
    let mut next = state.clone();
    GameEngine::new(&mut next).execute(action)?;
    Ok(next)
}

/// The snapshot a rejected action leaves behind.
pub fn reject(state: &GameState, error: &ExecuteError) -> GameState {
    let mut unchanged = state.clone();
    unchanged.clear_transient();
    unchanged.push_message(error.rejection_message());
    unchanged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;
    use crate::test_support::empty_state;

    #[test]
    fn input_snapshot_is_untouched() {
        let state = empty_state("pure");
        let before = state.clone();

        let next = reduce(&state, &Action::Move(Position::new(2, 9)));

        assert_eq!(state, before);
        assert_eq!(next.player.position, Position::new(2, 9));
    }

    #[test]
    fn rejection_only_appends_a_message() {
        let state = empty_state("reject");

        let next = reduce(&state, &Action::Move(Position::new(5, 5)));

        assert_eq!(next.turn, state.turn);
        assert_eq!(next.rng, state.rng);
        assert_eq!(next.player, state.player);
        assert_eq!(next.messages.len(), state.messages.len() + 1);
        assert!(next.last_message().is_some_and(|m| m.starts_with("Cannot move")));
    }

    #[test]
    fn try_reduce_reports_the_reason() {
        let state = empty_state("reason");
        let result = try_reduce(&state, &Action::Undo);
        assert_eq!(result, Err(ExecuteError::NothingToUndo));
    }
}
