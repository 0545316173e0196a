//! Turn pipeline and action execution.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. A turn
//! action runs through the following steps, in order:
//!
//! 1. The player's action goes through its transition pipeline.
//! 2. Telegraphs from the previous turn resolve against the player's new cell.
//! 3. Every enemy decides in sequence order.
//! 4. Enemies adjacent before and after a player move take passive damage.
//! 5. Hazards burn whoever stands on them.
//! 6. Cooldowns, statuses, armor and regeneration tick.
//! 7. Shrine, then stairs.
//!
//! The player reaching zero hp ends the run and skips the remaining steps.

mod errors;
mod floor;
mod progress;
mod reducer;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use floor::floor_seed;
pub use reducer::{reduce, reject, try_reduce};

use crate::action::Action;
use crate::state::{GameState, HistoryEntry, RunStatus};

/// Executes actions against a mutable [`GameState`].
///
/// On error the state may be partially updated; [`reduce`] wraps the engine
/// with clone-and-discard semantics.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Execute one action. Transient fields are cleared first.
    pub fn execute(&mut self, action: &Action) -> Result<(), ExecuteError> {
        self.state.clear_transient();

        match action {
            Action::Reset => {
                let seed = self.state.initial_seed.clone();
                let rules = self.state.rules.clone();
                *self.state = GameState::new_run(&seed, rules);
                Ok(())
            }
            Action::LoadState(snapshot) => {
                *self.state = snapshot.as_ref().clone();
                self.state.clear_transient();
                Ok(())
            }
            Action::Undo => self.undo(),
            Action::SelectUpgrade(upgrade) => {
                let before = self.state.detached();
                self.select_upgrade(*upgrade)?;
                self.record(action, before);
                Ok(())
            }
            Action::Move(_)
            | Action::Jump(_)
            | Action::UseSkill { .. }
            | Action::Throw(_)
            | Action::Wait => {
                self.ensure_playing()?;
                let before = self.state.detached();
                self.run_turn(action)?;
                self.record(action, before);
                Ok(())
            }
        }
    }

    fn ensure_playing(&self) -> Result<(), ExecuteError> {
        match self.state.status {
            RunStatus::Playing => Ok(()),
            other => Err(ExecuteError::NotPlaying(other)),
        }
    }

    fn is_lost(&self) -> bool {
        self.state.status == RunStatus::Lost
    }

    fn run_turn(&mut self, action: &Action) -> Result<(), ExecuteError> {
        self.mark_positions();
        let result = transition::execute_player_action(action, self.state)?;
        self.state.turn += 1;

        self.resolve_telegraphs();
        if self.is_lost() {
            return Ok(());
        }
        self.run_enemy_phase();
        if self.is_lost() {
            return Ok(());
        }
        self.resolve_auto_attack();
        self.resolve_hazards();
        if self.is_lost() {
            return Ok(());
        }
        self.upkeep(result.skill_used);
        self.check_progress();
        Ok(())
    }

    /// Append to the action log and push an undo snapshot.
    fn record(&mut self, action: &Action, before: GameState) {
        if action.is_logged() {
            self.state.action_log.push(action.clone());
        }

        let depth = self.state.rules.undo_depth;
        if depth == 0 {
            return;
        }
        self.state.history.push(HistoryEntry {
            action: action.clone(),
            before: Box::new(before),
        });
        if self.state.history.len() > depth {
            let overflow = self.state.history.len() - depth;
            self.state.history.drain(..overflow);
        }
    }

    fn undo(&mut self) -> Result<(), ExecuteError> {
        let entry = self
            .state
            .history
            .pop()
            .ok_or(ExecuteError::NothingToUndo)?;
        let remaining = std::mem::take(&mut self.state.history);

        *self.state = *entry.before;
        self.state.history = remaining;
        self.state.clear_transient();
        self.state
            .push_message(format!("Undid {}.", entry.action.kind_name()));
        Ok(())
    }
}
