//! Action transition dispatch.

use crate::action::{Action, ActionTransition, MoveAction, SkillAction, TurnResult, WaitAction};
use crate::state::{GameState, Position, SkillId};

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// 1. `pre_validate` - check preconditions before mutation
/// 2. `apply` - mutate the scratch state and return the result
/// 3. `post_validate` - verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

fn drive_skill(
    skill: SkillId,
    target: Option<Position>,
    state: &mut GameState,
) -> Result<TurnResult, ExecuteError> {
    drive_transition(&SkillAction::new(skill, target), state)
        .map_err(|error| ExecuteError::Skill { skill, error })
}

/// Route a turn-consuming action (step 1 of the turn) to its transition.
///
/// Non-turn actions never reach this function.
pub(super) fn execute_player_action(
    action: &Action,
    state: &mut GameState,
) -> Result<TurnResult, ExecuteError> {
    match action {
        Action::Move(destination) => {
            drive_transition(&MoveAction::new(*destination), state).map_err(ExecuteError::Move)
        }
        Action::Jump(target) => drive_skill(SkillId::Jump, Some(*target), state),
        Action::Throw(target) => drive_skill(SkillId::SpearThrow, Some(*target), state),
        Action::UseSkill { skill, target } => drive_skill(*skill, *target, state),
        Action::Wait => drive_transition(&WaitAction, state).map_err(|phase| match phase.error {}),
        Action::SelectUpgrade(_)
        | Action::Reset
        | Action::LoadState(_)
        | Action::Undo => Ok(TurnResult::default()),
    }
}
