use core::convert::Infallible;

use crate::action::{ActionTransition, TurnResult};
use crate::state::GameState;

/// Pass the turn without acting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction;

impl ActionTransition for WaitAction {
    type Error = Infallible;
    type Result = TurnResult;

    fn apply(&self, _state: &mut GameState) -> Result<Self::Result, Self::Error> {
        Ok(TurnResult::default())
    }
}
