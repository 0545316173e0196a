use crate::action::error::MoveError;
use crate::action::execute::{apply_effects, step_player};
use crate::action::skills::try_skill;
use crate::action::{ActionTransition, TurnResult};
use crate::state::{EntityId, GameState, Position, SkillId};

/// Step the player to an adjacent cell.
///
/// Moving onto an enemy does not displace it: the move becomes a basic
/// attack against that enemy and the player stays put.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub destination: Position,
}

impl MoveAction {
    pub fn new(destination: Position) -> Self {
        Self { destination }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = TurnResult;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let destination = self.destination;
        if !state.in_arena(destination) {
            return Err(MoveError::out_of_arena(destination, state.turn));
        }
        if !state.player.position.is_adjacent(destination) {
            return Err(MoveError::not_adjacent(destination, state.turn));
        }
        if state.is_wall(destination) {
            return Err(MoveError::wall(destination, state.turn));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let occupied_by_enemy = state
            .actor_at(self.destination)
            .is_some_and(|actor| !actor.is_player());

        if occupied_by_enemy {
            let caster = state.player.clone();
            let outcome = try_skill(state, &caster, SkillId::BasicAttack, Some(self.destination))
                .map_err(MoveError::Bump)?;
            state.player.face(self.destination);
            apply_effects(state, EntityId::player(), &outcome.effects);
            return Ok(TurnResult {
                skill_used: Some(SkillId::BasicAttack),
            });
        }

        step_player(state, self.destination);
        Ok(TurnResult::default())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        debug_assert!(
            state
                .enemies
                .iter()
                .all(|enemy| enemy.position != state.player.position),
            "player shares a cell with an enemy"
        );
        Ok(())
    }
}
