//! Action validation errors.
//!
//! Every variant here is a *rejection*: the reducer turns it into a message
//! and returns the state unchanged, without consuming the turn.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{Position, SkillId};

// ============================================================================
// Skill Errors
// ============================================================================

/// Reasons a skill refuses its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillError {
    #[error("{0} is not equipped")]
    NotEquipped(SkillId),

    #[error("{skill} is recharging ({remaining} turns left)")]
    OnCooldown { skill: SkillId, remaining: u32 },

    #[error("{0} needs a target")]
    MissingTarget(SkillId),

    #[error("{target} is out of range ({distance}, needs {min}-{max})")]
    OutOfRange {
        target: Position,
        distance: u32,
        min: u32,
        max: u32,
    },

    #[error("{0} is not in a straight line")]
    NotInLine(Position),

    #[error("the line is blocked at {0}")]
    LineBlocked(Position),

    #[error("{0} is outside the arena")]
    OutOfArena(Position),

    #[error("{0} is a wall")]
    Wall(Position),

    #[error("{0} is lava")]
    Hazard(Position),

    #[error("{0} is occupied")]
    Occupied(Position),

    #[error("no enemy at {0}")]
    NoEnemy(Position),

    #[error("the spear is not in hand")]
    SpearNotCarried,
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SkillError::NotEquipped(_) => ErrorSeverity::Internal,
            SkillError::MissingTarget(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SkillError::NotEquipped(_) => "SKILL_NOT_EQUIPPED",
            SkillError::OnCooldown { .. } => "SKILL_ON_COOLDOWN",
            SkillError::MissingTarget(_) => "SKILL_MISSING_TARGET",
            SkillError::OutOfRange { .. } => "SKILL_OUT_OF_RANGE",
            SkillError::NotInLine(_) => "SKILL_NOT_IN_LINE",
            SkillError::LineBlocked(_) => "SKILL_LINE_BLOCKED",
            SkillError::OutOfArena(_) => "SKILL_OUT_OF_ARENA",
            SkillError::Wall(_) => "SKILL_WALL",
            SkillError::Hazard(_) => "SKILL_HAZARD",
            SkillError::Occupied(_) => "SKILL_OCCUPIED",
            SkillError::NoEnemy(_) => "SKILL_NO_ENEMY",
            SkillError::SpearNotCarried => "SKILL_SPEAR_NOT_CARRIED",
        }
    }
}

// ============================================================================
// Movement Errors
// ============================================================================

/// Reasons a move is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("{destination} is not adjacent")]
    NotAdjacent {
        destination: Position,
        context: ErrorContext,
    },

    #[error("{destination} is outside the arena")]
    OutOfArena {
        destination: Position,
        context: ErrorContext,
    },

    #[error("{destination} is a wall")]
    Wall {
        destination: Position,
        context: ErrorContext,
    },

    /// Moving into an enemy turns into a basic attack, which can still fail.
    #[error(transparent)]
    Bump(SkillError),
}

impl MoveError {
    pub fn not_adjacent(destination: Position, turn: u32) -> Self {
        Self::NotAdjacent {
            destination,
            context: ErrorContext::new(turn).with_position(destination),
        }
    }

    pub fn out_of_arena(destination: Position, turn: u32) -> Self {
        Self::OutOfArena {
            destination,
            context: ErrorContext::new(turn).with_position(destination),
        }
    }

    pub fn wall(destination: Position, turn: u32) -> Self {
        Self::Wall {
            destination,
            context: ErrorContext::new(turn).with_position(destination),
        }
    }
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Bump(error) => error.severity(),
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::NotAdjacent { context, .. }
            | Self::OutOfArena { context, .. }
            | Self::Wall { context, .. } => Some(context),
            Self::Bump(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAdjacent { .. } => "MOVE_NOT_ADJACENT",
            Self::OutOfArena { .. } => "MOVE_OUT_OF_ARENA",
            Self::Wall { .. } => "MOVE_WALL",
            Self::Bump(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_severity() {
        let error = SkillError::OnCooldown {
            skill: SkillId::Jump,
            remaining: 2,
        };
        assert_eq!(error.error_code(), "SKILL_ON_COOLDOWN");
        assert!(error.severity().is_recoverable());
        assert_eq!(error.to_string(), "jump is recharging (2 turns left)");

        let error = MoveError::wall(Position::new(3, 3), 7);
        assert_eq!(error.context().map(|c| c.turn), Some(7));
        assert_eq!(error.to_string(), "(3, 3) is a wall");
    }
}
