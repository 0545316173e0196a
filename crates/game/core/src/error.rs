//! Common error infrastructure for hexwarden-core.
//!
//! Domain-specific errors (`SkillError`, `MoveError`, `UpgradeError`, `ExecuteError`) live
//! beside the code that raises them. None of them escape the reducer: a
//! rejected action becomes a message on the returned state. The typed errors
//! exist so validation can be tested precisely.

use crate::state::{EntityId, Position};

/// Severity level of an error, used for categorization and logging.
///
/// - **Recoverable**: the player may retry with a different target or action
/// - **Validation**: the input itself is invalid in the current state
/// - **Internal**: a state inconsistency that indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: target out of range, destination occupied, skill on cooldown.
    Recoverable,

    /// Examples: action while the run is over, upgrade not on offer.
    Validation,

    /// Examples: player missing a loadout skill, upgrade with no owner skill.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Where and when an error was raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    pub actor: Option<EntityId>,
    pub position: Option<Position>,
    /// Turn counter of the state the action was validated against.
    pub turn: u32,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(turn: u32) -> Self {
        Self {
            actor: None,
            position: None,
            turn,
        }
    }

    #[must_use]
    pub const fn with_actor(mut self, actor: EntityId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Common trait for all hexwarden-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - `error_code` is a stable SCREAMING_SNAKE_CASE identifier
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
