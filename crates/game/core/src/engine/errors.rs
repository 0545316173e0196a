//! Error types for the reducer pipeline.

use crate::action::skills::rejection_message;
use crate::action::{MoveError, SkillError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{RunStatus, SkillId, UpgradeError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Why the reducer rejected an action.
///
/// Never escapes [`crate::reduce`]; it is rendered into the message log by
/// [`ExecuteError::rejection_message`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("move rejected: {0}")]
    Move(TransitionPhaseError<MoveError>),

    #[error("{skill} rejected: {error}")]
    Skill {
        skill: SkillId,
        error: TransitionPhaseError<SkillError>,
    },

    #[error("action not accepted while the run is {0}")]
    NotPlaying(RunStatus),

    #[error("no upgrade choice is pending")]
    NoUpgradePending,

    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    #[error("nothing to undo")]
    NothingToUndo,
}

impl ExecuteError {
    /// Player-facing text appended to the message log.
    pub fn rejection_message(&self) -> String {
        match self {
            ExecuteError::Move(phase) => format!("Cannot move: {}.", phase.error),
            ExecuteError::Skill { skill, error } => rejection_message(*skill, &error.error),
            ExecuteError::NotPlaying(RunStatus::ChoosingUpgrade) => {
                "Choose an upgrade first.".to_string()
            }
            ExecuteError::NotPlaying(_) => "The run is over.".to_string(),
            ExecuteError::NoUpgradePending => "There is no upgrade to choose.".to_string(),
            ExecuteError::Upgrade(error) => format!("Cannot take upgrade: {error}."),
            ExecuteError::NothingToUndo => "Nothing to undo.".to_string(),
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(phase) => phase.error.severity(),
            ExecuteError::Skill { error, .. } => error.error.severity(),
            ExecuteError::Upgrade(error) => error.severity(),
            ExecuteError::NotPlaying(_) | ExecuteError::NoUpgradePending => {
                ErrorSeverity::Validation
            }
            ExecuteError::NothingToUndo => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(phase) => phase.error.error_code(),
            ExecuteError::Skill { error, .. } => error.error.error_code(),
            ExecuteError::Upgrade(error) => error.error_code(),
            ExecuteError::NotPlaying(_) => "RUN_NOT_PLAYING",
            ExecuteError::NoUpgradePending => "RUN_NO_UPGRADE_PENDING",
            ExecuteError::NothingToUndo => "RUN_NOTHING_TO_UNDO",
        }
    }
}
