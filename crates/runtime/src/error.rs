//! Errors surfaced by the runtime.
//!
//! Rejected actions are not errors here: the core turns them into messages.
//! What remains is persistence and replay verification.
use std::path::PathBuf;

use hexwarden_core::Fingerprint;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed replay log {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode replay log: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("replay diverged on run {run} at step {step}: expected {expected}, found {actual}")]
    Divergence {
        run: usize,
        step: usize,
        expected: Fingerprint,
        actual: Fingerprint,
    },

    #[error("replay diverged on run {run}: final states differ with matching fingerprints")]
    StateDivergence { run: usize },

    #[error("determinism check needs at least one run")]
    NoRuns,
}
