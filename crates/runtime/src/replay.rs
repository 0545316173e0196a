//! Replay logs: `{ "seed": ..., "actions": [...] }` as JSON.
//!
//! A run is fully determined by its seed, its rules and its action log, so a
//! replay log is all that needs to be persisted.
use std::fs;
use std::path::Path;

use hexwarden_core::{Action, Fingerprint, GameConfig, GameState, fingerprint, reduce};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, RuntimeError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayLog {
    pub seed: String,
    /// Rules the run was played under; older logs without them use defaults.
    #[serde(default)]
    pub rules: GameConfig,
    pub actions: Vec<Action>,
}

impl ReplayLog {
    pub fn new(seed: &str, rules: GameConfig) -> Self {
        Self {
            seed: seed.to_owned(),
            rules,
            actions: Vec::new(),
        }
    }

    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RuntimeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| RuntimeError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| RuntimeError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(RuntimeError::Encode)?;
        fs::write(path, json).map_err(|source| RuntimeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Outcome of replaying a log from a fresh generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayReport {
    /// Initial state first, then one entry per action.
    pub fingerprints: Vec<Fingerprint>,
    pub final_state: GameState,
}

impl ReplayReport {
    pub fn final_fingerprint(&self) -> Fingerprint {
        fingerprint(&self.final_state)
    }
}

pub fn replay(log: &ReplayLog) -> ReplayReport {
    let mut state = GameState::new_run(&log.seed, log.rules.clone());
    let mut fingerprints = Vec::with_capacity(log.actions.len() + 1);
    fingerprints.push(fingerprint(&state));

    for action in &log.actions {
        state = reduce(&state, action);
        fingerprints.push(fingerprint(&state));
    }

    ReplayReport {
        fingerprints,
        final_state: state,
    }
}

/// Replay `log` `runs` times and require every run to match the first.
///
/// Returns the final fingerprint on success.
pub fn verify_determinism(log: &ReplayLog, runs: usize) -> Result<Fingerprint> {
    if runs == 0 {
        return Err(RuntimeError::NoRuns);
    }

    let baseline = replay(log);
    for run in 1..runs {
        compare_runs(run, &baseline, &replay(log))?;
    }

    let print = baseline.final_fingerprint();
    info!(runs, steps = log.actions.len(), fingerprint = %print, "replay verified");
    Ok(print)
}

fn compare_runs(run: usize, baseline: &ReplayReport, candidate: &ReplayReport) -> Result<()> {
    let mismatch = baseline
        .fingerprints
        .iter()
        .zip(&candidate.fingerprints)
        .enumerate()
        .find(|(_, (expected, actual))| expected != actual);

    if let Some((step, (expected, actual))) = mismatch {
        warn!(run, step, %expected, %actual, "replay diverged");
        return Err(RuntimeError::Divergence {
            run,
            step,
            expected: *expected,
            actual: *actual,
        });
    }
    if candidate.final_state != baseline.final_state {
        warn!(run, "replay diverged outside the fingerprint");
        return Err(RuntimeError::StateDivergence { run });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(seed: &str) -> ReplayReport {
        replay(&ReplayLog::new(seed, GameConfig::default()))
    }

    #[test]
    fn identical_runs_compare_equal() {
        let baseline = report("same");
        assert!(compare_runs(1, &baseline, &baseline.clone()).is_ok());
    }

    #[test]
    fn unfingerprinted_state_difference_is_its_own_error() {
        let baseline = report("state-only");
        let mut candidate = baseline.clone();
        candidate.final_state.messages.push("stray".to_owned());
        assert_eq!(candidate.fingerprints, baseline.fingerprints);

        let err = compare_runs(2, &baseline, &candidate).expect_err("states differ");

        assert!(matches!(err, RuntimeError::StateDivergence { run: 2 }));
        assert!(err.to_string().contains("run 2"));
    }

    #[test]
    fn fingerprint_mismatch_reports_the_step() {
        let baseline = report("fingerprint");
        let candidate = report("other-seed");

        let err = compare_runs(1, &baseline, &candidate).expect_err("seeds differ");

        assert!(matches!(err, RuntimeError::Divergence { run: 1, step: 0, .. }));
    }
}
