//! A single run driven one action at a time.
use hexwarden_core::{
    Action, Fingerprint, GameConfig, GameError, GameState, fingerprint, reject, try_reduce,
};
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;
use crate::replay::ReplayLog;

/// Owns the current snapshot and everything needed to replay it.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    log: ReplayLog,
    /// `fingerprints[0]` is the initial state; one entry per executed action follows.
    fingerprints: Vec<Fingerprint>,
    log_fingerprints: bool,
}

impl Session {
    pub fn new(seed: &str, rules: GameConfig) -> Self {
        let state = GameState::new_run(seed, rules.clone());
        let log = ReplayLog::new(&state.initial_seed, rules);
        let fingerprints = vec![fingerprint(&state)];
        info!(
            seed = %state.initial_seed,
            enemies = state.enemies.len(),
            "session started"
        );
        Self {
            state,
            log,
            fingerprints,
            log_fingerprints: false,
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        let mut session = Self::new(&config.seed, config.rules.clone());
        session.log_fingerprints = config.log_fingerprints;
        session
    }

    /// Feed one action through the reducer.
    ///
    /// Rejected actions are still recorded: replaying them reproduces the
    /// same rejection message.
    pub fn execute(&mut self, action: Action) -> &GameState {
        let last_message = self.state.messages.last().cloned();

        self.state = match try_reduce(&self.state, &action) {
            Ok(next) => {
                info!(
                    action = action.kind_name(),
                    turn = next.turn,
                    floor = next.floor,
                    status = %next.status,
                    "action executed"
                );
                next
            }
            Err(error) => {
                warn!(
                    action = action.kind_name(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "action rejected: {error}"
                );
                reject(&self.state, &error)
            }
        };

        if self.state.messages.last() != last_message.as_ref() {
            if let Some(message) = self.state.last_message() {
                debug!(turn = self.state.turn, "{message}");
            }
        }

        let print = fingerprint(&self.state);
        if self.log_fingerprints {
            info!(step = self.fingerprints.len(), fingerprint = %print, "fingerprint");
        }
        self.fingerprints.push(print);
        self.log.record(action);
        &self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn fingerprints(&self) -> &[Fingerprint] {
        &self.fingerprints
    }

    /// Every action fed to this session, in order.
    pub fn replay_log(&self) -> &ReplayLog {
        &self.log
    }

    pub fn into_replay_log(self) -> ReplayLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexwarden_core::Position;

    #[test]
    fn records_every_action_and_fingerprint() {
        let mut session = Session::new("session", GameConfig::default());
        session.execute(Action::Wait);
        session.execute(Action::Move(Position::new(7, 7)));

        assert_eq!(session.fingerprints().len(), 3);
        assert_eq!(session.replay_log().actions.len(), 2);
        assert_eq!(session.state().turn, 1);
    }

    #[test]
    fn rejected_action_leaves_fingerprint_unchanged() {
        let mut session = Session::new("rejected", GameConfig::default());
        session.execute(Action::Undo);

        let prints = session.fingerprints();
        assert_eq!(prints[0], prints[1]);
        assert_eq!(session.state().last_message(), Some("Nothing to undo."));
    }
}
