//! Runtime configuration loaded from the environment.
use std::env;

use hexwarden_core::{DEFAULT_SEED, GameConfig};

/// Settings for a [`crate::Session`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub seed: String,
    pub rules: GameConfig,
    /// Log the state fingerprint after every executed action.
    pub log_fingerprints: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_owned(),
            rules: GameConfig::default(),
            log_fingerprints: false,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `HEXWARDEN_SEED`
    /// - `HEXWARDEN_FINAL_FLOOR`
    /// - `HEXWARDEN_UNDO_DEPTH`
    /// - `HEXWARDEN_LOG_FINGERPRINTS` (`1`/`true`/`yes`)
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = env::var("HEXWARDEN_SEED").ok().filter(|s| !s.trim().is_empty()) {
            config.seed = seed;
        }

        if let Some(floor) = read_env::<u32>("HEXWARDEN_FINAL_FLOOR") {
            config.rules = config.rules.with_final_floor(floor);
        }

        if let Some(depth) = read_env::<usize>("HEXWARDEN_UNDO_DEPTH") {
            config.rules = config.rules.with_undo_depth(depth);
        }

        if let Ok(flag) = env::var("HEXWARDEN_LOG_FINGERPRINTS") {
            config.log_fingerprints = parse_flag(&flag);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn default_uses_fixed_seed() {
        let config = RuntimeConfig::default();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.rules, GameConfig::default());
        assert!(!config.log_fingerprints);
    }
}
