//! Host-side driver for the deterministic hex tactics engine.
//!
//! The core is a pure reducer; this crate owns the current snapshot, feeds
//! actions through it, records fingerprints and persists replay logs.
//!
//! - [`session`] drives one run and emits structured logs
//! - [`replay`] loads, saves, replays and cross-checks action logs
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod replay;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use replay::{ReplayLog, ReplayReport, replay, verify_determinism};
pub use session::Session;
