//! Combat resolution.
//!
//! Every source of damage (skills, telegraphs, auto-attacks, bombs, lava)
//! funnels through [`damage_actor`], which applies shield blocks, temporary
//! armor, hp clamping and removal of the dead in one place.

pub mod damage;

pub use damage::{DamageOutcome, DamageSource, absorb, damage_actor};
