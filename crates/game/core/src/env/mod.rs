//! Environment primitives consumed by the engine.
//!
//! The only environmental input to the simulation is the seeded draw source;
//! everything else (arena layout, actors) is derived from it and stored in
//! [`crate::GameState`].
mod rng;

pub use rng::{
    DEFAULT_SEED, PcgRng, RngOracle, RngState, compute_seed, draw, draw_id, draw_index, hash_seed,
    normalize_seed, shuffle,
};
