//! Stable state summary used to verify determinism across replays.
//!
//! The digest covers turn, floor, status, draw counter, the player and every
//! enemy in evaluation order (id, archetype, position, hp, intent). Messages,
//! presentation hints and the undo history are left out since they
//! never feed back into the simulation.

use std::fmt;

use sha2::{Digest, Sha256};

use super::{ActorState, GameState, Intent, ItemLocation};

/// First eight bytes of the SHA-256 state digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    pub fn to_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Fingerprint `state`.
pub fn fingerprint(state: &GameState) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(state.turn.to_le_bytes());
    hasher.update(state.floor.to_le_bytes());
    hasher.update(state.status.as_ref().as_bytes());
    hasher.update(state.rng.counter.to_le_bytes());

    match state.spear {
        ItemLocation::Carried => hasher.update([0u8]),
        ItemLocation::Ground(position) => {
            hasher.update([1u8]);
            hasher.update(position.q.to_le_bytes());
            hasher.update(position.r.to_le_bytes());
        }
    }

    hash_actor(&mut hasher, &state.player);
    hasher.update((state.enemies.len() as u32).to_le_bytes());
    for enemy in &state.enemies {
        hash_actor(&mut hasher, enemy);
    }

    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    Fingerprint(u64::from_be_bytes(bytes))
}

fn hash_actor(hasher: &mut Sha256, actor: &ActorState) {
    hasher.update(actor.id.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(actor.archetype.as_ref().as_bytes());
    hasher.update(actor.position.q.to_le_bytes());
    hasher.update(actor.position.r.to_le_bytes());
    hasher.update(actor.hp.to_le_bytes());
    match actor.intent {
        Intent::Idle => hasher.update([0u8]),
        Intent::Telegraphing { kind, target } => {
            hasher.update([1u8]);
            hasher.update(kind.as_ref().as_bytes());
            hasher.update(target.q.to_le_bytes());
            hasher.update(target.r.to_le_bytes());
        }
    }
}
