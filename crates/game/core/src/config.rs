use crate::state::Position;

/// Game configuration constants and tunable parameters.
///
/// The runtime-tunable fields travel inside [`crate::GameState`] so that a
/// replay from the same seed and action log always runs under the same rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Floor whose stairs end the run with a victory.
    pub final_floor: u32,
    /// Maximum number of snapshots retained for undo.
    pub undo_depth: usize,
    /// Maximum number of messages kept in the message log.
    pub message_capacity: usize,
    /// Player max hp at the start of a run.
    pub player_max_hp: i32,
}

impl GameConfig {
    // ===== arena geometry =====
    /// Axial `q` range is `0..GRID_WIDTH`.
    pub const GRID_WIDTH: i32 = 9;
    /// Axial `r` range is `0..GRID_HEIGHT`.
    pub const GRID_HEIGHT: i32 = 11;
    /// Lower bound on `q + r` for a cell to belong to the arena.
    pub const MIN_COORD_SUM: i32 = 4;
    /// Upper bound on `q + r` for a cell to belong to the arena.
    pub const MAX_COORD_SUM: i32 = 14;
    /// Bottom-center spawn cell.
    pub const PLAYER_SPAWN: Position = Position::new(2, 10);
    /// Stairs fallback when no candidate satisfies the distance rule.
    pub const DEFAULT_STAIRS: Position = Position::new(6, 0);

    // ===== generation =====
    pub const STAIRS_MIN_DISTANCE: u32 = 8;
    pub const SHRINE_MIN_DISTANCE: u32 = 3;
    pub const ENEMY_MIN_DISTANCE: u32 = 3;
    pub const HAZARD_PERCENT: usize = 17;
    pub const WALL_PERCENT: usize = 10;
    pub const BASE_ENEMY_BUDGET: u32 = 2;
    pub const ENEMY_BUDGET_PER_FLOOR: u32 = 2;

    // ===== capacities =====
    pub const MAX_STATUS_EFFECTS: usize = 8;
    pub const MAX_SKILLS: usize = 8;
    /// Length of the random suffix in generated actor ids.
    pub const ACTOR_ID_SUFFIX_LEN: usize = 6;

    // ===== combat =====
    pub const AUTO_ATTACK_DAMAGE: i32 = 1;
    pub const HAZARD_PLAYER_DAMAGE: i32 = 1;
    pub const LETHAL_DAMAGE: i32 = 99;
    pub const BOMB_FUSE: u32 = 2;
    pub const BOMB_BLAST_DAMAGE: i32 = 1;
    pub const GOLEM_LOCKOUT: u32 = 2;
    /// Probability (out of 100) that a warlock teleports on a given turn.
    pub const WARLOCK_TELEPORT_PERCENT: u32 = 30;

    // ===== progression =====
    pub const UPGRADE_CHOICES: usize = 3;
    pub const REGENERATION_INTERVAL: u32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FINAL_FLOOR: u32 = 5;
    pub const DEFAULT_UNDO_DEPTH: usize = 16;
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 32;
    pub const DEFAULT_PLAYER_MAX_HP: i32 = 3;

    pub fn new() -> Self {
        Self {
            final_floor: Self::DEFAULT_FINAL_FLOOR,
            undo_depth: Self::DEFAULT_UNDO_DEPTH,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
            player_max_hp: Self::DEFAULT_PLAYER_MAX_HP,
        }
    }

    pub fn with_final_floor(mut self, final_floor: u32) -> Self {
        self.final_floor = final_floor.max(1);
        self
    }

    pub fn with_undo_depth(mut self, undo_depth: usize) -> Self {
        self.undo_depth = undo_depth;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
