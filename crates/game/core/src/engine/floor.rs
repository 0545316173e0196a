//! Run creation and floor transitions.

use std::collections::BTreeSet;

use crate::arena::{self, ArenaLayout};
use crate::config::GameConfig;
use crate::env::{RngState, normalize_seed};
use crate::state::{
    ActorState, GameState, Intent, ItemLocation, KillCounters, RunStatus, StatusEffects, Upgrades,
};

/// Seed used to generate `floor` of a run started from `initial_seed`.
///
/// Floor 1 uses the initial seed verbatim so a run is reproducible from the
/// seed the player typed.
pub fn floor_seed(initial_seed: &str, floor: u32) -> String {
    let initial_seed = normalize_seed(initial_seed);
    if floor <= 1 {
        initial_seed.to_owned()
    } else {
        format!("{initial_seed}/floor-{floor}")
    }
}

impl GameState {
    /// Start a fresh run on floor 1.
    ///
    /// The run's draw source is keyed by the initial seed and starts at
    /// counter zero; arena layout draws come from an independent stream.
    pub fn new_run(seed: &str, rules: GameConfig) -> Self {
        let initial_seed = normalize_seed(seed).to_owned();
        let player = ActorState::player(GameConfig::PLAYER_SPAWN, rules.player_max_hp);

        let mut state = GameState {
            rules,
            turn: 0,
            floor: 1,
            status: RunStatus::Playing,
            player,
            enemies: Vec::new(),
            width: GameConfig::GRID_WIDTH,
            height: GameConfig::GRID_HEIGHT,
            hazards: BTreeSet::new(),
            walls: BTreeSet::new(),
            stairs: GameConfig::DEFAULT_STAIRS,
            shrine: None,
            spear: ItemLocation::Carried,
            upgrades: Upgrades::empty(),
            upgrade_options: Vec::new(),
            seed: initial_seed.clone(),
            rng: RngState::from_seed(&initial_seed),
            initial_seed,
            messages: Vec::new(),
            action_log: Vec::new(),
            kills: KillCounters::default(),
            score: None,
            dying: Vec::new(),
            presentation_hints: Vec::new(),
            history: Vec::new(),
        };
        state.enter_floor(1);
        state
    }

    /// Replace the arena with freshly generated `floor`.
    ///
    /// Hp, max hp, skills with their upgrades, owned upgrades, kills, the
    /// turn counter and the draw counter carry over. The spear returns to
    /// the player's hand.
    pub fn enter_floor(&mut self, floor: u32) {
        let floor = floor.max(1);
        let seed = floor_seed(&self.initial_seed, floor);
        let layout = arena::generate(floor, &seed);

        self.floor = floor;
        self.seed = seed;
        self.status = RunStatus::Playing;
        self.upgrade_options.clear();
        self.spear = ItemLocation::Carried;
        self.place_player(&layout);
        self.apply_layout(layout);

        self.push_message(format!("You enter floor {floor}."));
        if self.shrine.is_some() {
            self.push_message("A shrine glows somewhere on this floor.");
        }
    }

    fn place_player(&mut self, layout: &ArenaLayout) {
        let player = &mut self.player;
        player.position = layout.player_spawn;
        player.previous_position = layout.player_spawn;
        player.statuses = StatusEffects::new();
        player.armor = 0;
        player.intent = Intent::Idle;
    }

    fn apply_layout(&mut self, layout: ArenaLayout) {
        self.stairs = layout.stairs;
        self.shrine = layout.shrine;
        self.hazards = layout.hazards;
        self.walls = layout.walls;
        self.enemies.clear();
        for (archetype, position) in layout.enemies {
            self.spawn_enemy(archetype, position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_floor_uses_initial_seed() {
        assert_eq!(floor_seed("abc", 1), "abc");
        assert_eq!(floor_seed("abc", 3), "abc/floor-3");
        assert_eq!(floor_seed("", 1), crate::env::DEFAULT_SEED);
    }

    #[test]
    fn new_run_starts_at_spawn_with_full_health() {
        let state = GameState::new_run("fresh", GameConfig::default());

        assert_eq!(state.floor, 1);
        assert_eq!(state.turn, 0);
        assert_eq!(state.player.position, GameConfig::PLAYER_SPAWN);
        assert_eq!(state.player.hp, GameConfig::DEFAULT_PLAYER_MAX_HP);
        assert!(state.has_spear());
        assert!(!state.enemies.is_empty());
        let id_draws = (state.enemies.len() * GameConfig::ACTOR_ID_SUFFIX_LEN) as u64;
        assert_eq!(state.rng.counter, id_draws);
    }

    #[test]
    fn entering_a_floor_carries_the_player_forward() {
        let mut state = GameState::new_run("carry", GameConfig::default());
        state.player.hp = 2;
        state.kills.total = 4;
        state.spear = ItemLocation::Ground(state.stairs);
        let counter = state.rng.counter;

        state.enter_floor(2);

        assert_eq!(state.floor, 2);
        assert_eq!(state.player.hp, 2);
        assert_eq!(state.kills.total, 4);
        assert!(state.has_spear());
        assert!(state.shrine.is_some());
        assert!(state.rng.counter >= counter);
        assert_eq!(state.initial_seed, "carry");
        assert_eq!(state.seed, "carry/floor-2");
    }
}
