//! Procedural arena generation.
//!
//! [`generate`] is a pure function of `(floor, seed)`: it draws from its own
//! stream keyed by both, never from the run's draw source, so generating the
//! same floor twice yields bit-identical layouts regardless of what happened
//! earlier in the run. Generation never fails; degenerate inputs fall back to
//! fixed defaults.
mod population;

use std::collections::{BTreeSet, VecDeque};

use crate::config::GameConfig;
use crate::env::{RngState, shuffle};
use crate::state::{Archetype, Position};

pub use population::{enemy_budget, populate};

/// One generated floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaLayout {
    pub floor: u32,
    pub seed: String,
    /// Every cell of the arena in row-major order.
    pub cells: Vec<Position>,
    pub player_spawn: Position,
    pub stairs: Position,
    pub shrine: Option<Position>,
    pub hazards: BTreeSet<Position>,
    pub walls: BTreeSet<Position>,
    /// Free cells far enough from the player to host an enemy.
    pub spawn_candidates: Vec<Position>,
    /// Enemy population in placement order.
    pub enemies: Vec<(Archetype, Position)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Obstacle {
    Hazard,
    Wall,
}

/// Whether `position` belongs to the clipped-parallelogram arena.
pub fn contains(position: Position) -> bool {
    let Position { q, r } = position;
    (0..GameConfig::GRID_WIDTH).contains(&q)
        && (0..GameConfig::GRID_HEIGHT).contains(&r)
        && (GameConfig::MIN_COORD_SUM..=GameConfig::MAX_COORD_SUM).contains(&(q + r))
}

/// All arena cells in row-major order.
pub fn cells() -> Vec<Position> {
    (0..GameConfig::GRID_HEIGHT)
        .flat_map(|r| (0..GameConfig::GRID_WIDTH).map(move |q| Position::new(q, r)))
        .filter(|position| contains(*position))
        .collect()
}

/// Whether floor `floor` carries a shrine.
pub const fn has_shrine(floor: u32) -> bool {
    floor >= 2 && floor % 2 == 0
}

/// Independent draw stream for generating `floor` from `seed`.
pub fn generation_stream(floor: u32, seed: &str) -> RngState {
    RngState::from_seed(&format!("{}#floor-{}", crate::env::normalize_seed(seed), floor))
}

/// Generate floor `floor` from `seed`.
pub fn generate(floor: u32, seed: &str) -> ArenaLayout {
    let floor = floor.max(1);
    let mut rng = generation_stream(floor, seed);
    let cells = cells();
    let spawn = GameConfig::PLAYER_SPAWN;

    let stairs = place_stairs(&cells, spawn, &mut rng);
    let shrine = if has_shrine(floor) {
        place_shrine(&cells, spawn, stairs, &mut rng)
    } else {
        None
    };

    // Obstacles never land next to the spawn or on a feature tile.
    let reserved: BTreeSet<Position> = spawn
        .neighbors()
        .into_iter()
        .chain([spawn, stairs])
        .chain(shrine)
        .collect();
    let mut remainder: Vec<Position> = cells
        .iter()
        .copied()
        .filter(|cell| !reserved.contains(cell))
        .collect();
    shuffle(&mut rng, &mut remainder);

    let hazard_quota = remainder.len() * GameConfig::HAZARD_PERCENT / 100;
    let wall_quota = remainder.len() * GameConfig::WALL_PERCENT / 100;
    let mut obstacles: Vec<(Position, Obstacle)> = remainder
        .iter()
        .take(hazard_quota)
        .map(|cell| (*cell, Obstacle::Hazard))
        .chain(
            remainder
                .iter()
                .skip(hazard_quota)
                .take(wall_quota)
                .map(|cell| (*cell, Obstacle::Wall)),
        )
        .collect();

    let goals: Vec<Position> = std::iter::once(stairs).chain(shrine).collect();
    while !obstacles.is_empty() && !all_reachable(spawn, &goals, &obstacles) {
        obstacles.pop();
    }

    let hazards: BTreeSet<Position> = select(&obstacles, Obstacle::Hazard);
    let walls: BTreeSet<Position> = select(&obstacles, Obstacle::Wall);

    let spawn_candidates: Vec<Position> = cells
        .iter()
        .copied()
        .filter(|cell| {
            *cell != stairs
                && Some(*cell) != shrine
                && !hazards.contains(cell)
                && !walls.contains(cell)
                && cell.distance(spawn) >= GameConfig::ENEMY_MIN_DISTANCE
        })
        .collect();

    let enemies = populate(floor, spawn_candidates.clone(), &mut rng);

    ArenaLayout {
        floor,
        seed: seed.to_owned(),
        cells,
        player_spawn: spawn,
        stairs,
        shrine,
        hazards,
        walls,
        spawn_candidates,
        enemies,
    }
}

fn place_stairs(cells: &[Position], spawn: Position, rng: &mut RngState) -> Position {
    let candidates: Vec<Position> = cells
        .iter()
        .copied()
        .filter(|cell| {
            cell.distance(spawn) >= GameConfig::STAIRS_MIN_DISTANCE
                && cell.r < GameConfig::GRID_HEIGHT / 2
        })
        .collect();
    if candidates.is_empty() {
        return GameConfig::DEFAULT_STAIRS;
    }
    candidates[rng.next_index(candidates.len())]
}

fn place_shrine(
    cells: &[Position],
    spawn: Position,
    stairs: Position,
    rng: &mut RngState,
) -> Option<Position> {
    let candidates: Vec<Position> = cells
        .iter()
        .copied()
        .filter(|cell| *cell != stairs && cell.distance(spawn) >= GameConfig::SHRINE_MIN_DISTANCE)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.next_index(candidates.len())])
}

fn select(obstacles: &[(Position, Obstacle)], kind: Obstacle) -> BTreeSet<Position> {
    obstacles
        .iter()
        .filter(|(_, obstacle)| *obstacle == kind)
        .map(|(position, _)| *position)
        .collect()
}

/// Breadth-first search from `start` over cells free of obstacles.
fn all_reachable(start: Position, goals: &[Position], obstacles: &[(Position, Obstacle)]) -> bool {
    let blocked: BTreeSet<Position> = obstacles.iter().map(|(position, _)| *position).collect();
    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors() {
            if contains(next) && !blocked.contains(&next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    goals.iter().all(|goal| visited.contains(goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_has_seventy_nine_cells() {
        let cells = cells();
        assert_eq!(cells.len(), 79);
        assert!(cells.contains(&GameConfig::PLAYER_SPAWN));
        assert!(cells.contains(&GameConfig::DEFAULT_STAIRS));
        assert!(!contains(Position::new(0, 0)));
        assert!(!contains(Position::new(8, 10)));
    }

    #[test]
    fn generation_is_idempotent() {
        assert_eq!(generate(3, "layout"), generate(3, "layout"));
        assert_ne!(generate(3, "layout").hazards, generate(3, "other").hazards);
    }

    #[test]
    fn stairs_are_far_and_reachable() {
        for seed in ["a", "b", "c", "d", "e"] {
            let layout = generate(1, seed);
            assert!(layout.stairs.distance(layout.player_spawn) >= GameConfig::STAIRS_MIN_DISTANCE);
            assert!(!layout.hazards.contains(&layout.stairs));
            assert!(!layout.walls.contains(&layout.stairs));
            let obstacles: Vec<(Position, Obstacle)> = layout
                .hazards
                .iter()
                .map(|p| (*p, Obstacle::Hazard))
                .chain(layout.walls.iter().map(|p| (*p, Obstacle::Wall)))
                .collect();
            assert!(all_reachable(layout.player_spawn, &[layout.stairs], &obstacles));
        }
    }

    #[test]
    fn shrine_only_on_even_floors() {
        assert!(generate(1, "shrine").shrine.is_none());
        assert!(generate(3, "shrine").shrine.is_none());
        let shrine = generate(2, "shrine").shrine;
        assert!(shrine.is_some_and(|cell| cell.distance(GameConfig::PLAYER_SPAWN) >= 3));
    }

    #[test]
    fn spawn_neighbourhood_stays_clear() {
        let layout = generate(4, "clear");
        for cell in layout.player_spawn.neighbors() {
            assert!(!layout.hazards.contains(&cell));
            assert!(!layout.walls.contains(&cell));
        }
    }

    #[test]
    fn floor_zero_falls_back_to_first_floor() {
        assert_eq!(generate(0, "zero"), generate(1, "zero"));
    }
}
