//! Enemy population spending a per-floor point budget.

use strum::IntoEnumIterator;

use crate::config::GameConfig;
use crate::env::RngState;
use crate::state::{Archetype, Position};

/// Point budget available on `floor`.
pub const fn enemy_budget(floor: u32) -> u32 {
    GameConfig::BASE_ENEMY_BUDGET + GameConfig::ENEMY_BUDGET_PER_FLOOR * floor
}

/// Spend the floor's budget on archetypes, placing each on a drawn candidate.
///
/// Both the archetype and the cell are picked by a draw over the eligible set,
/// never by position in a list, and stop when either the budget or the
/// candidates run out.
pub fn populate(
    floor: u32,
    mut candidates: Vec<Position>,
    rng: &mut RngState,
) -> Vec<(Archetype, Position)> {
    let mut budget = enemy_budget(floor);
    let mut placed = Vec::new();

    loop {
        let affordable: Vec<Archetype> = Archetype::iter()
            .filter(|archetype| archetype.spawnable_on(floor) && archetype.stats().cost <= budget)
            .collect();
        if affordable.is_empty() || candidates.is_empty() {
            break;
        }

        let archetype = affordable[rng.next_index(affordable.len())];
        let cell = candidates.remove(rng.next_index(candidates.len()));
        budget -= archetype.stats().cost;
        placed.push((archetype, cell));
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Position> {
        (0..9).map(|q| Position::new(q, 5)).collect()
    }

    #[test]
    fn budget_is_spent_without_overdraw() {
        let mut rng = RngState::from_seed("budget");
        let placed = populate(3, candidates(), &mut rng);
        let spent: u32 = placed.iter().map(|(a, _)| a.stats().cost).sum();

        assert!(spent <= enemy_budget(3));
        assert!(placed.iter().all(|(a, _)| a.stats().min_floor <= 3));
    }

    #[test]
    fn first_floor_only_draws_early_archetypes() {
        let mut rng = RngState::from_seed("early");
        let placed = populate(1, candidates(), &mut rng);
        assert!(!placed.is_empty());
        assert!(
            placed
                .iter()
                .all(|(a, _)| matches!(a, Archetype::Footman | Archetype::Archer))
        );
    }

    #[test]
    fn runs_out_of_candidates_gracefully() {
        let mut rng = RngState::from_seed("crowded");
        let placed = populate(6, vec![Position::new(4, 4)], &mut rng);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].1, Position::new(4, 4));
    }
}
