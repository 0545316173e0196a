//! Shrine, stairs and upgrade selection.

use strum::IntoEnumIterator;

use crate::config::GameConfig;
use crate::state::{RunStatus, UpgradeError, UpgradeId};

use super::{ExecuteError, GameEngine};

impl GameEngine<'_> {
    /// Step 7: the shrine takes priority over the stairs.
    pub(super) fn check_progress(&mut self) {
        if self.state.status != RunStatus::Playing {
            return;
        }
        let at = self.state.player.position;
        if self.state.shrine == Some(at) {
            self.offer_upgrades();
        } else if self.state.stairs == at {
            self.descend();
        }
    }

    /// Consume the shrine and draw up to three unique, not-yet-owned upgrades.
    fn offer_upgrades(&mut self) {
        self.state.shrine = None;

        let owned = self.state.upgrades;
        let mut pool: Vec<UpgradeId> = UpgradeId::iter()
            .filter(|upgrade| !owned.contains(upgrade.flag()))
            .collect();
        let mut options = Vec::with_capacity(GameConfig::UPGRADE_CHOICES);
        while options.len() < GameConfig::UPGRADE_CHOICES && !pool.is_empty() {
            let index = self.state.rng.next_index(pool.len());
            options.push(pool.remove(index));
        }

        if options.is_empty() {
            self.state.push_message("The shrine has nothing left to give.");
            return;
        }

        let listing = options
            .iter()
            .map(UpgradeId::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.state.upgrade_options = options;
        self.state.status = RunStatus::ChoosingUpgrade;
        self.state
            .push_message(format!("The shrine offers a gift: {listing}."));
    }

    fn descend(&mut self) {
        let floor = self.state.floor;
        if floor >= self.state.rules.final_floor {
            let score = floor * 100
                + self.state.kills.total * 10
                + self.state.player.hp.max(0).unsigned_abs() * 25;
            self.state.status = RunStatus::Won;
            self.state.score = Some(score);
            self.state
                .push_message(format!("You escape the depths! Final score: {score}."));
            return;
        }
        self.state.enter_floor(floor + 1);
    }

    /// Take one of the offered upgrades and resume play.
    ///
    /// Validation runs before any mutation; a rejected choice leaves the
    /// offer standing.
    pub(super) fn select_upgrade(&mut self, upgrade: UpgradeId) -> Result<(), ExecuteError> {
        if self.state.status != RunStatus::ChoosingUpgrade {
            return Err(ExecuteError::NoUpgradePending);
        }
        if !self.state.upgrade_options.contains(&upgrade) {
            return Err(UpgradeError::NotOffered(upgrade).into());
        }
        if self.state.upgrades.contains(upgrade.flag()) {
            return Err(UpgradeError::AlreadyOwned(upgrade).into());
        }

        match upgrade.skill() {
            Some(skill) => self
                .state
                .player
                .skill_mut(skill)
                .ok_or(UpgradeError::SkillMissing(upgrade))?
                .acquire(upgrade)?,
            None => {
                if upgrade == UpgradeId::ExtraHeart {
                    self.state.player.max_hp += 1;
                    self.state.player.heal(1);
                }
            }
        }

        self.state.upgrades.insert(upgrade.flag());
        self.state.upgrade_options.clear();
        self.state.status = RunStatus::Playing;
        self.state.push_message(format!("You gain {upgrade}."));
        Ok(())
    }
}
