//! Post-action phases of a turn: telegraph resolution, enemy decisions,
//! passive auto-attacks, hazards and upkeep.

use crate::ai;
use crate::combat::{DamageSource, damage_actor};
use crate::config::GameConfig;
use crate::state::{
    Archetype, EntityId, Intent, IntentKind, Position, RunStatus, SkillId, StatusKind, Upgrades,
};

use super::GameEngine;

impl GameEngine<'_> {
    fn run_over(&self) -> bool {
        self.state.status == RunStatus::Lost
    }

    /// Record where every actor stands before the player acts.
    pub(super) fn mark_positions(&mut self) {
        self.state.player.previous_position = self.state.player.position;
        for enemy in &mut self.state.enemies {
            enemy.previous_position = enemy.position;
        }
    }

    /// Step 2: resolve last turn's telegraphs against the player's new cell.
    ///
    /// Enemies standing in lava burn before their attack lands.
    pub(super) fn resolve_telegraphs(&mut self) {
        for id in self.state.enemy_ids() {
            if self.run_over() {
                return;
            }
            let Some(enemy) = self.state.actor(id).cloned() else {
                continue;
            };

            if self.state.is_hazard(enemy.position) {
                self.burn(id);
                continue;
            }

            let Intent::Telegraphing { kind, target } = enemy.intent else {
                continue;
            };
            if let Some(actor) = self.state.actor_mut(id) {
                actor.intent = Intent::Idle;
            }

            match kind {
                IntentKind::Bomb => self.plant_bomb(id, target),
                _ if target == self.state.player.position => {
                    self.state.push_message(format!(
                        "{} {}.",
                        enemy.archetype.label(),
                        attack_verb(kind)
                    ));
                    damage_actor(
                        self.state,
                        EntityId::player(),
                        enemy.archetype.stats().damage,
                        DamageSource::enemy(enemy.position),
                    );
                }
                _ => {}
            }
        }
    }

    fn plant_bomb(&mut self, bomber: EntityId, cell: Position) {
        let free = self.state.is_walkable(cell)
            && !self.state.is_hazard(cell)
            && !self.state.is_occupied(cell);
        if !free {
            return;
        }
        let bomb = self.state.spawn_enemy(Archetype::Bomb, cell);
        if let Some(actor) = self.state.actor_mut(bomb) {
            actor.statuses.apply(StatusKind::Fuse, GameConfig::BOMB_FUSE);
        }
        if let Some(actor) = self.state.actor_mut(bomber) {
            actor.lockout = 1;
        }
        self.state.push_message("A bomb lands nearby.");
    }

    fn burn(&mut self, id: EntityId) {
        if let Some(actor) = self.state.actor(id) {
            let message = format!("{} burns in the lava.", actor.archetype.label());
            self.state.push_message(message);
        }
        damage_actor(
            self.state,
            id,
            GameConfig::LETHAL_DAMAGE,
            DamageSource::environment(true),
        );
    }

    /// Step 3: every enemy decides in sequence order.
    ///
    /// Each decision is written back before the next enemy runs, so later
    /// enemies observe earlier movement and draw consumption.
    pub(super) fn run_enemy_phase(&mut self) {
        let destination = self.state.player.position;
        for id in self.state.enemy_ids() {
            if self.run_over() {
                return;
            }
            let Some(actor) = self.state.actor(id).cloned() else {
                continue;
            };

            match ai::take_turn(&actor, destination, self.state) {
                Some(next) => {
                    if let Some(slot) = self.state.enemies.iter_mut().find(|e| e.id == id) {
                        *slot = next;
                    }
                }
                None => {
                    if let Some(gone) = self.state.remove_enemy(id) {
                        self.state.dying.push(gone);
                    }
                }
            }
        }
    }

    /// Step 4: enemies adjacent to the player both before and after the
    /// player's move take passive damage. Newly adjacent enemies do not.
    pub(super) fn resolve_auto_attack(&mut self) {
        let player = &self.state.player;
        let (before, after) = (player.previous_position, player.position);
        if before == after {
            return;
        }

        let persisted: Vec<EntityId> = self
            .state
            .enemies
            .iter()
            .filter(|enemy| {
                enemy.previous_position.is_adjacent(before) && enemy.position.is_adjacent(after)
            })
            .map(|enemy| enemy.id)
            .collect();

        for id in persisted {
            damage_actor(
                self.state,
                id,
                GameConfig::AUTO_ATTACK_DAMAGE,
                DamageSource::player(after),
            );
        }
    }

    /// Step 5: lava kills enemies outright and wounds the player.
    pub(super) fn resolve_hazards(&mut self) {
        let burning: Vec<EntityId> = self
            .state
            .enemies
            .iter()
            .filter(|enemy| self.state.is_hazard(enemy.position))
            .map(|enemy| enemy.id)
            .collect();
        for id in burning {
            self.burn(id);
        }

        if self.state.is_hazard(self.state.player.position) {
            self.state.push_message("The lava scorches you.");
            damage_actor(
                self.state,
                EntityId::player(),
                GameConfig::HAZARD_PLAYER_DAMAGE,
                DamageSource::environment(false),
            );
        }
    }

    /// Step 6: cooldowns, status durations, armor and regeneration.
    ///
    /// The skill used this turn keeps its fresh cooldown. Enemy stuns tick in
    /// the policy phase and bomb fuses in the bomb policy, so both are skipped
    /// here.
    pub(super) fn upkeep(&mut self, skill_used: Option<SkillId>) {
        let player = &mut self.state.player;
        for slot in player.skills.iter_mut() {
            if Some(slot.id) != skill_used {
                slot.cooldown = slot.cooldown.saturating_sub(1);
            }
        }
        // A shield raised this turn must survive the next telegraph phase.
        if skill_used == Some(SkillId::ShieldBash) {
            player.statuses.tick_except(&[StatusKind::Shielded]);
        } else {
            player.statuses.tick_except(&[]);
        }
        player.armor = 0;

        for enemy in &mut self.state.enemies {
            enemy.statuses.tick_except(&[StatusKind::Stunned, StatusKind::Fuse]);
            enemy.armor = 0;
        }

        let regenerates = self.state.upgrades.contains(Upgrades::REGENERATION)
            && self.state.turn % GameConfig::REGENERATION_INTERVAL == 0;
        if regenerates && self.state.player.hp < self.state.player.max_hp {
            self.state.player.heal(1);
            self.state.push_message("You regenerate.");
        }
    }
}

fn attack_verb(kind: IntentKind) -> &'static str {
    match kind {
        IntentKind::Strike => "strikes you",
        IntentKind::Aim => "shoots you",
        IntentKind::Cast => "blasts you with magic",
        IntentKind::Backstab => "stabs you in the back",
        IntentKind::Smash => "smashes you",
        IntentKind::Bomb => "bombs you",
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::GameEngine;
    use crate::state::{Archetype, Intent, IntentKind, Position, RunStatus};
    use crate::test_support::empty_state;

    #[test]
    fn lava_burns_before_telegraph_lands() {
        let mut state = empty_state("lava");
        let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 9));
        state.hazards.insert(Position::new(2, 9));
        if let Some(enemy) = state.actor_mut(id) {
            enemy.intent = Intent::Telegraphing {
                kind: IntentKind::Strike,
                target: Position::new(2, 10),
            };
        }

        GameEngine::new(&mut state).resolve_telegraphs();

        assert!(state.enemies.is_empty());
        assert_eq!(state.player.hp, 3);
        assert_eq!(state.kills.total, 1);
    }

    #[test]
    fn lethal_telegraph_ends_the_run() {
        let mut state = empty_state("lethal");
        state.player.hp = 1;
        let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 9));
        if let Some(enemy) = state.actor_mut(id) {
            enemy.intent = Intent::Telegraphing {
                kind: IntentKind::Strike,
                target: Position::new(2, 10),
            };
        }

        GameEngine::new(&mut state).resolve_telegraphs();

        assert_eq!(state.player.hp, 0);
        assert_eq!(state.status, RunStatus::Lost);
    }

    #[test]
    fn bomb_telegraph_plants_a_fused_bomb() {
        let mut state = empty_state("plant");
        let id = state.spawn_enemy(Archetype::Bomber, Position::new(2, 7));
        if let Some(enemy) = state.actor_mut(id) {
            enemy.intent = Intent::Telegraphing {
                kind: IntentKind::Bomb,
                target: Position::new(2, 9),
            };
        }

        GameEngine::new(&mut state).resolve_telegraphs();

        let bomb = state.actor_at(Position::new(2, 9)).cloned().expect("bomb");
        assert_eq!(bomb.archetype, Archetype::Bomb);
        assert!(bomb.statuses.has(crate::state::StatusKind::Fuse));
        assert_eq!(state.actor(id).map(|b| b.lockout), Some(1));
    }
}
