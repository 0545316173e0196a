//! Damage application.

use crate::state::{EntityId, GameState, JuiceHint, Position, RunStatus};

/// Where damage comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageSource {
    /// Cell the blow arrives from; `None` bypasses shields (lava, blasts).
    pub origin: Option<Position>,
    /// Whether a resulting kill counts towards the player's kill total.
    pub credit_player: bool,
}

impl DamageSource {
    pub const fn player(origin: Position) -> Self {
        Self {
            origin: Some(origin),
            credit_player: true,
        }
    }

    pub const fn enemy(origin: Position) -> Self {
        Self {
            origin: Some(origin),
            credit_player: false,
        }
    }

    pub const fn environment(credit_player: bool) -> Self {
        Self {
            origin: None,
            credit_player,
        }
    }
}

/// Result of one damage application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// No living actor with that id.
    Missed,
    /// Stopped by a shield facing the origin.
    Blocked,
    /// Fully soaked by temporary armor.
    Absorbed,
    Hit { remaining: i32 },
    Killed,
}

/// Split `amount` into (absorbed by armor, applied to hp).
pub fn absorb(armor: i32, amount: i32) -> (i32, i32) {
    let amount = amount.max(0);
    let absorbed = armor.clamp(0, amount);
    (absorbed, amount - absorbed)
}

/// Deal `amount` damage to `target`.
///
/// An enemy dropping to zero hp is removed from the enemy sequence at once
/// and recorded in `dying`; the player dropping to zero ends the run.
pub fn damage_actor(
    state: &mut GameState,
    target: EntityId,
    amount: i32,
    source: DamageSource,
) -> DamageOutcome {
    let Some(actor) = state.actor_mut(target) else {
        return DamageOutcome::Missed;
    };
    if !actor.is_alive() {
        return DamageOutcome::Missed;
    }

    if source.origin.is_some_and(|origin| actor.blocks_from(origin)) {
        let at = actor.position;
        let name = actor.archetype.label();
        let is_player = actor.is_player();
        state.push_hint(JuiceHint::Blocked { at });
        if is_player {
            state.push_message("Your shield holds.");
        } else {
            state.push_message(format!("{name} blocks the attack."));
        }
        return DamageOutcome::Blocked;
    }

    let (absorbed, applied) = absorb(actor.armor, amount);
    actor.armor -= absorbed;
    if applied == 0 {
        return DamageOutcome::Absorbed;
    }

    actor.hp = (actor.hp - applied).clamp(0, actor.max_hp);
    let remaining = actor.hp;
    let at = actor.position;
    let is_player = actor.is_player();
    state.push_hint(JuiceHint::Impact { at });

    if is_player {
        if remaining == 0 {
            state.status = RunStatus::Lost;
            state.push_message("You have fallen.");
            state.push_hint(JuiceHint::Shake { intensity: 3 });
            return DamageOutcome::Killed;
        }
        state.push_message(format!("You take {applied} damage."));
        state.push_hint(JuiceHint::Shake { intensity: 1 });
        return DamageOutcome::Hit { remaining };
    }

    if remaining > 0 {
        return DamageOutcome::Hit { remaining };
    }

    if let Some(dead) = state.remove_enemy(target) {
        if source.credit_player {
            state.kills.record(dead.archetype);
        }
        state.push_message(format!("{} killed.", dead.archetype.label()));
        state.dying.push(dead);
    }
    DamageOutcome::Killed
}
