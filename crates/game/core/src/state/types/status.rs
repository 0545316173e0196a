//! Status effect system for actors.
//!
//! Status effects are temporary conditions measured in whole turns. The list
//! is ordered by application time and bounded; applying an effect that is
//! already present refreshes its duration and adds a stack instead of adding
//! a second entry.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusKind {
    /// Skips its next decision; applying it cancels any pending telegraph.
    Stunned,

    /// Blocks damage arriving through the front three facings.
    Shielded,

    /// Turns left before a planted bomb detonates.
    Fuse,
}

/// A single status effect with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Turns remaining; the effect is removed when this reaches zero.
    pub remaining: u32,
    pub stacks: u32,
}

/// Active status effects on an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `kind` for `duration` turns.
    ///
    /// Returns false when the list is full and the effect could not be added.
    pub fn apply(&mut self, kind: StatusKind, duration: u32) -> bool {
        if duration == 0 {
            return true;
        }
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.remaining = existing.remaining.max(duration);
            existing.stacks += 1;
            return true;
        }
        self.effects
            .try_push(StatusEffect {
                kind,
                remaining: duration,
                stacks: 1,
            })
            .is_ok()
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    pub fn remaining(&self, kind: StatusKind) -> u32 {
        self.get(kind).map_or(0, |e| e.remaining)
    }

    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        self.effects.len() != before
    }

    /// Decrement a single effect; returns true if it expired on this tick.
    pub fn tick_kind(&mut self, kind: StatusKind) -> bool {
        let Some(effect) = self.effects.iter_mut().find(|e| e.kind == kind) else {
            return false;
        };
        effect.remaining = effect.remaining.saturating_sub(1);
        if effect.remaining == 0 {
            self.remove(kind);
            return true;
        }
        false
    }

    /// Decrement every effect not listed in `skip` and drop expired ones.
    pub fn tick_except(&mut self, skip: &[StatusKind]) {
        for effect in self.effects.iter_mut() {
            if !skip.contains(&effect.kind) {
                effect.remaining = effect.remaining.saturating_sub(1);
            }
        }
        self.effects.retain(|e| e.remaining > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reapplying_refreshes_and_stacks() {
        let mut statuses = StatusEffects::new();
        assert!(statuses.apply(StatusKind::Stunned, 1));
        assert!(statuses.apply(StatusKind::Stunned, 2));

        let stun = statuses.get(StatusKind::Stunned).copied();
        assert_eq!(
            stun,
            Some(StatusEffect {
                kind: StatusKind::Stunned,
                remaining: 2,
                stacks: 2,
            })
        );
    }

    #[test]
    fn tick_except_leaves_skipped_effects() {
        let mut statuses = StatusEffects::new();
        statuses.apply(StatusKind::Shielded, 1);
        statuses.apply(StatusKind::Fuse, 2);

        statuses.tick_except(&[StatusKind::Fuse]);

        assert!(!statuses.has(StatusKind::Shielded));
        assert_eq!(statuses.remaining(StatusKind::Fuse), 2);
    }

    #[test]
    fn tick_kind_reports_expiry() {
        let mut statuses = StatusEffects::new();
        statuses.apply(StatusKind::Fuse, 2);

        assert!(!statuses.tick_kind(StatusKind::Fuse));
        assert!(statuses.tick_kind(StatusKind::Fuse));
        assert!(statuses.is_empty());
    }
}
