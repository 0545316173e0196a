//! Equipped skills, cooldowns and upgrades.
//!
//! Every skill has a fixed set of upgrades it can receive. Skills read their
//! upgrades by flag membership at execute time; [`SkillSlot::acquire`] checks
//! membership in the fixed set at acquisition time so corrupted data fails
//! fast instead of silently doing nothing.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

bitflags! {
    /// Set of owned or applicable upgrades.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Upgrades: u16 {
        const SPEAR_RANGE  = 1 << 0;
        const JUMP_RANGE   = 1 << 1;
        const JUMP_STUN    = 1 << 2;
        const BASH_STUN    = 1 << 3;
        const EXTRA_HEART  = 1 << 4;
        const REGENERATION = 1 << 5;
    }
}

/// Identifier of an equippable skill.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillId {
    BasicAttack,
    SpearThrow,
    Jump,
    ShieldBash,
}

impl SkillId {
    /// Turns the skill stays unavailable after use.
    pub const fn cooldown(self) -> u32 {
        match self {
            SkillId::BasicAttack | SkillId::SpearThrow => 0,
            SkillId::Jump => 3,
            SkillId::ShieldBash => 2,
        }
    }

    /// The fixed set of upgrades this skill accepts.
    pub const fn upgrade_set(self) -> Upgrades {
        match self {
            SkillId::BasicAttack => Upgrades::empty(),
            SkillId::SpearThrow => Upgrades::SPEAR_RANGE,
            SkillId::Jump => Upgrades::JUMP_RANGE.union(Upgrades::JUMP_STUN),
            SkillId::ShieldBash => Upgrades::BASH_STUN,
        }
    }
}

/// Identifier of a shrine upgrade.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UpgradeId {
    SpearRange,
    JumpRange,
    JumpStun,
    BashStun,
    ExtraHeart,
    Regeneration,
}

impl UpgradeId {
    pub const fn flag(self) -> Upgrades {
        match self {
            UpgradeId::SpearRange => Upgrades::SPEAR_RANGE,
            UpgradeId::JumpRange => Upgrades::JUMP_RANGE,
            UpgradeId::JumpStun => Upgrades::JUMP_STUN,
            UpgradeId::BashStun => Upgrades::BASH_STUN,
            UpgradeId::ExtraHeart => Upgrades::EXTRA_HEART,
            UpgradeId::Regeneration => Upgrades::REGENERATION,
        }
    }

    /// Skill the upgrade attaches to, or `None` for actor-level upgrades.
    pub const fn skill(self) -> Option<SkillId> {
        match self {
            UpgradeId::SpearRange => Some(SkillId::SpearThrow),
            UpgradeId::JumpRange | UpgradeId::JumpStun => Some(SkillId::Jump),
            UpgradeId::BashStun => Some(SkillId::ShieldBash),
            UpgradeId::ExtraHeart | UpgradeId::Regeneration => None,
        }
    }
}

/// Errors raised while attaching an upgrade to a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeError {
    #[error("{upgrade} does not apply to {skill}")]
    NotApplicable { skill: SkillId, upgrade: UpgradeId },

    #[error("{0} is already owned")]
    AlreadyOwned(UpgradeId),

    #[error("{0} requires a skill that is not equipped")]
    SkillMissing(UpgradeId),

    #[error("{0} is not on offer")]
    NotOffered(UpgradeId),
}

impl GameError for UpgradeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            UpgradeError::NotApplicable { .. } | UpgradeError::SkillMissing(_) => {
                ErrorSeverity::Internal
            }
            UpgradeError::AlreadyOwned(_) | UpgradeError::NotOffered(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            UpgradeError::NotApplicable { .. } => "UPGRADE_NOT_APPLICABLE",
            UpgradeError::AlreadyOwned(_) => "UPGRADE_ALREADY_OWNED",
            UpgradeError::SkillMissing(_) => "UPGRADE_SKILL_MISSING",
            UpgradeError::NotOffered(_) => "UPGRADE_NOT_OFFERED",
        }
    }
}

/// An equipped skill with its cooldown and acquired upgrades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSlot {
    pub id: SkillId,
    /// Turns until the skill can be used again.
    pub cooldown: u32,
    pub upgrades: Upgrades,
}

impl SkillSlot {
    pub fn new(id: SkillId) -> Self {
        Self {
            id,
            cooldown: 0,
            upgrades: Upgrades::empty(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Attach `upgrade`, validating it against the skill's fixed set.
    pub fn acquire(&mut self, upgrade: UpgradeId) -> Result<(), UpgradeError> {
        let flag = upgrade.flag();
        if !self.id.upgrade_set().contains(flag) {
            return Err(UpgradeError::NotApplicable {
                skill: self.id,
                upgrade,
            });
        }
        if self.upgrades.contains(flag) {
            return Err(UpgradeError::AlreadyOwned(upgrade));
        }
        self.upgrades.insert(flag);
        Ok(())
    }
}

/// Bounded list of equipped skills in loadout order.
pub type SkillSlots = ArrayVec<SkillSlot, { GameConfig::MAX_SKILLS }>;

/// Default player loadout.
pub fn default_loadout() -> SkillSlots {
    [
        SkillId::BasicAttack,
        SkillId::SpearThrow,
        SkillId::Jump,
        SkillId::ShieldBash,
    ]
    .into_iter()
    .map(SkillSlot::new)
    .collect()
}
