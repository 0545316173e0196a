//! Actor-related state types.
//!
//! The player and every enemy share [`ActorState`]. Behaviour differences are
//! carried by the [`Archetype`] discriminant and dispatched through the enemy
//! policy table rather than through per-type structs.

use super::skills::{SkillId, SkillSlot, SkillSlots};
use super::status::{StatusEffects, StatusKind};
use super::{EntityId, HexDirection, Position};

/// Which side an actor fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Player,
    Enemy,
}

/// Static numbers attached to an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchetypeStats {
    pub max_hp: i32,
    /// Population budget cost; zero means the archetype is never spawned by
    /// floor generation.
    pub cost: u32,
    /// First floor on which the archetype may be spawned.
    pub min_floor: u32,
    /// Damage dealt when one of its telegraphs lands.
    pub damage: i32,
}

/// Actor archetype tag.
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
pub enum Archetype {
    Hero,
    Footman,
    Archer,
    Bomber,
    ShieldBearer,
    Warlock,
    Assassin,
    Golem,
    Bomb,
}

impl Archetype {
    pub const fn stats(self) -> ArchetypeStats {
        let (max_hp, cost, min_floor, damage) = match self {
            Archetype::Hero => (3, 0, 0, 1),
            Archetype::Footman => (1, 1, 1, 1),
            Archetype::Archer => (1, 2, 1, 1),
            Archetype::Bomber => (1, 2, 2, 0),
            Archetype::ShieldBearer => (2, 3, 3, 1),
            Archetype::Warlock => (1, 3, 4, 1),
            Archetype::Assassin => (1, 3, 5, 2),
            Archetype::Golem => (3, 4, 6, 2),
            Archetype::Bomb => (1, 0, 0, 1),
        };
        ArchetypeStats {
            max_hp,
            cost,
            min_floor,
            damage,
        }
    }

    /// Whether floor generation may place this archetype on `floor`.
    pub const fn spawnable_on(self, floor: u32) -> bool {
        let stats = self.stats();
        stats.cost > 0 && stats.min_floor <= floor
    }

    /// Short prefix used when generating ids.
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Archetype::Hero => "p",
            Archetype::Footman => "fm",
            Archetype::Archer => "ar",
            Archetype::Bomber => "bo",
            Archetype::ShieldBearer => "sh",
            Archetype::Warlock => "wl",
            Archetype::Assassin => "as",
            Archetype::Golem => "go",
            Archetype::Bomb => "bm",
        }
    }

    /// Human-readable name used in the message log.
    pub const fn label(self) -> &'static str {
        match self {
            Archetype::Hero => "Hero",
            Archetype::Footman => "Footman",
            Archetype::Archer => "Archer",
            Archetype::Bomber => "Bomber",
            Archetype::ShieldBearer => "Shield-bearer",
            Archetype::Warlock => "Warlock",
            Archetype::Assassin => "Assassin",
            Archetype::Golem => "Golem",
            Archetype::Bomb => "Bomb",
        }
    }

    /// Whether the archetype always blocks frontal damage.
    pub const fn carries_shield(self) -> bool {
        matches!(self, Archetype::ShieldBearer)
    }

    /// Whether the archetype stays hidden until it is next to the player.
    pub const fn lurks(self) -> bool {
        matches!(self, Archetype::Assassin)
    }
}

/// What kind of attack a telegraph announces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum IntentKind {
    Strike,
    Aim,
    Bomb,
    Cast,
    Backstab,
    Smash,
}

/// Two-phase attack state persisted on the actor across one turn boundary.
///
/// `Idle -> Telegraphing -> (resolved | cancelled) -> Idle`. A telegraph set
/// during an actor's turn is resolved or cleared before that actor's next
/// decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    #[default]
    Idle,
    Telegraphing { kind: IntentKind, target: Position },
}

impl Intent {
    pub fn is_telegraphing(&self) -> bool {
        matches!(self, Intent::Telegraphing { .. })
    }

    pub fn target(&self) -> Option<Position> {
        match self {
            Intent::Idle => None,
            Intent::Telegraphing { target, .. } => Some(*target),
        }
    }
}

/// Complete actor state.
///
/// # Invariants
///
/// - `0 <= hp <= max_hp`
/// - an enemy with `hp == 0` never survives the resolution pass that
///   damaged it
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub role: Role,
    pub archetype: Archetype,
    pub position: Position,
    /// Position at the start of the current turn.
    pub previous_position: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub statuses: StatusEffects,
    /// Temporary armor; absorbs damage and resets every turn.
    ///
    /// No skill or upgrade grants armor yet, so it is only non-zero in
    /// snapshots injected with `LoadState`. The damage funnel and the
    /// per-turn reset still honour it.
    pub armor: i32,
    pub skills: SkillSlots,
    pub intent: Intent,
    pub facing: HexDirection,
    /// False while the actor is stealthed.
    pub visible: bool,
    /// Turns the actor must sit out before acting again.
    pub lockout: u32,
}

impl ActorState {
    /// Create an actor of `archetype` at full health.
    pub fn new(id: EntityId, role: Role, archetype: Archetype, position: Position) -> Self {
        let max_hp = archetype.stats().max_hp;
        Self {
            id,
            role,
            archetype,
            position,
            previous_position: position,
            hp: max_hp,
            max_hp,
            statuses: StatusEffects::new(),
            armor: 0,
            skills: SkillSlots::new(),
            intent: Intent::Idle,
            facing: HexDirection::NorthWest,
            visible: true,
            lockout: 0,
        }
    }

    pub fn player(position: Position, max_hp: i32) -> Self {
        let mut actor = Self::new(EntityId::player(), Role::Player, Archetype::Hero, position);
        actor.max_hp = max_hp.max(1);
        actor.hp = actor.max_hp;
        actor.skills = super::skills::default_loadout();
        actor
    }

    pub fn enemy(id: EntityId, archetype: Archetype, position: Position) -> Self {
        let mut actor = Self::new(id, Role::Enemy, archetype, position);
        actor.facing = HexDirection::SouthEast;
        actor.visible = !archetype.lurks();
        actor
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }

    pub fn is_stunned(&self) -> bool {
        self.statuses.has(StatusKind::Stunned)
    }

    pub fn skill(&self, id: SkillId) -> Option<&SkillSlot> {
        self.skills.iter().find(|slot| slot.id == id)
    }

    pub fn skill_mut(&mut self, id: SkillId) -> Option<&mut SkillSlot> {
        self.skills.iter_mut().find(|slot| slot.id == id)
    }

    /// Heal by `amount`, clamped to `max_hp`.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    /// Move to `destination`, turning to face the direction of travel.
    pub fn step_to(&mut self, destination: Position) {
        if let Some(facing) = self.position.facing_towards(destination) {
            self.facing = facing;
        }
        self.position = destination;
    }

    /// Turn towards `target` without moving.
    pub fn face(&mut self, target: Position) {
        if let Some(facing) = self.position.facing_towards(target) {
            self.facing = facing;
        }
    }

    /// Whether damage arriving from `source` is stopped by this actor's shield.
    ///
    /// Shield-bearers always guard their front arc; other actors only while
    /// [`StatusKind::Shielded`] is active.
    pub fn blocks_from(&self, source: Position) -> bool {
        if !(self.archetype.carries_shield() || self.statuses.has(StatusKind::Shielded)) {
            return false;
        }
        self.position
            .facing_towards(source)
            .is_some_and(|incoming| self.facing.covers(incoming))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shield_bearer_blocks_only_front_arc() {
        let mut bearer = ActorState::enemy(
            EntityId::new("sh-test01"),
            Archetype::ShieldBearer,
            Position::new(4, 4),
        );
        bearer.facing = HexDirection::East;

        assert!(bearer.blocks_from(Position::new(5, 4)));
        assert!(bearer.blocks_from(Position::new(5, 3)));
        assert!(bearer.blocks_from(Position::new(4, 5)));
        assert!(!bearer.blocks_from(Position::new(3, 4)));
        assert!(!bearer.blocks_from(Position::new(4, 3)));
    }

    #[test]
    fn ordinary_actor_needs_shielded_status() {
        let mut footman =
            ActorState::enemy(EntityId::new("fm-test01"), Archetype::Footman, Position::new(4, 4));
        footman.facing = HexDirection::East;
        assert!(!footman.blocks_from(Position::new(5, 4)));

        footman.statuses.apply(StatusKind::Shielded, 1);
        assert!(footman.blocks_from(Position::new(5, 4)));
    }

    #[test]
    fn heal_is_clamped() {
        let mut player = ActorState::player(Position::new(2, 10), 3);
        player.hp = 1;
        player.heal(5);
        assert_eq!(player.hp, 3);
        assert_eq!(player.skills.len(), 4);
    }
}
