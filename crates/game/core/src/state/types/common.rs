use std::fmt;

use arrayvec::ArrayString;

/// Unique identifier for any actor tracked in the state.
///
/// Ids are short strings so that ids generated by the draw source stay stable
/// across refactors; the fixed capacity keeps the type `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(ArrayString<16>);

impl EntityId {
    const PLAYER_ID: &'static str = "player";

    /// Builds an id from `raw`, truncating anything beyond the capacity.
    pub fn new(raw: &str) -> Self {
        let mut id = ArrayString::new();
        for ch in raw.chars() {
            if id.try_push(ch).is_err() {
                break;
            }
        }
        Self(id)
    }

    /// Reserved identifier for the controllable player character.
    pub fn player() -> Self {
        Self::new(Self::PLAYER_ID)
    }

    /// Returns true if this entity represents the player.
    #[inline]
    pub fn is_player(&self) -> bool {
        self.0.as_str() == Self::PLAYER_ID
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The six hex directions in fixed evaluation order.
///
/// Order matters: every "first match" scan and every tie set is built by
/// walking [`HexDirection::ALL`], so reordering the variants changes replays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    #[default]
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::NorthEast,
        HexDirection::NorthWest,
        HexDirection::West,
        HexDirection::SouthWest,
        HexDirection::SouthEast,
    ];

    /// Axial `(dq, dr)` offset of one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            HexDirection::East => (1, 0),
            HexDirection::NorthEast => (1, -1),
            HexDirection::NorthWest => (0, -1),
            HexDirection::West => (-1, 0),
            HexDirection::SouthWest => (-1, 1),
            HexDirection::SouthEast => (0, 1),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index` modulo six.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    /// Rotate by `steps` sixths of a turn (positive is counter-clockwise).
    pub const fn rotate(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(6) as usize)
    }

    pub const fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// Whether `other` is this facing or one of its two neighbouring facings.
    pub fn covers(self, other: HexDirection) -> bool {
        other == self || other == self.rotate(1) || other == self.rotate(-1)
    }
}

/// Axial hex coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub q: i32,
    pub r: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Hex distance in steps, saturating at `u32::MAX`.
    pub fn distance(self, other: Position) -> u32 {
        let (dq, dr) = self.delta_to(other);
        let steps = (dq.abs() + dr.abs() + (dq + dr).abs()) / 2;
        u32::try_from(steps).unwrap_or(u32::MAX)
    }

    /// Axial difference widened to `i64` so any pair of coordinates fits.
    fn delta_to(self, other: Position) -> (i64, i64) {
        (
            i64::from(other.q) - i64::from(self.q),
            i64::from(other.r) - i64::from(self.r),
        )
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self.distance(other) == 1
    }

    pub fn neighbor(self, direction: HexDirection) -> Position {
        self.offset(direction, 1)
    }

    pub fn offset(self, direction: HexDirection, steps: i32) -> Position {
        let (dq, dr) = direction.delta();
        Position::new(self.q + dq * steps, self.r + dr * steps)
    }

    /// Neighbours in [`HexDirection::ALL`] order.
    pub fn neighbors(self) -> [Position; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }

    /// Direction of the straight axial line from `self` to `other`, if any.
    pub fn direction_to(self, other: Position) -> Option<HexDirection> {
        let (dq, dr) = self.delta_to(other);
        if dq == 0 && dr == 0 {
            return None;
        }
        let unit = match (dq, dr) {
            (0, dr) => (0, dr.signum()),
            (dq, 0) => (dq.signum(), 0),
            (dq, dr) if dq == -dr => (dq.signum(), dr.signum()),
            _ => return None,
        };
        HexDirection::ALL
            .into_iter()
            .find(|direction| {
                let (q, r) = direction.delta();
                (i64::from(q), i64::from(r)) == unit
            })
    }

    /// Whether `other` lies on one of the three axial lines through `self`.
    pub fn is_in_line_with(self, other: Position) -> bool {
        self.direction_to(other).is_some()
    }

    /// Cells strictly between `self` and `other` along a straight line.
    ///
    /// Returns `None` when the two cells are not in line.
    pub fn cells_between(self, other: Position) -> Option<Vec<Position>> {
        let direction = self.direction_to(other)?;
        let steps = self.distance(other) as i32;
        Some((1..steps).map(|step| self.offset(direction, step)).collect())
    }

    /// The hex direction that best approximates the vector towards `other`.
    ///
    /// Uses the integer cube-coordinate dot product, so the result is exact
    /// and platform independent. Ties resolve to the earliest direction in
    /// [`HexDirection::ALL`].
    pub fn facing_towards(self, other: Position) -> Option<HexDirection> {
        let (dx, dz) = self.delta_to(other);
        let dy = -dx - dz;
        if dx == 0 && dz == 0 {
            return None;
        }
        let mut best = HexDirection::East;
        let mut best_score = i64::MIN;
        for direction in HexDirection::ALL {
            let (ux, uz) = direction.delta();
            let (ux, uz) = (i64::from(ux), i64::from(uz));
            let uy = -ux - uz;
            let score = dx * ux + dy * uy + dz * uz;
            if score > best_score {
                best = direction;
                best_score = score;
            }
        }
        Some(best)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_matches_axial_formula() {
        let origin = Position::new(2, 10);
        assert_eq!(origin.distance(Position::new(2, 8)), 2);
        assert_eq!(origin.distance(Position::new(6, 0)), 10);
        assert_eq!(origin.distance(Position::new(3, 9)), 1);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let low = Position::new(i32::MIN, i32::MIN);
        let high = Position::new(i32::MAX, i32::MAX);
        assert_eq!(low.distance(high), u32::MAX);
        assert_eq!(Position::ORIGIN.distance(Position::new(i32::MAX, 0)), i32::MAX as u32);
        assert_eq!(low.direction_to(high), None);
        assert_eq!(
            Position::ORIGIN.direction_to(Position::new(i32::MIN, 0)),
            Some(HexDirection::West)
        );
        assert_eq!(
            Position::ORIGIN.facing_towards(Position::new(0, i32::MAX)),
            Some(HexDirection::SouthEast)
        );
    }

    #[test]
    fn straight_lines_follow_the_three_axes() {
        let origin = Position::new(4, 4);
        assert_eq!(
            origin.direction_to(Position::new(4, 1)),
            Some(HexDirection::NorthWest)
        );
        assert_eq!(
            origin.direction_to(Position::new(7, 1)),
            Some(HexDirection::NorthEast)
        );
        assert_eq!(origin.direction_to(Position::new(5, 2)), None);
        assert_eq!(
            origin.cells_between(Position::new(1, 4)),
            Some(vec![Position::new(3, 4), Position::new(2, 4)])
        );
    }

    #[test]
    fn facing_covers_front_arc() {
        let facing = HexDirection::East;
        assert!(facing.covers(HexDirection::NorthEast));
        assert!(facing.covers(HexDirection::SouthEast));
        assert!(!facing.covers(HexDirection::West));
        assert!(!facing.covers(HexDirection::NorthWest));
    }

    #[test]
    fn facing_towards_picks_nearest_direction() {
        let origin = Position::new(4, 4);
        assert_eq!(
            origin.facing_towards(Position::new(6, 4)),
            Some(HexDirection::East)
        );
        assert_eq!(
            origin.facing_towards(Position::new(4, 6)),
            Some(HexDirection::SouthEast)
        );
        assert_eq!(origin.facing_towards(origin), None);
    }

    #[test]
    fn player_id_is_reserved() {
        assert!(EntityId::player().is_player());
        assert!(!EntityId::new("e-abc123").is_player());
        assert_eq!(EntityId::new("a-very-long-identifier-here").as_str().len(), 16);
    }
}
