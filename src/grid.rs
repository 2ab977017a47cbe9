//! Integer grid coordinates.
//!
//! `y` grows upward, so the square at `(x, y)` has `(x, y + 1)` as its
//! northern neighbor.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A unit square on the grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// The four edge-adjacent neighbors, in left, up, right, down order.
    pub fn neighbors(self) -> [Position; 4] {
        PositionDelta::UNIT_OFFSETS.map(|delta| self + delta)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A translation between two positions.
///
/// Deliberately a separate type from [`Position`]: a delta can be added to a
/// position but never compared with one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct PositionDelta {
    pub dx: i32,
    pub dy: i32,
}

impl PositionDelta {
    pub const LEFT: PositionDelta = PositionDelta { dx: -1, dy: 0 };
    pub const UP: PositionDelta = PositionDelta { dx: 0, dy: 1 };
    pub const RIGHT: PositionDelta = PositionDelta { dx: 1, dy: 0 };
    pub const DOWN: PositionDelta = PositionDelta { dx: 0, dy: -1 };

    pub const UNIT_OFFSETS: [PositionDelta; 4] = [Self::LEFT, Self::UP, Self::RIGHT, Self::DOWN];

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> PositionDelta {
        PositionDelta { dx, dy }
    }
}

impl Add<PositionDelta> for Position {
    type Output = Position;

    #[inline]
    fn add(self, delta: PositionDelta) -> Position {
        Position::new(self.x + delta.dx, self.y + delta.dy)
    }
}

impl Sub<PositionDelta> for Position {
    type Output = Position;

    #[inline]
    fn sub(self, delta: PositionDelta) -> Position {
        Position::new(self.x - delta.dx, self.y - delta.dy)
    }
}

impl Sub<Position> for Position {
    type Output = PositionDelta;

    #[inline]
    fn sub(self, other: Position) -> PositionDelta {
        PositionDelta::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for PositionDelta {
    type Output = PositionDelta;

    #[inline]
    fn neg(self) -> PositionDelta {
        PositionDelta::new(-self.dx, -self.dy)
    }
}

impl Add for PositionDelta {
    type Output = PositionDelta;

    #[inline]
    fn add(self, other: PositionDelta) -> PositionDelta {
        PositionDelta::new(self.dx + other.dx, self.dy + other.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub_delta() {
        let pos = Position::new(2, -3);
        let delta = PositionDelta::new(5, 7);

        assert_eq!(pos + delta, Position::new(7, 4));
        assert_eq!(pos - delta, Position::new(-3, -10));
        assert_eq!((pos + delta) - delta, pos);
    }

    #[test]
    fn test_position_difference() {
        let a = Position::new(4, 1);
        let b = Position::new(1, 3);

        assert_eq!(a - b, PositionDelta::new(3, -2));
        assert_eq!(b + (a - b), a);
    }

    #[test]
    fn test_negate_delta() {
        assert_eq!(-PositionDelta::new(3, -2), PositionDelta::new(-3, 2));
        assert_eq!(-PositionDelta::LEFT, PositionDelta::RIGHT);
        assert_eq!(-PositionDelta::UP, PositionDelta::DOWN);
    }

    #[test]
    fn test_unit_offsets_cancel() {
        let sum = PositionDelta::UNIT_OFFSETS
            .iter()
            .fold(PositionDelta::default(), |acc, &d| acc + d);
        assert_eq!(sum, PositionDelta::default());
    }

    #[test]
    fn test_neighbors() {
        let neighbors = Position::new(0, 0).neighbors();
        assert_eq!(
            neighbors,
            [
                Position::new(-1, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(0, -1),
            ]
        );
    }

    #[test]
    fn test_position_ordering() {
        // x first, then y
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(-1, 2).to_string(), "(-1, 2)");
    }
}
