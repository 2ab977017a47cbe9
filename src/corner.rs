//! Corners of unit squares and the equivalence between them.
//!
//! A corner is named by the square it belongs to plus which of the four
//! corners it is. Edge-adjacent squares share two physical points, so the
//! same point has several names:
//!
//! ```text
//!         (0,1)
//!   NW +-------+ NE
//!      |       |
//!   SW +-------+ SE  <- (0,1) SE == (0,0) NE
//!   NW +-------+ NE
//!      |       |
//!   SW +-------+ SE
//!         (0,0)
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Position, PositionDelta};

/// One of the four corners of a unit square.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum CornerId {
    #[serde(rename = "NW")]
    NorthWest = 0,
    #[serde(rename = "NE")]
    NorthEast = 1,
    #[serde(rename = "SE")]
    SouthEast = 2,
    #[serde(rename = "SW")]
    SouthWest = 3,
}

impl CornerId {
    pub const COUNT: usize = 4;

    pub const ALL: [CornerId; CornerId::COUNT] = [
        CornerId::NorthWest,
        CornerId::NorthEast,
        CornerId::SouthEast,
        CornerId::SouthWest,
    ];

    /// Convert from index (0-3) to CornerId.
    #[inline]
    pub fn from_index(idx: usize) -> Option<CornerId> {
        CornerId::ALL.get(idx).copied()
    }

    /// Two-letter compass name.
    pub const fn as_str(self) -> &'static str {
        match self {
            CornerId::NorthWest => "NW",
            CornerId::NorthEast => "NE",
            CornerId::SouthEast => "SE",
            CornerId::SouthWest => "SW",
        }
    }
}

impl fmt::Display for CornerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid corner id {0:?}, expected one of NW, NE, SE, SW")]
pub struct ParseCornerIdError(String);

impl FromStr for CornerId {
    type Err = ParseCornerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CornerId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCornerIdError(s.to_string()))
    }
}

/// A specific corner of a specific square.
///
/// Distinct values can denote the same physical point; use
/// [`are_equivalent`] rather than `==` to compare points.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Corner {
    pub position: Position,
    pub id: CornerId,
}

impl Corner {
    #[inline]
    pub const fn new(position: Position, id: CornerId) -> Corner {
        Corner { position, id }
    }

    /// All four corners of the square at `position`, in `CornerId::ALL` order.
    pub fn all_of(position: Position) -> [Corner; CornerId::COUNT] {
        CornerId::ALL.map(|id| Corner::new(position, id))
    }

    /// Same as [`are_equivalent`].
    #[inline]
    pub fn is_equivalent(self, other: Corner) -> bool {
        are_equivalent(self, other)
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.position.x, self.position.y, self.id)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCornerError {
    #[error("expected `x, y, ID`, found {0} field(s)")]
    FieldCount(usize),
    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] ParseIntError),
    #[error(transparent)]
    Id(#[from] ParseCornerIdError),
}

impl FromStr for Corner {
    type Err = ParseCornerError;

    /// Parses `x, y, ID`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(ParseCornerError::FieldCount(fields.len()));
        }

        let x = fields[0].parse::<i32>()?;
        let y = fields[1].parse::<i32>()?;
        let id = fields[2].parse::<CornerId>()?;
        Ok(Corner::new(Position::new(x, y), id))
    }
}

/// Check whether two corners denote the same physical grid point.
///
/// Corners of the same square match only themselves. Across squares, only
/// edge-adjacent neighbors can share a point, and only through one corner
/// pair per direction; diagonal neighbors and anything further apart never
/// match. Works over the whole `i32` range.
pub fn are_equivalent(lhs: Corner, rhs: Corner) -> bool {
    use CornerId::*;

    if lhs.position == rhs.position {
        return lhs.id == rhs.id;
    }

    // Offset of lhs from rhs, widened so squares at opposite ends of the
    // i32 range cannot wrap into neighbors.
    let offset = (
        i64::from(lhs.position.x) - i64::from(rhs.position.x),
        i64::from(lhs.position.y) - i64::from(rhs.position.y),
    );
    let at = |delta: PositionDelta| offset == (i64::from(delta.dx), i64::from(delta.dy));

    match lhs.id {
        NorthWest => match rhs.id {
            NorthEast => at(PositionDelta::RIGHT),
            SouthWest => at(PositionDelta::DOWN),
            NorthWest | SouthEast => false,
        },
        NorthEast => match rhs.id {
            SouthEast => at(PositionDelta::DOWN),
            NorthWest => at(PositionDelta::LEFT),
            NorthEast | SouthWest => false,
        },
        SouthEast => match rhs.id {
            SouthWest => at(PositionDelta::LEFT),
            NorthEast => at(PositionDelta::UP),
            SouthEast | NorthWest => false,
        },
        SouthWest => match rhs.id {
            NorthWest => at(PositionDelta::UP),
            SouthEast => at(PositionDelta::RIGHT),
            SouthWest | NorthEast => false,
        },
    }
}
