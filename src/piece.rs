//! Oriented polyominoes, their symmetries and their free corners.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corner::{are_equivalent, Corner};
use crate::grid::{Position, PositionDelta};

/// One of the 8 symmetries of the square.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Transform {
    Identity,
    /// Rotate 90° clockwise.
    Rotate90,
    Rotate180,
    /// Rotate 270° clockwise.
    Rotate270,
    /// Flip left-right.
    ReflectVertical,
    /// Flip top-bottom.
    ReflectHorizontal,
    /// Reflect across the line y = x.
    ReflectMainDiagonal,
    /// Reflect across the line y = -x.
    ReflectAntiDiagonal,
}

impl Transform {
    pub const ALL: [Transform; 8] = [
        Transform::Identity,
        Transform::Rotate90,
        Transform::Rotate180,
        Transform::Rotate270,
        Transform::ReflectVertical,
        Transform::ReflectHorizontal,
        Transform::ReflectMainDiagonal,
        Transform::ReflectAntiDiagonal,
    ];

    /// Map a position through this transform, about the origin.
    #[inline]
    pub fn apply(self, pos: Position) -> Position {
        let Position { x, y } = pos;
        match self {
            Transform::Identity => Position::new(x, y),
            Transform::Rotate90 => Position::new(y, -x),
            Transform::Rotate180 => Position::new(-x, -y),
            Transform::Rotate270 => Position::new(-y, x),
            Transform::ReflectVertical => Position::new(-x, y),
            Transform::ReflectHorizontal => Position::new(x, -y),
            Transform::ReflectMainDiagonal => Position::new(y, x),
            Transform::ReflectAntiDiagonal => Position::new(-y, -x),
        }
    }
}

/// A polyomino in one fixed rotation/reflection.
///
/// Squares are origin-relative. Connectivity is not checked, and the
/// square order is preserved as given.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrientedPiece {
    squares: Vec<Position>,
}

impl OrientedPiece {
    pub fn new(squares: Vec<Position>) -> OrientedPiece {
        OrientedPiece { squares }
    }

    /// Build a piece from `(x, y)` pairs.
    pub fn from_coords(coords: &[(i32, i32)]) -> OrientedPiece {
        OrientedPiece::new(coords.iter().copied().map(Position::from).collect())
    }

    #[inline]
    pub fn squares(&self) -> &[Position] {
        &self.squares
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Every corner of every square, four per square, repeats included.
    pub fn corners(&self) -> impl Iterator<Item = Corner> + '_ {
        self.squares.iter().flat_map(|&pos| Corner::all_of(pos))
    }

    /// The free corners of this piece. See [`piece_corners`].
    pub fn free_corners(&self) -> BTreeSet<Corner> {
        piece_corners(self)
    }

    /// Shift every square by `delta`.
    pub fn translated(&self, delta: PositionDelta) -> OrientedPiece {
        OrientedPiece::new(self.squares.iter().map(|&pos| pos + delta).collect())
    }

    /// The absolute squares covered when the piece's origin sits at `position`.
    pub fn placed_at(&self, position: Position) -> OrientedPiece {
        self.translated(position - Position::ORIGIN)
    }

    pub fn transformed(&self, transform: Transform) -> OrientedPiece {
        OrientedPiece::new(self.squares.iter().map(|&pos| transform.apply(pos)).collect())
    }

    /// Translate so the minimum x and y are both 0, with squares sorted and
    /// repeats dropped.
    ///
    /// Two pieces are the same shape in the same orientation iff their
    /// normalized forms are equal.
    pub fn normalized(&self) -> OrientedPiece {
        let min_x = self.squares.iter().map(|p| p.x).min().unwrap_or(0);
        let min_y = self.squares.iter().map(|p| p.y).min().unwrap_or(0);

        let mut squares: Vec<Position> = self
            .squares
            .iter()
            .map(|&pos| pos - PositionDelta::new(min_x, min_y))
            .collect();
        squares.sort();
        squares.dedup();
        OrientedPiece::new(squares)
    }

    /// All distinct normalized orientations, tagged with the first transform
    /// (in `Transform::ALL` order) that produces each one.
    pub fn orientations(&self) -> Vec<(Transform, OrientedPiece)> {
        let mut seen = BTreeSet::new();
        let mut result = Vec::with_capacity(Transform::ALL.len());

        for t in Transform::ALL {
            let oriented = self.transformed(t).normalized();
            if seen.insert(oriented.clone()) {
                result.push((t, oriented));
            }
        }
        result
    }
}

impl From<Vec<Position>> for OrientedPiece {
    fn from(squares: Vec<Position>) -> Self {
        OrientedPiece::new(squares)
    }
}

/// Compute the free corners of a piece.
///
/// A corner is kept iff no other corner of the piece (by value) denotes the
/// same point. Corners shared between two squares of the piece are internal
/// and drop out; what remains are the outward corners a neighboring piece can
/// touch.
pub fn piece_corners(piece: &OrientedPiece) -> BTreeSet<Corner> {
    let all: Vec<Corner> = piece.corners().collect();

    let free: BTreeSet<Corner> = all
        .iter()
        .copied()
        .filter(|&corner| {
            !all.iter()
                .any(|&other| other != corner && are_equivalent(corner, other))
        })
        .collect();

    log::trace!(
        "piece with {} square(s): {} corner(s), {} free",
        piece.len(),
        all.len(),
        free.len()
    );
    free
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("piece has no filled squares")]
    Empty,
    #[error("invalid cell {found:?} at row {row}, column {column}; expected '#' or '.'")]
    InvalidCell { found: char, row: usize, column: usize },
    #[error("{0} rows or columns do not fit in i32 coordinates")]
    TooLarge(usize),
}

/// A row count or column index as a coordinate.
fn coordinate(index: usize) -> Result<i32, ParsePieceError> {
    i32::try_from(index).map_err(|_| ParsePieceError::TooLarge(index))
}

impl FromStr for OrientedPiece {
    type Err = ParsePieceError;

    /// Parses rows of `#` and `.`, separated by `/` or newlines.
    ///
    /// The first row is the top of the piece; the last row is y = 0 and the
    /// first column is x = 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let height = coordinate(rows.len())?;
        let mut squares = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let y = height - 1 - coordinate(row)?;
            for (column, ch) in line.chars().enumerate() {
                match ch {
                    '#' => squares.push(Position::new(coordinate(column)?, y)),
                    '.' => {}
                    found => return Err(ParsePieceError::InvalidCell { found, row, column }),
                }
            }
        }

        if squares.is_empty() {
            return Err(ParsePieceError::Empty);
        }
        Ok(OrientedPiece::new(squares))
    }
}

impl fmt::Display for OrientedPiece {
    /// Row notation over the bounding box, top row first, rows joined by `/`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.squares.is_empty() {
            return Ok(());
        }

        let min_x = self.squares.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = self.squares.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = self.squares.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = self.squares.iter().map(|p| p.y).max().unwrap_or(0);

        for y in (min_y..=max_y).rev() {
            if y != max_y {
                f.write_str("/")?;
            }
            for x in min_x..=max_x {
                let filled = self.squares.contains(&Position::new(x, y));
                f.write_str(if filled { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
