//! Corner-to-corner placement of a new piece.
//!
//! Given a target corner and a piece, find every origin position at which
//! one of the piece's free corners, with the same corner id, lands exactly
//! on the target.

use serde::{Deserialize, Serialize};

use crate::corner::Corner;
use crate::grid::{Position, PositionDelta};
use crate::piece::{piece_corners, OrientedPiece, Transform};

/// A candidate placement: which orientation of the base piece, and where
/// its origin goes.
///
/// `position` is the origin of the *normalized* orientation, i.e.
/// `base.transformed(transform).normalized()`, not of the bare transformed
/// squares. Use [`PieceMove::squares`] to get the covered cells.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PieceMove {
    pub transform: Transform,
    pub position: Position,
}

impl PieceMove {
    /// The absolute squares `base` covers when played with this move.
    pub fn squares(&self, base: &OrientedPiece) -> OrientedPiece {
        base.transformed(self.transform)
            .normalized()
            .placed_at(self.position)
    }
}

/// The translation that brings `corner`'s square onto the piece origin.
#[inline]
pub fn displacement(corner: Corner) -> PositionDelta {
    -(corner.position - Position::ORIGIN)
}

/// Candidate origin positions for `piece` so that one of its free corners
/// coincides with `corner`.
///
/// Only free corners with the same id as the target are considered. The
/// result follows the free-corner set order.
pub fn oriented_piece_move_positions(piece: &OrientedPiece, corner: Corner) -> Vec<Position> {
    let positions: Vec<Position> = piece_corners(piece)
        .into_iter()
        .filter(|own| own.id == corner.id)
        .map(|own| corner.position + displacement(own))
        .collect();

    log::trace!(
        "{} position(s) for piece {} at corner {}",
        positions.len(),
        piece,
        corner
    );
    positions
}

/// Candidate placements of every distinct orientation of `piece` at `corner`.
pub fn piece_moves(piece: &OrientedPiece, corner: Corner) -> Vec<PieceMove> {
    let mut moves = Vec::new();

    for (transform, oriented) in piece.orientations() {
        moves.extend(
            oriented_piece_move_positions(&oriented, corner)
                .into_iter()
                .map(|position| PieceMove { transform, position }),
        );
    }

    log::debug!("{} move(s) for piece {} at corner {}", moves.len(), piece, corner);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corner::CornerId;

    fn corner(x: i32, y: i32, id: CornerId) -> Corner {
        Corner::new(Position::new(x, y), id)
    }

    fn domino() -> OrientedPiece {
        OrientedPiece::from_coords(&[(0, 0), (1, 0)])
    }

    #[test]
    fn test_displacement_negates_position() {
        assert_eq!(
            displacement(corner(1, 0, CornerId::SouthEast)),
            PositionDelta::new(-1, 0)
        );
        assert_eq!(
            displacement(corner(-2, 3, CornerId::NorthWest)),
            PositionDelta::new(2, -3)
        );
        assert_eq!(
            displacement(corner(0, 0, CornerId::SouthWest)),
            PositionDelta::default()
        );
    }

    #[test]
    fn test_domino_at_south_east() {
        let positions = oriented_piece_move_positions(&domino(), corner(0, 0, CornerId::SouthEast));
        assert_eq!(positions, vec![Position::new(-1, 0)]);
    }

    #[test]
    fn test_domino_at_south_west() {
        let positions = oriented_piece_move_positions(&domino(), corner(0, 0, CornerId::SouthWest));
        assert_eq!(positions, vec![Position::new(0, 0)]);
    }

    #[test]
    fn test_domino_at_every_id() {
        let target = Position::new(5, 5);
        let expected = [
            (CornerId::NorthWest, Position::new(5, 5)),
            (CornerId::NorthEast, Position::new(4, 5)),
            (CornerId::SouthEast, Position::new(4, 5)),
            (CornerId::SouthWest, Position::new(5, 5)),
        ];
        for (id, pos) in expected {
            let positions = oriented_piece_move_positions(&domino(), Corner::new(target, id));
            assert_eq!(positions, vec![pos], "{}", id);
        }
    }

    #[test]
    fn test_internal_corners_never_used() {
        // (0,0) NE is internal to the domino, so only (1,0) NE can land on the target.
        let positions = oriented_piece_move_positions(&domino(), corner(0, 0, CornerId::NorthEast));
        assert_eq!(positions, vec![Position::new(-1, 0)]);
    }

    #[test]
    fn test_several_matching_corners() {
        // L-tetromino "#../###" exposes two NE corners.
        let piece: OrientedPiece = "#../###".parse().unwrap();
        let target = corner(10, 10, CornerId::NorthEast);
        let positions = oriented_piece_move_positions(&piece, target);
        assert_eq!(positions, vec![Position::new(10, 9), Position::new(8, 10)]);
    }

    #[test]
    fn test_placement_roundtrip() {
        let pieces = ["#", "##", "#./##", ".#./###", "#../###", ".##/##./.#.", "#####"];
        for text in pieces {
            let piece: OrientedPiece = text.parse().unwrap();
            for id in CornerId::ALL {
                let target = corner(3, -7, id);
                let positions = oriented_piece_move_positions(&piece, target);
                assert!(!positions.is_empty(), "{} {}", text, id);

                for pos in positions {
                    let placed = piece.placed_at(pos);
                    assert!(
                        piece_corners(&placed).contains(&target),
                        "{} placed at {} misses {}",
                        text,
                        pos,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_position_count_matches_free_corner_ids() {
        let piece: OrientedPiece = ".##/##./.#.".parse().unwrap();
        let free = piece_corners(&piece);
        for id in CornerId::ALL {
            let expected = free.iter().filter(|c| c.id == id).count();
            let positions = oriented_piece_move_positions(&piece, corner(0, 0, id));
            assert_eq!(positions.len(), expected, "{}", id);
        }
    }

    #[test]
    fn test_empty_piece_has_no_moves() {
        let positions =
            oriented_piece_move_positions(&OrientedPiece::default(), corner(0, 0, CornerId::NorthWest));
        assert!(positions.is_empty());
    }

    #[test]
    fn test_piece_moves_covers_orientations() {
        let target = corner(0, 0, CornerId::SouthEast);

        // Single square: one orientation, one SE corner.
        let monomino = OrientedPiece::from_coords(&[(0, 0)]);
        assert_eq!(
            piece_moves(&monomino, target),
            vec![PieceMove { transform: Transform::Identity, position: Position::new(0, 0) }]
        );

        // Domino: horizontal and vertical orientation, one SE corner each.
        let moves = piece_moves(&domino(), target);
        assert_eq!(moves.len(), 2);
        assert_eq!(
            moves[0],
            PieceMove { transform: Transform::Identity, position: Position::new(-1, 0) }
        );
        assert_eq!(
            moves[1],
            PieceMove { transform: Transform::Rotate90, position: Position::new(0, 0) }
        );
    }

    #[test]
    fn test_piece_move_squares_vertical_domino() {
        let target = corner(0, 0, CornerId::SouthEast);
        let m = PieceMove { transform: Transform::Rotate90, position: Position::new(0, 0) };
        assert!(piece_moves(&domino(), target).contains(&m));

        // Rotate90 sends the domino to (0,0),(0,-1); normalizing lifts it back up.
        let placed = m.squares(&domino());
        assert_eq!(placed.squares(), &[Position::new(0, 0), Position::new(0, 1)]);
        assert!(piece_corners(&placed).contains(&target));
    }

    #[test]
    fn test_piece_moves_roundtrip() {
        let pieces = ["##", "#./##", "#../###", ".##/##./.#.", "###/#.."];
        for text in pieces {
            let piece: OrientedPiece = text.parse().unwrap();
            for id in CornerId::ALL {
                let target = corner(2, -3, id);
                let moves = piece_moves(&piece, target);
                assert!(!moves.is_empty(), "{} {}", text, id);

                for m in moves {
                    let placed = m.squares(&piece);
                    assert_eq!(placed.len(), piece.len());
                    assert!(
                        piece_corners(&placed).contains(&target),
                        "{} {:?} at {} misses {}",
                        text,
                        m.transform,
                        m.position,
                        target
                    );
                }
            }
        }
    }
}
