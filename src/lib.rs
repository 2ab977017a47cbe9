//! Blokus corner geometry.
//!
//! Pieces touch only corner-to-corner, so the useful question about a placed
//! piece is which of its corners are still exposed, and where a new piece
//! can go so that one of its own exposed corners lands on one of them.
//!
//! # Coordinates
//!
//! ```text
//! Squares are integer (x, y) cells; y grows upward.
//! Square (x, y) spans [x, x+1] x [y, y+1]:
//!
//!   NW (x, y+1) +-----+ NE (x+1, y+1)
//!               |     |
//!   SW (x, y)   +-----+ SE (x+1, y)
//! ```
//!
//! A [`Corner`] names a point through one square, so edge-adjacent squares
//! give the same point two names. [`are_equivalent`] decides when two names
//! refer to the same point, [`piece_corners`] keeps the corners of a piece
//! that no other square of the piece shares, and
//! [`oriented_piece_move_positions`] turns a free corner into candidate
//! origin positions for the next piece.
//!
//! # Example
//!
//! ```
//! use blokus_core::{oriented_piece_move_positions, Corner, CornerId, OrientedPiece, Position};
//!
//! let domino: OrientedPiece = "##".parse().unwrap();
//! let target = Corner::new(Position::new(0, 0), CornerId::SouthEast);
//!
//! assert_eq!(
//!     oriented_piece_move_positions(&domino, target),
//!     vec![Position::new(-1, 0)]
//! );
//! ```

pub mod corner;
pub mod grid;
pub mod piece;
pub mod placement;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use corner::{are_equivalent, Corner, CornerId, ParseCornerError, ParseCornerIdError};
pub use grid::{Position, PositionDelta};
pub use piece::{piece_corners, OrientedPiece, ParsePieceError, Transform};
pub use placement::{displacement, oriented_piece_move_positions, piece_moves, PieceMove};
