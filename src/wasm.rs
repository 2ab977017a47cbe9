//! WASM bindings for blokus-core
//!
//! Provides a JavaScript-friendly API for the corner geometry.

use wasm_bindgen::prelude::*;

use crate::{
    are_equivalent, oriented_piece_move_positions, piece_corners, piece_moves, Corner, CornerId,
    OrientedPiece, PieceMove, Position, Transform,
};

/// WASM-friendly wrapper around OrientedPiece
#[wasm_bindgen]
pub struct WasmPiece {
    inner: OrientedPiece,
}

#[wasm_bindgen]
impl WasmPiece {
    /// Create a piece from flat coordinates [x0, y0, x1, y1, ...]
    /// A trailing odd value is ignored
    #[wasm_bindgen(constructor)]
    pub fn new(coords: Vec<i32>) -> WasmPiece {
        let squares = coords
            .chunks_exact(2)
            .map(|pair| Position::new(pair[0], pair[1]))
            .collect();
        WasmPiece { inner: OrientedPiece::new(squares) }
    }

    /// Create a piece from row notation, e.g. "#../###"
    #[wasm_bindgen(js_name = fromRows)]
    pub fn from_rows(rows: &str) -> Result<WasmPiece, JsValue> {
        let inner = rows.parse::<OrientedPiece>().map_err(to_js_error)?;
        Ok(WasmPiece { inner })
    }

    /// Row notation of the piece
    #[wasm_bindgen(js_name = toRows)]
    pub fn to_rows(&self) -> String {
        self.inner.to_string()
    }

    /// Squares as flat coordinates [x0, y0, x1, y1, ...]
    pub fn squares(&self) -> Vec<i32> {
        self.inner.squares().iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Free corners as JSON array
    /// Each corner is { at: [x, y], corner: "NW" | "NE" | "SE" | "SW" }
    pub fn corners(&self) -> Result<JsValue, JsValue> {
        let corners: Vec<WasmCorner> = piece_corners(&self.inner)
            .into_iter()
            .map(WasmCorner::from)
            .collect();
        serde_wasm_bindgen::to_value(&corners).map_err(JsValue::from)
    }

    /// Origin positions as [x0, y0, x1, y1, ...] that put a free corner of
    /// this piece on the given corner
    #[wasm_bindgen(js_name = movePositions)]
    pub fn move_positions(&self, x: i32, y: i32, corner: &str) -> Result<Vec<i32>, JsValue> {
        let target = parse_corner(x, y, corner)?;
        Ok(oriented_piece_move_positions(&self.inner, target)
            .into_iter()
            .flat_map(|p| [p.x, p.y])
            .collect())
    }

    /// Placements over every distinct orientation as JSON array
    /// Each move is { orientation: index, at: [x, y], squares: [[x, y], ...] }
    pub fn moves(&self, x: i32, y: i32, corner: &str) -> Result<JsValue, JsValue> {
        let target = parse_corner(x, y, corner)?;
        let orientations = self.inner.orientations();
        let moves: Vec<WasmMove> = piece_moves(&self.inner, target)
            .into_iter()
            .filter_map(|m| WasmMove::new(m, &self.inner, &orientations))
            .collect();
        serde_wasm_bindgen::to_value(&moves).map_err(JsValue::from)
    }

    /// Number of distinct rotations/reflections
    #[wasm_bindgen(js_name = orientationCount)]
    pub fn orientation_count(&self) -> usize {
        self.inner.orientations().len()
    }

    /// Squares of the orientation at `index`, as flat coordinates
    /// Returns empty array if index is out of range
    pub fn orientation(&self, index: usize) -> Vec<i32> {
        self.inner
            .orientations()
            .get(index)
            .map(|(_, oriented)| oriented.squares().iter().flat_map(|p| [p.x, p.y]).collect())
            .unwrap_or_default()
    }
}

/// Check whether two corners denote the same grid point
#[wasm_bindgen(js_name = areEquivalent)]
pub fn are_equivalent_js(
    x1: i32,
    y1: i32,
    corner1: &str,
    x2: i32,
    y2: i32,
    corner2: &str,
) -> Result<bool, JsValue> {
    Ok(are_equivalent(
        parse_corner(x1, y1, corner1)?,
        parse_corner(x2, y2, corner2)?,
    ))
}

fn parse_corner(x: i32, y: i32, corner: &str) -> Result<Corner, JsValue> {
    let id = corner.parse::<CornerId>().map_err(to_js_error)?;
    Ok(Corner::new(Position::new(x, y), id))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Serializable corner for JavaScript
#[derive(serde::Serialize)]
struct WasmCorner {
    at: [i32; 2],
    corner: CornerId,
}

impl From<Corner> for WasmCorner {
    fn from(corner: Corner) -> Self {
        WasmCorner {
            at: [corner.position.x, corner.position.y],
            corner: corner.id,
        }
    }
}

/// Serializable move for JavaScript
#[derive(serde::Serialize)]
struct WasmMove {
    orientation: usize,
    at: [i32; 2],
    squares: Vec<[i32; 2]>,
}

impl WasmMove {
    fn new(
        m: PieceMove,
        base: &OrientedPiece,
        orientations: &[(Transform, OrientedPiece)],
    ) -> Option<WasmMove> {
        let orientation = orientations.iter().position(|(t, _)| *t == m.transform)?;
        Some(WasmMove {
            orientation,
            at: [m.position.x, m.position.y],
            squares: m.squares(base).squares().iter().map(|p| [p.x, p.y]).collect(),
        })
    }
}
