//! Coordinate types for continuous world positions and discrete grid cells.
//!
//! The maze lives on the XZ plane. One grid unit equals one world unit, so a
//! map cell at `(row, col)` sits at world `x = col`, `z = row`. The Y axis only
//! carries the fixed eye height of walking actors.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Height at which walking actors (enemies, the player camera) are placed.
pub const EYE_HEIGHT: f32 = 0.75;

/// Discrete cell on the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// X coordinate (map column)
    pub x: i32,
    /// Z coordinate (map row)
    pub z: i32,
}

impl GridCell {
    /// Creates a new grid cell.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Creates a cell from map indices.
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Self {
        Self {
            x: col as i32,
            z: row as i32,
        }
    }

    /// Discretizes a continuous position by flooring X and Z.
    #[must_use]
    pub fn from_world(position: Vec3) -> Self {
        Self {
            x: position.x.floor() as i32,
            z: position.z.floor() as i32,
        }
    }

    /// Snaps a grid-aligned position (walls, spawn points) to its cell.
    ///
    /// Grid-aligned objects sit on integer coordinates, so rounding absorbs
    /// float noise where flooring would drop `2.9999` into the wrong cell.
    #[must_use]
    pub fn snap(position: Vec3) -> Self {
        Self {
            x: position.x.round() as i32,
            z: position.z.round() as i32,
        }
    }

    /// Map row index, if the cell lies in the non-negative quadrant.
    #[must_use]
    pub fn row(self) -> Option<usize> {
        usize::try_from(self.z).ok()
    }

    /// Map column index, if the cell lies in the non-negative quadrant.
    #[must_use]
    pub fn col(self) -> Option<usize> {
        usize::try_from(self.x).ok()
    }

    /// World position of this cell at the given height.
    #[must_use]
    pub fn to_world(self, height: f32) -> Vec3 {
        Vec3::new(self.x as f32, height, self.z as f32)
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
