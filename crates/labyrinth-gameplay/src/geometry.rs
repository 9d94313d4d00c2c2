//! Geometry helpers shared by the enemy controller.
//!
//! This module provides:
//! - Euclidean distance between positions
//! - Nearest-value selection on one side of a reference coordinate
//! - Grid line rasterization for line-of-sight queries

use glam::Vec3;
use labyrinth_common::GridCell;

/// Fallback coordinate meaning "no obstruction in this direction".
pub const NO_OBSTRUCTION: f32 = 9999.0;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Returns the value closest to `reference` on the sentinel's side of it.
///
/// A negative-side sentinel (`sentinel < reference`) accepts values at or
/// below the reference, a positive-side sentinel values at or above it. When
/// nothing qualifies the sentinel itself is returned, so an empty direction
/// reads as infinitely far away. Equally close candidates are resolved to the
/// first one in iteration order.
#[must_use]
pub fn closest_bounded<I>(values: I, reference: f32, sentinel: f32) -> f32
where
    I: IntoIterator<Item = f32>,
{
    let below = sentinel < reference;
    values
        .into_iter()
        .filter(|v| if below { *v <= reference } else { *v >= reference })
        .min_by(|a, b| (a - reference).abs().total_cmp(&(b - reference).abs()))
        .unwrap_or(sentinel)
}

/// Rasterizes the straight line between two cells, both endpoints included.
#[must_use]
pub fn line_cells(from: GridCell, to: GridCell) -> LineCells {
    let dx = (to.x - from.x).abs();
    let dz = -(to.z - from.z).abs();
    LineCells {
        current: from,
        end: to,
        dx,
        dz,
        step_x: if from.x < to.x { 1 } else { -1 },
        step_z: if from.z < to.z { 1 } else { -1 },
        error: dx + dz,
        done: false,
    }
}

/// Bresenham walk over grid cells, see [`line_cells`].
///
/// The walk is finite and can be restarted by cloning it before iterating.
#[derive(Debug, Clone)]
pub struct LineCells {
    current: GridCell,
    end: GridCell,
    dx: i32,
    dz: i32,
    step_x: i32,
    step_z: i32,
    error: i32,
    done: bool,
}

impl Iterator for LineCells {
    type Item = GridCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let cell = self.current;
        if cell == self.end {
            self.done = true;
            return Some(cell);
        }

        let doubled = 2 * self.error;
        if doubled >= self.dz {
            self.error += self.dz;
            self.current.x += self.step_x;
        }
        if doubled <= self.dx {
            self.error += self.dx;
            self.current.z += self.step_z;
        }

        Some(cell)
    }
}

impl std::iter::FusedIterator for LineCells {}
