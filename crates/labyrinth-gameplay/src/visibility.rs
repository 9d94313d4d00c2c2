//! Wall occlusion between an enemy and the player.

use labyrinth_common::GridCell;

use crate::geometry::line_cells;
use crate::scene::SceneObject;

/// Returns whether a wall occupies a cell strictly between `from` and `to`.
///
/// Both endpoints are excluded: they hold the observer and the target. Wall
/// cells come from snapping wall positions to the grid.
#[must_use]
pub fn line_blocked(from: GridCell, to: GridCell, walls: &[SceneObject]) -> bool {
    if walls.is_empty() {
        return false;
    }

    line_cells(from, to)
        .filter(|cell| *cell != from && *cell != to)
        .any(|cell| walls.iter().any(|wall| GridCell::snap(wall.position) == cell))
}
