//! Directional clearance limits around an enemy.
//!
//! Each tick the nearby obstacles (walls and other enemies) are sorted into
//! four bands aligned with the enemy's grid column/row. The nearest obstacle in
//! each band, pulled one unit inward, becomes the coordinate the enemy may not
//! cross in that direction.

use glam::Vec3;
use labyrinth_common::GridCell;
use serde::{Deserialize, Serialize};

use crate::direction::Facing;
use crate::geometry::{closest_bounded, distance, NO_OBSTRUCTION};

/// Movement limits in the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clearance {
    /// Smallest Z the enemy may reach (moving up)
    pub top: f32,
    /// Largest Z the enemy may reach (moving down)
    pub bottom: f32,
    /// Smallest X the enemy may reach (moving left)
    pub left: f32,
    /// Largest X the enemy may reach (moving right)
    pub right: f32,
}

impl Default for Clearance {
    fn default() -> Self {
        Self::OPEN
    }
}

impl Clearance {
    /// No obstruction in any direction.
    pub const OPEN: Self = Self {
        top: -NO_OBSTRUCTION + 1.0,
        bottom: NO_OBSTRUCTION - 1.0,
        left: -NO_OBSTRUCTION + 1.0,
        right: NO_OBSTRUCTION - 1.0,
    };

    /// Computes the limits for `position` from obstacle positions.
    ///
    /// Only obstacles within `scan_radius` count. An obstacle belongs to the
    /// top/bottom band when its column equals the floor or ceiling of the
    /// enemy's X, and to the left/right band likewise for Z.
    pub fn resolve<I>(position: Vec3, obstacles: I, scan_radius: f32) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        let columns = (position.x.floor() as i32, position.x.ceil() as i32);
        let rows = (position.z.floor() as i32, position.z.ceil() as i32);

        let mut vertical = Vec::new();
        let mut horizontal = Vec::new();
        for obstacle in obstacles {
            if distance(obstacle, position) > scan_radius {
                continue;
            }
            let cell = GridCell::snap(obstacle);
            if cell.x == columns.0 || cell.x == columns.1 {
                vertical.push(cell.z as f32);
            }
            if cell.z == rows.0 || cell.z == rows.1 {
                horizontal.push(cell.x as f32);
            }
        }

        Self {
            top: closest_bounded(vertical.iter().copied(), position.z, -NO_OBSTRUCTION) + 1.0,
            bottom: closest_bounded(vertical.iter().copied(), position.z, NO_OBSTRUCTION) - 1.0,
            left: closest_bounded(horizontal.iter().copied(), position.x, -NO_OBSTRUCTION) + 1.0,
            right: closest_bounded(horizontal.iter().copied(), position.x, NO_OBSTRUCTION) - 1.0,
        }
    }

    /// Returns whether `position` may still move toward `facing`.
    #[must_use]
    pub fn allows(&self, position: Vec3, facing: Facing) -> bool {
        match facing {
            Facing::Up => position.z > self.top,
            Facing::Down => position.z < self.bottom,
            Facing::Left => position.x > self.left,
            Facing::Right => position.x < self.right,
        }
    }

    /// Sides on which `position` has reached its limit.
    #[must_use]
    pub fn pressed_sides(&self, position: Vec3) -> Vec<Facing> {
        Facing::ALL
            .into_iter()
            .filter(|facing| !self.allows(position, *facing))
            .collect()
    }

    /// Moves `position` by `step` toward `facing`, stopping at the limit.
    ///
    /// The position is left unchanged when it already sits at or past the
    /// limit.
    #[must_use]
    pub fn step(&self, position: Vec3, facing: Facing, step: f32) -> Vec3 {
        if !self.allows(position, facing) {
            return position;
        }
        let mut next = position + facing.unit() * step;
        match facing {
            Facing::Up => next.z = next.z.max(self.top),
            Facing::Down => next.z = next.z.min(self.bottom),
            Facing::Left => next.x = next.x.max(self.left),
            Facing::Right => next.x = next.x.min(self.right),
        }
        next
    }

    /// Clamps X into `[left, right]` and Z into `[top, bottom]`.
    ///
    /// An inverted band (the enemy already overlaps an obstruction) leaves
    /// that axis untouched.
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        let mut clamped = position;
        if self.left <= self.right {
            clamped.x = clamped.x.clamp(self.left, self.right);
        }
        if self.top <= self.bottom {
            clamped.z = clamped.z.clamp(self.top, self.bottom);
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCAN: f32 = 2.0;

    fn at(x: f32, z: f32) -> Vec3 {
        Vec3::new(x, 0.75, z)
    }

    #[test]
    fn test_no_obstacles_is_open() {
        let clearance = Clearance::resolve(at(3.0, 3.0), Vec::new(), SCAN);
        assert_eq!(clearance, Clearance::OPEN);
        assert!(clearance.pressed_sides(at(3.0, 3.0)).is_empty());
    }

    #[test]
    fn test_wall_above_sets_top() {
        let clearance = Clearance::resolve(at(3.0, 3.0), vec![at(3.0, 1.0)], SCAN);
        assert_eq!(clearance.top, 2.0);
        assert_eq!(clearance.bottom, Clearance::OPEN.bottom);
        assert_eq!(clearance.left, Clearance::OPEN.left);
    }

    #[test]
    fn test_all_four_sides() {
        let walls = vec![at(3.0, 2.0), at(3.0, 4.0), at(2.0, 3.0), at(4.0, 3.0)];
        let clearance = Clearance::resolve(at(3.0, 3.0), walls, SCAN);
        assert_eq!(clearance.top, 3.0);
        assert_eq!(clearance.bottom, 3.0);
        assert_eq!(clearance.left, 3.0);
        assert_eq!(clearance.right, 3.0);
        assert_eq!(clearance.pressed_sides(at(3.0, 3.0)).len(), 4);
    }

    #[test]
    fn test_obstacles_beyond_scan_radius_ignored() {
        let clearance = Clearance::resolve(at(3.0, 3.0), vec![at(3.0, 0.0)], SCAN);
        assert_eq!(clearance.top, Clearance::OPEN.top);
    }

    #[test]
    fn test_between_columns_sees_both() {
        // Enemy straddles columns 3 and 4; a wall in column 4 still blocks.
        let clearance = Clearance::resolve(at(3.5, 3.0), vec![at(4.0, 2.0)], SCAN);
        assert_eq!(clearance.top, 3.0);
    }

    #[test]
    fn test_nearest_obstacle_wins() {
        let clearance =
            Clearance::resolve(at(3.0, 4.0), vec![at(3.0, 2.0), at(3.0, 3.0)], SCAN);
        assert_eq!(clearance.top, 4.0);
    }

    #[test]
    fn test_step_stops_at_limit() {
        let clearance = Clearance {
            top: 1.0,
            ..Clearance::OPEN
        };
        let moved = clearance.step(at(1.01, 1.01), Facing::Up, 0.025);
        assert_eq!(moved.z, 1.0);
        let stuck = clearance.step(moved, Facing::Up, 0.025);
        assert_eq!(stuck, moved);
    }

    #[test]
    fn test_clamp_into_band() {
        let clearance = Clearance {
            top: 1.0,
            bottom: 5.0,
            left: 2.0,
            right: 4.0,
        };
        let clamped = clearance.clamp(at(0.0, 9.0));
        assert_eq!(clamped, at(2.0, 5.0));
    }

    proptest! {
        #[test]
        fn prop_patrol_step_never_crosses_limit(
            x in 1.0f32..20.0,
            z in 1.0f32..20.0,
            walls in prop::collection::vec((0i32..22, 0i32..22), 0..30),
            facing_index in 0usize..4,
        ) {
            let position = at(x, z);
            let obstacles: Vec<Vec3> = walls
                .iter()
                .map(|(wx, wz)| at(*wx as f32, *wz as f32))
                .collect();
            let clearance = Clearance::resolve(position, obstacles, SCAN);
            let facing = Facing::ALL[facing_index];
            let was_allowed = clearance.allows(position, facing);
            let moved = clearance.step(position, facing, 0.025);

            if was_allowed {
                match facing {
                    Facing::Up => prop_assert!(moved.z >= clearance.top),
                    Facing::Down => prop_assert!(moved.z <= clearance.bottom),
                    Facing::Left => prop_assert!(moved.x >= clearance.left),
                    Facing::Right => prop_assert!(moved.x <= clearance.right),
                }
            } else {
                prop_assert_eq!(moved, position);
            }
            prop_assert_eq!(moved.y, position.y);
        }
    }
}
