//! Patrol directions and the biased direction re-roll.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Cardinal patrol direction on the maze plane.
///
/// "Up" runs toward smaller Z (the top of the map), "Left" toward smaller X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Toward -Z
    Up,
    /// Toward +Z
    Down,
    /// Toward -X
    Left,
    /// Toward +X
    Right,
}

impl Facing {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector of this direction.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::Up => Vec3::new(0.0, 0.0, -1.0),
            Self::Down => Vec3::new(0.0, 0.0, 1.0),
            Self::Left => Vec3::new(-1.0, 0.0, 0.0),
            Self::Right => Vec3::new(1.0, 0.0, 0.0),
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

/// Draws one value from `(value, weight)` pairs proportionally to weight.
///
/// Returns `None` when every weight is zero.
pub fn sample_weighted<T: Copy>(choices: &[(T, u32)], rng: &mut fastrand::Rng) -> Option<T> {
    let total: u32 = choices.iter().map(|(_, w)| *w).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.u32(0..total);
    for (value, weight) in choices {
        if roll < *weight {
            return Some(*value);
        }
        roll -= weight;
    }
    None
}

/// Re-roll weights given the sides the enemy is pressed against.
///
/// A pressed side gets weight 0 and hands +2 to its opposite; free sides keep
/// weight 1. One pressed side therefore yields 3:1:1 in favour of backing
/// away. With nothing pressed, or every side pressed, all four are equal.
#[must_use]
pub fn reroll_weights(pressed: &[Facing]) -> [(Facing, u32); 4] {
    let mut weights = [1u32; 4];
    for side in pressed {
        weights[side.index()] = 0;
    }
    for side in pressed {
        let opposite = side.opposite().index();
        if weights[opposite] > 0 {
            weights[opposite] += 2;
        }
    }
    if weights.iter().all(|w| *w == 0) {
        weights = [1; 4];
    }

    [
        (Facing::Up, weights[0]),
        (Facing::Down, weights[1]),
        (Facing::Left, weights[2]),
        (Facing::Right, weights[3]),
    ]
}

/// Picks a new patrol direction, biased away from pressed sides.
pub fn reroll(pressed: &[Facing], rng: &mut fastrand::Rng) -> Option<Facing> {
    sample_weighted(&reroll_weights(pressed), rng)
}
