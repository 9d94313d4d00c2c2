//! ID types for enemies and projectiles.

use serde::{Deserialize, Serialize};

use crate::coords::GridCell;

/// Identifier of an enemy, derived from the map cell it spawned on.
///
/// A level holds at most one enemy per cell, so the spawn cell is a stable
/// identity for the enemy's whole lifetime even though it moves off the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(GridCell);

impl EnemyId {
    /// Creates the id of the enemy spawned on `cell`.
    #[must_use]
    pub const fn from_spawn(cell: GridCell) -> Self {
        Self(cell)
    }

    /// Returns the spawn cell this id was derived from.
    #[must_use]
    pub const fn spawn_cell(self) -> GridCell {
        self.0
    }

    /// Scene name of this enemy (`enemy-<row>-<col>`).
    #[must_use]
    pub fn scene_name(self) -> String {
        format!("enemy-{}-{}", self.0.z, self.0.x)
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "enemy@{}", self.0)
    }
}

/// Unique token of an emitted projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(u64);

impl ProjectileId {
    /// Creates a projectile ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}
