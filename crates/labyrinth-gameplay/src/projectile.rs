//! Projectile spawn requests emitted by enemies.
//!
//! This module only describes a shot. Flight, collision and removal belong to
//! whatever consumes the drained descriptors.

use glam::Vec3;
use labyrinth_common::ProjectileId;
use serde::{Deserialize, Serialize};

/// One-shot request to spawn a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileDescriptor {
    /// Unique token
    pub id: ProjectileId,
    /// Fire timestamp (milliseconds)
    pub fired_at_ms: u64,
    /// Spawn position
    pub position: Vec3,
    /// Per-frame displacement
    pub velocity: Vec3,
}

impl ProjectileDescriptor {
    /// Descriptor for a shot from `origin` at `target`.
    ///
    /// The velocity is the origin-to-target vector scaled by `aim_scale`.
    #[must_use]
    pub fn aimed(id: ProjectileId, origin: Vec3, target: Vec3, aim_scale: f32, now_ms: u64) -> Self {
        Self {
            id,
            fired_at_ms: now_ms,
            position: origin,
            velocity: (target - origin) * aim_scale,
        }
    }
}

/// Hands out projectile tokens, unique across all enemies of a controller.
#[derive(Debug, Clone, Default)]
pub struct ProjectileIds {
    next: u64,
}

impl ProjectileIds {
    /// Creates an allocator starting at token 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next token.
    pub fn next_id(&mut self) -> ProjectileId {
        self.next += 1;
        ProjectileId::new(self.next)
    }
}

/// Pending projectile requests of one enemy.
#[derive(Debug, Clone, Default)]
pub struct ProjectileSpawner {
    pending: Vec<ProjectileDescriptor>,
}

impl ProjectileSpawner {
    /// Creates an empty spawner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one descriptor.
    pub fn emit(&mut self, descriptor: ProjectileDescriptor) {
        self.pending.push(descriptor);
    }

    /// Takes every queued descriptor.
    pub fn drain(&mut self) -> Vec<ProjectileDescriptor> {
        std::mem::take(&mut self.pending)
    }

    /// Queued descriptors not yet drained.
    #[must_use]
    pub fn pending(&self) -> &[ProjectileDescriptor] {
        &self.pending
    }
}
