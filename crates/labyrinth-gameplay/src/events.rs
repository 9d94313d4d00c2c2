//! Event bus for observing enemy behaviour.

use crossbeam_channel::{bounded, Receiver, Sender};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use labyrinth_common::{EnemyId, ProjectileId};

use crate::direction::Facing;

/// Event types that can be sent through the event bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnemyEvent {
    /// Enemy spawned on its map cell
    Spawned {
        /// Enemy ID
        enemy_id: EnemyId,
    },
    /// Enemy spotted the player and started chasing
    ChaseStarted {
        /// Enemy ID
        enemy_id: EnemyId,
        /// Distance to the player when spotted
        distance: f32,
    },
    /// Enemy lost the player and went back to patrol
    ChaseEnded {
        /// Enemy ID
        enemy_id: EnemyId,
    },
    /// Enemy fired a projectile
    ProjectileFired {
        /// Enemy ID
        enemy_id: EnemyId,
        /// Projectile token
        projectile_id: ProjectileId,
        /// Projectile velocity
        velocity: Vec3,
    },
    /// Enemy was hit and asked for its spawn cell to be cleared
    CellClearRequested {
        /// Enemy ID
        enemy_id: EnemyId,
        /// Row (Z)
        row: usize,
        /// Column (X)
        col: usize,
    },
    /// Enemy picked a new patrol direction
    DirectionChanged {
        /// Enemy ID
        enemy_id: EnemyId,
        /// New direction
        facing: Option<Facing>,
    },
    /// Enemy was removed from the controller
    Despawned {
        /// Enemy ID
        enemy_id: EnemyId,
    },
}

/// Event bus for broadcasting events to subscribers.
#[derive(Debug)]
pub struct EventBus {
    /// Sender for broadcasting events
    sender: Sender<EnemyEvent>,
    /// Receiver for collecting events
    receiver: Receiver<EnemyEvent>,
    /// Channel capacity
    capacity: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl EventBus {
    /// Creates a new event bus with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            capacity,
        }
    }

    /// Publishes an event to the bus.
    pub fn publish(&self, event: EnemyEvent) {
        // Non-blocking send - if full, event is dropped
        let _ = self.sender.try_send(event);
    }

    /// Drains all pending events.
    pub fn drain(&self) -> Vec<EnemyEvent> {
        self.receiver.try_iter().collect()
    }

    /// Returns the number of pending events.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Returns the channel capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
