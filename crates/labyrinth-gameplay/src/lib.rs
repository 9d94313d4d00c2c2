//! # Labyrinth Gameplay
//!
//! Enemy AI for the grid maze.
//!
//! This crate provides:
//! - Geometry helpers (distance, bounded-closest, grid line rasterization)
//! - Tick throttling and cancellable interval tasks
//! - Directional clearance against walls and other enemies
//! - Wall occlusion between enemy and player
//! - The per-enemy patrol/chase state machine and its controller
//! - Projectile spawn requests, map grid and cell-clear requests
//! - Event bus for observers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod boundary;
pub mod config;
pub mod controller;
pub mod direction;
pub mod enemy;
pub mod events;
pub mod geometry;
pub mod map;
pub mod projectile;
pub mod scene;
pub mod schedule;
pub mod throttle;
pub mod visibility;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::boundary::*;
    pub use crate::config::*;
    pub use crate::controller::*;
    pub use crate::direction::*;
    pub use crate::enemy::*;
    pub use crate::events::*;
    pub use crate::geometry::*;
    pub use crate::map::*;
    pub use crate::projectile::*;
    pub use crate::scene::*;
    pub use crate::schedule::*;
    pub use crate::throttle::*;
    pub use crate::visibility::*;
}

pub use prelude::*;
