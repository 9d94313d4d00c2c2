//! Tuning constants of the enemy AI.

use serde::{Deserialize, Serialize};

use labyrinth_common::EYE_HEIGHT;

/// Enemy behaviour parameters.
///
/// The defaults reproduce the reference tuning; every field can be
/// overridden from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    // === Motion ===
    /// Patrol step per tick (world units)
    pub patrol_speed: f32,
    /// Fraction of the enemy-to-player vector covered per chase tick
    pub chase_factor: f32,
    /// Chase motion stops inside this distance of the player
    pub chase_standoff: f32,
    /// Radius in which walls and enemies limit motion
    pub scan_radius: f32,
    /// Fixed Y coordinate of enemies
    pub eye_height: f32,

    // === Combat ===
    /// Minimum spacing between shots (milliseconds)
    pub fire_cooldown_ms: u64,
    /// Scale applied to the enemy-to-player vector to get bullet velocity
    pub aim_scale: f32,
    /// Player bullets at or within this distance kill the enemy
    pub death_radius: f32,

    // === Perception ===
    /// Maximum distance at which the player is noticed
    pub aggro_radius: f32,
    /// Once chasing, never drop back to patrol
    pub sticky_aggro: bool,

    // === Timing ===
    /// Seconds between patrol direction re-rolls
    pub reroll_interval: f32,
    /// Minimum spacing between ticks (milliseconds)
    pub tick_interval_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            patrol_speed: 0.025,
            chase_factor: 0.0075,
            chase_standoff: 2.0,
            scan_radius: 2.0,
            eye_height: EYE_HEIGHT,

            fire_cooldown_ms: 1000,
            aim_scale: 0.05,
            death_radius: 1.0,

            aggro_radius: 15.0,
            sticky_aggro: false,

            reroll_interval: 3.0,
            tick_interval_ms: 10,
        }
    }
}

impl AiConfig {
    /// Validate and clamp values to sensible ranges.
    pub fn validate(&mut self) {
        self.patrol_speed = self.patrol_speed.clamp(0.0, 1.0);
        self.chase_factor = self.chase_factor.clamp(0.0, 1.0);
        self.chase_standoff = self.chase_standoff.clamp(0.0, 100.0);
        self.scan_radius = self.scan_radius.clamp(1.0, 16.0);

        self.fire_cooldown_ms = self.fire_cooldown_ms.clamp(50, 60_000);
        self.aim_scale = self.aim_scale.clamp(0.001, 1.0);
        self.death_radius = self.death_radius.clamp(0.0, 10.0);

        self.aggro_radius = self.aggro_radius.clamp(0.0, 1000.0);

        // A zero period would make the scheduler fire on every poll
        self.reroll_interval = self.reroll_interval.clamp(0.1, 600.0);
        self.tick_interval_ms = self.tick_interval_ms.clamp(1, 1000);
    }
}
