//! Read-only view of the live scene consumed by the enemy controller.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Name prefix shared by every enemy object.
pub const ENEMY_PREFIX: &str = "enemy";

/// Name of projectile objects.
pub const BULLET_NAME: &str = "bullet";

/// Side an object fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Fired or controlled by the player
    Player,
    /// Fired or controlled by an enemy
    Enemy,
    /// Scenery and pickups
    Neutral,
}

/// One object in the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Object name (`enemy-...`, `bullet`, ...)
    pub name: String,
    /// World position
    pub position: Vec3,
    /// Owning faction
    pub faction: Faction,
}

impl SceneObject {
    /// Creates a new scene object.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Vec3, faction: Faction) -> Self {
        Self {
            name: name.into(),
            position,
            faction,
        }
    }

    /// Returns whether this object is an enemy.
    #[must_use]
    pub fn is_enemy(&self) -> bool {
        self.name.starts_with(ENEMY_PREFIX)
    }

    /// Returns whether this object is a projectile.
    #[must_use]
    pub fn is_bullet(&self) -> bool {
        self.name == BULLET_NAME
    }
}

/// Scene interface for the enemy controller.
///
/// Implementations hand out a snapshot; the controller never mutates it.
pub trait SceneQuery {
    /// Top-level objects (enemies, projectiles, pickups).
    fn objects(&self) -> &[SceneObject];
    /// Children of the wall container.
    fn walls(&self) -> &[SceneObject];
    /// Player position, if the player is present.
    fn player_position(&self) -> Option<Vec3>;
    /// Active camera position.
    fn camera_position(&self) -> Vec3;
}

/// Owned scene snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    objects: Vec<SceneObject>,
    walls: Vec<SceneObject>,
    player: Option<Vec3>,
    camera: Vec3,
}

impl SceneSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the player; the camera follows it.
    #[must_use]
    pub fn with_player(mut self, position: Vec3) -> Self {
        self.player = Some(position);
        self.camera = position;
        self
    }

    /// Overrides the camera position.
    #[must_use]
    pub fn with_camera(mut self, position: Vec3) -> Self {
        self.camera = position;
        self
    }

    /// Adds a wall block.
    #[must_use]
    pub fn with_wall(mut self, position: Vec3) -> Self {
        self.add_wall(position);
        self
    }

    /// Adds a top-level object.
    #[must_use]
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Adds a wall block.
    pub fn add_wall(&mut self, position: Vec3) {
        self.walls
            .push(SceneObject::new("wall", position, Faction::Neutral));
    }

    /// Adds a top-level object.
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Moves the player and camera.
    pub fn set_player(&mut self, position: Option<Vec3>) {
        self.player = position;
        if let Some(position) = position {
            self.camera = position;
        }
    }

    /// Removes every top-level object, keeping walls and the player.
    pub fn clear_objects(&mut self) {
        self.objects.clear();
    }
}

impl SceneQuery for SceneSnapshot {
    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    fn walls(&self) -> &[SceneObject] {
        &self.walls
    }

    fn player_position(&self) -> Option<Vec3> {
        self.player
    }

    fn camera_position(&self) -> Vec3 {
        self.camera
    }
}
