//! Per-enemy state and the throttled tick.
//!
//! An [`Enemy`] is the explicit state record of one maze enemy. The
//! controller owns it and hands it the scene snapshot once per frame; the
//! rendering side only ever reads the resulting [`EnemyPose`].
//!
//! Tick order:
//! 1. face the camera
//! 2. die if a player bullet is within reach
//! 3. enter or leave chase based on distance and line of sight
//! 4. fire when chasing and off cooldown
//! 5. recompute clearance from nearby walls and enemies
//! 6. move (patrol step or chase approach)
//!
//! Patrol direction re-rolls are driven by the controller's interval
//! scheduler through [`Enemy::reroll`].

use glam::Vec3;
use labyrinth_common::{EnemyId, GridCell};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::boundary::Clearance;
use crate::config::AiConfig;
use crate::direction::{self, Facing};
use crate::geometry::distance;
use crate::map::MapRequest;
use crate::projectile::{ProjectileDescriptor, ProjectileIds, ProjectileSpawner};
use crate::scene::{Faction, SceneQuery};
use crate::schedule::{TaskHandle, TaskId};
use crate::throttle::RateLimiter;
use crate::visibility::line_blocked;

/// How far below the camera an enemy aims its gaze.
const LOOK_DROP: f32 = 0.5;

/// Behavioural state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AiState {
    /// Wandering in the current facing direction
    #[default]
    Patrol,
    /// Closing in on the player and shooting
    Chase,
}

/// Renderable output of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyPose {
    /// Enemy ID
    pub id: EnemyId,
    /// World position
    pub position: Vec3,
    /// Point the enemy looks at
    pub look_at: Vec3,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Whether the tick body ran (false when throttled or dead)
    pub ran: bool,
    /// State after the tick, if it changed
    pub transition: Option<AiState>,
    /// Shot fired this tick
    pub fired: Option<ProjectileDescriptor>,
    /// Cell-clear request produced by death
    pub clear_request: Option<MapRequest>,
}

/// State record of one enemy.
#[derive(Debug)]
pub struct Enemy {
    id: EnemyId,
    position: Vec3,
    look_at: Vec3,
    facing: Option<Facing>,
    state: AiState,
    /// Earliest time the next shot may be fired (milliseconds)
    next_fire_ms: u64,
    /// Elapsed-clock time of the last facing change (seconds)
    last_direction_change: f32,
    limiter: RateLimiter,
    clearance: Clearance,
    spawner: ProjectileSpawner,
    /// Periodic re-roll task; dropping the enemy cancels it
    reroll_task: TaskHandle,
    clear_requested: bool,
}

impl Enemy {
    /// Creates an enemy standing on its spawn cell.
    #[must_use]
    pub fn new(
        id: EnemyId,
        config: &AiConfig,
        reroll_task: TaskHandle,
        facing: Option<Facing>,
        now: f32,
    ) -> Self {
        let position = id.spawn_cell().to_world(config.eye_height);
        Self {
            id,
            position,
            look_at: position,
            facing,
            state: AiState::Patrol,
            next_fire_ms: 0,
            last_direction_change: now,
            limiter: RateLimiter::new(config.tick_interval_ms),
            clearance: Clearance::OPEN,
            spawner: ProjectileSpawner::new(),
            reroll_task,
            clear_requested: false,
        }
    }

    /// Enemy ID.
    #[must_use]
    pub const fn id(&self) -> EnemyId {
        self.id
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current patrol direction.
    #[must_use]
    pub const fn facing(&self) -> Option<Facing> {
        self.facing
    }

    /// Current behavioural state.
    #[must_use]
    pub const fn state(&self) -> AiState {
        self.state
    }

    /// Returns whether the enemy is chasing the player.
    #[must_use]
    pub fn is_chasing(&self) -> bool {
        self.state == AiState::Chase
    }

    /// Clearance computed on the last tick.
    #[must_use]
    pub const fn clearance(&self) -> Clearance {
        self.clearance
    }

    /// Earliest time of the next shot (milliseconds).
    #[must_use]
    pub const fn next_fire_ms(&self) -> u64 {
        self.next_fire_ms
    }

    /// Time of the last facing change (seconds).
    #[must_use]
    pub const fn last_direction_change(&self) -> f32 {
        self.last_direction_change
    }

    /// Returns whether the enemy has asked for its cell to be cleared.
    #[must_use]
    pub const fn is_dying(&self) -> bool {
        self.clear_requested
    }

    /// Interval task driving this enemy's re-rolls.
    #[must_use]
    pub const fn reroll_task(&self) -> TaskId {
        self.reroll_task.id()
    }

    /// Shots fired and not yet collected.
    #[must_use]
    pub fn pending_projectiles(&self) -> &[ProjectileDescriptor] {
        self.spawner.pending()
    }

    /// Collects the shots fired since the last call.
    pub fn drain_projectiles(&mut self) -> Vec<ProjectileDescriptor> {
        self.spawner.drain()
    }

    /// Renderable output.
    #[must_use]
    pub const fn pose(&self) -> EnemyPose {
        EnemyPose {
            id: self.id,
            position: self.position,
            look_at: self.look_at,
        }
    }

    /// Moves the enemy, keeping it at eye height.
    pub fn place(&mut self, position: Vec3, eye_height: f32) {
        self.position = Vec3::new(position.x, eye_height, position.z);
    }

    /// Overrides the patrol direction.
    pub fn set_facing(&mut self, facing: Option<Facing>, now: f32) {
        self.facing = facing;
        self.last_direction_change = now;
    }

    /// Runs one tick against the scene, unless throttled.
    pub fn tick<S: SceneQuery + ?Sized>(
        &mut self,
        scene: &S,
        config: &AiConfig,
        now_ms: u64,
        projectile_ids: &mut ProjectileIds,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.clear_requested || !self.limiter.try_acquire(now_ms) {
            return outcome;
        }
        outcome.ran = true;

        self.look_at = scene.camera_position() - Vec3::new(0.0, LOOK_DROP, 0.0);

        if self.hit_by_player_bullet(scene, config) {
            self.clear_requested = true;
            outcome.clear_request = self.clear_request();
            return outcome;
        }

        let player = scene.player_position();
        outcome.transition = self.update_state(scene, config, player);

        if self.is_chasing() {
            if let Some(target) = player {
                if now_ms >= self.next_fire_ms {
                    let shot = ProjectileDescriptor::aimed(
                        projectile_ids.next_id(),
                        self.position,
                        target,
                        config.aim_scale,
                        now_ms,
                    );
                    self.next_fire_ms = now_ms + config.fire_cooldown_ms;
                    self.spawner.emit(shot);
                    outcome.fired = Some(shot);
                    debug!(enemy = %self.id, projectile = shot.id.raw(), "enemy fired");
                }
            }
        }

        self.clearance = self.resolve_clearance(scene, config);
        self.advance(config, player);

        trace!(
            enemy = %self.id,
            x = self.position.x,
            z = self.position.z,
            state = ?self.state,
            "enemy ticked"
        );
        outcome
    }

    /// Picks a new patrol direction, biased away from walls the enemy is
    /// pressed against.
    pub fn reroll(&mut self, rng: &mut fastrand::Rng, now: f32) -> Option<Facing> {
        let pressed = self.clearance.pressed_sides(self.position);
        let facing = direction::reroll(&pressed, rng);
        self.set_facing(facing, now);
        trace!(enemy = %self.id, ?facing, ?pressed, "patrol direction re-rolled");
        facing
    }

    fn hit_by_player_bullet<S: SceneQuery + ?Sized>(&self, scene: &S, config: &AiConfig) -> bool {
        scene.objects().iter().any(|object| {
            object.is_bullet()
                && object.faction == Faction::Player
                && distance(object.position, self.position) <= config.death_radius
        })
    }

    fn clear_request(&self) -> Option<MapRequest> {
        let cell = self.id.spawn_cell();
        match (cell.row(), cell.col()) {
            (Some(row), Some(col)) => {
                info!(enemy = %self.id, row, col, "enemy hit, requesting cell clear");
                Some(MapRequest::ClearCell { row, col })
            },
            _ => {
                warn!(enemy = %self.id, "enemy hit outside the map grid, nothing to clear");
                None
            },
        }
    }

    /// Applies the chase rule and returns the new state if it changed.
    fn update_state<S: SceneQuery + ?Sized>(
        &mut self,
        scene: &S,
        config: &AiConfig,
        player: Option<Vec3>,
    ) -> Option<AiState> {
        if config.sticky_aggro && self.is_chasing() {
            return None;
        }

        let spotted = player.is_some_and(|target| {
            distance(target, self.position) < config.aggro_radius
                && !line_blocked(
                    GridCell::from_world(self.position),
                    GridCell::from_world(target),
                    scene.walls(),
                )
        });
        let next = if spotted { AiState::Chase } else { AiState::Patrol };
        if next == self.state {
            return None;
        }

        debug!(enemy = %self.id, from = ?self.state, to = ?next, "enemy state changed");
        self.state = next;
        Some(next)
    }

    fn resolve_clearance<S: SceneQuery + ?Sized>(&self, scene: &S, config: &AiConfig) -> Clearance {
        let own_name = self.id.scene_name();
        let walls = scene.walls().iter().map(|wall| wall.position);
        let enemies = scene
            .objects()
            .iter()
            .filter(|object| object.is_enemy() && object.name != own_name)
            .map(|object| object.position);
        Clearance::resolve(self.position, walls.chain(enemies), config.scan_radius)
    }

    fn advance(&mut self, config: &AiConfig, player: Option<Vec3>) {
        let next = match (self.state, player) {
            (AiState::Chase, Some(target)) => {
                if distance(target, self.position) <= config.chase_standoff {
                    self.position
                } else {
                    let approach = (target - self.position) * config.chase_factor;
                    self.clearance.clamp(self.position + approach)
                }
            },
            (AiState::Chase, None) => self.position,
            (AiState::Patrol, _) => match self.facing {
                Some(facing) => self.clearance.step(self.position, facing, config.patrol_speed),
                None => self.position,
            },
        };
        self.place(next, config.eye_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneObject, SceneSnapshot, BULLET_NAME};
    use crate::schedule::IntervalScheduler;

    fn spawn(scheduler: &mut IntervalScheduler, x: i32, z: i32, facing: Option<Facing>) -> Enemy {
        let config = AiConfig::default();
        let task = scheduler.schedule(config.reroll_interval, 0.0);
        Enemy::new(EnemyId::from_spawn(GridCell::new(x, z)), &config, task, facing, 0.0)
    }

    fn at(x: f32, z: f32) -> Vec3 {
        Vec3::new(x, 0.75, z)
    }

    #[test]
    fn test_spawns_on_cell_at_eye_height() {
        let mut scheduler = IntervalScheduler::new();
        let enemy = spawn(&mut scheduler, 4, 2, None);
        assert_eq!(enemy.position(), Vec3::new(4.0, 0.75, 2.0));
        assert_eq!(enemy.state(), AiState::Patrol);
        assert_eq!(enemy.next_fire_ms(), 0);
    }

    #[test]
    fn test_visible_player_triggers_chase_and_fire() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new().with_player(at(5.0, 0.0));

        let outcome = enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);

        assert!(outcome.ran);
        assert_eq!(outcome.transition, Some(AiState::Chase));
        assert!(enemy.is_chasing());
        let shot = outcome.fired.expect("enemy should fire");
        assert!(shot.velocity.x > 0.0);
        assert!((shot.velocity.x - 0.25).abs() < 1e-6);
        assert_eq!(shot.velocity.z, 0.0);
        assert_eq!(enemy.pending_projectiles().len(), 1);
        assert_eq!(enemy.next_fire_ms(), 1000);
    }

    #[test]
    fn test_wall_blocks_aggro() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new()
            .with_player(at(5.0, 0.0))
            .with_wall(at(2.0, 0.0));

        let outcome = enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);

        assert!(!enemy.is_chasing());
        assert_eq!(outcome.transition, None);
        assert!(outcome.fired.is_none());
    }

    #[test]
    fn test_player_out_of_range_not_chased() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new().with_player(at(15.0, 0.0));

        enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert!(!enemy.is_chasing());
    }

    #[test]
    fn test_missing_player_is_not_visible() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new();

        let outcome = enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert!(outcome.ran);
        assert!(!enemy.is_chasing());
        assert_eq!(enemy.position(), at(0.0, 0.0));
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new().with_player(at(5.0, 0.0));
        let config = AiConfig::default();

        let mut shots = Vec::new();
        for now in (0..=2500).step_by(10) {
            if let Some(shot) = enemy.tick(&scene, &config, now, &mut ids).fired {
                shots.push(shot);
            }
        }

        assert_eq!(shots.len(), 3);
        for pair in shots.windows(2) {
            assert!(pair[1].fired_at_ms - pair[0].fired_at_ms >= config.fire_cooldown_ms);
        }
        assert_eq!(enemy.drain_projectiles().len(), 3);
        assert!(enemy.pending_projectiles().is_empty());
    }

    #[test]
    fn test_chase_ends_when_player_leaves() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let config = AiConfig::default();

        let near = SceneSnapshot::new().with_player(at(5.0, 0.0));
        enemy.tick(&near, &config, 0, &mut ids);
        assert!(enemy.is_chasing());

        let far = SceneSnapshot::new().with_player(at(40.0, 0.0));
        let outcome = enemy.tick(&far, &config, 10, &mut ids);
        assert_eq!(outcome.transition, Some(AiState::Patrol));
        assert!(!enemy.is_chasing());
    }

    #[test]
    fn test_sticky_aggro_keeps_chasing() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let config = AiConfig {
            sticky_aggro: true,
            ..AiConfig::default()
        };

        enemy.tick(&SceneSnapshot::new().with_player(at(5.0, 0.0)), &config, 0, &mut ids);
        let far = SceneSnapshot::new().with_player(at(40.0, 0.0));
        let outcome = enemy.tick(&far, &config, 10, &mut ids);

        assert_eq!(outcome.transition, None);
        assert!(enemy.is_chasing());
    }

    #[test]
    fn test_throttle_drops_fast_calls() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 3, Some(Facing::Up));
        let scene = SceneSnapshot::new();
        let config = AiConfig::default();

        assert!(enemy.tick(&scene, &config, 0, &mut ids).ran);
        let after_first = enemy.position();
        assert!(!enemy.tick(&scene, &config, 5, &mut ids).ran);
        assert_eq!(enemy.position(), after_first);
        assert!(enemy.tick(&scene, &config, 10, &mut ids).ran);
        assert!(enemy.position().z < after_first.z);
    }

    #[test]
    fn test_patrol_step_stops_at_wall() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 3, Some(Facing::Up));
        let scene = SceneSnapshot::new().with_wall(at(0.0, 0.0));
        let config = AiConfig::default();

        enemy.tick(&scene, &config, 0, &mut ids);
        assert!((enemy.position().z - 2.975).abs() < 1e-5);
        assert_eq!(enemy.position().x, 0.0);

        let mut now = 0;
        for _ in 0..200 {
            now += 10;
            enemy.tick(&scene, &config, now, &mut ids);
            assert!(enemy.position().z >= 1.0);
        }
        assert!((enemy.position().z - 1.0).abs() < 1e-5);
        assert!((enemy.clearance().top - 1.0).abs() < f32::EPSILON);
        assert_eq!(enemy.facing(), Some(Facing::Up));
    }

    #[test]
    fn test_y_stays_at_eye_height() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new().with_player(Vec3::new(8.0, 3.0, 0.0));

        for now in (0..500).step_by(10) {
            enemy.tick(&scene, &AiConfig::default(), now, &mut ids);
        }
        assert_eq!(enemy.position().y, 0.75);
        assert!(enemy.position().x > 0.0);
    }

    #[test]
    fn test_chase_keeps_standoff() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new().with_player(at(1.5, 0.0));

        enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert!(enemy.is_chasing());
        assert_eq!(enemy.position(), at(0.0, 0.0));
    }

    #[test]
    fn test_chase_clamped_by_other_enemy() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new()
            .with_player(at(10.0, 0.0))
            .with_object(SceneObject::new("enemy-0-1", at(1.0, 0.0), Faction::Enemy));

        enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert!(enemy.is_chasing());
        assert_eq!(enemy.clearance().right, 0.0);
        assert_eq!(enemy.position().x, 0.0);
    }

    #[test]
    fn test_own_scene_object_ignored() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let own = SceneObject::new("enemy-0-0", at(0.0, 0.0), Faction::Enemy);
        let scene = SceneSnapshot::new().with_object(own);

        enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert_eq!(enemy.clearance(), Clearance::OPEN);
    }

    #[test]
    fn test_player_bullet_requests_clear() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, Some(Facing::Right));
        let bullet = SceneObject::new(BULLET_NAME, at(0.5, 0.0), Faction::Player);
        let scene = SceneSnapshot::new().with_object(bullet);

        let outcome = enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);

        assert_eq!(outcome.clear_request, Some(MapRequest::ClearCell { row: 0, col: 0 }));
        assert!(enemy.is_dying());
        assert_eq!(enemy.position(), at(0.0, 0.0));
    }

    #[test]
    fn test_bullet_at_death_radius_kills() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let bullet = SceneObject::new(BULLET_NAME, at(1.0, 0.0), Faction::Player);
        let scene = SceneSnapshot::new().with_object(bullet);

        let outcome = enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert_eq!(outcome.clear_request, Some(MapRequest::ClearCell { row: 0, col: 0 }));
        assert!(enemy.is_dying());
    }

    #[test]
    fn test_bullet_past_death_radius_misses() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let bullet = SceneObject::new(BULLET_NAME, at(1.01, 0.0), Faction::Player);
        let scene = SceneSnapshot::new().with_object(bullet);

        let outcome = enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert!(outcome.clear_request.is_none());
        assert!(!enemy.is_dying());
    }

    #[test]
    fn test_clear_request_uses_row_then_col() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 3, 7, None);
        let bullet = SceneObject::new(BULLET_NAME, at(3.2, 7.1), Faction::Player);
        let scene = SceneSnapshot::new().with_object(bullet);

        let outcome = enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert_eq!(outcome.clear_request, Some(MapRequest::ClearCell { row: 7, col: 3 }));
    }

    #[test]
    fn test_enemy_bullet_does_not_kill() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let bullet = SceneObject::new(BULLET_NAME, at(0.2, 0.0), Faction::Enemy);
        let scene = SceneSnapshot::new().with_object(bullet);

        let outcome = enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert!(outcome.clear_request.is_none());
        assert!(!enemy.is_dying());
    }

    #[test]
    fn test_dying_enemy_stops_acting() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let bullet = SceneObject::new(BULLET_NAME, at(0.5, 0.0), Faction::Player);
        let config = AiConfig::default();

        enemy.tick(&SceneSnapshot::new().with_object(bullet), &config, 0, &mut ids);
        let scene = SceneSnapshot::new().with_player(at(5.0, 0.0));
        let outcome = enemy.tick(&scene, &config, 100, &mut ids);

        assert_eq!(outcome, TickOutcome::default());
        assert!(!enemy.is_chasing());
    }

    #[test]
    fn test_faces_camera() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 0, None);
        let scene = SceneSnapshot::new().with_camera(Vec3::new(20.0, 0.75, 20.0));

        enemy.tick(&scene, &AiConfig::default(), 0, &mut ids);
        assert_eq!(enemy.pose().look_at, Vec3::new(20.0, 0.25, 20.0));
    }

    #[test]
    fn test_reroll_avoids_pressed_side() {
        let mut scheduler = IntervalScheduler::new();
        let mut ids = ProjectileIds::new();
        let mut enemy = spawn(&mut scheduler, 0, 1, Some(Facing::Up));
        let scene = SceneSnapshot::new().with_wall(at(0.0, 0.0));
        let config = AiConfig::default();

        enemy.tick(&scene, &config, 0, &mut ids);
        assert!(enemy.clearance().pressed_sides(enemy.position()).contains(&Facing::Up));

        let mut rng = fastrand::Rng::with_seed(3);
        for step in 0..50 {
            let facing = enemy.reroll(&mut rng, step as f32);
            assert_ne!(facing, Some(Facing::Up));
        }
        assert_eq!(enemy.last_direction_change(), 49.0);
    }
}
