//! Headless level host.
//!
//! Plays the part of the rendering collaborator: owns the map, builds the
//! scene snapshot every frame, flies bullets, applies cell-clear requests and
//! removes dead enemies. The player is scripted: it stands on its spawn cell
//! and shoots at the nearest enemy it can see.

use std::path::Path;
use std::time::Instant;

use glam::Vec3;
use labyrinth_common::{GridCell, LabyrinthResult, EYE_HEIGHT};
use labyrinth_gameplay::{
    line_blocked, Cell, EnemyController, EnemyEvent, EnemyPose, Faction, FrameClock, MapGrid,
    SceneObject, SceneQuery, SceneSnapshot, BULLET_NAME,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SimConfig;
use crate::timing::FrameTiming;

/// Level used when no map file is configured.
pub const DEFAULT_LEVEL: &str = "\
###############
#P····#·······#
#·###·#·##E##·#
#·#E··········#
#·#·###·#·#####
#·······#···E·#
###·#####·###·#
#E··#·······#·#
#·###·#E#·#·#·#
#·············#
###############
";

/// Enemy bullets closer than this to the player count as a hit.
const PLAYER_HIT_RADIUS: f32 = 0.5;

/// Loads the configured level, falling back to [`DEFAULT_LEVEL`].
pub fn load_map(path: Option<&Path>) -> LabyrinthResult<MapGrid> {
    let map = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            info!("Loaded level from {}", path.display());
            MapGrid::parse(&text)?
        },
        None => MapGrid::parse(DEFAULT_LEVEL)?,
    };
    Ok(map)
}

/// Statistics of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Frames simulated
    pub frames: u64,
    /// Enemies spawned from the map
    pub enemies_spawned: usize,
    /// Enemies removed after being shot
    pub enemies_killed: usize,
    /// Enemies alive at the end
    pub enemies_remaining: usize,
    /// Projectiles fired by enemies
    pub enemy_shots: u64,
    /// Projectiles fired by the player
    pub player_shots: u64,
    /// Enemy projectiles that reached the player
    pub player_hits: u64,
    /// Patrol to chase transitions
    pub chase_starts: u64,
    /// Patrol direction re-rolls
    pub direction_changes: u64,
    /// Mean controller update time (milliseconds)
    pub average_update_ms: f32,
    /// Enemy poses after the last frame
    pub final_poses: Vec<EnemyPose>,
}

#[derive(Debug, Clone, Copy)]
struct Bullet {
    position: Vec3,
    velocity: Vec3,
    faction: Faction,
    frames_left: u32,
}

/// Drives the enemy controller frame by frame.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    map: MapGrid,
    controller: EnemyController,
    timing: FrameTiming,
    /// Persistent snapshot; walls are static, objects are rebuilt per frame
    scene: SceneSnapshot,
    player: Option<Vec3>,
    bullets: Vec<Bullet>,
    next_player_shot_ms: u64,
    report: RunReport,
}

impl Simulation {
    /// Creates a simulation and spawns every enemy of the map.
    #[must_use]
    pub fn new(config: SimConfig, map: MapGrid) -> Self {
        let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
        let mut controller = EnemyController::with_config(config.ai.clone(), seed);
        let timing = FrameTiming::new(config.target_fps);

        let spawned = controller.spawn_from_map(&map, timing.clock());
        let player = map.player_spawn().map(|cell| cell.to_world(EYE_HEIGHT));
        if player.is_none() {
            warn!("Level has no player spawn, enemies will only patrol");
        }

        let mut scene = SceneSnapshot::new();
        for wall in map.walls() {
            scene.add_wall(wall.to_world(EYE_HEIGHT));
        }
        scene.set_player(player);

        info!(enemies = spawned.len(), seed, "simulation ready");
        Self {
            config,
            map,
            controller,
            timing,
            scene,
            player,
            bullets: Vec::new(),
            next_player_shot_ms: 0,
            report: RunReport {
                enemies_spawned: spawned.len(),
                ..RunReport::default()
            },
        }
    }

    /// Level map in its current state.
    #[must_use]
    pub fn map(&self) -> &MapGrid {
        &self.map
    }

    /// Enemy controller.
    #[must_use]
    pub fn controller(&self) -> &EnemyController {
        &self.controller
    }

    /// Scene snapshot handed to the controller on the last frame.
    #[must_use]
    pub fn scene(&self) -> &SceneSnapshot {
        &self.scene
    }

    /// Report of the frames simulated so far.
    #[must_use]
    pub fn report(&self) -> RunReport {
        let mut report = self.report.clone();
        report.frames = self.timing.frame();
        report.enemies_remaining = self.controller.len();
        report.average_update_ms = self.timing.average_update_ms();
        report.final_poses = self.controller.poses().collect();
        report
    }

    /// Runs every configured frame and returns the report.
    pub fn run(mut self) -> RunReport {
        for _ in 0..self.config.frames {
            self.step();
        }
        let report = self.report();
        info!(
            frames = report.frames,
            killed = report.enemies_killed,
            remaining = report.enemies_remaining,
            "simulation finished"
        );
        report
    }

    /// Simulates one frame.
    pub fn step(&mut self) {
        let clock = self.timing.advance();

        self.fly_bullets();
        self.player_fire(clock);
        self.rebuild_objects();

        let started = Instant::now();
        self.controller.update(&self.scene, clock);
        self.timing.record_update(started.elapsed());

        for shot in self.controller.drain_projectiles() {
            self.report.enemy_shots += 1;
            self.bullets.push(Bullet {
                position: shot.position,
                velocity: shot.velocity,
                faction: Faction::Enemy,
                frames_left: self.config.bullet_lifetime_frames,
            });
        }

        for request in self.controller.drain_map_requests() {
            if let Err(e) = self.map.apply(request) {
                warn!("Dropped map request {request:?}: {e}");
            }
        }
        let removed = self.controller.sync_with_map(&self.map);
        self.report.enemies_killed += removed.len();

        for event in self.controller.drain_events() {
            match event {
                EnemyEvent::ChaseStarted { .. } => self.report.chase_starts += 1,
                EnemyEvent::DirectionChanged { .. } => self.report.direction_changes += 1,
                _ => {},
            }
        }
    }

    fn fly_bullets(&mut self) {
        let map = &self.map;
        let player = self.player;
        let mut hits = 0;

        self.bullets.retain_mut(|bullet| {
            bullet.position += bullet.velocity;
            bullet.frames_left = bullet.frames_left.saturating_sub(1);
            if bullet.frames_left == 0 {
                return false;
            }
            if !matches!(map.cell_at(GridCell::snap(bullet.position)), Some(cell) if cell != Cell::Wall)
            {
                return false;
            }
            if bullet.faction == Faction::Enemy {
                if let Some(player) = player {
                    if bullet.position.distance(player) < PLAYER_HIT_RADIUS {
                        hits += 1;
                        return false;
                    }
                }
            }
            true
        });

        if hits > 0 {
            debug!(hits, "player hit");
        }
        self.report.player_hits += hits;
    }

    fn player_fire(&mut self, clock: FrameClock) {
        let Some(player) = self.player else {
            return;
        };
        let interval = self.config.player_fire_interval_ms;
        if interval == 0 || clock.now_ms < self.next_player_shot_ms {
            return;
        }

        let from = GridCell::from_world(player);
        let target = self
            .controller
            .poses()
            .filter(|pose| {
                !line_blocked(from, GridCell::from_world(pose.position), self.scene.walls())
            })
            .min_by(|a, b| {
                a.position
                    .distance(player)
                    .total_cmp(&b.position.distance(player))
            });

        let Some(target) = target else {
            return;
        };
        let direction = (target.position - player).normalize_or_zero();
        if direction == Vec3::ZERO {
            return;
        }

        self.bullets.push(Bullet {
            position: player,
            velocity: direction * self.config.bullet_speed,
            faction: Faction::Player,
            frames_left: self.config.bullet_lifetime_frames,
        });
        self.report.player_shots += 1;
        self.next_player_shot_ms = clock.now_ms + interval;
        debug!(target = %target.id, "player fired");
    }

    fn rebuild_objects(&mut self) {
        self.scene.clear_objects();
        for pose in self.controller.poses() {
            self.scene.add_object(SceneObject::new(
                pose.id.scene_name(),
                pose.position,
                Faction::Enemy,
            ));
        }
        for bullet in &self.bullets {
            self.scene
                .add_object(SceneObject::new(BULLET_NAME, bullet.position, bullet.faction));
        }
    }
}
