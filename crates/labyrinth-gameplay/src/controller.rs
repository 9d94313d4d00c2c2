//! Enemy registry driven once per rendered frame.

use std::collections::BTreeMap;

use labyrinth_common::{EnemyId, GridCell};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AiConfig;
use crate::direction;
use crate::enemy::{AiState, Enemy, EnemyPose};
use crate::events::{EnemyEvent, EventBus};
use crate::geometry::distance;
use crate::map::{Cell, MapGrid, MapRequest};
use crate::projectile::{ProjectileDescriptor, ProjectileIds};
use crate::scene::SceneQuery;
use crate::schedule::IntervalScheduler;

/// Errors from the enemy registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnemyError {
    /// No enemy with this ID
    #[error("Enemy not found: {0}")]
    NotFound(EnemyId),
    /// An enemy already occupies this spawn cell
    #[error("Enemy already spawned: {0}")]
    AlreadySpawned(EnemyId),
}

/// Result type for enemy registry operations.
pub type EnemyResult<T> = Result<T, EnemyError>;

/// Host clock readings for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameClock {
    /// Absolute time (milliseconds), drives throttling and fire cooldown
    pub now_ms: u64,
    /// Monotonic elapsed time (seconds), drives direction re-rolls
    pub elapsed: f32,
}

impl FrameClock {
    /// Creates a clock reading.
    #[must_use]
    pub const fn new(now_ms: u64, elapsed: f32) -> Self {
        Self { now_ms, elapsed }
    }

    /// Clock reading where both times derive from one millisecond counter.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self {
            now_ms: ms,
            elapsed: ms as f32 / 1000.0,
        }
    }
}

/// Owns every live enemy and ticks them against the scene.
#[derive(Debug)]
pub struct EnemyController {
    enemies: BTreeMap<EnemyId, Enemy>,
    scheduler: IntervalScheduler,
    rng: fastrand::Rng,
    events: EventBus,
    config: AiConfig,
    projectile_ids: ProjectileIds,
    /// Cell clears not yet collected by the map owner
    map_requests: Vec<MapRequest>,
}

impl Default for EnemyController {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyController {
    /// Creates a controller with default tuning and a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(AiConfig::default(), fastrand::Rng::new())
    }

    /// Creates a controller with default tuning and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_parts(AiConfig::default(), fastrand::Rng::with_seed(seed))
    }

    /// Creates a controller with the given tuning and seed.
    #[must_use]
    pub fn with_config(mut config: AiConfig, seed: u64) -> Self {
        config.validate();
        Self::with_parts(config, fastrand::Rng::with_seed(seed))
    }

    fn with_parts(config: AiConfig, rng: fastrand::Rng) -> Self {
        Self {
            enemies: BTreeMap::new(),
            scheduler: IntervalScheduler::new(),
            rng,
            events: EventBus::default(),
            config,
            projectile_ids: ProjectileIds::new(),
            map_requests: Vec::new(),
        }
    }

    /// AI tuning in use.
    #[must_use]
    pub const fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Event bus observers can drain.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Returns the number of live enemies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Returns whether there are no enemies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Gets an enemy.
    #[must_use]
    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(&id)
    }

    /// Number of enemies currently chasing.
    #[must_use]
    pub fn chasing_count(&self) -> usize {
        self.enemies.values().filter(|enemy| enemy.is_chasing()).count()
    }

    /// Spawns an enemy on a map cell with a random patrol direction.
    pub fn spawn(&mut self, cell: GridCell, clock: FrameClock) -> EnemyResult<EnemyId> {
        let id = EnemyId::from_spawn(cell);
        if self.enemies.contains_key(&id) {
            return Err(EnemyError::AlreadySpawned(id));
        }

        let task = self.scheduler.schedule(self.config.reroll_interval, clock.elapsed);
        let facing = direction::reroll(&[], &mut self.rng);
        let enemy = Enemy::new(id, &self.config, task, facing, clock.elapsed);
        self.enemies.insert(id, enemy);

        info!(enemy = %id, ?facing, "enemy spawned");
        self.events.publish(EnemyEvent::Spawned { enemy_id: id });
        Ok(id)
    }

    /// Spawns an enemy on every enemy cell of the map that has none yet.
    pub fn spawn_from_map(&mut self, map: &MapGrid, clock: FrameClock) -> Vec<EnemyId> {
        let cells: Vec<GridCell> = map.enemy_spawns().collect();
        cells
            .into_iter()
            .filter_map(|cell| self.spawn(cell, clock).ok())
            .collect()
    }

    /// Removes an enemy. Its re-roll task is cancelled when the returned
    /// record is dropped.
    pub fn despawn(&mut self, id: EnemyId) -> EnemyResult<Enemy> {
        let enemy = self.enemies.remove(&id).ok_or(EnemyError::NotFound(id))?;
        info!(enemy = %id, "enemy despawned");
        self.events.publish(EnemyEvent::Despawned { enemy_id: id });
        Ok(enemy)
    }

    /// Despawns every enemy whose spawn cell no longer holds an enemy.
    pub fn sync_with_map(&mut self, map: &MapGrid) -> Vec<EnemyId> {
        let gone: Vec<EnemyId> = self
            .enemies
            .keys()
            .copied()
            .filter(|id| map.cell_at(id.spawn_cell()) != Some(Cell::Enemy))
            .collect();

        for id in &gone {
            if let Ok(enemy) = self.despawn(*id) {
                drop(enemy);
            }
        }
        gone
    }

    /// Ticks every enemy, then fires due direction re-rolls.
    pub fn update<S: SceneQuery + ?Sized>(&mut self, scene: &S, clock: FrameClock) {
        for enemy in self.enemies.values_mut() {
            let id = enemy.id();
            let outcome = enemy.tick(scene, &self.config, clock.now_ms, &mut self.projectile_ids);
            if !outcome.ran {
                continue;
            }

            match outcome.transition {
                Some(AiState::Chase) => {
                    let gap = scene
                        .player_position()
                        .map_or(f32::INFINITY, |player| distance(player, enemy.position()));
                    self.events.publish(EnemyEvent::ChaseStarted {
                        enemy_id: id,
                        distance: gap,
                    });
                },
                Some(AiState::Patrol) => {
                    self.events.publish(EnemyEvent::ChaseEnded { enemy_id: id });
                },
                None => {},
            }

            if let Some(shot) = outcome.fired {
                self.events.publish(EnemyEvent::ProjectileFired {
                    enemy_id: id,
                    projectile_id: shot.id,
                    velocity: shot.velocity,
                });
            }

            if let Some(request) = outcome.clear_request {
                let MapRequest::ClearCell { row, col } = request;
                self.events.publish(EnemyEvent::CellClearRequested {
                    enemy_id: id,
                    row,
                    col,
                });
                self.map_requests.push(request);
            }
        }

        let due = self.scheduler.poll(clock.elapsed);
        if due.is_empty() {
            return;
        }
        for enemy in self.enemies.values_mut() {
            if enemy.is_dying() || !due.contains(&enemy.reroll_task()) {
                continue;
            }
            let facing = enemy.reroll(&mut self.rng, clock.elapsed);
            self.events.publish(EnemyEvent::DirectionChanged {
                enemy_id: enemy.id(),
                facing,
            });
        }
        debug!(count = due.len(), "patrol re-rolls fired");
    }

    /// Collects every shot fired since the last call.
    pub fn drain_projectiles(&mut self) -> Vec<ProjectileDescriptor> {
        self.enemies
            .values_mut()
            .flat_map(Enemy::drain_projectiles)
            .collect()
    }

    /// Collects every map mutation requested since the last call.
    pub fn drain_map_requests(&mut self) -> Vec<MapRequest> {
        std::mem::take(&mut self.map_requests)
    }

    /// Drains pending events from the bus.
    pub fn drain_events(&self) -> Vec<EnemyEvent> {
        self.events.drain()
    }

    /// Renderable output of every enemy.
    pub fn poses(&self) -> impl Iterator<Item = EnemyPose> + '_ {
        self.enemies.values().map(Enemy::pose)
    }
}
