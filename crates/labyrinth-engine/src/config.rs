//! Simulation configuration.
//!
//! Holds the enemy AI tuning plus the parameters of the headless host
//! (frame count, frame rate, seed, level file, scripted player).
//! Configuration can be loaded from and saved to a TOML file.

use labyrinth_gameplay::AiConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "labyrinth.toml";

/// Simulation configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Run Settings ===
    /// Number of frames to simulate
    pub frames: u32,
    /// Simulated frames per second
    pub target_fps: u32,
    /// RNG seed (None = random)
    pub seed: Option<u64>,
    /// Level file (None = built-in level)
    pub map_path: Option<PathBuf>,

    // === Scripted Player ===
    /// Milliseconds between player shots (0 = never shoots)
    pub player_fire_interval_ms: u64,
    /// Distance a bullet travels per frame
    pub bullet_speed: f32,
    /// Frames before a bullet expires
    pub bullet_lifetime_frames: u32,

    // === AI (kept last: TOML tables follow plain keys) ===
    /// Enemy AI tuning
    pub ai: AiConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: 3600, // 1 minute at 60 FPS
            target_fps: 60,
            seed: None,
            map_path: None,

            player_fire_interval_ms: 1500,
            bullet_speed: 0.2,
            bullet_lifetime_frames: 240,

            ai: AiConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.ai.validate();

        self.frames = self.frames.clamp(1, 1_000_000);
        self.target_fps = self.target_fps.clamp(10, 240);

        self.player_fire_interval_ms = self.player_fire_interval_ms.min(60_000);
        self.bullet_speed = self.bullet_speed.clamp(0.01, 2.0);
        self.bullet_lifetime_frames = self.bullet_lifetime_frames.clamp(1, 10_000);
    }
}
