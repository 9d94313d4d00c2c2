//! # Labyrinth Engine
//!
//! Headless host for the enemy controller: configuration, a virtual frame
//! clock and a level simulation standing in for the renderer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod level;
pub mod timing;

pub use config::{SimConfig, CONFIG_FILE};
pub use level::{load_map, RunReport, Simulation, DEFAULT_LEVEL};
pub use timing::FrameTiming;
