//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Motion in per-second units, driven by an external `dt`
//! - Randomness only through an injected `UniformSource`
//! - Entities owned by `Simulation`, read through `GameState`

pub mod collision;
pub mod rng;
pub mod simulation;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_overlap};
pub use rng::{ScriptedSource, UniformSource};
pub use simulation::Simulation;
pub use state::{Cloud, Duck, GameEvent, GamePhase, GameState, GroundTick, Obstacle, ObstacleVariant};
pub use tick::{sanitize_dt, tick};
