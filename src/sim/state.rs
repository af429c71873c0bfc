//! Game state and core simulation types
//!
//! `GameState` is the snapshot the renderer reads. It is only ever mutated
//! through `Simulation`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::layout::Layout;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, waiting for the first jump
    NotStarted,
    /// Active run
    Playing,
    /// Hit an obstacle; only restart leaves this phase
    Over,
}

/// The player's duck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Duck {
    pub bounds: Aabb,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    pub grounded: bool,
}

impl Duck {
    /// A duck standing on the ground
    pub fn new(ground_y: f32) -> Self {
        let mut duck = Self {
            bounds: Aabb::new(Vec2::new(DUCK_X, 0.0), Vec2::new(DUCK_WIDTH, DUCK_HEIGHT)),
            vel_y: 0.0,
            grounded: true,
        };
        duck.rest_on(ground_y);
        duck
    }

    /// Snap onto the ground line and stop falling
    pub fn rest_on(&mut self, ground_y: f32) {
        self.bounds.pos.y = ground_y - self.bounds.size.y;
        self.vel_y = 0.0;
        self.grounded = true;
    }

    /// Gravity integration followed by the ground clamp
    pub fn integrate(&mut self, gravity: f32, dt: f32, ground_y: f32) {
        self.vel_y += gravity * dt;
        self.bounds.pos.y += self.vel_y * dt;
        if self.bounds.bottom() >= ground_y {
            self.rest_on(ground_y);
        }
    }
}

/// Cosmetic obstacle look; never affects collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleVariant {
    #[default]
    Post,
    /// Rare lantern post with a warm halo
    Lantern,
}

/// Something to jump over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub bounds: Aabb,
    pub variant: ObstacleVariant,
}

/// Decorative parallax cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub bounds: Aabb,
    /// Own scroll speed (pixels/s), slower than the world
    pub speed: f32,
}

/// Decorative dash just below the ground line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundTick {
    /// Position before the scroll offset is applied
    pub x: f32,
    pub length: f32,
}

/// Things that happened since the driver last drained the queue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    Spawned { id: u32, variant: ObstacleVariant },
    SpeedUp { scroll_speed: f32 },
    Crashed { score: f32 },
    Restarted,
}

/// Complete state of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub layout: Layout,
    pub duck: Duck,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub ground_ticks: Vec<GroundTick>,
    /// How far the ground dashes have scrolled, wrapped to the layout width
    pub ground_offset: f32,
    pub score: f32,
    /// Score earned since the last speed-up
    pub ramp_progress: f32,
    /// World scroll speed (pixels/s)
    pub scroll_speed: f32,
    /// World distance covered since the last spawn
    pub distance_since_spawn: f32,
    /// Gap the spawner is waiting for; drawn lazily so restarting costs no randomness
    pub next_gap: Option<f32>,
    /// Seed for clouds and ground ticks, so every restart shows the same scenery
    pub scenery_seed: u64,
    /// Events since the last `Simulation::take_events`. Hosts that never
    /// drain it keep only the newest `MAX_PENDING_EVENTS`.
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh session state; scenery is filled in by the spawner
    pub fn new(layout: Layout, base_scroll_speed: f32, scenery_seed: u64) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            layout,
            duck: Duck::new(layout.ground_y()),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            ground_ticks: Vec::new(),
            ground_offset: 0.0,
            score: 0.0,
            ramp_progress: 0.0,
            scroll_speed: base_scroll_speed,
            distance_since_spawn: 0.0,
            next_gap: None,
            scenery_seed,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Record an event, dropping the oldest once the queue is full
    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Whole points, as shown on the HUD
    pub fn display_score(&self) -> u32 {
        self.score.max(0.0).floor() as u32
    }
}
