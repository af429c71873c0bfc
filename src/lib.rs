//! Duck Runner - a tiny endless runner for the portfolio page
//!
//! Core modules:
//! - `sim`: Simulation (physics, spawning, collisions, scoring, game phase)
//! - `renderer`: Read-only projection of the simulation onto a 2D surface
//! - `driver`: Frame clock that ties simulation and renderer together
//! - `layout`: Responsive canvas dimensions and the ground plane
//! - `tuning`: Game balance, gathered from `consts`
//! - `platform`: Browser glue (Canvas 2D surface, clock seeding)
//! - `settings`: The single persisted page preference (theme)

pub mod driver;
pub mod error;
pub mod layout;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use driver::Driver;
pub use error::RunnerError;
pub use layout::Layout;
pub use settings::Theme;
pub use sim::{GamePhase, GameState, Simulation};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest elapsed time fed to a single tick (seconds)
    pub const DT_CAP: f32 = 0.05;

    /// Logical canvas aspect ratio (1200x400)
    pub const ASPECT_RATIO: f32 = 1200.0 / 400.0;
    /// Fraction of the viewport width the canvas takes
    pub const VIEWPORT_FILL: f32 = 0.92;
    /// Widest the canvas may grow (pixels)
    pub const MAX_CANVAS_WIDTH: f32 = 1100.0;
    /// Degenerate layouts are clamped up to these
    pub const MIN_CANVAS_WIDTH: f32 = 160.0;
    pub const MIN_CANVAS_HEIGHT: f32 = 120.0;
    /// Distance from the bottom edge to the ground line
    pub const GROUND_MARGIN: f32 = 40.0;

    /// Duck body
    pub const DUCK_X: f32 = 80.0;
    pub const DUCK_WIDTH: f32 = 44.0;
    pub const DUCK_HEIGHT: f32 = 34.0;

    /// Physics (per-second units)
    pub const GRAVITY: f32 = 720.0;
    pub const JUMP_VELOCITY: f32 = -405.0;
    pub const BASE_SCROLL_SPEED: f32 = 270.0;

    /// Scoring and the stepped difficulty ramp
    pub const SCORE_RATE: f32 = 30.0;
    pub const RAMP_THRESHOLD: f32 = 250.0;
    pub const RAMP_STEP: f32 = 18.0;

    /// Obstacle spawning (world-distance units)
    pub const GAP_MIN: f32 = 380.0;
    pub const GAP_RANGE: f32 = 180.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_HEIGHT_RANGE: f32 = 35.0;
    pub const OBSTACLE_MIN_WIDTH: f32 = 18.0;
    pub const OBSTACLE_WIDTH_RANGE: f32 = 20.0;
    /// Obstacles appear this far past the right edge
    pub const SPAWN_OFFSET: f32 = 10.0;
    /// Obstacles are culled once their right edge passes this far left of the canvas
    pub const CULL_MARGIN: f32 = 10.0;
    /// Chance a new obstacle gets the glowing look
    pub const VARIANT_CHANCE: f32 = 0.08;

    /// Parallax clouds
    pub const CLOUD_COUNT: usize = 4;
    pub const CLOUD_TOP: f32 = 40.0;
    pub const CLOUD_BAND: f32 = 0.4;
    pub const CLOUD_MIN_WIDTH: f32 = 60.0;
    pub const CLOUD_WIDTH_RANGE: f32 = 50.0;
    pub const CLOUD_MIN_HEIGHT: f32 = 20.0;
    pub const CLOUD_HEIGHT_RANGE: f32 = 10.0;
    pub const CLOUD_MIN_SPEED: f32 = 20.0;
    pub const CLOUD_SPEED_RANGE: f32 = 20.0;
    pub const CLOUD_WRAP_JITTER: f32 = 100.0;

    /// Ground dashes
    pub const GROUND_TICK_SPACING: f32 = 48.0;
    pub const GROUND_TICK_MIN_LENGTH: f32 = 6.0;
    pub const GROUND_TICK_LENGTH_RANGE: f32 = 12.0;

    /// How long the "Quack!" cue lingers after a jump (seconds)
    pub const QUACK_DURATION: f32 = 0.6;

    /// Undrained events kept on the snapshot
    pub const MAX_PENDING_EVENTS: usize = 64;
}
