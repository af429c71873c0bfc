//! One game session: state, randomness and balance behind a small command API

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rng::UniformSource;
use super::spawner;
use super::state::{Duck, GameEvent, GamePhase, GameState, Obstacle};
use super::tick::tick;
use crate::layout::Layout;
use crate::tuning::Tuning;

/// Owns every game entity. Hosts drive it through `jump`, `restart`,
/// `advance` and `resize`, and read it through `state`.
#[derive(Debug, Clone)]
pub struct Simulation<R: UniformSource = Pcg32> {
    pub(crate) state: GameState,
    rng: R,
    tuning: Tuning,
}

impl Simulation<Pcg32> {
    /// Shipped balance with a seeded PCG stream
    pub fn new(layout: Layout, seed: u64) -> Self {
        Self::with_rng(layout, Tuning::default(), Pcg32::seed_from_u64(seed))
    }
}

impl<R: UniformSource> Simulation<R> {
    pub fn with_rng(layout: Layout, tuning: Tuning, mut rng: R) -> Self {
        let scenery_seed = (rng.next_uniform() * u32::MAX as f32) as u64;
        let mut state = GameState::new(layout, tuning.base_scroll_speed, scenery_seed);
        spawner::reset_scenery(&mut state);
        Self { state, rng, tuning }
    }

    /// Jump if standing; the first jump of a session starts the run.
    /// Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        let state = &mut self.state;
        if state.phase == GamePhase::Over || !state.duck.grounded {
            return false;
        }
        if state.phase == GamePhase::NotStarted {
            state.phase = GamePhase::Playing;
            state.push_event(GameEvent::Started);
            log::info!("Run started");
        }
        state.duck.vel_y = self.tuning.jump_velocity;
        state.duck.grounded = false;
        state.push_event(GameEvent::Jumped);
        true
    }

    /// Back to a fresh, not-started session. Safe from any phase.
    pub fn restart(&mut self) {
        let layout = self.state.layout;
        let scenery_seed = self.state.scenery_seed;
        self.state = GameState::new(layout, self.tuning.base_scroll_speed, scenery_seed);
        spawner::reset_scenery(&mut self.state);
        self.state.push_event(GameEvent::Restarted);
        log::info!("Run reset");
    }

    /// Advance by `dt` seconds. Does nothing unless playing.
    pub fn advance(&mut self, dt: f32) {
        tick(&mut self.state, &mut self.rng, &self.tuning, dt);
    }

    /// Adopt a new surface size, keeping grounded things on the ground
    pub fn resize(&mut self, layout: Layout) {
        if layout == self.state.layout {
            return;
        }
        let state = &mut self.state;
        state.layout = layout;
        let ground_y = layout.ground_y();

        if state.duck.grounded || state.duck.bounds.bottom() > ground_y {
            state.duck.rest_on(ground_y);
        }
        for obstacle in &mut state.obstacles {
            obstacle.bounds.pos.y = ground_y - obstacle.bounds.size.y;
        }

        let mut scenery = Pcg32::seed_from_u64(state.scenery_seed);
        state.ground_ticks = spawner::spawn_ground_ticks(&layout, &mut scenery);
        state.ground_offset = state.ground_offset.rem_euclid(layout.width());
        log::debug!("Resized to {}x{}", layout.width(), layout.height());
    }

    /// Read-only snapshot for renderers and hosts
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> f32 {
        self.state.score
    }

    pub fn scroll_speed(&self) -> f32 {
        self.state.scroll_speed
    }

    pub fn duck(&self) -> &Duck {
        &self.state.duck
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.state.obstacles
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Drain events recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
