//! Frame clock: turns host timestamps into simulation ticks
//!
//! The host calls `frame` once per display refresh with its own timestamp
//! (milliseconds). Tests and headless runs call `tick` with a chosen `dt`.

use rand_pcg::Pcg32;

use crate::consts::DT_CAP;
use crate::layout::Layout;
use crate::renderer::{Renderer, Surface};
use crate::sim::{GameEvent, Simulation, UniformSource, sanitize_dt};

pub struct Driver<R: UniformSource = Pcg32> {
    sim: Simulation<R>,
    renderer: Renderer,
    last_timestamp: Option<f64>,
    frames: u64,
}

impl<R: UniformSource> Driver<R> {
    pub fn new(sim: Simulation<R>) -> Self {
        Self {
            sim,
            renderer: Renderer::new(),
            last_timestamp: None,
            frames: 0,
        }
    }

    /// Elapsed seconds since the previous timestamp, capped at `DT_CAP`.
    /// The first call only records the baseline.
    pub fn elapsed_since_last(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_timestamp {
            Some(prev) => (((now_ms - prev) / 1000.0) as f32).max(0.0).min(DT_CAP),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        dt
    }

    /// One display-refresh callback. Returns the `dt` that was simulated.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) -> f32 {
        let dt = self.elapsed_since_last(now_ms);
        self.tick(dt, surface);
        dt
    }

    /// Advance the simulation by `dt`, draw, then drain the event queue.
    /// A frame with no elapsed time only redraws, so a jump made before it
    /// is not clamped back onto the ground.
    pub fn tick(&mut self, dt: f32, surface: &mut impl Surface) {
        if sanitize_dt(dt) > 0.0 {
            self.sim.advance(dt);
        }
        self.renderer.draw(self.sim.state(), dt, surface);
        self.frames += 1;

        for event in self.sim.take_events() {
            log_event(&event);
        }
    }

    pub fn jump(&mut self) -> bool {
        self.sim.jump()
    }

    pub fn restart(&mut self) {
        self.sim.restart();
    }

    pub fn resize(&mut self, layout: Layout) {
        self.sim.resize(layout);
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Crashed { score } => log::info!("Game over, final score {}", score.floor()),
        other => log::trace!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::CommandList;
    use crate::sim::GamePhase;
    use crate::tuning::Tuning;
    use rand::SeedableRng;

    fn quiet_driver() -> Driver {
        Driver::new(Simulation::with_rng(
            Layout::default(),
            Tuning::without_obstacles(),
            Pcg32::seed_from_u64(8),
        ))
    }

    #[test]
    fn test_first_frame_is_baseline() {
        let mut driver = quiet_driver();
        let mut surface = CommandList::new();
        assert_eq!(driver.frame(1_000.0, &mut surface), 0.0);
        assert!(!surface.is_empty());
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_dt_is_capped_and_never_negative() {
        let mut driver = quiet_driver();
        let mut surface = CommandList::new();
        driver.frame(0.0, &mut surface);

        let dt = driver.frame(16.0, &mut surface);
        assert!((dt - 0.016).abs() < 1e-6);

        // Tab was in the background for ten seconds
        assert_eq!(driver.frame(10_016.0, &mut surface), DT_CAP);

        // Clock went backwards
        assert_eq!(driver.frame(5_000.0, &mut surface), 0.0);
    }

    #[test]
    fn test_stall_cannot_skip_physics() {
        let mut driver = quiet_driver();
        let mut surface = CommandList::new();
        driver.frame(0.0, &mut surface);
        driver.jump();
        driver.frame(60_000.0, &mut surface);
        let sim = driver.simulation();
        assert!((sim.score() - sim.tuning().score_rate * DT_CAP).abs() < 1e-4);
        assert!(!sim.duck().grounded);
    }

    #[test]
    fn test_zero_length_frame_keeps_jump() {
        let mut driver = quiet_driver();
        let mut surface = CommandList::new();
        driver.frame(0.0, &mut surface);
        driver.frame(16.0, &mut surface);
        assert!(driver.jump());

        // Same timestamp again, then a backwards one
        driver.frame(16.0, &mut surface);
        driver.frame(10.0, &mut surface);
        assert!(!driver.simulation().duck().grounded);
        assert_eq!(driver.simulation().duck().vel_y, driver.simulation().tuning().jump_velocity);

        driver.frame(26.0, &mut surface);
        assert!(driver.simulation().duck().bounds.bottom() < driver.simulation().state().layout.ground_y());
    }

    #[test]
    fn test_tick_drains_events() {
        let mut driver = quiet_driver();
        let mut surface = CommandList::new();
        assert!(driver.jump());
        assert!(!driver.simulation().state().events.is_empty());
        driver.tick(0.016, &mut surface);
        assert!(driver.simulation().state().events.is_empty());
        // The renderer saw the jump before the queue was drained
        assert!(driver.renderer().quack_strength() > 0.0);
    }

    #[test]
    fn test_manual_ticks_play_a_run() {
        let mut driver = quiet_driver();
        let mut surface = CommandList::new();
        driver.jump();
        for _ in 0..120 {
            surface.clear();
            driver.tick(1.0 / 60.0, &mut surface);
        }
        assert_eq!(driver.simulation().phase(), GamePhase::Playing);
        assert!((driver.simulation().score() - 60.0).abs() < 0.01);

        driver.restart();
        driver.tick(1.0 / 60.0, &mut surface);
        assert_eq!(driver.simulation().phase(), GamePhase::NotStarted);
        assert_eq!(driver.simulation().score(), 0.0);
    }
}
