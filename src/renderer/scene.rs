//! Full-frame scene drawing
//!
//! `Renderer::draw` projects a `GameState` onto a `Surface`. The only state it
//! keeps is the fade timer for the "Quack!" bubble.

use glam::Vec2;

use super::shapes::{self, GROUND_LINE, GROUND_TICK};
use super::surface::{Color, Paint, Surface, TextAlign};
use crate::consts::QUACK_DURATION;
use crate::sim::{Aabb, GameEvent, GamePhase, GameState};

const HUD_FONT: &str = "16px ui-monospace, SFMono-Regular, Menlo, Consolas, monospace";
const PROMPT_FONT: &str = "16px system-ui, sans-serif";
const TITLE_FONT: &str = "22px system-ui, sans-serif";
const HINT_FONT: &str = "14px system-ui, sans-serif";
const CUE_FONT: &str = "bold 13px system-ui, sans-serif";

const HUD_COLOR: Color = Color::rgba(255, 255, 255, 0.95);
const PROMPT_COLOR: Color = Color::rgba(255, 255, 255, 0.9);
const OVERLAY_COLOR: Color = Color::rgba(0, 0, 0, 0.5);
const WHITE: Color = Color::rgb(255, 255, 255);

pub const START_PROMPT: &str = "Press Space/\u{25B2} or Tap to start";
pub const GAME_OVER_TITLE: &str = "Game Over.";
pub const GAME_OVER_HINT: &str = "Press R to restart";
pub const QUACK_TEXT: &str = "Quack!";

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// Seconds left on the quack bubble
    quack_timer: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining quack time as a 0-1 fraction
    pub fn quack_strength(&self) -> f32 {
        (self.quack_timer / QUACK_DURATION).clamp(0.0, 1.0)
    }

    /// Draw one frame. `dt` only ages cosmetic timers.
    pub fn draw(&mut self, state: &GameState, dt: f32, surface: &mut impl Surface) {
        self.update_cues(state, dt);

        let width = state.layout.width();
        let height = state.layout.height();

        shapes::sky(surface, width, height);
        for cloud in &state.clouds {
            shapes::cloud(surface, cloud);
        }
        self.draw_ground(state, surface);
        for obstacle in &state.obstacles {
            shapes::obstacle(surface, obstacle);
        }
        shapes::duck(surface, &state.duck);
        self.draw_quack(state, surface);
        self.draw_hud(state, surface);

        match state.phase {
            GamePhase::NotStarted => {
                surface.fill_text(
                    START_PROMPT,
                    Vec2::new(width / 2.0, height / 2.0 + 60.0),
                    PROMPT_FONT,
                    TextAlign::Center,
                    PROMPT_COLOR,
                );
            }
            GamePhase::Over => self.draw_game_over(width, height, surface),
            GamePhase::Playing => {}
        }
    }

    fn update_cues(&mut self, state: &GameState, dt: f32) {
        let dt = crate::sim::sanitize_dt(dt);
        self.quack_timer = (self.quack_timer - dt).max(0.0);
        // Events apply in arrival order; the latest jump or restart wins
        for event in &state.events {
            match event {
                GameEvent::Jumped => self.quack_timer = QUACK_DURATION,
                GameEvent::Restarted => self.quack_timer = 0.0,
                _ => {}
            }
        }
    }

    fn draw_ground(&self, state: &GameState, surface: &mut impl Surface) {
        let width = state.layout.width();
        let ground_y = state.layout.ground_y();
        surface.stroke_line(Vec2::new(0.0, ground_y), Vec2::new(width, ground_y), GROUND_LINE, 2.0);

        let dash_y = ground_y + 10.0;
        for tick in &state.ground_ticks {
            let x = (tick.x - state.ground_offset).rem_euclid(width);
            surface.stroke_line(
                Vec2::new(x, dash_y),
                Vec2::new(x + tick.length, dash_y),
                GROUND_TICK,
                2.0,
            );
        }
    }

    fn draw_quack(&self, state: &GameState, surface: &mut impl Surface) {
        let strength = self.quack_strength();
        if strength <= 0.0 {
            return;
        }
        let head = shapes::head_center(&state.duck);
        let bubble = Aabb::new(head + Vec2::new(14.0, -40.0), Vec2::new(58.0, 22.0));
        surface.fill_round_rect(bubble, 8.0, &Paint::Solid(Color::rgba(0, 0, 0, 0.35).fade(strength)));
        surface.stroke_round_rect(bubble, 8.0, WHITE.fade(strength * 0.8), 1.5);
        surface.fill_text(
            QUACK_TEXT,
            bubble.center() + Vec2::new(0.0, 4.5),
            CUE_FONT,
            TextAlign::Center,
            WHITE.fade(strength),
        );
    }

    fn draw_hud(&self, state: &GameState, surface: &mut impl Surface) {
        surface.fill_text(
            &format!("Score: {}", state.display_score()),
            Vec2::new(state.layout.width() - 14.0, 24.0),
            HUD_FONT,
            TextAlign::Right,
            HUD_COLOR,
        );
    }

    fn draw_game_over(&self, width: f32, height: f32, surface: &mut impl Surface) {
        surface.fill_rect(
            Aabb::new(Vec2::ZERO, Vec2::new(width, height)),
            &OVERLAY_COLOR.into(),
        );
        surface.fill_text(
            GAME_OVER_TITLE,
            Vec2::new(width / 2.0, height / 2.0 - 8.0),
            TITLE_FONT,
            TextAlign::Center,
            WHITE,
        );
        surface.fill_text(
            GAME_OVER_HINT,
            Vec2::new(width / 2.0, height / 2.0 + 16.0),
            HINT_FONT,
            TextAlign::Center,
            WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use crate::renderer::surface::{CommandList, DrawCommand};
    use crate::sim::Simulation;

    fn draw(renderer: &mut Renderer, sim: &Simulation, dt: f32) -> CommandList {
        let mut list = CommandList::new();
        renderer.draw(sim.state(), dt, &mut list);
        list
    }

    #[test]
    fn test_start_prompt_only_before_start() {
        let mut sim = Simulation::new(Layout::default(), 1);
        let mut renderer = Renderer::new();

        let frame = draw(&mut renderer, &sim, 0.0);
        assert!(frame.has_text(START_PROMPT));
        assert!(frame.has_text("Score: 0"));
        assert!(!frame.has_text(GAME_OVER_TITLE));

        sim.jump();
        let frame = draw(&mut renderer, &sim, 0.016);
        assert!(!frame.has_text(START_PROMPT));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut sim = Simulation::new(Layout::default(), 1);
        sim.jump();
        sim.state.phase = GamePhase::Over;
        let frame = draw(&mut Renderer::new(), &sim, 0.016);
        assert!(frame.has_text(GAME_OVER_TITLE));
        assert!(frame.has_text(GAME_OVER_HINT));
        let overlay = frame.commands.iter().rposition(|c| {
            matches!(c, DrawCommand::Rect { paint: Paint::Solid(color), .. } if *color == OVERLAY_COLOR)
        });
        assert!(overlay.is_some());
    }

    #[test]
    fn test_quack_fades_after_jump() {
        let mut sim = Simulation::new(Layout::default(), 1);
        let mut renderer = Renderer::new();
        sim.jump();

        let frame = draw(&mut renderer, &sim, 0.016);
        assert!(frame.has_text(QUACK_TEXT));
        assert_eq!(renderer.quack_strength(), 1.0);
        sim.take_events();

        // Half-way through the cue
        let _ = draw(&mut renderer, &sim, QUACK_DURATION / 2.0);
        assert!((renderer.quack_strength() - 0.5).abs() < 0.001);

        let frame = draw(&mut renderer, &sim, QUACK_DURATION);
        assert_eq!(renderer.quack_strength(), 0.0);
        assert!(!frame.has_text(QUACK_TEXT));
    }

    #[test]
    fn test_jump_after_restart_in_same_frame_quacks() {
        let mut sim = Simulation::new(Layout::default(), 1);
        let mut renderer = Renderer::new();
        sim.jump();
        let _ = draw(&mut renderer, &sim, 0.016);

        sim.restart();
        sim.jump();
        let frame = draw(&mut renderer, &sim, 0.016);
        assert_eq!(renderer.quack_strength(), 1.0);
        assert!(frame.has_text(QUACK_TEXT));

        // Restart alone clears the cue
        sim.restart();
        let _ = draw(&mut renderer, &sim, 0.016);
        assert_eq!(renderer.quack_strength(), 0.0);
    }

    #[test]
    fn test_draw_does_not_touch_state() {
        let mut sim = Simulation::new(Layout::default(), 4);
        sim.jump();
        sim.advance(0.05);
        let before = sim.state().clone();
        let _ = draw(&mut Renderer::new(), &sim, 0.05);
        assert_eq!(sim.state(), &before);
    }

    #[test]
    fn test_hud_shows_whole_points() {
        let mut sim = Simulation::new(Layout::default(), 1);
        sim.jump();
        sim.state.score = 99.9;
        let frame = draw(&mut Renderer::new(), &sim, 0.0);
        assert!(frame.has_text("Score: 99"));
    }

    #[test]
    fn test_ground_ticks_stay_on_screen() {
        let mut sim = Simulation::new(Layout::default(), 1);
        sim.state.ground_offset = 123.0;
        let frame = draw(&mut Renderer::new(), &sim, 0.0);
        let width = sim.state().layout.width();
        let dashes = frame.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, color, .. } if *color == GROUND_TICK => Some(from.x),
            _ => None,
        });
        for x in dashes {
            assert!((0.0..width).contains(&x));
        }
    }
}
