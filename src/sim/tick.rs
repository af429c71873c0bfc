//! Variable-timestep simulation tick
//!
//! All motion is expressed per second, so the game runs at the same pace at
//! any display refresh rate.

use super::collision::first_overlap;
use super::rng::UniformSource;
use super::spawner;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Negative or non-finite elapsed time becomes zero
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Advance the game state by `dt` seconds
pub fn tick<R: UniformSource + ?Sized>(state: &mut GameState, rng: &mut R, tuning: &Tuning, dt: f32) {
    let dt = sanitize_dt(dt);
    if state.phase != GamePhase::Playing {
        return;
    }

    let ground_y = state.layout.ground_y();
    state.duck.integrate(tuning.gravity, dt, ground_y);
    // Only the ground clamp applies to a zero step
    if dt == 0.0 {
        return;
    }

    // Scroll the world
    let dx = state.scroll_speed * dt;
    for obstacle in &mut state.obstacles {
        obstacle.bounds.pos.x -= dx;
    }
    state
        .obstacles
        .retain(|o| o.bounds.right() > -crate::consts::CULL_MARGIN);

    for cloud in &mut state.clouds {
        cloud.bounds.pos.x -= cloud.speed * dt;
        if cloud.bounds.right() < 0.0 {
            spawner::wrap_cloud(cloud, &state.layout, rng);
        }
    }
    state.ground_offset = (state.ground_offset + dx).rem_euclid(state.layout.width());

    spawner::advance_distance(state, rng, tuning, dx);

    if let Some(index) = first_overlap(&state.duck.bounds, state.obstacles.iter().map(|o| &o.bounds)) {
        state.phase = GamePhase::Over;
        state.push_event(GameEvent::Crashed { score: state.score });
        log::debug!(
            "Duck hit obstacle {} at score {}",
            state.obstacles[index].id,
            state.display_score()
        );
        return;
    }

    // Score and the stepped difficulty ramp
    let earned = tuning.score_rate * dt;
    state.score += earned;
    state.ramp_progress += earned;
    if state.ramp_progress >= tuning.ramp_threshold {
        state.scroll_speed += tuning.ramp_step;
        state.ramp_progress = 0.0;
        state.push_event(GameEvent::SpeedUp {
            scroll_speed: state.scroll_speed,
        });
        log::debug!("Speed up: {:.0} px/s", state.scroll_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::layout::Layout;
    use crate::sim::collision::Aabb;
    use crate::sim::rng::ScriptedSource;
    use crate::sim::state::{Obstacle, ObstacleVariant};
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Layout::default(), BASE_SCROLL_SPEED, 3);
        spawner::reset_scenery(&mut state);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_tick_ignored_unless_playing() {
        let tuning = Tuning::default();
        let mut rng = ScriptedSource::new(vec![0.5]);
        for phase in [GamePhase::NotStarted, GamePhase::Over] {
            let mut state = playing_state();
            state.phase = phase;
            let before = state.clone();
            tick(&mut state, &mut rng, &tuning, 0.05);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_bad_dt_leaves_airborne_state_alone() {
        let tuning = Tuning::default();
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut state = playing_state();
        state.duck.bounds.pos.y -= 50.0;
        state.duck.vel_y = JUMP_VELOCITY;
        state.duck.grounded = false;
        let before = state.clone();
        for dt in [0.0, -0.5, f32::NAN, f32::NEG_INFINITY] {
            tick(&mut state, &mut rng, &tuning, dt);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_zero_dt_still_clamps_to_ground() {
        let tuning = Tuning::default();
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut state = playing_state();
        // Jumped but has not moved yet
        state.duck.vel_y = JUMP_VELOCITY;
        state.duck.grounded = false;

        tick(&mut state, &mut rng, &tuning, 0.0);
        assert!(state.duck.grounded);
        assert_eq!(state.duck.bounds.bottom(), state.layout.ground_y());
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_obstacles_scroll_and_cull() {
        let tuning = Tuning::without_obstacles();
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut state = playing_state();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            bounds: Aabb::new(Vec2::new(-20.0, 330.0), Vec2::new(20.0, 30.0)),
            variant: ObstacleVariant::Post,
        });
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            bounds: Aabb::new(Vec2::new(700.0, 330.0), Vec2::new(20.0, 30.0)),
            variant: ObstacleVariant::Post,
        });

        tick(&mut state, &mut rng, &tuning, 0.05);

        // First one slid past the cull margin, second one moved by speed * dt
        assert_eq!(state.obstacles.len(), 1);
        let expected = 700.0 - BASE_SCROLL_SPEED * 0.05;
        assert!((state.obstacles[0].bounds.left() - expected).abs() < 0.001);
    }

    #[test]
    fn test_clouds_use_their_own_speed_and_wrap() {
        let tuning = Tuning::without_obstacles();
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut state = playing_state();
        state.clouds[0].bounds.pos.x = 300.0;
        state.clouds[0].speed = 20.0;
        state.clouds[1].bounds.pos.x = -state.clouds[1].bounds.size.x + 0.1;

        tick(&mut state, &mut rng, &tuning, 0.05);

        assert!((state.clouds[0].bounds.left() - 299.0).abs() < 0.001);
        assert!(state.clouds[1].bounds.left() >= state.layout.width());
    }

    #[test]
    fn test_ground_offset_wraps() {
        let tuning = Tuning::without_obstacles();
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut state = playing_state();
        state.ground_offset = state.layout.width() - 1.0;
        tick(&mut state, &mut rng, &tuning, 0.05);
        assert!(state.ground_offset >= 0.0);
        assert!(state.ground_offset < state.layout.width());
    }

    #[test]
    fn test_collision_ends_run_and_freezes_score() {
        let tuning = Tuning::without_obstacles();
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut state = playing_state();
        state.score = 12.0;
        let duck = state.duck.bounds;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            bounds: Aabb::new(duck.pos + Vec2::new(10.0, 5.0), Vec2::new(30.0, 40.0)),
            variant: ObstacleVariant::Lantern,
        });

        tick(&mut state, &mut rng, &tuning, 0.016);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score, 12.0);
        assert_eq!(state.events.last(), Some(&GameEvent::Crashed { score: 12.0 }));

        // Further ticks change nothing
        let frozen = state.clone();
        tick(&mut state, &mut rng, &tuning, 0.016);
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_ramp_steps_once_and_resets_progress() {
        let tuning = Tuning {
            ramp_threshold: 10.0,
            ..Tuning::without_obstacles()
        };
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut state = playing_state();
        state.ramp_progress = 9.5;

        // 0.05 s * 30 = 1.5 points pushes progress over 10
        tick(&mut state, &mut rng, &tuning, 0.05);
        assert_eq!(state.scroll_speed, BASE_SCROLL_SPEED + RAMP_STEP);
        assert_eq!(state.ramp_progress, 0.0);
        assert_eq!(
            state.events.last(),
            Some(&GameEvent::SpeedUp {
                scroll_speed: BASE_SCROLL_SPEED + RAMP_STEP
            })
        );
    }

    proptest! {
        #[test]
        fn prop_ground_invariant_holds(
            jumps in proptest::collection::vec(any::<bool>(), 1..200),
            dts in proptest::collection::vec(prop_oneof![Just(0.0f32), 0.0f32..0.05], 1..200),
        ) {
            let tuning = Tuning::without_obstacles();
            let mut rng = ScriptedSource::new(vec![0.3, 0.7]);
            let mut state = playing_state();
            let ground_y = state.layout.ground_y();

            for (i, dt) in dts.iter().enumerate() {
                if jumps[i % jumps.len()] && state.duck.grounded {
                    state.duck.vel_y = tuning.jump_velocity;
                    state.duck.grounded = false;
                }
                tick(&mut state, &mut rng, &tuning, *dt);
                let bottom = state.duck.bounds.bottom();
                prop_assert!(bottom <= ground_y);
                prop_assert_eq!(bottom == ground_y, state.duck.grounded);
            }
        }

        #[test]
        fn prop_score_never_decreases(dts in proptest::collection::vec(-0.1f32..0.1, 1..200)) {
            let tuning = Tuning::without_obstacles();
            let mut rng = ScriptedSource::new(vec![0.5]);
            let mut state = playing_state();
            let mut last = state.score;
            for dt in dts {
                tick(&mut state, &mut rng, &tuning, dt);
                prop_assert!(state.score >= last);
                prop_assert!(state.score.is_finite());
                last = state.score;
            }
        }
    }
}
