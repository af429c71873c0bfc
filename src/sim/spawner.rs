//! Procedural spawning
//!
//! Obstacles are spaced by world distance rather than time, so the pace only
//! changes through the scroll-speed ramp. Clouds and ground ticks come from a
//! dedicated scenery seed so a restart always looks the same.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::rng::UniformSource;
use super::state::{Cloud, GameEvent, GameState, GroundTick, Obstacle, ObstacleVariant};
use crate::consts::*;
use crate::layout::Layout;
use crate::tuning::Tuning;

/// Distance until the next obstacle, uniform in `[gap_min, gap_min + gap_range)`
pub fn draw_gap<R: UniformSource + ?Sized>(rng: &mut R, tuning: &Tuning) -> f32 {
    rng.in_span(tuning.gap_min, tuning.gap_range)
}

/// Add traveled distance; spawns at most one obstacle when the gap is reached
pub fn advance_distance<R: UniformSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    tuning: &Tuning,
    distance: f32,
) -> Option<u32> {
    let gap = *state.next_gap.get_or_insert_with(|| draw_gap(rng, tuning));
    state.distance_since_spawn += distance;
    if state.distance_since_spawn < gap {
        return None;
    }

    let id = spawn_obstacle(state, rng, tuning);
    state.distance_since_spawn = 0.0;
    state.next_gap = Some(draw_gap(rng, tuning));
    Some(id)
}

/// Place a new obstacle just past the right edge, standing on the ground
pub fn spawn_obstacle<R: UniformSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    tuning: &Tuning,
) -> u32 {
    let height = rng.in_span(OBSTACLE_MIN_HEIGHT, OBSTACLE_HEIGHT_RANGE);
    let width = rng.in_span(OBSTACLE_MIN_WIDTH, OBSTACLE_WIDTH_RANGE);
    let variant = if rng.next_uniform() < tuning.variant_chance {
        ObstacleVariant::Lantern
    } else {
        ObstacleVariant::Post
    };

    let id = state.next_entity_id();
    let pos = Vec2::new(
        state.layout.width() + SPAWN_OFFSET,
        state.layout.ground_y() - height,
    );
    state.obstacles.push(Obstacle {
        id,
        bounds: Aabb::new(pos, Vec2::new(width, height)),
        variant,
    });
    state.push_event(GameEvent::Spawned { id, variant });
    log::debug!("Spawned obstacle {} ({:?}) {:.0}x{:.0}", id, variant, width, height);
    id
}

/// Clouds for a fresh session, spread across the sky
pub fn spawn_clouds<R: UniformSource + ?Sized>(layout: &Layout, rng: &mut R) -> Vec<Cloud> {
    (0..CLOUD_COUNT)
        .map(|_| {
            let x = rng.in_span(0.0, layout.width());
            let y = cloud_altitude(layout, rng);
            let w = rng.in_span(CLOUD_MIN_WIDTH, CLOUD_WIDTH_RANGE);
            let h = rng.in_span(CLOUD_MIN_HEIGHT, CLOUD_HEIGHT_RANGE);
            let speed = rng.in_span(CLOUD_MIN_SPEED, CLOUD_SPEED_RANGE);
            Cloud {
                bounds: Aabb::new(Vec2::new(x, y), Vec2::new(w, h)),
                speed,
            }
        })
        .collect()
}

/// Move a cloud that left the screen back past the right edge at a new altitude
pub fn wrap_cloud<R: UniformSource + ?Sized>(cloud: &mut Cloud, layout: &Layout, rng: &mut R) {
    cloud.bounds.pos.x = layout.width() + rng.in_span(0.0, CLOUD_WRAP_JITTER);
    cloud.bounds.pos.y = cloud_altitude(layout, rng);
}

fn cloud_altitude<R: UniformSource + ?Sized>(layout: &Layout, rng: &mut R) -> f32 {
    rng.in_span(CLOUD_TOP, layout.height() * CLOUD_BAND)
}

/// Evenly spaced dashes with random lengths, covering one layout width
pub fn spawn_ground_ticks<R: UniformSource + ?Sized>(layout: &Layout, rng: &mut R) -> Vec<GroundTick> {
    let count = (layout.width() / GROUND_TICK_SPACING).ceil() as usize;
    (0..count)
        .map(|i| GroundTick {
            x: i as f32 * GROUND_TICK_SPACING,
            length: rng.in_span(GROUND_TICK_MIN_LENGTH, GROUND_TICK_LENGTH_RANGE),
        })
        .collect()
}

/// Regenerate clouds and ground ticks from the state's scenery seed
pub fn reset_scenery(state: &mut GameState) {
    let mut scenery = Pcg32::seed_from_u64(state.scenery_seed);
    state.clouds = spawn_clouds(&state.layout, &mut scenery);
    state.ground_ticks = spawn_ground_ticks(&state.layout, &mut scenery);
    state.ground_offset = 0.0;
}
