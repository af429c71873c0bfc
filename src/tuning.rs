//! Data-driven game balance
//!
//! Players never see this; the defaults are the shipped game. Tests build
//! their own to pin down specific scenarios.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub base_scroll_speed: f32,
    pub score_rate: f32,
    pub ramp_threshold: f32,
    pub ramp_step: f32,
    pub gap_min: f32,
    pub gap_range: f32,
    pub variant_chance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            base_scroll_speed: BASE_SCROLL_SPEED,
            score_rate: SCORE_RATE,
            ramp_threshold: RAMP_THRESHOLD,
            ramp_step: RAMP_STEP,
            gap_min: GAP_MIN,
            gap_range: GAP_RANGE,
            variant_chance: VARIANT_CHANCE,
        }
    }
}

impl Tuning {
    /// Same balance but obstacles never spawn (physics/scoring tests)
    pub fn without_obstacles() -> Self {
        Self {
            gap_min: f32::MAX,
            gap_range: 0.0,
            ..Self::default()
        }
    }
}
