//! Shape drawing for the scene's entities

use glam::Vec2;

use super::surface::{Color, Paint, Surface};
use crate::sim::{Aabb, Cloud, Duck, Obstacle, ObstacleVariant};

// Fixed palette, independent of the page theme
pub const SKY_TOP: Color = Color::rgb(0x0e, 0x12, 0x24);
pub const SKY_BOTTOM: Color = Color::rgb(0x0b, 0x0f, 0x1a);
pub const GROUND_LINE: Color = Color::rgba(255, 255, 255, 0.20);
pub const GROUND_TICK: Color = Color::rgba(255, 255, 255, 0.12);
pub const CLOUD_COLOR: Color = Color::rgba(255, 255, 255, 0.65);
pub const OBSTACLE_COLOR: Color = Color::rgba(255, 255, 255, 0.90);
pub const LANTERN_GLOW: Color = Color::rgba(0xf5, 0x9e, 0x0b, 0.45);
pub const DUCK_WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const DUCK_ORANGE: Color = Color::rgb(0xf5, 0x9e, 0x0b);
pub const DUCK_EYE: Color = Color::rgb(0x0b, 0x0d, 0x10);

const HEAD_RADIUS: f32 = 14.0;
const LEG_LENGTH: f32 = 8.0;

/// Vertical sky gradient covering the whole surface
pub fn sky(surface: &mut impl Surface, width: f32, height: f32) {
    let paint = Paint::Linear {
        start: Vec2::ZERO,
        end: Vec2::new(0.0, height),
        stops: vec![(0.0, SKY_TOP), (1.0, SKY_BOTTOM)],
    };
    surface.fill_rect(Aabb::new(Vec2::ZERO, Vec2::new(width, height)), &paint);
}

pub fn cloud(surface: &mut impl Surface, cloud: &Cloud) {
    surface.fill_round_rect(cloud.bounds, 12.0, &CLOUD_COLOR.into());
}

pub fn obstacle(surface: &mut impl Surface, obstacle: &Obstacle) {
    let b = obstacle.bounds;
    match obstacle.variant {
        ObstacleVariant::Post => {
            surface.fill_round_rect(b, 4.0, &OBSTACLE_COLOR.into());
        }
        ObstacleVariant::Lantern => {
            // Halo around the lamp at the top of the post
            let lamp = Vec2::new(b.center().x, b.top());
            let halo = b.size.x.max(b.size.y) * 0.9;
            let glow = Paint::Radial {
                center: lamp,
                inner_radius: 0.0,
                outer_radius: halo,
                stops: vec![(0.0, LANTERN_GLOW), (1.0, LANTERN_GLOW.fade(0.0))],
            };
            surface.fill_circle(lamp, halo, &glow);
            surface.fill_round_rect(b, 4.0, &OBSTACLE_COLOR.into());
            surface.fill_circle(lamp, (b.size.x * 0.35).max(4.0), &DUCK_ORANGE.into());
        }
    }
}

/// Where the head sits relative to the body
pub fn head_center(duck: &Duck) -> Vec2 {
    Vec2::new(duck.bounds.right() - 10.0, duck.bounds.top() - 10.0)
}

/// Pekin duck: white body and head, orange beak, legs only while standing
pub fn duck(surface: &mut impl Surface, duck: &Duck) {
    let b = duck.bounds;
    surface.fill_round_rect(b, 8.0, &DUCK_WHITE.into());

    let head = head_center(duck);
    surface.fill_circle(head, HEAD_RADIUS, &DUCK_WHITE.into());

    let beak = [
        head + Vec2::new(8.0, -2.0),
        head + Vec2::new(18.0, 2.0),
        head + Vec2::new(8.0, 6.0),
    ];
    surface.fill_polygon(&beak, &DUCK_ORANGE.into());

    surface.fill_circle(head + Vec2::new(-3.0, -3.0), 2.6, &DUCK_EYE.into());

    if duck.grounded {
        for leg_x in [10.0, 24.0] {
            let top = Vec2::new(b.left() + leg_x, b.bottom());
            surface.stroke_line(top, top + Vec2::new(0.0, LEG_LENGTH), DUCK_ORANGE, 3.0);
        }
    }
}
