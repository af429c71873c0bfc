//! Drawing-surface contract and a recording implementation
//!
//! The renderer only talks to `Surface`. The browser build implements it on a
//! Canvas 2D context; tests and the headless demo record commands instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Aabb;

/// sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color, alpha scaled by `factor` (clamped to 0-1)
    pub fn fade(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// How a shape is filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    /// Gradient along the line `start` -> `end`; stops are (offset 0-1, color)
    Linear {
        start: Vec2,
        end: Vec2,
        stops: Vec<(f32, Color)>,
    },
    /// Gradient between two concentric circles
    Radial {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<(f32, Color)>,
    },
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A 2D raster target
pub trait Surface {
    fn fill_rect(&mut self, rect: Aabb, paint: &Paint);
    fn fill_round_rect(&mut self, rect: Aabb, radius: f32, paint: &Paint);
    fn stroke_round_rect(&mut self, rect: Aabb, radius: f32, color: Color, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32);
    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, align: TextAlign, color: Color);
}

/// One recorded call on a `CommandList`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Rect { rect: Aabb, paint: Paint },
    RoundRect { rect: Aabb, radius: f32, paint: Paint },
    StrokeRoundRect { rect: Aabb, radius: f32, color: Color, line_width: f32 },
    Circle { center: Vec2, radius: f32, paint: Paint },
    Polygon { points: Vec<Vec2>, paint: Paint },
    Line { from: Vec2, to: Vec2, color: Color, line_width: f32 },
    Text { text: String, at: Vec2, font: String, align: TextAlign, color: Color },
}

/// Surface that just remembers what was drawn
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl Surface for CommandList {
    fn fill_rect(&mut self, rect: Aabb, paint: &Paint) {
        self.commands.push(DrawCommand::Rect {
            rect,
            paint: paint.clone(),
        });
    }

    fn fill_round_rect(&mut self, rect: Aabb, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_round_rect(&mut self, rect: Aabb, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRoundRect {
            rect,
            radius,
            color,
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font: font.to_string(),
            align,
            color,
        });
    }
}
