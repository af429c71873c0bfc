//! `Surface` on top of a browser Canvas 2D context

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, RunnerError};
use crate::layout::Layout;
use crate::renderer::{Color, Paint, Surface, TextAlign};
use crate::sim::Aabb;

/// Look up the game canvas and its 2D context
pub fn find_canvas(id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| RunnerError::Js("no document".to_string()))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(id)
        .ok_or_else(|| RunnerError::CanvasMissing(id.to_string()))?
        .dyn_into()
        .map_err(|_| RunnerError::CanvasMissing(id.to_string()))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(RunnerError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| RunnerError::ContextUnavailable)?;

    Ok((canvas, ctx))
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// Resize the backing store and return the layout the game should use
    pub fn apply_layout(&self, layout: Layout) -> Layout {
        self.canvas.set_width(layout.width() as u32);
        self.canvas.set_height(layout.height() as u32);
        layout
    }

    /// Set the current fill from a `Paint`
    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear { start, end, stops } => {
                let gradient = self.ctx.create_linear_gradient(
                    start.x as f64,
                    start.y as f64,
                    end.x as f64,
                    end.y as f64,
                );
                for (offset, color) in stops {
                    let _ = gradient.add_color_stop(*offset, &color.to_css());
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                match self.ctx.create_radial_gradient(
                    center.x as f64,
                    center.y as f64,
                    *inner_radius as f64,
                    center.x as f64,
                    center.y as f64,
                    *outer_radius as f64,
                ) {
                    Ok(gradient) => {
                        for (offset, color) in stops {
                            let _ = gradient.add_color_stop(*offset, &color.to_css());
                        }
                        self.ctx.set_fill_style_canvas_gradient(&gradient);
                    }
                    // Negative radii; fall back to the inner color
                    Err(_) => {
                        let color = stops.first().map(|(_, c)| *c).unwrap_or(Color::rgba(0, 0, 0, 0.0));
                        self.ctx.set_fill_style_str(&color.to_css());
                    }
                }
            }
        }
    }

    /// Trace a rounded rectangle path
    fn round_rect_path(&self, rect: Aabb, radius: f32) {
        let r = radius.min(rect.size.x / 2.0).min(rect.size.y / 2.0).max(0.0) as f64;
        let (l, t) = (rect.left() as f64, rect.top() as f64);
        let (rt, b) = (rect.right() as f64, rect.bottom() as f64);

        self.ctx.begin_path();
        self.ctx.move_to(l + r, t);
        let _ = self.ctx.arc_to(rt, t, rt, b, r);
        let _ = self.ctx.arc_to(rt, b, l, b, r);
        let _ = self.ctx.arc_to(l, b, l, t, r);
        let _ = self.ctx.arc_to(l, t, rt, t, r);
        self.ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, rect: Aabb, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.fill_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_round_rect(&mut self, rect: Aabb, radius: f32, paint: &Paint) {
        self.set_fill(paint);
        self.round_rect_path(rect, radius);
        self.ctx.fill();
    }

    fn stroke_round_rect(&mut self, rect: Aabb, radius: f32, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.round_rect_path(rect, radius);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_fill(paint);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, align: TextAlign, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(font);
        self.ctx.set_text_align(align.as_str());
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
