//! Recording surface for headless runs

use glam::Vec2;

use super::surface::DrawSurface;
use crate::sim::SurfaceSize;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Resize(SurfaceSize),
    Clear { width: f32, height: f32 },
    Gradient { id: u32, from: Vec2, to: Vec2, start: String, end: String },
    Line { from: Vec2, to: Vec2, gradient: u32, alpha: f32, line_width: f32 },
    Glow { color: String, blur: f32 },
    ClearGlow,
    Disc { center: Vec2, radius: f32, color: String },
}

/// Surface that records every call instead of painting
#[derive(Debug, Default)]
pub struct TraceSurface {
    pub ops: Vec<DrawOp>,
    next_gradient: u32,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded ops (gradient ids keep counting)
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Disc { .. }))
    }

    pub fn gradients_created(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Gradient { .. }))
            .count()
    }
}

impl DrawSurface for TraceSurface {
    /// Gradient id, unique per surface
    type Gradient = u32;

    fn resize(&mut self, size: SurfaceSize) {
        self.ops.push(DrawOp::Resize(size));
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn linear_gradient(&mut self, from: Vec2, to: Vec2, start: &str, end: &str) -> Option<u32> {
        let id = self.next_gradient;
        self.next_gradient += 1;
        self.ops.push(DrawOp::Gradient {
            id,
            from,
            to,
            start: start.to_string(),
            end: end.to_string(),
        });
        Some(id)
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, gradient: &u32, alpha: f32, line_width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            gradient: *gradient,
            alpha,
            line_width,
        });
    }

    fn set_glow(&mut self, color: &str, blur: f32) {
        self.ops.push(DrawOp::Glow {
            color: color.to_string(),
            blur,
        });
    }

    fn clear_glow(&mut self) {
        self.ops.push(DrawOp::ClearGlow);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ops.push(DrawOp::Disc {
            center,
            radius,
            color: color.to_string(),
        });
    }
}
