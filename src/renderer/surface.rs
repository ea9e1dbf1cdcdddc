//! Drawing surface abstraction
//!
//! The renderer only talks to this trait. The browser implementation wraps a
//! `CanvasRenderingContext2d`; [`super::TraceSurface`] records calls for
//! headless runs.

use glam::Vec2;

use crate::sim::SurfaceSize;

/// A 2-D raster surface in logical (CSS px) coordinates
pub trait DrawSurface {
    /// Handle to a linear gradient created by this surface
    type Gradient;

    /// Resize the backing store and reset the logical-to-physical transform
    fn resize(&mut self, size: SurfaceSize);

    /// Clear `[0, width] x [0, height]`
    fn clear(&mut self, width: f32, height: f32);

    /// Two-stop linear gradient from `from` (color `start`) to `to` (color `end`)
    fn linear_gradient(
        &mut self,
        from: Vec2,
        to: Vec2,
        start: &str,
        end: &str,
    ) -> Option<Self::Gradient>;

    /// Stroke a straight line with a gradient at the given opacity
    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        gradient: &Self::Gradient,
        alpha: f32,
        line_width: f32,
    );

    /// Enable a soft shadow for subsequent fills
    fn set_glow(&mut self, color: &str, blur: f32);

    /// Disable the shadow
    fn clear_glow(&mut self);

    /// Fill a disc
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: &str);
}
