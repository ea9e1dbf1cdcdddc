//! Browser canvas surface (Canvas 2D API)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::DrawSurface;
use crate::sim::SurfaceSize;

/// A canvas element and its 2-D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2-D context; None if the canvas cannot provide one
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Full-viewport, click-through, hidden from assistive tech
    pub fn apply_background_style(&self) {
        let style = self.canvas.style();
        for (name, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100vw"),
            ("height", "100vh"),
            ("z-index", "0"),
            ("pointer-events", "none"),
        ] {
            let _ = style.set_property(name, value);
        }
        let _ = self.canvas.set_attribute("aria-hidden", "true");
        let _ = self.canvas.set_attribute("tabindex", "-1");
    }
}

impl DrawSurface for CanvasSurface {
    type Gradient = CanvasGradient;

    fn resize(&mut self, size: SurfaceSize) {
        let (w, h) = size.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", size.width));
        let _ = style.set_property("height", &format!("{}px", size.height));

        // Resizing resets the context; draw in logical px from here on
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let scale = size.scale as f64;
        let _ = self.ctx.scale(scale, scale);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn linear_gradient(
        &mut self,
        from: Vec2,
        to: Vec2,
        start: &str,
        end: &str,
    ) -> Option<CanvasGradient> {
        let gradient = self.ctx.create_linear_gradient(
            from.x as f64,
            from.y as f64,
            to.x as f64,
            to.y as f64,
        );
        gradient.add_color_stop(0.0, start).ok()?;
        gradient.add_color_stop(1.0, end).ok()?;
        Some(gradient)
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        gradient: &CanvasGradient,
        alpha: f32,
        line_width: f32,
    ) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_canvas_gradient(gradient);
        ctx.set_global_alpha(alpha as f64);
        ctx.set_line_width(line_width as f64);
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }

    fn set_glow(&mut self, color: &str, blur: f32) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur as f64);
    }

    fn clear_glow(&mut self) {
        self.ctx.set_shadow_blur(0.0);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: &str) {
        let ctx = &self.ctx;
        ctx.begin_path();
        if ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_err()
        {
            return;
        }
        ctx.set_fill_style_str(color);
        ctx.fill();
    }
}
