//! The background component: simulation + renderer bound to one surface

use crate::config::BackgroundConfig;
use crate::renderer::{DrawSurface, FieldRenderer, FrameStats};
use crate::sim::{Field, SurfaceSize, tick};

/// Owns the point field, the renderer and (maybe) a surface.
///
/// Without a surface every operation is a silent no-op, so a background can
/// be constructed before its canvas exists.
pub struct Background<S: DrawSurface> {
    config: BackgroundConfig,
    field: Field,
    renderer: FieldRenderer<S::Gradient>,
    surface: Option<S>,
    frames: u64,
}

impl<S: DrawSurface> Background<S> {
    pub fn new(config: BackgroundConfig, surface: Option<S>, size: SurfaceSize, seed: u64) -> Self {
        let config = config.validated();
        let renderer = FieldRenderer::new(&config);
        let mut background = Self {
            field: Field::new(size, config.seed.unwrap_or(seed)),
            renderer,
            surface,
            config,
            frames: 0,
        };
        if let Some(surface) = background.surface.as_mut() {
            surface.resize(size);
        }
        background.init();
        background
    }

    /// Seed the points once; later calls do nothing
    pub fn init(&mut self) {
        let palette_len = self.renderer.palette().len();
        self.field
            .seed(self.config.point_count, palette_len, self.config.max_speed);
    }

    /// One animation frame: update then render
    pub fn frame(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        tick(&mut self.field);
        self.renderer.render(surface, &self.field);
        self.frames += 1;

        log::trace!("frame {}: {:?}", self.frames, self.renderer.last_frame());
    }

    /// Paint the current state without advancing it
    pub fn render_static(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.renderer.render(surface, &self.field);
        }
    }

    /// Apply a new surface size. Returns false if nothing changed.
    ///
    /// Points are not moved; ones left outside are pulled back on the next
    /// frame.
    pub fn resize(&mut self, size: SurfaceSize) -> bool {
        if size == self.field.size {
            return false;
        }
        log::info!(
            "Background resized to {}x{} @{}x",
            size.width,
            size.height,
            size.scale
        );
        self.field.set_size(size);
        self.renderer.invalidate();
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(size);
        }
        true
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn renderer(&self) -> &FieldRenderer<S::Gradient> {
        &self.renderer
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn size(&self) -> SurfaceSize {
        self.field.size
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> FrameStats {
        self.renderer.last_frame()
    }
}
