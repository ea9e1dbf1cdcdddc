//! Frame rendering: proximity edges and glowing dots

use super::cache::{GradientCache, GradientKey};
use super::color::Palette;
use super::surface::DrawSurface;
use crate::config::BackgroundConfig;
use crate::consts::{EDGE_ALPHA_FLOOR, EDGE_ALPHA_RANGE};
use crate::sim::Field;

/// Edge opacity for two points `dist` apart.
///
/// Linear falloff from 0.7 at zero distance to 0.2 at the threshold.
#[inline]
pub fn edge_alpha(dist: f32, threshold: f32) -> f32 {
    EDGE_ALPHA_RANGE * (1.0 - dist / threshold) + EDGE_ALPHA_FLOOR
}

/// Per-frame counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub edges: usize,
    pub points: usize,
    pub gradients_created: usize,
}

/// Paints a [`Field`] onto a [`DrawSurface`]
#[derive(Debug)]
pub struct FieldRenderer<G> {
    palette: Palette,
    draw_edges: bool,
    edge_threshold: f32,
    line_width: f32,
    point_radius: f32,
    glow_blur: f32,
    cache: GradientCache<G>,
    last_frame: FrameStats,
}

impl<G> FieldRenderer<G> {
    pub fn new(config: &BackgroundConfig) -> Self {
        Self {
            palette: config.palette(),
            draw_edges: config.draw_edges,
            edge_threshold: config.edge_threshold,
            line_width: config.line_width,
            point_radius: config.point_radius,
            glow_blur: config.glow_blur,
            cache: GradientCache::new(config.cache_capacity),
            last_frame: FrameStats::default(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn cache(&self) -> &GradientCache<G> {
        &self.cache
    }

    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Drop cached gradients (their endpoints are absolute coordinates)
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Clear the surface and paint the current field
    pub fn render<S>(&mut self, surface: &mut S, field: &Field)
    where
        S: DrawSurface<Gradient = G>,
    {
        let mut stats = FrameStats {
            points: field.points.len(),
            ..Default::default()
        };

        surface.clear(field.size.width, field.size.height);

        if self.draw_edges {
            self.draw_edges(surface, field, &mut stats);
        }

        // Dots go on top of edges
        for point in &field.points {
            let color = self.palette.css(point.color);
            surface.set_glow(color, self.glow_blur);
            surface.fill_disc(point.pos, self.point_radius, color);
            surface.clear_glow();
        }

        self.last_frame = stats;
    }

    fn draw_edges<S>(&mut self, surface: &mut S, field: &Field, stats: &mut FrameStats)
    where
        S: DrawSurface<Gradient = G>,
    {
        let threshold = self.edge_threshold;
        let threshold_sq = threshold * threshold;
        let points = &field.points;

        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let dist_sq = a.pos.distance_squared(b.pos);
                if dist_sq >= threshold_sq {
                    continue;
                }
                let alpha = edge_alpha(dist_sq.sqrt(), threshold);
                let key = GradientKey::new(a.pos, b.pos, a.color, b.color);

                if let Some(gradient) = self.cache.get(&key) {
                    surface.stroke_line(a.pos, b.pos, gradient, alpha, self.line_width);
                    stats.edges += 1;
                    continue;
                }

                let start = self.palette.css(a.color);
                let end = self.palette.css(b.color);
                // Surface refused to build a gradient; skip this edge
                let Some(gradient) = surface.linear_gradient(a.pos, b.pos, start, end) else {
                    continue;
                };
                stats.gradients_created += 1;
                surface.stroke_line(a.pos, b.pos, &gradient, alpha, self.line_width);
                stats.edges += 1;
                self.cache.insert(key, gradient);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::trace::{DrawOp, TraceSurface};
    use crate::sim::{Point, SurfaceSize};
    use glam::Vec2;

    fn field(positions: &[(f32, f32)]) -> Field {
        let mut field = Field::new(SurfaceSize::new(800.0, 600.0, 1.0), 1);
        field.points = positions
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(Vec2::new(x, y), Vec2::ZERO, i))
            .collect();
        field
    }

    #[test]
    fn test_edge_alpha_range() {
        assert!((edge_alpha(0.0, 120.0) - 0.7).abs() < 1e-6);
        assert!((edge_alpha(120.0, 120.0) - 0.2).abs() < 1e-6);
        assert!((edge_alpha(80.0, 120.0) - 0.366_666_7).abs() < 1e-4);
    }

    #[test]
    fn test_edge_appears_within_threshold() {
        let mut renderer = FieldRenderer::new(&BackgroundConfig::default());
        let mut surface = TraceSurface::new();

        // Six points, only the first two are candidates
        let mut f = field(&[
            (0.0, 50.0),
            (200.0, 50.0),
            (700.0, 500.0),
            (500.0, 300.0),
            (300.0, 550.0),
            (780.0, 20.0),
        ]);
        renderer.render(&mut surface, &f);
        assert_eq!(surface.lines().count(), 0);
        assert_eq!(renderer.last_frame().edges, 0);

        f.points[1].pos = Vec2::new(80.0, 50.0);
        surface.reset();
        renderer.render(&mut surface, &f);

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines.len(), 1);
        match lines[0] {
            DrawOp::Line { from, to, alpha, line_width, .. } => {
                assert_eq!(*from, Vec2::new(0.0, 50.0));
                assert_eq!(*to, Vec2::new(80.0, 50.0));
                assert!((*alpha - 0.3667).abs() < 1e-4);
                assert_eq!(*line_width, 1.2);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_gradient_uses_endpoint_colors() {
        let mut renderer = FieldRenderer::new(&BackgroundConfig::default());
        let mut surface = TraceSurface::new();
        renderer.render(&mut surface, &field(&[(10.0, 10.0), (20.0, 20.0)]));

        let gradient = surface
            .ops
            .iter()
            .find(|op| matches!(op, DrawOp::Gradient { .. }))
            .cloned();
        assert_eq!(
            gradient,
            Some(DrawOp::Gradient {
                id: 0,
                from: Vec2::new(10.0, 10.0),
                to: Vec2::new(20.0, 20.0),
                start: "#ff5e5b".to_string(),
                end: "#fbb13c".to_string(),
            })
        );
    }

    #[test]
    fn test_edges_disabled() {
        let config = BackgroundConfig {
            draw_edges: false,
            ..Default::default()
        };
        let mut renderer = FieldRenderer::new(&config);
        let mut surface = TraceSurface::new();
        renderer.render(&mut surface, &field(&[(10.0, 10.0), (12.0, 12.0), (14.0, 10.0)]));

        assert_eq!(surface.lines().count(), 0);
        assert_eq!(surface.gradients_created(), 0);
        assert_eq!(surface.discs().count(), 3);
    }

    #[test]
    fn test_frame_order_and_glow_reset() {
        let mut renderer = FieldRenderer::new(&BackgroundConfig::default());
        let mut surface = TraceSurface::new();
        renderer.render(&mut surface, &field(&[(10.0, 10.0), (30.0, 10.0)]));

        // Clear first, edges before dots
        assert_eq!(
            surface.ops[0],
            DrawOp::Clear {
                width: 800.0,
                height: 600.0
            }
        );
        let first_line = surface.ops.iter().position(|op| matches!(op, DrawOp::Line { .. }));
        let first_disc = surface.ops.iter().position(|op| matches!(op, DrawOp::Disc { .. }));
        assert!(first_line.unwrap() < first_disc.unwrap());

        // Every disc is wrapped by its own glow and reset
        for (i, op) in surface.ops.iter().enumerate() {
            if let DrawOp::Disc { color, radius, .. } = op {
                assert_eq!(*radius, 2.8);
                assert_eq!(
                    surface.ops[i - 1],
                    DrawOp::Glow {
                        color: color.clone(),
                        blur: 8.0
                    }
                );
                assert_eq!(surface.ops[i + 1], DrawOp::ClearGlow);
            }
        }
    }

    #[test]
    fn test_static_field_reuses_gradients() {
        let mut renderer = FieldRenderer::new(&BackgroundConfig::default());
        let mut surface = TraceSurface::new();
        let f = field(&[(10.0, 10.0), (30.0, 10.0), (50.0, 10.0)]);

        renderer.render(&mut surface, &f);
        assert_eq!(renderer.last_frame().gradients_created, 3);

        surface.reset();
        renderer.render(&mut surface, &f);
        assert_eq!(surface.gradients_created(), 0);
        assert_eq!(surface.lines().count(), 3);
        assert_eq!(renderer.cache().len(), 3);
    }

    #[test]
    fn test_cache_never_exceeds_capacity() {
        let config = BackgroundConfig {
            cache_capacity: 4,
            ..Default::default()
        };
        let mut renderer = FieldRenderer::new(&config);
        let mut surface = TraceSurface::new();
        // Ten points in a tight cluster -> 45 edges
        let positions: Vec<(f32, f32)> = (0..10).map(|i| (100.0 + i as f32, 100.0)).collect();
        renderer.render(&mut surface, &field(&positions));

        assert_eq!(renderer.last_frame().edges, 45);
        assert_eq!(renderer.cache().len(), 4);
    }
}
