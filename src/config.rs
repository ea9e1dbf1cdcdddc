//! Background configuration
//!
//! The dense and sparse variants of the background share one component and
//! differ only in these values.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Palette;

/// Preset variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Many points joined by gradient edges
    #[default]
    Dense,
    /// A handful of glowing dots, no edges
    Sparse,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Dense => "Dense",
            Variant::Sparse => "Sparse",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dense" => Some(Variant::Dense),
            "sparse" => Some(Variant::Sparse),
            _ => None,
        }
    }

    /// Number of points for this preset
    pub fn point_count(&self) -> usize {
        match self {
            Variant::Dense => DENSE_POINT_COUNT,
            Variant::Sparse => SPARSE_POINT_COUNT,
        }
    }

    /// Whether proximity edges are drawn
    pub fn draw_edges(&self) -> bool {
        match self {
            Variant::Dense => true,
            Variant::Sparse => false,
        }
    }
}

/// Background configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Number of points, fixed for the lifetime of the simulation
    pub point_count: usize,
    /// Draw gradient edges between nearby points
    pub draw_edges: bool,
    /// Edge distance threshold (logical px)
    pub edge_threshold: f32,
    /// CSS hex colors, assigned round-robin to points
    pub palette: Vec<String>,

    // === Motion ===
    /// Max initial speed per axis (logical px per frame)
    pub max_speed: f32,

    // === Appearance ===
    pub point_radius: f32,
    pub glow_blur: f32,
    pub line_width: f32,

    // === Performance ===
    /// Gradient cache entries (0 disables caching)
    pub cache_capacity: usize,

    /// RNG seed; the clock is used when absent
    pub seed: Option<u64>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self::from_variant(Variant::Dense)
    }
}

impl BackgroundConfig {
    /// Create a config from a preset
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            point_count: variant.point_count(),
            draw_edges: variant.draw_edges(),
            edge_threshold: EDGE_THRESHOLD,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            max_speed: MAX_SPEED,
            point_radius: POINT_RADIUS,
            glow_blur: GLOW_BLUR,
            line_width: EDGE_LINE_WIDTH,
            cache_capacity: GRADIENT_CACHE_CAPACITY,
            seed: None,
        }
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pick a config from mount-time sources.
    ///
    /// Explicit JSON wins over the `data-config` attribute, which wins over
    /// the `data-variant` preset name. Invalid JSON is logged and skipped.
    pub fn resolve(
        explicit_json: Option<String>,
        data_config: Option<String>,
        data_variant: Option<String>,
    ) -> Self {
        if let Some(json) = explicit_json.or(data_config) {
            match Self::from_json(&json) {
                Ok(config) => return config,
                Err(e) => log::warn!("Invalid background config, using defaults: {}", e),
            }
        }
        data_variant
            .and_then(|v| Variant::from_str(&v))
            .map(Self::from_variant)
            .unwrap_or_default()
    }

    /// Replace unusable values with defaults
    pub fn validated(mut self) -> Self {
        if self.point_count > MAX_POINT_COUNT {
            log::warn!(
                "point_count {} exceeds {}, clamping",
                self.point_count,
                MAX_POINT_COUNT
            );
            self.point_count = MAX_POINT_COUNT;
        }
        if self.cache_capacity > MAX_GRADIENT_CACHE_CAPACITY {
            log::warn!(
                "cache_capacity {} exceeds {}, clamping",
                self.cache_capacity,
                MAX_GRADIENT_CACHE_CAPACITY
            );
            self.cache_capacity = MAX_GRADIENT_CACHE_CAPACITY;
        }
        if !(self.edge_threshold > 0.0) {
            log::warn!("edge_threshold {} is not positive, using default", self.edge_threshold);
            self.edge_threshold = EDGE_THRESHOLD;
        }
        if !(self.point_radius > 0.0) {
            self.point_radius = POINT_RADIUS;
        }
        if !(self.max_speed >= 0.0) || !self.max_speed.is_finite() {
            self.max_speed = MAX_SPEED;
        }
        if !(self.glow_blur >= 0.0) {
            self.glow_blur = 0.0;
        }
        if !(self.line_width > 0.0) {
            self.line_width = EDGE_LINE_WIDTH;
        }
        if Palette::parse(self.palette.as_slice()).is_none() {
            log::warn!("Palette {:?} is empty or invalid, using default", self.palette);
            self.palette = DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect();
        }
        self
    }

    /// Resolved palette (falls back to the default palette)
    pub fn palette(&self) -> Palette {
        Palette::parse(self.palette.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("DENSE"), Some(Variant::Dense));
        assert_eq!(Variant::from_str("sparse"), Some(Variant::Sparse));
        assert_eq!(Variant::from_str("medium"), None);
        assert_eq!(Variant::from_str(Variant::Sparse.as_str()), Some(Variant::Sparse));
    }

    #[test]
    fn test_defaults_match_dense_variant() {
        let config = BackgroundConfig::default();
        assert_eq!(config.point_count, 60);
        assert!(config.draw_edges);
        assert_eq!(config.edge_threshold, 120.0);
        assert_eq!(config.palette.len(), 8);
        assert_eq!(config.cache_capacity, 100);

        let sparse = BackgroundConfig::from_variant(Variant::Sparse);
        assert_eq!(sparse.point_count, 6);
        assert!(!sparse.draw_edges);
    }

    #[test]
    fn test_partial_json() {
        let config = BackgroundConfig::from_json(r#"{"point_count": 6, "draw_edges": false}"#)
            .unwrap();
        assert_eq!(config.point_count, 6);
        assert!(!config.draw_edges);
        assert_eq!(config.edge_threshold, EDGE_THRESHOLD);
        assert_eq!(config.seed, None);

        assert!(BackgroundConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_resolve_priority() {
        let explicit = Some(r#"{"point_count": 12}"#.to_string());
        let attr = Some(r#"{"point_count": 24}"#.to_string());
        let sparse = Some("sparse".to_string());

        let config = BackgroundConfig::resolve(explicit, attr.clone(), sparse.clone());
        assert_eq!(config.point_count, 12);

        let config = BackgroundConfig::resolve(None, attr, sparse.clone());
        assert_eq!(config.point_count, 24);

        let config = BackgroundConfig::resolve(None, None, sparse);
        assert_eq!(config, BackgroundConfig::from_variant(Variant::Sparse));

        let config = BackgroundConfig::resolve(None, None, Some("medium".to_string()));
        assert_eq!(config, BackgroundConfig::default());
    }

    #[test]
    fn test_resolve_bad_json_falls_back() {
        // The attribute is not consulted once explicit JSON was given
        let config = BackgroundConfig::resolve(
            Some("{oops".to_string()),
            Some(r#"{"point_count": 24}"#.to_string()),
            Some("sparse".to_string()),
        );
        assert_eq!(config, BackgroundConfig::from_variant(Variant::Sparse));

        let config = BackgroundConfig::resolve(None, Some("42".to_string()), None);
        assert_eq!(config, BackgroundConfig::default());
    }

    #[test]
    fn test_validated_repairs_bad_values() {
        let config = BackgroundConfig {
            edge_threshold: -5.0,
            point_radius: 0.0,
            max_speed: f32::NAN,
            palette: vec!["chartreuse".into()],
            ..Default::default()
        }
        .validated();

        assert_eq!(config.edge_threshold, EDGE_THRESHOLD);
        assert_eq!(config.point_radius, POINT_RADIUS);
        assert_eq!(config.max_speed, MAX_SPEED);
        assert_eq!(config.palette.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn test_validated_clamps_sizes() {
        let config = BackgroundConfig::from_json(
            r#"{"point_count": 18446744073709551615, "cache_capacity": 18446744073709551615}"#,
        )
        .unwrap()
        .validated();
        assert_eq!(config.point_count, MAX_POINT_COUNT);
        assert_eq!(config.cache_capacity, MAX_GRADIENT_CACHE_CAPACITY);

        // In-range values are untouched
        let config = BackgroundConfig {
            point_count: 200,
            cache_capacity: 0,
            ..Default::default()
        }
        .validated();
        assert_eq!(config.point_count, 200);
        assert_eq!(config.cache_capacity, 0);
    }
}
