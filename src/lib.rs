//! Dots & Lines - animated canvas background
//!
//! Core modules:
//! - `sim`: Point simulation (seeding, integration, boundary reflection)
//! - `renderer`: Canvas drawing (edges, glowing dots, gradient cache)
//! - `platform`: Frame driver and browser bindings
//! - `config`: Data-driven background configuration

pub mod background;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use background::Background;
pub use config::{BackgroundConfig, Variant};

/// Background configuration constants
pub mod consts {
    /// Points in the dense variant
    pub const DENSE_POINT_COUNT: usize = 60;
    /// Points in the sparse variant
    pub const SPARSE_POINT_COUNT: usize = 6;
    /// Upper bound on configured points (edge pass is O(n^2))
    pub const MAX_POINT_COUNT: usize = 1000;

    /// Max speed per axis (logical px per frame)
    pub const MAX_SPEED: f32 = 0.25;

    /// Edges are drawn between points closer than this (logical px)
    pub const EDGE_THRESHOLD: f32 = 120.0;
    /// Edge opacity at zero distance is EDGE_ALPHA_RANGE + EDGE_ALPHA_FLOOR
    pub const EDGE_ALPHA_RANGE: f32 = 0.5;
    pub const EDGE_ALPHA_FLOOR: f32 = 0.2;
    pub const EDGE_LINE_WIDTH: f32 = 1.2;

    /// Dot defaults
    pub const POINT_RADIUS: f32 = 2.8;
    pub const GLOW_BLUR: f32 = 8.0;

    /// Gradient cache capacity (entries)
    pub const GRADIENT_CACHE_CAPACITY: usize = 100;
    pub const MAX_GRADIENT_CACHE_CAPACITY: usize = 10_000;

    /// Default palette (red, orange, green, blue, purple, pink, teal, yellow)
    pub const DEFAULT_PALETTE: [&str; 8] = [
        "#ff5e5b", "#fbb13c", "#3ec300", "#00a6ed", "#8f2dff", "#ff4ecd", "#00e6c3", "#ffd700",
    ];
}
