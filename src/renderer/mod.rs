//! Canvas rendering module
//!
//! Draws the point field through the [`DrawSurface`] trait so the same code
//! paints a browser canvas or a recording surface.

pub mod cache;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod scene;
pub mod surface;
pub mod trace;

pub use cache::{GradientCache, GradientKey};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::{Palette, Rgb};
pub use scene::{FieldRenderer, FrameStats, edge_alpha};
pub use surface::DrawSurface;
pub use trace::{DrawOp, TraceSurface};
