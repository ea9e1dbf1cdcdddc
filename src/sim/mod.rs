//! Point simulation
//!
//! Pure and deterministic, no rendering or platform dependencies:
//! - Seeded RNG only
//! - One fixed step per frame (velocities are px per frame)

pub mod state;
pub mod tick;

pub use state::{Field, FieldSnapshot, Point, SurfaceSize};
pub use tick::{step_point, tick};
