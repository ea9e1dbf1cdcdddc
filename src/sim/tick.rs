//! Per-frame update step
//!
//! Advances every point by one frame and reflects it off the surface edges.

use super::state::{Field, Point};

/// Advance a single axis; returns the new (position, velocity).
///
/// Touching or crossing either edge flips the velocity and clamps the
/// position back onto the edge, so large jumps cannot escape the surface.
#[inline]
fn step_axis(pos: f32, vel: f32, extent: f32) -> (f32, f32) {
    let next = pos + vel;
    if next <= 0.0 || next >= extent {
        (next.clamp(0.0, extent.max(0.0)), -vel)
    } else {
        (next, vel)
    }
}

/// Advance one point within `width` x `height`
#[inline]
pub fn step_point(point: &mut Point, width: f32, height: f32) {
    let (x, vx) = step_axis(point.pos.x, point.vel.x, width);
    let (y, vy) = step_axis(point.pos.y, point.vel.y, height);
    point.pos.x = x;
    point.pos.y = y;
    point.vel.x = vx;
    point.vel.y = vy;
}

/// Advance the field by exactly one frame
pub fn tick(field: &mut Field) {
    let (width, height) = (field.size.width, field.size.height);
    for point in &mut field.points {
        step_point(point, width, height);
    }
}
