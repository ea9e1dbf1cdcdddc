//! Dots & Lines entry point
//!
//! On the web, mounts the background on `#background` for the lifetime of
//! the page. Natively, runs a headless simulation and logs frame stats.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    use dots_lines::platform::web::{DotsLinesBackground, initialize};

    initialize();
    log::info!("Dots & Lines starting...");

    let background = DotsLinesBackground::mount("background", None);
    // Lives as long as the page
    std::mem::forget(background);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dots & Lines (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulate a few seconds of both variants against a recording surface
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use dots_lines::renderer::TraceSurface;
    use dots_lines::sim::SurfaceSize;
    use dots_lines::{Background, BackgroundConfig, Variant};

    const FRAMES: u64 = 600;

    for variant in [Variant::Dense, Variant::Sparse] {
        let config = BackgroundConfig {
            seed: Some(12345),
            ..BackgroundConfig::from_variant(variant)
        };
        let size = SurfaceSize::new(1280.0, 720.0, 2.0);
        let mut background = Background::new(config, Some(TraceSurface::new()), size, 0);

        let mut total_edges = 0;
        for frame in 1..=FRAMES {
            if let Some(surface) = background.surface_mut() {
                surface.reset();
            }
            // Halfway through, simulate the window shrinking
            if frame == FRAMES / 2 {
                background.resize(SurfaceSize::new(800.0, 600.0, 1.0));
            }
            background.frame();
            total_edges += background.last_frame().edges;
        }

        let (hits, misses) = background.renderer().cache().stats();
        println!(
            "{}: {} frames, {} points, {:.1} edges/frame, cache {}/{} ({} hits, {} misses)",
            variant.as_str(),
            background.frames(),
            background.field().len(),
            total_edges as f64 / FRAMES as f64,
            background.renderer().cache().len(),
            background.renderer().cache().capacity(),
            hits,
            misses
        );

        // Final positions, for eyeballing the clamp after the shrink
        match serde_json::to_string(&background.field().snapshot()) {
            Ok(json) => log::debug!("{} final field: {}", variant.as_str(), json),
            Err(e) => log::warn!("Could not serialize field: {}", e),
        }
    }
}
