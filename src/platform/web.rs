//! Browser bindings: `requestAnimationFrame`, window resize, canvas mount

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::{AnimationHost, FrameDriver, FrameHandle};
use crate::background::Background;
use crate::config::BackgroundConfig;
use crate::renderer::CanvasSurface;
use crate::sim::SurfaceSize;

/// Install the panic hook and console logger. Safe to call more than once.
#[wasm_bindgen]
pub fn initialize() {
    console_error_panic_hook::set_once();
    // Err only means a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Current viewport size in CSS px plus device pixel ratio
fn viewport_size(window: &Window) -> Option<SurfaceSize> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(SurfaceSize::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
    ))
}

fn resolve_config(canvas: &HtmlCanvasElement, config_json: Option<String>) -> BackgroundConfig {
    BackgroundConfig::resolve(
        config_json,
        canvas.get_attribute("data-config"),
        canvas.get_attribute("data-variant"),
    )
}

/// Window-backed scheduler and resize listener
struct WebHost {
    window: Window,
    frame_cb: Closure<dyn FnMut(f64)>,
    resize_cb: Closure<dyn FnMut()>,
}

impl AnimationHost for WebHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.window
            .request_animation_frame(self.frame_cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle);
    }

    fn listen_resize(&mut self) -> bool {
        self.window
            .add_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref())
            .is_ok()
    }

    fn unlisten_resize(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
    }
}

struct Mounted {
    background: Background<CanvasSurface>,
    driver: FrameDriver,
    host: WebHost,
}

impl Mounted {
    fn start(&mut self) {
        let Mounted {
            background,
            driver,
            host,
        } = self;
        driver.start(host);
        if !driver.has_pending() {
            // No animation clock: paint a single static frame
            background.render_static();
        }
    }

    fn on_frame(&mut self) {
        let Mounted {
            background,
            driver,
            host,
        } = self;
        driver.on_frame(host, || background.frame());
    }

    fn on_resize(&mut self) {
        let Some(size) = viewport_size(&self.host.window) else {
            return;
        };
        if self.background.resize(size) && !self.driver.has_pending() {
            self.background.render_static();
        }
    }

    fn stop(&mut self) {
        let Mounted { driver, host, .. } = self;
        driver.stop(host);
    }
}

fn mount_canvas(canvas_id: &str, config_json: Option<String>) -> Option<Rc<RefCell<Mounted>>> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let canvas: HtmlCanvasElement = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;

    let config = resolve_config(&canvas, config_json);
    let surface = CanvasSurface::new(canvas)?;
    surface.apply_background_style();

    let size = viewport_size(&window).unwrap_or_default();
    let seed = js_sys::Date::now() as u64;
    let background = Background::new(config, Some(surface), size, seed);
    log::info!(
        "Background mounted on #{} ({} points, edges {})",
        canvas_id,
        background.field().len(),
        if background.config().draw_edges { "on" } else { "off" }
    );

    // Callbacks hold a Weak so dropping the handle frees everything
    let mounted = Rc::new_cyclic(|weak: &Weak<RefCell<Mounted>>| {
        let frame_cb = {
            let weak = weak.clone();
            Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                if let Some(mounted) = weak.upgrade() {
                    if let Ok(mut m) = mounted.try_borrow_mut() {
                        m.on_frame();
                    }
                }
            })
        };
        let resize_cb = {
            let weak = weak.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(mounted) = weak.upgrade() {
                    if let Ok(mut m) = mounted.try_borrow_mut() {
                        m.on_resize();
                    }
                }
            })
        };
        RefCell::new(Mounted {
            background,
            driver: FrameDriver::new(),
            host: WebHost {
                window,
                frame_cb,
                resize_cb,
            },
        })
    });

    mounted.borrow_mut().start();
    Some(mounted)
}

/// Handle for a mounted background.
///
/// Mounting never fails: if the canvas or its 2-D context is missing the
/// handle is inert and `unmount` does nothing.
#[wasm_bindgen]
pub struct DotsLinesBackground {
    mounted: Option<Rc<RefCell<Mounted>>>,
}

#[wasm_bindgen]
impl DotsLinesBackground {
    /// Mount on the canvas with id `canvas_id` and start animating
    pub fn mount(canvas_id: &str, config_json: Option<String>) -> DotsLinesBackground {
        let mounted = mount_canvas(canvas_id, config_json);
        if mounted.is_none() {
            log::warn!("No usable canvas #{}; background disabled", canvas_id);
        }
        DotsLinesBackground { mounted }
    }

    /// Stop animating and detach listeners. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            if let Ok(mut m) = mounted.try_borrow_mut() {
                m.stop();
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted
            .as_ref()
            .and_then(|m| m.try_borrow().ok().map(|m| m.driver.is_running()))
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.mounted
            .as_ref()
            .and_then(|m| m.try_borrow().ok().map(|m| m.driver.frames() as f64))
            .unwrap_or(0.0)
    }
}

impl Drop for DotsLinesBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}
