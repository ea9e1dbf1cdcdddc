//! Platform abstraction layer
//!
//! The frame driver state machine is platform-free; the browser side
//! (`web`) supplies an [`AnimationHost`] backed by `requestAnimationFrame`
//! and a window resize listener.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Handle returned by the host's frame scheduler
pub type FrameHandle = i32;

/// Scheduling and environment hooks the driver needs
pub trait AnimationHost {
    /// Ask for a callback before the next repaint. None if unavailable.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a pending callback
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start delivering resize notifications. false if unavailable.
    fn listen_resize(&mut self) -> bool;

    /// Stop delivering resize notifications
    fn unlisten_resize(&mut self);
}

/// Frame driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Stopped,
    Running,
}

/// Perpetual animation loop.
///
/// `Stopped -> Running` on [`FrameDriver::start`], each callback runs one
/// frame and reschedules, [`FrameDriver::stop`] cancels and is terminal.
#[derive(Debug, Default)]
pub struct FrameDriver {
    state: DriverState,
    pending: Option<FrameHandle>,
    listening: bool,
    /// Set once stopped; the instance cannot be restarted
    retired: bool,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// A callback is scheduled
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Begin animating. Returns false if already running or retired.
    ///
    /// When the host cannot schedule frames the driver still enters
    /// `Running`, but nothing will tick; the caller should paint once.
    pub fn start(&mut self, host: &mut impl AnimationHost) -> bool {
        if self.state == DriverState::Running || self.retired {
            return false;
        }
        self.state = DriverState::Running;

        self.listening = host.listen_resize();
        if !self.listening {
            log::warn!("Resize events unavailable; background will not track the viewport");
        }

        self.pending = host.request_frame();
        if self.pending.is_none() {
            log::warn!("Animation frames unavailable; background will be static");
        }
        log::info!("Frame driver started");
        true
    }

    /// Host callback: run one frame and reschedule.
    ///
    /// Stale callbacks after [`FrameDriver::stop`] are ignored.
    pub fn on_frame(&mut self, host: &mut impl AnimationHost, frame: impl FnOnce()) {
        if self.state != DriverState::Running {
            return;
        }
        self.pending = None;
        frame();
        self.frames += 1;
        self.pending = host.request_frame();
    }

    /// Cancel the pending frame and detach listeners. Safe to call repeatedly.
    pub fn stop(&mut self, host: &mut impl AnimationHost) {
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        if self.listening {
            host.unlisten_resize();
            self.listening = false;
        }
        if self.state == DriverState::Running {
            log::info!("Frame driver stopped after {} frames", self.frames);
        }
        self.state = DriverState::Stopped;
        self.retired = true;
    }
}
