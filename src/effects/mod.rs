pub mod parallax;
pub mod tilt;

use crate::events::Listener;
use crate::frame::FrameLoop;

/// A running effect: its frame loop plus the listeners feeding it.
///
/// Dropping it stops the loop and detaches every listener.
pub struct Mounted {
    name: &'static str,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

impl Mounted {
    pub fn start(name: &'static str, frame_loop: FrameLoop, listeners: Vec<Listener>) -> Self {
        frame_loop.start();
        log::info!("[{}] mounted", name);
        Self {
            name,
            frame_loop,
            listeners,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        log::info!("[{}] unmounted", self.name);
    }
}
