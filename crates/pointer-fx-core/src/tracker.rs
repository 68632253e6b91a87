//! Pointer normalization and the damped tracker shared by both effects.

use crate::error::{FxError, FxResult};
use crate::signal::SmoothedSignal;
use glam::Vec2;

/// Size of the visible area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.center()
    }
}

/// Center point plus the per-axis divisor used to normalize pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceFrame {
    center: Vec2,
    half_extent: Vec2,
}

impl ReferenceFrame {
    pub fn new(center: Vec2, half_extent: Vec2) -> FxResult<Self> {
        let ok = half_extent.is_finite() && half_extent.x > 0.0 && half_extent.y > 0.0;
        if !ok || !center.is_finite() {
            return Err(FxError::InvalidExtent {
                width: half_extent.x * 2.0,
                height: half_extent.y * 2.0,
            });
        }
        Ok(Self {
            center,
            half_extent,
        })
    }

    /// Frame centered on the viewport, normalizing by half its size.
    pub fn from_viewport(viewport: Viewport) -> FxResult<Self> {
        Self::new(viewport.center(), viewport.half_extent())
    }

    /// Same divisor, different center.
    #[inline]
    pub fn with_center(self, center: Vec2) -> Self {
        Self { center, ..self }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    /// Signed displacement from the center in half-extent units. Not clamped.
    #[inline]
    pub fn normalize(&self, pointer: Vec2) -> Vec2 {
        (pointer - self.center) / self.half_extent
    }
}

/// Latest pointer input feeds the target; [`PointerTracker::tick`] eases
/// the current value toward it.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    frame: ReferenceFrame,
    signal: SmoothedSignal,
}

impl PointerTracker {
    pub fn new(frame: ReferenceFrame, damping: f32) -> FxResult<Self> {
        Ok(Self {
            frame,
            signal: SmoothedSignal::new(damping)?,
        })
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2) {
        let target = self.frame.normalize(pointer);
        if target.is_finite() {
            self.signal.set_target(target);
        }
    }

    /// Replace the reference frame. Neither signal is touched.
    pub fn on_resize(&mut self, frame: ReferenceFrame) {
        self.frame = frame;
    }

    /// Move the center without changing the divisor.
    pub fn recenter(&mut self, center: Vec2) {
        if center.is_finite() {
            self.frame = self.frame.with_center(center);
        }
    }

    #[inline]
    pub fn tick(&mut self) -> Vec2 {
        self.signal.tick()
    }

    #[inline]
    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.signal.target()
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.signal.current()
    }

    #[inline]
    pub fn signal(&self) -> &SmoothedSignal {
        &self.signal
    }
}
