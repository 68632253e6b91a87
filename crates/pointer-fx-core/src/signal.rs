//! Exponentially smoothed two-axis signal.
//!
//! A [`SmoothedSignal`] keeps a target and a current value. The target is
//! overwritten whenever new input arrives; the current value only moves in
//! [`SmoothedSignal::tick`], covering a fixed fraction of the remaining
//! distance each call. With a constant target the error shrinks
//! geometrically by `1 - damping` per tick.

use crate::error::{FxError, FxResult};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedSignal {
    target: Vec2,
    current: Vec2,
    damping: f32,
}

impl SmoothedSignal {
    /// Zero-valued signal. `damping` must lie in (0, 1].
    pub fn new(damping: f32) -> FxResult<Self> {
        validate_damping(damping)?;
        Ok(Self {
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            damping,
        })
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance the current value one step toward the target and return it.
    #[inline]
    pub fn tick(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * self.damping;
        self.current
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// True when the current value is within `epsilon` of the target on both axes.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.current).abs().max_element() <= epsilon
    }
}

pub fn validate_damping(damping: f32) -> FxResult<()> {
    if damping.is_finite() && damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(FxError::InvalidDamping(damping))
    }
}
