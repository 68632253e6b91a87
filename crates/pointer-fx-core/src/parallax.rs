//! Mouse-driven parallax: layers translate against the pointer, each scaled
//! by its own speed so slower layers read as farther away.

use crate::config::validate_speed;
use crate::constants::{PARALLAX_DAMPING, PARALLAX_RANGE_PX};
use crate::css;
use crate::error::FxResult;
use crate::signal::validate_damping;
use crate::target::StyleTarget;
use crate::tracker::{PointerTracker, ReferenceFrame, Viewport};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    pub damping: f32,
    /// Pixel offset of a speed-1.0 layer at full deflection.
    pub range_px: f32,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            damping: PARALLAX_DAMPING,
            range_px: PARALLAX_RANGE_PX,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParallaxLayer<T> {
    pub target: T,
    pub speed: f32,
}

/// Offset for a layer: `-current * speed * range`.
#[inline]
pub fn layer_offset(current: Vec2, speed: f32, range_px: f32) -> Vec2 {
    -current * speed * range_px
}

pub struct ParallaxEffect<T> {
    tracker: PointerTracker,
    layers: SmallVec<[ParallaxLayer<T>; 4]>,
    params: ParallaxParams,
}

impl<T: StyleTarget> ParallaxEffect<T> {
    /// Build the effect over the given layers, or `Ok(None)` when there are none.
    pub fn mount(
        layers: impl IntoIterator<Item = ParallaxLayer<T>>,
        viewport: Viewport,
        params: ParallaxParams,
    ) -> FxResult<Option<Self>> {
        validate_damping(params.damping)?;
        let layers: SmallVec<[ParallaxLayer<T>; 4]> = layers.into_iter().collect();
        for l in &layers {
            validate_speed(l.speed)?;
        }
        if layers.is_empty() {
            return Ok(None);
        }
        let frame = ReferenceFrame::from_viewport(viewport)?;
        Ok(Some(Self {
            tracker: PointerTracker::new(frame, params.damping)?,
            layers,
            params,
        }))
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.tracker.on_pointer_move(Vec2::new(x, y));
    }

    pub fn on_resize(&mut self, viewport: Viewport) -> FxResult<()> {
        let frame = ReferenceFrame::from_viewport(viewport)?;
        self.tracker.on_resize(frame);
        Ok(())
    }

    /// Advance the shared signal and write every layer's transform.
    pub fn tick(&mut self) -> Vec2 {
        let current = self.tracker.tick();
        for layer in &self.layers {
            let offset = layer_offset(current, layer.speed, self.params.range_px);
            layer.target.set_transform(&css::translate3d_px(offset));
        }
        current
    }

    /// Offsets the layers will settle at for the current target.
    pub fn settled_offsets(&self) -> impl Iterator<Item = Vec2> + '_ {
        let target = self.tracker.target();
        self.layers
            .iter()
            .map(move |l| layer_offset(target, l.speed, self.params.range_px))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn params(&self) -> ParallaxParams {
        self.params
    }
}
