//! 3D card tilt with a gloss highlight that follows the rotation.

use crate::config::validate_max_tilt;
use crate::constants::{
    GLOSS_CENTER_PCT, GLOSS_SPAN_PCT, GLOSS_X_PROPERTY, GLOSS_Y_PROPERTY, TILT_DAMPING,
    TILT_MAX_DEG, TILT_PERSPECTIVE_PX, TILT_SCALE,
};
use crate::css;
use crate::error::FxResult;
use crate::signal::validate_damping;
use crate::target::StyleTarget;
use crate::tracker::{PointerTracker, ReferenceFrame, Viewport};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltParams {
    pub damping: f32,
    pub max_tilt_deg: f32,
    pub perspective_px: f32,
    pub scale: f32,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            damping: TILT_DAMPING,
            max_tilt_deg: TILT_MAX_DEG,
            perspective_px: TILT_PERSPECTIVE_PX,
            scale: TILT_SCALE,
        }
    }
}

/// Rotation and gloss position derived from a normalized pointer signal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub gloss_x_pct: f32,
    pub gloss_y_pct: f32,
}

impl TiltPose {
    /// Horizontal displacement turns the card about Y; vertical displacement
    /// turns it about X with the sign flipped so the near edge dips.
    pub fn from_signal(signal: Vec2, max_tilt_deg: f32) -> Self {
        let rotate_y_deg = signal.x * max_tilt_deg;
        let rotate_x_deg = -signal.y * max_tilt_deg;
        Self {
            rotate_x_deg,
            rotate_y_deg,
            gloss_x_pct: GLOSS_CENTER_PCT + (rotate_y_deg / max_tilt_deg) * GLOSS_SPAN_PCT,
            gloss_y_pct: GLOSS_CENTER_PCT - (rotate_x_deg / max_tilt_deg) * GLOSS_SPAN_PCT,
        }
    }

    pub fn transform_css(&self, params: &TiltParams) -> String {
        css::tilt_transform(
            params.perspective_px,
            self.rotate_x_deg,
            self.rotate_y_deg,
            params.scale,
        )
    }

    pub fn apply<T: StyleTarget>(&self, target: &T, params: &TiltParams) {
        target.set_transform(&self.transform_css(params));
        target.set_property(GLOSS_X_PROPERTY, &css::percent(self.gloss_x_pct));
        target.set_property(GLOSS_Y_PROPERTY, &css::percent(self.gloss_y_pct));
    }
}

pub struct TiltEffect<T> {
    card: T,
    tracker: PointerTracker,
    params: TiltParams,
}

impl<T: StyleTarget> TiltEffect<T> {
    /// Build the effect for `card`, or `Ok(None)` when there is no card.
    pub fn mount(card: Option<T>, viewport: Viewport, params: TiltParams) -> FxResult<Option<Self>> {
        validate_damping(params.damping)?;
        validate_max_tilt(params.max_tilt_deg)?;
        let Some(card) = card else {
            return Ok(None);
        };
        let frame = ReferenceFrame::from_viewport(viewport)?;
        Ok(Some(Self {
            card,
            tracker: PointerTracker::new(frame, params.damping)?,
            params,
        }))
    }

    /// `card_center` is the card's current bounding-box center; the divisor
    /// stays at the viewport half extents.
    pub fn on_pointer_move(&mut self, pointer: Vec2, card_center: Vec2) {
        self.tracker.recenter(card_center);
        self.tracker.on_pointer_move(pointer);
    }

    pub fn on_resize(&mut self, viewport: Viewport) -> FxResult<()> {
        let center = self.tracker.frame().center();
        let frame = ReferenceFrame::from_viewport(viewport)?.with_center(center);
        self.tracker.on_resize(frame);
        Ok(())
    }

    pub fn tick(&mut self) -> TiltPose {
        let current = self.tracker.tick();
        let pose = TiltPose::from_signal(current, self.params.max_tilt_deg);
        pose.apply(&self.card, &self.params);
        pose
    }

    /// Pose the card is easing toward.
    pub fn target_pose(&self) -> TiltPose {
        TiltPose::from_signal(self.tracker.target(), self.params.max_tilt_deg)
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn params(&self) -> TiltParams {
        self.params
    }

    pub fn card(&self) -> &T {
        &self.card
    }
}
