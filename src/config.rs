//! Effect parameters with per-page overrides from data attributes.

use pointer_fx_core::config::{parse_damping, parse_max_tilt, parse_speed, resolve};
use pointer_fx_core::{ParallaxParams, TiltParams, ATTR_LAYER_SPEED, ATTR_MAX_TILT, ATTR_SMOOTHING};
use web_sys as web;

pub fn parallax_params(container: &web::Element) -> ParallaxParams {
    let defaults = ParallaxParams::default();
    ParallaxParams {
        damping: resolve(
            ATTR_SMOOTHING,
            container.get_attribute(ATTR_SMOOTHING).as_deref(),
            defaults.damping,
            parse_damping,
        ),
        ..defaults
    }
}

pub fn layer_speed(layer: &web::Element, default: f32) -> f32 {
    resolve(
        ATTR_LAYER_SPEED,
        layer.get_attribute(ATTR_LAYER_SPEED).as_deref(),
        default,
        parse_speed,
    )
}

pub fn tilt_params(card: Option<&web::Element>) -> TiltParams {
    let defaults = TiltParams::default();
    let Some(card) = card else {
        return defaults;
    };
    TiltParams {
        damping: resolve(
            ATTR_SMOOTHING,
            card.get_attribute(ATTR_SMOOTHING).as_deref(),
            defaults.damping,
            parse_damping,
        ),
        max_tilt_deg: resolve(
            ATTR_MAX_TILT,
            card.get_attribute(ATTR_MAX_TILT).as_deref(),
            defaults.max_tilt_deg,
            parse_max_tilt,
        ),
        ..defaults
    }
}
