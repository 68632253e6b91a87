//! Parsing and validation of per-page overrides.
//!
//! Overrides arrive as raw attribute strings. Each parser returns a typed
//! error for anything it rejects; [`resolve`] turns a rejection into a
//! logged warning and falls back to the default, so a bad attribute never
//! disables an effect.

use crate::error::{FxError, FxResult};
use crate::signal::validate_damping;

pub fn parse_f32_attr(name: &str, raw: &str) -> FxResult<f32> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| FxError::ParseAttr {
            name: name.to_string(),
            value: raw.to_string(),
        })
}

pub fn parse_damping(name: &str, raw: &str) -> FxResult<f32> {
    let v = parse_f32_attr(name, raw)?;
    validate_damping(v)?;
    Ok(v)
}

pub fn parse_speed(name: &str, raw: &str) -> FxResult<f32> {
    let v = parse_f32_attr(name, raw)?;
    validate_speed(v)?;
    Ok(v)
}

pub fn parse_max_tilt(name: &str, raw: &str) -> FxResult<f32> {
    let v = parse_f32_attr(name, raw)?;
    validate_max_tilt(v)?;
    Ok(v)
}

#[inline]
pub fn validate_speed(speed: f32) -> FxResult<()> {
    if speed.is_finite() {
        Ok(())
    } else {
        Err(FxError::InvalidSpeed(speed))
    }
}

#[inline]
pub fn validate_max_tilt(deg: f32) -> FxResult<()> {
    if deg.is_finite() && deg > 0.0 {
        Ok(())
    } else {
        Err(FxError::InvalidMaxTilt(deg))
    }
}

/// Parse `raw` if present, falling back to `default` on absence or rejection.
pub fn resolve(
    name: &str,
    raw: Option<&str>,
    default: f32,
    parse: impl Fn(&str, &str) -> FxResult<f32>,
) -> f32 {
    match raw {
        None => default,
        Some(raw) => match parse(name, raw) {
            Ok(v) => {
                log::debug!("[config] {}={}", name, v);
                v
            }
            Err(e) => {
                log::warn!("[config] ignoring override: {}; using {}", e, default);
                default
            }
        },
    }
}
