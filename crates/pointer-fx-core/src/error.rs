use thiserror::Error;

/// Errors raised while building trackers or validating effect parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    #[error("damping factor must be in (0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("reference extent must be positive and finite, got {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },
    #[error("layer speed must be finite, got {0}")]
    InvalidSpeed(f32),
    #[error("max tilt must be positive and finite, got {0}")]
    InvalidMaxTilt(f32),
    #[error("could not parse attribute `{name}` value {value:?}")]
    ParseAttr { name: String, value: String },
}

pub type FxResult<T> = Result<T, FxError>;
