// Shared tuning constants for both effects.

// Parallax
pub const PARALLAX_DAMPING: f32 = 0.05; // fraction of remaining distance per frame
pub const PARALLAX_RANGE_PX: f32 = 100.0; // offset at speed 1.0 and full deflection

// Default layers, back to front
pub const PARALLAX_LAYERS: [(&str, f32); 3] = [
    (".layer-bg", 0.02),
    (".layer-1", 0.05),
    (".layer-2", 0.08),
];

// Tilt
pub const TILT_DAMPING: f32 = 0.08;
pub const TILT_MAX_DEG: f32 = 8.0; // rotation at full deflection
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_SCALE: f32 = 1.01; // constant zoom while tilting

// Gloss highlight (percent of card size)
pub const GLOSS_CENTER_PCT: f32 = 50.0;
pub const GLOSS_SPAN_PCT: f32 = 40.0;

// Custom properties written on the card
pub const GLOSS_X_PROPERTY: &str = "--gloss-x";
pub const GLOSS_Y_PROPERTY: &str = "--gloss-y";

// Per-page overrides read from data attributes
pub const ATTR_LAYER_SPEED: &str = "data-parallax-speed";
pub const ATTR_SMOOTHING: &str = "data-smoothing";
pub const ATTR_MAX_TILT: &str = "data-max-tilt";
