// Page hooks and front-end settings.

// Elements the effects attach to
pub const PARALLAX_CONTAINER_ID: &str = "parallax-container";
pub const TILT_CARD_SELECTOR: &str = ".auth-card";

// DOM events
pub const EVENT_POINTER_MOVE: &str = "mousemove";
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_DOM_READY: &str = "DOMContentLoaded";

// Console logging threshold
pub const LOG_LEVEL: log::Level = log::Level::Info;
