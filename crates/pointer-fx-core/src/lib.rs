pub mod config;
pub mod constants;
pub mod css;
pub mod error;
pub mod parallax;
pub mod signal;
pub mod target;
pub mod tilt;
pub mod tracker;

pub use constants::*;
pub use error::*;
pub use parallax::*;
pub use signal::*;
pub use target::*;
pub use tilt::*;
pub use tracker::*;
