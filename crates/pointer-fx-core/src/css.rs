//! CSS value formatting for the effect outputs.

use glam::Vec2;

// -0.0 prints as "-0"; adding +0.0 folds it to 0.
#[inline]
fn num(v: f32) -> f32 {
    v + 0.0
}

#[inline]
pub fn translate3d_px(offset: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", num(offset.x), num(offset.y))
}

#[inline]
pub fn percent(v: f32) -> String {
    format!("{}%", num(v))
}

pub fn tilt_transform(perspective_px: f32, rotate_x_deg: f32, rotate_y_deg: f32, scale: f32) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
        num(perspective_px),
        num(rotate_x_deg),
        num(rotate_y_deg),
        s = num(scale),
    )
}
