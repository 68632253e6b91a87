use glam::Vec2;
use web_sys as web;

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> Vec2 {
    Vec2::new((left + width * 0.5) as f32, (top + height * 0.5) as f32)
}

#[inline]
pub fn element_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    rect_center(rect.left(), rect.top(), rect.width(), rect.height())
}
