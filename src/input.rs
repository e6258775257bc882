use glam::Vec2;
use web_sys as web;

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Pointer position in CSS pixels relative to the canvas, plus the
/// element's CSS height. Orbit dragging works in these units.
#[inline]
pub fn pointer_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, f32) {
    let rect = canvas.get_bounding_client_rect();
    let p = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (p, rect.height() as f32)
}
