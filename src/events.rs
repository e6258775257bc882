use crate::dom::{self, EventListener};
use crate::input;
use crate::scene::picking::screen_to_world_ray;
use crate::scene::SceneDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store at CSS size × DPR.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> anyhow::Result<EventListener> {
    dom::sync_canvas_backing_size(canvas);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas_resize = canvas.clone();
    EventListener::new(window.as_ref(), "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

/// Hover picking and orbit dragging on the canvas.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    driver: &Rc<RefCell<SceneDriver>>,
) -> anyhow::Result<Vec<EventListener>> {
    let target: &web::EventTarget = canvas.as_ref();
    let mut listeners = Vec::with_capacity(5);

    // pointermove: drag and hover pick
    {
        let canvas = canvas.clone();
        let driver = driver.clone();
        listeners.push(EventListener::new(target, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let mut d = driver.borrow_mut();
            if d.orbit().is_dragging() {
                let (p, h) = input::pointer_css(ev, &canvas);
                d.orbit_mut().drag_to(p.x, p.y, h);
            }
            let px = input::pointer_canvas_px(ev, &canvas);
            let w = canvas.width() as f32;
            let h = canvas.height() as f32;
            let camera = d.camera(w / h.max(1.0));
            let (ro, rd) = screen_to_world_ray(&camera, w, h, px.x, px.y);
            d.hover_ray(ro, rd);
        })?);
    }

    // pointerleave: nothing can be hovered outside the canvas
    {
        let driver = driver.clone();
        listeners.push(EventListener::new(target, "pointerleave", move |_| {
            driver.borrow_mut().set_emblem_hover(false);
        })?);
    }

    // pointerdown: start dragging and capture the pointer
    {
        let canvas = canvas.clone();
        let driver = driver.clone();
        listeners.push(EventListener::new(target, "pointerdown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let (p, _) = input::pointer_css(ev, &canvas);
            driver.borrow_mut().orbit_mut().begin_drag(p.x, p.y);
            _ = canvas.set_pointer_capture(ev.pointer_id());
        })?);
    }

    // pointerup / pointercancel: stop dragging
    for event in ["pointerup", "pointercancel"] {
        let canvas = canvas.clone();
        let driver = driver.clone();
        listeners.push(EventListener::new(target, event, move |ev| {
            driver.borrow_mut().orbit_mut().end_drag();
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                _ = canvas.release_pointer_capture(ev.pointer_id());
            }
        })?);
    }

    Ok(listeners)
}
