use crate::constants::{HERO_CANVAS_ID, SEED_ATTRIBUTE, THEME_ATTRIBUTE};
use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::{self, FrameContext, RafLoop};
use crate::overlay;
use crate::scene::tagline::TaglineRotator;
use crate::scene::{SceneDriver, SceneParams};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything a live hero owns; released by `unmount`.
struct HeroHandle {
    driver: Rc<RefCell<SceneDriver>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
    raf: RafLoop,
    listeners: Vec<EventListener>,
}

impl HeroHandle {
    fn unmount(self) {
        self.raf.stop();
        drop(self.listeners);
        self.driver.borrow_mut().teardown();
        self.frame_ctx.borrow_mut().gpu = None;
        log::info!("[hero] unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<HeroHandle>> = const { RefCell::new(None) };
    // Bumped by every mount/unmount so a slow GPU init cannot resurrect a
    // hero that was unmounted while it was pending.
    static GENERATION: Cell<u64> = const { Cell::new(0) };
}

fn bump_generation() -> u64 {
    GENERATION.with(|g| {
        let next = g.get().wrapping_add(1);
        g.set(next);
        next
    })
}

fn find_canvas(canvas_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", canvas_id, e)))
}

async fn mount_on(canvas: web::HtmlCanvasElement) -> anyhow::Result<HeroHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let params = SceneParams::from_attributes(
        canvas.get_attribute(THEME_ATTRIBUTE).as_deref(),
        canvas.get_attribute(SEED_ATTRIBUTE).as_deref(),
    );

    let mut listeners = vec![events::wire_canvas_resize(&canvas)?];
    let driver = SceneDriver::new(&params);
    let gpu = frame::init_gpu(&canvas, &driver).await;
    let driver = Rc::new(RefCell::new(driver));
    listeners.extend(events::wire_pointer_handlers(&canvas, &driver)?);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        driver: driver.clone(),
        gpu,
        canvas,
        document,
        tagline: TaglineRotator::new(),
        started: Instant::now(),
    }));
    let raf = RafLoop::start(frame_ctx.clone())?;
    Ok(HeroHandle {
        driver,
        frame_ctx,
        raf,
        listeners,
    })
}

/// Mount the hero scene on the canvas with id `canvas_id`, replacing any
/// hero that is already mounted.
#[wasm_bindgen]
pub fn mount_hero(canvas_id: &str) -> Result<(), JsValue> {
    let canvas = find_canvas(canvas_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
    unmount_hero();
    let generation = bump_generation();
    spawn_local(async move {
        match mount_on(canvas.clone()).await {
            Ok(handle) => {
                if GENERATION.with(Cell::get) == generation {
                    MOUNTED.with(|m| *m.borrow_mut() = Some(handle));
                    log::info!("[hero] mounted");
                } else {
                    handle.unmount();
                }
            }
            Err(e) => {
                log::error!("[hero] mount error: {:?}", e);
                overlay::mark_fallback(&canvas);
            }
        }
    });
    Ok(())
}

/// Stop the animation, drop every listener and release GPU resources.
#[wasm_bindgen]
pub fn unmount_hero() {
    bump_generation();
    if let Some(handle) = MOUNTED.with(|m| m.borrow_mut().take()) {
        handle.unmount();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-hero starting");

    let present = dom::window_document()
        .and_then(|d| d.get_element_by_id(HERO_CANVAS_ID))
        .is_some();
    if present {
        mount_hero(HERO_CANVAS_ID)?;
    } else {
        log::info!("[hero] no #{}; waiting for mount_hero", HERO_CANVAS_ID);
    }
    Ok(())
}
