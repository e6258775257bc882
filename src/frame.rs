use crate::overlay;
use crate::render;
use crate::scene::frame_loop::LoopState;
use crate::scene::tagline::TaglineRotator;
use crate::scene::SceneDriver;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: Rc<RefCell<SceneDriver>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub tagline: TaglineRotator,
    pub started: Instant,
}

impl FrameContext {
    /// One animation frame. Returns `false` once the scene is torn down.
    pub fn frame(&mut self) -> bool {
        let now = self.started.elapsed().as_secs_f64();
        if !self.driver.borrow_mut().advance(now) {
            return false;
        }

        let elapsed = self.driver.borrow().clock().seconds();
        if let Some(text) = self.tagline.advance(elapsed) {
            overlay::set_tagline(&self.document, text);
        }

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let driver = self.driver.borrow();
            match gpu.render(&driver) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::Timeout) => log::warn!("[gpu] frame timeout"),
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
        true
    }
}

/// Create the renderer, or mark the canvas as a fallback when WebGPU is
/// unavailable. The scene keeps ticking either way.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    driver: &SceneDriver,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, driver).await {
        Ok(g) => {
            overlay::clear_fallback(canvas);
            Some(g)
        }
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            overlay::mark_fallback(canvas);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that reschedules itself until stopped.
pub struct RafLoop {
    state: Rc<RefCell<LoopState>>,
    tick: TickClosure,
}

impl RafLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(LoopState::new()));
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let state_tick = state.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !state_tick.borrow_mut().begin_frame() {
                return;
            }
            if !frame_ctx.borrow_mut().frame() {
                state_tick.borrow_mut().stop();
                return;
            }
            if let Some(id) = tick_clone.borrow().as_ref().and_then(request_frame) {
                state_tick.borrow_mut().scheduled(id);
            }
        }) as Box<dyn FnMut()>));

        let first = tick
            .borrow()
            .as_ref()
            .and_then(request_frame)
            .ok_or_else(|| anyhow::anyhow!("requestAnimationFrame failed"))?;
        state.borrow_mut().scheduled(first);
        Ok(Self { state, tick })
    }

    /// Cancel the outstanding frame and release the callback.
    pub fn stop(&self) {
        if let Some(id) = self.state.borrow_mut().stop() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // The closure holds a clone of `tick`; dropping it breaks the cycle.
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped after {} frames", self.state.borrow().frames());
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}
