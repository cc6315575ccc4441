use crate::core::{FrameDriver, InstantClock, Sketch};
use crate::dom;
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the RAF loop and the DOM handlers share.
pub struct FrameContext {
    pub sketch: Sketch<web::HtmlImageElement>,
    pub gpu: GpuState,
    pub driver: FrameDriver<InstantClock>,
    pub container: web::HtmlElement,
    /// Optional element translated by the smoothed offset.
    pub content: Option<web::HtmlElement>,
}

impl FrameContext {
    /// One display refresh. Returns `false` once the loop should end.
    pub fn frame(&mut self) -> bool {
        let alive = self.driver.tick(&mut self.sketch, &mut self.gpu);
        if alive {
            if let Some(content) = &self.content {
                dom::translate_content(content, self.sketch.scroll().rendered());
            }
        }
        alive
    }

    /// Re-read the container size; safe to call any number of times.
    pub fn resize(&mut self) {
        let viewport = dom::viewport_of(&self.container);
        self.sketch.on_resize(viewport, &mut self.gpu);
    }

    pub fn stop(&mut self) {
        self.driver.stop();
        self.sketch.dispose();
        self.gpu.clear_meshes();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // stopped: simply do not ask for another frame
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
