#![cfg(target_arch = "wasm32")]
use crate::core::{FrameDriver, InstantClock, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod startup;

use constants::{CONTAINER_SELECTOR, CONTENT_SELECTOR, DEFAULT_IMAGE_SELECTOR};
use frame::FrameContext;

/// Handle returned to JS for pages that start the gallery themselves.
#[wasm_bindgen]
pub struct Gallery {
    ctx: Rc<RefCell<FrameContext>>,
}

#[wasm_bindgen]
impl Gallery {
    /// Stop the frame loop and release the meshes.
    pub fn stop(&self) {
        self.ctx.borrow_mut().stop();
    }

    pub fn mesh_count(&self) -> usize {
        self.ctx.borrow().sketch.registry().len()
    }
}

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-gallery starting");

    // pages opting into manual start mark the container with data-manual
    let manual = dom::window_document()
        .and_then(|d| d.query_selector(CONTAINER_SELECTOR).ok().flatten())
        .map(|el| el.has_attribute("data-manual"))
        .unwrap_or(false);
    if !manual {
        spawn_local(async move {
            if let Err(e) = init(CONTAINER_SELECTOR).await {
                log::error!("init error: {:?}", e);
            }
        });
    }
    Ok(())
}

/// Start the gallery on `container_selector` and resolve to a [`Gallery`].
#[wasm_bindgen]
pub async fn start_gallery(container_selector: String) -> Result<Gallery, JsValue> {
    init(&container_selector)
        .await
        .map_err(|e| JsValue::from_str(&format!("{e:?}")))
}

async fn init(container_selector: &str) -> anyhow::Result<Gallery> {
    if STARTED.swap(true, Ordering::SeqCst) {
        anyhow::bail!("gallery already started");
    }
    let result = init_inner(container_selector).await;
    if result.is_err() {
        // a failed or aborted startup leaves nothing bound; allow a retry
        STARTED.store(false, Ordering::SeqCst);
    }
    result
}

async fn init_inner(container_selector: &str) -> anyhow::Result<Gallery> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::find_container(&document, container_selector)?;
    let config = dom::read_config(&container);
    let image_selector = container
        .get_attribute("data-image-selector")
        .unwrap_or_else(|| DEFAULT_IMAGE_SELECTOR.to_string());

    // Readiness gate: nothing below runs until fonts and images settle
    let images = dom::images_in(&container, &image_selector);
    let images = startup::await_ready(&document, images).await?;

    let content = document
        .query_selector(CONTENT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if let Some(content) = &content {
        dom::pin_scroll_content(&document, content);
        dom::translate_content(content, dom::scroll_y());
    }

    let canvas = dom::create_canvas(&document, &container)?;
    dom::size_canvas_to(&canvas, &dom::viewport_of(&container));
    let mut gpu = render::GpuState::new(canvas, config.plane_segments).await?;

    // the page may have scrolled or resized while the device was requested
    let viewport = dom::viewport_of(&container);
    let offset = dom::scroll_y();
    if let Some(content) = &content {
        dom::translate_content(content, offset);
    }
    let mut sketch = Sketch::new(config, viewport);
    sketch.jump_scroll_to(offset);
    sketch.start(images.iter().cloned(), |img| dom::page_rect(img), &mut gpu)?;

    let ctx = Rc::new(RefCell::new(FrameContext {
        sketch,
        gpu,
        driver: FrameDriver::new(InstantClock::new()),
        container,
        content,
    }));

    events::wire_scroll(ctx.clone());
    events::wire_resize(ctx.clone());
    events::wire_pointermove(ctx.clone());
    events::wire_hover_handlers(ctx.clone(), &images);
    // catch anything that changed before the listeners existed
    {
        let mut c = ctx.borrow_mut();
        c.resize();
        let y = dom::scroll_y();
        c.sketch.on_native_scroll(y);
    }

    frame::start_loop(ctx.clone());
    Ok(Gallery { ctx })
}
