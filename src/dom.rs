use crate::core::{GalleryConfig, LayoutRect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Container size in CSS pixels, read fresh every call.
pub fn viewport_of(container: &web::HtmlElement) -> Viewport {
    Viewport::new(container.offset_width() as f32, container.offset_height() as f32)
}

/// Page-space rectangle of an element (client rect plus current scroll).
pub fn page_rect(el: &web::Element) -> LayoutRect {
    let r = el.get_bounding_client_rect();
    let sy = scroll_y();
    LayoutRect::new(
        (r.top() + sy as f64) as f32,
        r.left() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// CSS size follows the viewport; backing store is CSS size × devicePixelRatio.
pub fn size_canvas_to(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    canvas.set_width(((viewport.width as f64 * dpr) as u32).max(1));
    canvas.set_height(((viewport.height as f64 * dpr) as u32).max(1));
}

/// Create the gallery canvas inside `container`. It sits on top of the page
/// and lets pointer events through to the images underneath.
pub fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.set_attribute(
        "style",
        "position:fixed;top:0;left:0;pointer-events:none;",
    );
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn find_container(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Image elements under `root`, in document order.
pub fn images_in(root: &web::Element, selector: &str) -> Vec<web::HtmlImageElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad image selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlImageElement>().ok())
        .collect()
}

fn data_f32(el: &web::Element, name: &str) -> Option<f32> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::warn!("[config] ignoring {name}={raw:?}");
            None
        }
    }
}

/// Defaults overridden by `data-*` attributes on the container.
pub fn read_config(container: &web::Element) -> GalleryConfig {
    let mut c = GalleryConfig::default();
    if let Some(v) = data_f32(container, "data-damping") {
        c.scroll_damping = v;
    }
    if let Some(v) = data_f32(container, "data-hover-duration") {
        c.hover_duration_sec = v;
    }
    if let Some(v) = data_f32(container, "data-distortion") {
        c.distortion = v;
    }
    if let Some(v) = data_f32(container, "data-fade-edge") {
        c.fade_edge = v;
    }
    if let Some(v) = data_f32(container, "data-time-step") {
        c.time_step = v;
    }
    c.validated()
}

/// Move the DOM content with the smoothed offset so text and planes agree.
pub fn translate_content(content: &web::HtmlElement, offset: f32) {
    _ = content
        .style()
        .set_property("transform", &format!("translate3d(0, {}px, 0)", -offset));
}

/// Pin the scroll content so only the smoothed offset moves it; the body
/// keeps the content's height so native scrolling still produces offsets.
pub fn pin_scroll_content(document: &web::Document, content: &web::HtmlElement) {
    _ = content.style().set_property("position", "fixed");
    _ = content.style().set_property("top", "0");
    _ = content.style().set_property("left", "0");
    _ = content.style().set_property("width", "100%");
    if let Some(body) = document.body() {
        _ = body
            .style()
            .set_property("height", &format!("{}px", content.scroll_height()));
    }
}
