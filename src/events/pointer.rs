use super::with_ctx;
use crate::core::Clock;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position relative to the fixed canvas the planes are drawn on,
/// in CSS pixels. The container scrolls with the page, the canvas does not.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    [
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    ]
}

/// Hit-test on every move and feed the surface uv of the hit mesh.
pub fn wire_pointermove(ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        with_ctx(&ctx, |c| {
            let [x, y] = pointer_canvas_px(&ev, c.gpu.canvas());
            c.sketch.on_pointer_move(x, y);
        });
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Enter/leave on each bound `<img>` drives that mesh's hover tween.
pub fn wire_hover_handlers(ctx: Rc<RefCell<FrameContext>>, images: &[web::HtmlImageElement]) {
    for img in images {
        let Some(index) = ctx.borrow().sketch.registry().index_of(img) else {
            continue;
        };
        let ctx_enter = ctx.clone();
        let enter = Closure::wrap(Box::new(move || {
            with_ctx(&ctx_enter, |c| {
                let now = c.driver.clock().now();
                c.sketch.hover_enter(index, now);
            });
        }) as Box<dyn FnMut()>);
        let ctx_leave = ctx.clone();
        let leave = Closure::wrap(Box::new(move || {
            with_ctx(&ctx_leave, |c| {
                let now = c.driver.clock().now();
                c.sketch.hover_leave(index, now);
            });
        }) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        _ = img.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        enter.forget();
        leave.forget();
    }
}
