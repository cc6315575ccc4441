pub mod pointer;
pub mod window;

pub use pointer::{wire_hover_handlers, wire_pointermove};
pub use window::{wire_resize, wire_scroll};

use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;

/// Run `f` against the shared frame context unless a frame is currently
/// holding it; handlers never wait, they just drop the event.
pub(crate) fn with_ctx(ctx: &Rc<RefCell<FrameContext>>, f: impl FnOnce(&mut FrameContext)) {
    match ctx.try_borrow_mut() {
        Ok(mut c) => f(&mut c),
        Err(_) => log::debug!("[events] frame context busy, event dropped"),
    }
}
