use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tilt_core::{FrameClock, FrameRequestId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Closure<dyn FnMut()>;

/// `requestAnimationFrame`-backed clock.
///
/// Frame times are measured with `Instant` from the clock's creation so that
/// `now()` and the value handed to each frame share one time base.
pub struct RafClock {
    window: web::Window,
    origin: Instant,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl RafClock {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            origin: Instant::now(),
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Install the function run on every requested frame.
    pub fn bind(&self, mut on_frame: impl FnMut(Duration) + 'static) {
        let origin = self.origin;
        let closure = Closure::wrap(Box::new(move || {
            on_frame(origin.elapsed());
        }) as Box<dyn FnMut()>);
        *self.callback.borrow_mut() = Some(closure);
    }

    /// Drop the frame function; later requests become no-ops.
    pub fn unbind(&self) {
        self.callback.borrow_mut().take();
    }
}

impl FrameClock for RafClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            log::warn!("[frame] request without a bound callback");
            return FrameRequestId(0);
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => FrameRequestId(id as u64),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                FrameRequestId(0)
            }
        }
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        _ = self.window.cancel_animation_frame(id.0 as i32);
    }
}
