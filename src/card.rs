use crate::constants::{
    CLASS_ACTIVE, CLASS_ENTERING, CLASS_FLIPPED, CONTACT_BUTTON_SELECTOR, CONTROL_SELECTOR,
    ENTER_TRANSITION_MS, FLIP_SELECTOR, LEAVE_SETTLE_RADIUS_PX, SHELL_SELECTOR,
};
use crate::dom::{self, EventListener};
use crate::frame::RafClock;
use crate::input;
use crate::options::CardOptions;
use crate::surface::ShellSurface;
use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tilt_core::{CardState, Surface, TiltEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type CardEngine = TiltEngine<ShellSurface, RafClock>;

/// Everything the card's listeners share.
#[derive(Clone)]
struct CardContext {
    window: web::Window,
    shell: web::HtmlElement,
    engine: Option<Rc<RefCell<CardEngine>>>,
    state: Rc<RefCell<CardState>>,
    enter_timer: Rc<Cell<Option<i32>>>,
    enter_done: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    leave_frame: Rc<Cell<Option<i32>>>,
    settle_check: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl CardContext {
    fn sync_classes(&self) {
        let s = *self.state.borrow();
        dom::set_class(&self.shell, CLASS_ACTIVE, s.active);
        dom::set_class(&self.shell, CLASS_ENTERING, s.entering);
        dom::set_class(&self.shell, CLASS_FLIPPED, s.flipped);
    }

    fn with_engine(&self, f: impl FnOnce(&mut CardEngine)) {
        if let Some(engine) = &self.engine {
            if let Ok(mut e) = engine.try_borrow_mut() {
                f(&mut e);
            }
        }
    }

    fn recenter(&self) {
        self.with_engine(|e| e.move_to_center());
    }

    fn clear_enter_timer(&self) {
        if let Some(handle) = self.enter_timer.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    fn cancel_leave_frame(&self) {
        if let Some(id) = self.leave_frame.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }

    fn request_settle_check(&self) {
        self.cancel_leave_frame();
        if let Some(cb) = self.settle_check.borrow().as_ref() {
            self.leave_frame
                .set(self.window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }

    fn pointer_enter(&self, ev: &web::Event) {
        if input::is_on_control(ev, CONTROL_SELECTOR) {
            return;
        }
        if !self.state.borrow_mut().pointer_entered() {
            return;
        }
        self.sync_classes();
        self.clear_enter_timer();
        if let Some(cb) = self.enter_done.borrow().as_ref() {
            self.enter_timer
                .set(dom::set_timeout(&self.window, cb, ENTER_TRANSITION_MS));
        }
        self.track(ev);
    }

    fn pointer_move(&self, ev: &web::Event) {
        if !self.state.borrow().accepts_pointer() || input::is_on_control(ev, CONTROL_SELECTOR) {
            return;
        }
        self.track(ev);
    }

    fn pointer_leave(&self) {
        if !self.state.borrow().accepts_pointer() {
            return;
        }
        self.recenter();
        self.request_settle_check();
    }

    fn track(&self, ev: &web::Event) {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let offset = input::local_offset(mouse, &self.shell);
        self.with_engine(|e| e.set_target(offset.x, offset.y));
    }

    fn toggle_flip(&self, ev: &web::Event) {
        ev.prevent_default();
        ev.stop_propagation();
        let recenter = self.state.borrow_mut().toggle_flip();
        self.sync_classes();
        if recenter {
            self.recenter();
        }
        log::info!("[card] flipped={}", self.state.borrow().flipped);
    }

    fn control_hover(&self, hovered: bool) {
        let recenter = self.state.borrow_mut().set_control_hovered(hovered);
        self.sync_classes();
        if recenter {
            self.recenter();
        }
    }
}

/// A mounted profile card. Dropping it unmounts.
pub struct ProfileCard {
    ctx: CardContext,
    _listeners: Vec<EventListener>,
}

impl ProfileCard {
    pub fn mount(wrap: web::HtmlElement) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        let shell: web::HtmlElement = wrap
            .query_selector(SHELL_SELECTOR)
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("missing {SHELL_SELECTOR}"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        let options = CardOptions::from_attributes(|name| wrap.get_attribute(name))?;

        let engine = TiltEngine::new_if_enabled(
            options.tilt,
            ShellSurface::new(shell.clone(), wrap.clone(), document),
            RafClock::new(window.clone()),
        )
        .map(|e| Rc::new(RefCell::new(e)));

        if let Some(engine) = &engine {
            let weak = Rc::downgrade(engine);
            engine.borrow().clock().bind(move |now| {
                if let Some(engine) = weak.upgrade() {
                    if let Ok(mut e) = engine.try_borrow_mut() {
                        e.on_frame(now);
                    }
                }
            });
        }

        let ctx = CardContext {
            window: window.clone(),
            shell: shell.clone(),
            engine,
            state: Rc::new(RefCell::new(CardState::default())),
            enter_timer: Rc::new(Cell::new(None)),
            enter_done: Rc::new(RefCell::new(None)),
            leave_frame: Rc::new(Cell::new(None)),
            settle_check: Rc::new(RefCell::new(None)),
        };
        wire_timers(&ctx);
        let listeners = wire_listeners(&ctx, &wrap);

        if let Some(engine) = &ctx.engine {
            let mut e = engine.borrow_mut();
            let width = e.surface().size().map(|s| s.x).unwrap_or(0.0);
            let start = input::initial_offset(width);
            e.set_immediate(start.x, start.y);
            e.move_to_center();
            e.begin_initial_phase(options.initial_duration);
        }
        log::info!("[card] mounted (tilt {})", ctx.engine.is_some());

        Ok(Self {
            ctx,
            _listeners: listeners,
        })
    }

    pub fn state(&self) -> CardState {
        *self.ctx.state.borrow()
    }
}

impl Drop for ProfileCard {
    fn drop(&mut self) {
        self.ctx.clear_enter_timer();
        self.ctx.cancel_leave_frame();
        self.ctx.enter_done.borrow_mut().take();
        self.ctx.settle_check.borrow_mut().take();
        if let Some(engine) = &self.ctx.engine {
            if let Ok(mut e) = engine.try_borrow_mut() {
                e.cancel();
                e.clock().unbind();
            }
        }
        log::info!("[card] unmounted");
    }
}

fn wire_timers(ctx: &CardContext) {
    let c = ctx.clone();
    *ctx.enter_done.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        c.enter_timer.set(None);
        c.state.borrow_mut().enter_transition_elapsed();
        c.sync_classes();
    }) as Box<dyn FnMut()>));

    // Poll each frame after pointer-leave until the card is back at rest
    let c = ctx.clone();
    *ctx.settle_check.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        c.leave_frame.set(None);
        let settled = match &c.engine {
            Some(engine) => engine
                .try_borrow()
                .map(|e| e.snapshot().is_settled_within(LEAVE_SETTLE_RADIUS_PX))
                .unwrap_or(false),
            None => true,
        };
        if settled {
            c.state.borrow_mut().settled();
            c.sync_classes();
        } else {
            c.request_settle_check();
        }
    }) as Box<dyn FnMut()>));
}

fn wire_listeners(ctx: &CardContext, wrap: &web::HtmlElement) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    if ctx.engine.is_some() {
        let c = ctx.clone();
        listeners.push(EventListener::new(&ctx.shell, "pointerenter", move |ev| {
            c.pointer_enter(&ev)
        }));
        let c = ctx.clone();
        listeners.push(EventListener::new(&ctx.shell, "pointermove", move |ev| {
            c.pointer_move(&ev)
        }));
        let c = ctx.clone();
        listeners.push(EventListener::new(&ctx.shell, "pointerleave", move |_| {
            c.pointer_leave()
        }));
        let c = ctx.clone();
        listeners.push(EventListener::new(&ctx.window, "resize", move |_| {
            c.with_engine(|e| e.refresh())
        }));
    }

    for button in dom::query_all(wrap, FLIP_SELECTOR) {
        let c = ctx.clone();
        listeners.push(EventListener::new(&button, "click", move |ev| {
            c.toggle_flip(&ev)
        }));
    }

    for button in dom::query_all(wrap, CONTACT_BUTTON_SELECTOR) {
        let c = ctx.clone();
        listeners.push(EventListener::new(&button, "mouseenter", move |_| {
            c.control_hover(true)
        }));
        let c = ctx.clone();
        listeners.push(EventListener::new(&button, "mouseleave", move |_| {
            c.control_hover(false)
        }));
    }

    listeners
}
