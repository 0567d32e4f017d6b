use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// All elements under `root` matching `selector`, as `HtmlElement`s.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// `setTimeout` with a Rust callback; returns the handle for `clearTimeout`.
pub fn set_timeout(
    window: &web::Window,
    callback: &Closure<dyn FnMut()>,
    timeout_ms: i32,
) -> Option<i32> {
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref::<js_sys::Function>(),
            timeout_ms,
        )
        .ok()
}

/// Registered DOM listener, removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event_type: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
        {
            log::error!("addEventListener({event_type}) failed: {:?}", e);
        }
        Self {
            target: target.clone(),
            event_type,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
