use super::constants::{INITIAL_X_OFFSET, INITIAL_Y_OFFSET};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn local_offset(ev: &web::MouseEvent, el: &web::Element) -> DVec2 {
    let rect = el.get_bounding_client_rect();
    offset_from_rect(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::new(rect.left(), rect.top()),
    )
}

/// Client-space point relative to a rect's top-left corner. Not clamped.
#[inline]
pub fn offset_from_rect(client: DVec2, rect_origin: DVec2) -> DVec2 {
    client - rect_origin
}

/// True when the event started on an interactive control inside the card.
pub fn is_on_control(ev: &web::Event, control_selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(control_selector).ok().flatten())
        .is_some()
}

/// Off-centre start position used on mount, near the top-right of the card.
#[inline]
pub fn initial_offset(width: f64) -> DVec2 {
    DVec2::new(width.max(0.0) - INITIAL_X_OFFSET, INITIAL_Y_OFFSET)
}
