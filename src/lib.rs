#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod card;
mod constants;
mod dom;
mod frame;
mod input;
mod options;
mod surface;

use card::ProfileCard;

thread_local! {
    // Cards found in the page at startup; `unmount_all` releases them.
    static AUTO_MOUNTED: RefCell<Vec<ProfileCard>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("profile-card-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let cards: Vec<ProfileCard> = dom::query_all(&root, constants::CARD_SELECTOR)
        .into_iter()
        .filter_map(|wrap| match ProfileCard::mount(wrap) {
            Ok(card) => Some(card),
            Err(e) => {
                log::error!("[card] mount skipped: {:#}", e);
                None
            }
        })
        .collect();
    log::info!("[card] {} card(s) mounted", cards.len());
    AUTO_MOUNTED.with(|m| m.borrow_mut().extend(cards));
    Ok(())
}

/// Unmount every card mounted automatically at startup.
#[wasm_bindgen]
pub fn unmount_all() {
    let cards = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    drop(cards);
}

/// Handle for a card mounted from JavaScript.
#[wasm_bindgen]
pub struct ProfileCardHandle {
    card: Option<ProfileCard>,
}

#[wasm_bindgen]
impl ProfileCardHandle {
    pub fn unmount(&mut self) {
        self.card.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.card.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn flipped(&self) -> bool {
        self.card.as_ref().is_some_and(|c| c.state().flipped)
    }
}

/// Mount the tilt behaviour on a card wrapper element.
#[wasm_bindgen]
pub fn mount_profile_card(wrapper: web::Element) -> Result<ProfileCardHandle, JsValue> {
    let wrap = wrapper
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| JsValue::from_str("profile card wrapper must be an HTMLElement"))?;
    let card = ProfileCard::mount(wrap).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    Ok(ProfileCardHandle { card: Some(card) })
}
