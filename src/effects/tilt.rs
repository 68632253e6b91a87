use crate::config;
use crate::constants::{EVENT_POINTER_MOVE, EVENT_RESIZE, TILT_CARD_SELECTOR};
use crate::dom::{self, DomTarget};
use crate::effects::Mounted;
use crate::events::Listener;
use crate::frame::FrameLoop;
use crate::input;
use pointer_fx_core::TiltEffect;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Option<Mounted>> {
    let card = dom::query_html_in_document(document, TILT_CARD_SELECTOR);
    let params = config::tilt_params(card.as_deref());
    let Some(effect) = TiltEffect::mount(card.map(DomTarget::new), dom::viewport(window)?, params)?
    else {
        log::info!("[tilt] no {}; skipping", TILT_CARD_SELECTOR);
        return Ok(None);
    };
    log::info!(
        "[tilt] max_tilt={} damping={}",
        params.max_tilt_deg,
        params.damping
    );
    let effect = Rc::new(RefCell::new(effect));

    let on_move = {
        let fx = effect.clone();
        Listener::mouse(document.as_ref(), EVENT_POINTER_MOVE, move |ev| {
            let mut fx = fx.borrow_mut();
            // Re-read every move; the card scrolls with the page.
            let center = input::element_center(fx.card().element());
            fx.on_pointer_move(input::client_point(ev), center);
        })?
    };
    let on_resize = {
        let fx = effect.clone();
        let win = window.clone();
        Listener::new(window.as_ref(), EVENT_RESIZE, move |_| {
            let resized = dom::viewport(&win)
                .and_then(|vp| fx.borrow_mut().on_resize(vp).map_err(anyhow::Error::from));
            if let Err(e) = resized {
                log::warn!("[tilt] keeping previous viewport: {}", e);
            }
        })?
    };
    let frame_loop = FrameLoop::new(move || {
        effect.borrow_mut().tick();
    });

    Ok(Some(Mounted::start("tilt", frame_loop, vec![on_move, on_resize])))
}
