use crate::config;
use crate::constants::{EVENT_POINTER_MOVE, EVENT_RESIZE, PARALLAX_CONTAINER_ID};
use crate::dom::{self, DomTarget};
use crate::effects::Mounted;
use crate::events::Listener;
use crate::frame::FrameLoop;
use crate::input;
use pointer_fx_core::{ParallaxEffect, ParallaxLayer, PARALLAX_LAYERS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Option<Mounted>> {
    let Some(container) = document.get_element_by_id(PARALLAX_CONTAINER_ID) else {
        log::info!("[parallax] no #{}; skipping", PARALLAX_CONTAINER_ID);
        return Ok(None);
    };

    let layers = PARALLAX_LAYERS.iter().filter_map(|&(selector, speed)| {
        let Some(el) = dom::query_html(&container, selector) else {
            log::debug!("[parallax] layer {} not found", selector);
            return None;
        };
        let speed = config::layer_speed(&el, speed);
        Some(ParallaxLayer {
            target: DomTarget::new(el),
            speed,
        })
    });
    let params = config::parallax_params(&container);
    let Some(effect) = ParallaxEffect::mount(layers, dom::viewport(window)?, params)? else {
        log::info!("[parallax] no layers under #{}; skipping", PARALLAX_CONTAINER_ID);
        return Ok(None);
    };
    log::info!(
        "[parallax] layers={} damping={}",
        effect.layer_count(),
        effect.params().damping
    );
    let effect = Rc::new(RefCell::new(effect));

    let on_move = {
        let fx = effect.clone();
        Listener::mouse(document.as_ref(), EVENT_POINTER_MOVE, move |ev| {
            let p = input::client_point(ev);
            fx.borrow_mut().on_pointer_move(p.x, p.y);
        })?
    };
    let on_resize = {
        let fx = effect.clone();
        let win = window.clone();
        Listener::new(window.as_ref(), EVENT_RESIZE, move |_| {
            let resized = dom::viewport(&win)
                .and_then(|vp| fx.borrow_mut().on_resize(vp).map_err(anyhow::Error::from));
            if let Err(e) = resized {
                log::warn!("[parallax] keeping previous center: {}", e);
            }
        })?
    };
    let frame_loop = FrameLoop::new(move || {
        effect.borrow_mut().tick();
    });

    Ok(Some(Mounted::start("parallax", frame_loop, vec![on_move, on_resize])))
}
