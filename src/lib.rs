#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod input;

use effects::Mounted;

thread_local! {
    // Effects mounted by `start`/`restart_effects`; dropped on stop.
    static MOUNTED: RefCell<Vec<Mounted>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("pointer-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    dom::dom_content_loaded(&document).await?;
    mount_all(&window, &document);
    Ok(())
}

type MountFn = fn(&web::Window, &web::Document) -> anyhow::Result<Option<Mounted>>;

fn mount_all(window: &web::Window, document: &web::Document) {
    let mounts: [(&str, MountFn); 2] = [
        ("parallax", effects::parallax::mount),
        ("tilt", effects::tilt::mount),
    ];
    let mut mounted = Vec::new();
    for (name, mount) in mounts {
        match mount(window, document) {
            Ok(Some(m)) => mounted.push(m),
            Ok(None) => {}
            Err(e) => log::error!("[{}] mount failed: {:?}", name, e),
        }
    }
    log::info!(
        "running effects: [{}]",
        mounted.iter().map(Mounted::name).collect::<Vec<_>>().join(", ")
    );
    MOUNTED.with(|m| m.borrow_mut().extend(mounted));
}

/// Stop every running effect and detach its listeners.
#[wasm_bindgen]
pub fn stop_effects() {
    let stopped: Vec<Mounted> = MOUNTED.with(|m| m.borrow_mut().drain(..).collect());
    log::info!("stopping {} effect(s)", stopped.len());
    drop(stopped);
}

/// Stop, then mount both effects again against the current page.
#[wasm_bindgen]
pub fn restart_effects() -> Result<(), JsValue> {
    stop_effects();
    let (window, document) =
        dom::window_document().ok_or_else(|| JsValue::from_str("no window/document"))?;
    mount_all(&window, &document);
    Ok(())
}

/// Number of effects currently animating.
#[wasm_bindgen]
pub fn running_effects() -> usize {
    MOUNTED.with(|m| m.borrow().iter().filter(|fx| fx.is_running()).count())
}
