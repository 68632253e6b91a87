use crate::constants::EVENT_DOM_READY;
use pointer_fx_core::{StyleTarget, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Resolve once the document has finished parsing.
pub async fn dom_content_loaded(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback(EVENT_DOM_READY, &resolve);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn dimension(value: Result<JsValue, JsValue>, name: &str) -> anyhow::Result<f64> {
    value
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("{} is not a number", name))
}

pub fn viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = dimension(window.inner_width(), "innerWidth")?;
    let height = dimension(window.inner_height(), "innerHeight")?;
    Ok(Viewport::new(width as f32, height as f32))
}

/// First element matching `selector` under `root`, if it is an `HtmlElement`.
pub fn query_html(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_html_in_document(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Inline-style writer over a DOM element.
#[derive(Clone)]
pub struct DomTarget(web::HtmlElement);

impl DomTarget {
    pub fn new(el: web::HtmlElement) -> Self {
        Self(el)
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.0
    }
}

impl StyleTarget for DomTarget {
    fn set_transform(&self, value: &str) {
        _ = self.0.style().set_property("transform", value);
    }

    fn set_property(&self, name: &str, value: &str) {
        _ = self.0.style().set_property(name, value);
    }
}
