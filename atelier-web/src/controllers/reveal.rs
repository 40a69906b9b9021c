use super::Setup;
use crate::dom;
use crate::error::WebError;
use atelier_core::RevealConfig;
use atelier_core::reveal::{FADE_IN_CLASS, RevealLedger, VISIBLE_CLASS, stagger_delay};
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

/// Fade content cards in the first time they scroll into view.
///
/// Without `IntersectionObserver` every card is made visible immediately.
///
/// # Errors
/// Returns an error if the selector is invalid or the observer cannot be created.
pub fn init_scroll_animations(
    window: &Window,
    document: &Document,
    config: &RevealConfig,
) -> Result<Setup, WebError> {
    let elements = dom::query_all(document, &config.selectors)?;

    if !dom::has_property(window, "IntersectionObserver") {
        reveal_all(&elements)?;
        return Ok(Setup::Fallback("IntersectionObserver unsupported"));
    }

    let ledger = Rc::new(RefCell::new(RevealLedger::new(elements.len())));
    let tracked = elements.clone();
    let delay_ms = config.reveal_delay_ms;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            {
                let target = entry.target();
                let Some(index) = tracked.iter().position(|el| *el == target) else {
                    continue;
                };
                if !ledger.borrow_mut().observe(index, entry.is_intersecting()) {
                    continue;
                }
                observer.unobserve(&target);
                if let Err(err) = dom::set_timeout(delay_ms, move || {
                    if let Err(err) = target.class_list().add_2(FADE_IN_CLASS, VISIBLE_CLASS) {
                        log::warn!("Failed to reveal element: {}", dom::js_error_message(&err));
                    }
                }) {
                    log::warn!("Failed to schedule reveal: {err}");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for (index, element) in elements.iter().enumerate() {
        element.class_list().add_1(FADE_IN_CLASS)?;
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style()
                .set_property("transition-delay", &stagger_delay(index, config.stagger_step_ms))?;
        }
        observer.observe(element);
    }
    log::debug!("Observing {} animated elements", elements.len());
    Ok(Setup::Installed)
}

fn reveal_all(elements: &[Element]) -> Result<(), WebError> {
    for element in elements {
        element.class_list().add_1(VISIBLE_CLASS)?;
    }
    Ok(())
}
