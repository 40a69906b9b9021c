use super::Setup;
use crate::dom;
use crate::error::WebError;
use atelier_core::{AnchorTarget, anchor_target};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

const IN_PAGE_LINKS: &str = "a[href^=\"#\"]";

/// Smooth-scroll in-page anchor links and record the fragment in history.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn init_smooth_scroll(window: &Window, document: &Document) -> Result<Setup, WebError> {
    let links = dom::query_all(document, IN_PAGE_LINKS)?;
    for link in links {
        let win = window.clone();
        let doc = document.clone();
        let source = link.clone();
        dom::listen(&link, "click", move |event| {
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            if let Err(err) = scroll_to_fragment(&win, &doc, &href, &event) {
                log::warn!("Failed to scroll to {href}: {err}");
            }
        })?;
    }
    Ok(Setup::Installed)
}

/// Handle one anchor click. Returns whether the click was taken over.
///
/// Empty fragments and fragments naming no element are left to the browser.
///
/// # Errors
/// Returns an error if the history entry cannot be pushed.
pub fn scroll_to_fragment(
    window: &Window,
    document: &Document,
    href: &str,
    event: &Event,
) -> Result<bool, WebError> {
    let AnchorTarget::Fragment(id) = anchor_target(href) else {
        return Ok(false);
    };
    let Some(target) = document.get_element_by_id(id) else {
        return Ok(false);
    };

    event.prevent_default();

    let options = ScrollToOptions::new();
    options.set_top(element_top(window, &target));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(href))?;
    Ok(true)
}

fn element_top(window: &Window, target: &Element) -> f64 {
    target.dyn_ref::<HtmlElement>().map_or_else(
        || target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0),
        |el| f64::from(el.offset_top()),
    )
}
