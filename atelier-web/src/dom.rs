use crate::error::WebError;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Like [`window`], for callers that propagate errors.
///
/// # Errors
/// Returns [`WebError::MissingWindow`] outside a browser context.
pub fn require_window() -> Result<Window, WebError> {
    window().ok_or(WebError::MissingWindow)
}

/// Like [`document`], for callers that propagate errors.
///
/// # Errors
/// Returns [`WebError::MissingDocument`] when the window has no document.
pub fn require_document() -> Result<Document, WebError> {
    require_window()?.document().ok_or(WebError::MissingDocument)
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Every element matching `selector`, in document order.
///
/// # Errors
/// Returns an error if the selector is invalid.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Whether `object` exposes `property`, as the JavaScript `in` operator.
#[must_use]
pub fn has_property(object: &JsValue, property: &str) -> bool {
    Reflect::has(object, &JsValue::from_str(property)).unwrap_or(false)
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
/// Returns an error if the listener cannot be registered.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WebError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` once after `delay_ms`.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled.
pub fn set_timeout<F>(delay_ms: i32, callback: F) -> Result<(), WebError>
where
    F: FnOnce() + 'static,
{
    let win = require_window()?;
    let timeout = Closure::<dyn FnMut()>::once(callback);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        timeout.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    timeout.forget();
    Ok(())
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), WebError> {
    let win = require_window()?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| WebError::Js("resolve function should be set".into()))?;
    let closure = Closure::<dyn FnMut()>::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Set or clear a class depending on `on`.
///
/// # Errors
/// Returns an error if the class list rejects the token.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), WebError> {
    let list = element.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}
