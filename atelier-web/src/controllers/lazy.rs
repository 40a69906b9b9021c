use super::Setup;
use crate::dom;
use crate::error::WebError;
use atelier_core::LazyConfig;
use js_sys::{Array, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Window};

pub const LOADED_CLASS: &str = "loaded";

/// Whether `loading` is a property of `HTMLImageElement.prototype`.
#[must_use]
pub fn supports_native_lazy_loading(window: &Window) -> bool {
    Reflect::get(window, &JsValue::from_str("HTMLImageElement"))
        .ok()
        .filter(|ctor| !ctor.is_undefined())
        .and_then(|ctor| Reflect::get(&ctor, &JsValue::from_str("prototype")).ok())
        .is_some_and(|proto| proto.is_object() && dom::has_property(&proto, "loading"))
}

/// Copy the staged source into `src` and mark the image loaded.
///
/// # Errors
/// Returns an error if an attribute or class cannot be set.
pub fn load_image(image: &Element, staged_attribute: &str) -> Result<(), WebError> {
    if let Some(src) = image.get_attribute(staged_attribute) {
        image.set_attribute("src", &src)?;
    }
    image.class_list().add_1(LOADED_CLASS)?;
    Ok(())
}

/// Load deferred images on visibility when the browser cannot do it natively.
///
/// # Errors
/// Returns an error if the selector is invalid or the observer cannot be created.
pub fn init_lazy_loading(
    window: &Window,
    document: &Document,
    config: &LazyConfig,
) -> Result<Setup, WebError> {
    if supports_native_lazy_loading(window) {
        return Ok(Setup::Skipped("native lazy loading available"));
    }

    let images = dom::query_all(document, &config.selector)?;

    if !dom::has_property(window, "IntersectionObserver") {
        for image in &images {
            load_image(image, &config.staged_attribute)?;
        }
        return Ok(Setup::Fallback("IntersectionObserver unsupported, images loaded eagerly"));
    }

    let staged = config.staged_attribute.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(IntersectionObserverEntry::is_intersecting)
            {
                let image = entry.target();
                if let Err(err) = load_image(&image, &staged) {
                    log::warn!("Failed to load deferred image: {err}");
                }
                observer.unobserve(&image);
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for image in &images {
        observer.observe(image);
    }
    Ok(Setup::Fallback("native lazy loading unavailable"))
}
