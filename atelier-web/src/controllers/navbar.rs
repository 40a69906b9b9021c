use super::Setup;
use crate::dom;
use crate::error::WebError;
use atelier_core::{NavbarConfig, NavbarState};
use web_sys::{Document, Element, Window};

/// Toggle the navbar's scrolled state on every scroll event.
///
/// # Errors
/// Returns an error if the selector is invalid or the listener cannot be attached.
pub fn init_navbar_scroll(
    window: &Window,
    document: &Document,
    config: &NavbarConfig,
) -> Result<Setup, WebError> {
    let Some(navbar) = document.query_selector(&config.selector)? else {
        return Ok(Setup::Skipped("navbar not found"));
    };

    let threshold = config.scrolled_threshold_px;
    let win = window.clone();
    dom::listen(window, "scroll", move |_event| {
        let offset = win.scroll_y().unwrap_or(0.0);
        if let Err(err) = apply_navbar_state(&navbar, offset, threshold) {
            log::warn!("Failed to update navbar state: {err}");
        }
    })?;
    Ok(Setup::Installed)
}

/// Reflect `offset` onto the navbar's classes.
///
/// # Errors
/// Returns an error if the class list rejects the update.
pub fn apply_navbar_state(
    navbar: &Element,
    offset: f64,
    threshold: f64,
) -> Result<NavbarState, WebError> {
    let state = NavbarState::from_offset(offset, threshold);
    dom::set_class(navbar, NavbarState::SCROLLED_CLASS, state.is_scrolled())?;
    Ok(state)
}
