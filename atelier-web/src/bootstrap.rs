//! Page startup: wait for the document structure, then install every controller.

use crate::controllers::{
    Setup, StyleSurface, anchors, contact, lazy, menu, motion, navbar, reveal, tracking,
};
use crate::dom;
use crate::error::WebError;
use atelier_core::SiteConfig;

/// Logged once every controller has been installed.
pub const LOADED_MESSAGE: &str = "✓ Site Atelier Scan & Print 3D chargé";

/// `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unknown values are treated as parsed, so startup never stalls.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    #[must_use]
    pub const fn structure_ready(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Install controllers now, or once `DOMContentLoaded` fires.
///
/// # Errors
/// Returns an error if there is no document or the ready listener cannot be attached.
pub fn run(config: &'static SiteConfig) -> Result<(), WebError> {
    let document = dom::require_document()?;
    if ReadyState::parse(&document.ready_state()).structure_ready() {
        init(config);
    } else {
        dom::listen(&document, "DOMContentLoaded", move |_event| init(config))?;
    }
    Ok(())
}

/// Honour the reduced-motion preference. Runs before the document is ready.
///
/// # Errors
/// Returns an error if the root element or media query is unavailable.
pub fn apply_motion_preference(config: &SiteConfig) -> Result<bool, WebError> {
    let window = dom::require_window()?;
    let document = dom::require_document()?;
    let root = StyleSurface::root(&document)?;
    let reduced = motion::apply_reduced_motion(&window, &root, &config.motion)?;
    if reduced {
        log::debug!("Reduced motion requested; transitions disabled");
    }
    Ok(reduced)
}

/// Install every controller exactly once. Each failure is logged and does
/// not stop the others.
pub fn init(config: &SiteConfig) {
    let (window, document) = match (dom::require_window(), dom::require_document()) {
        (Ok(window), Ok(document)) => (window, document),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("Cannot initialise site scripts: {err}");
            return;
        }
    };

    let outcomes = [
        (
            "navbar",
            navbar::init_navbar_scroll(&window, &document, &config.navbar),
        ),
        ("mobile menu", menu::init_mobile_menu(&document, &config.menu)),
        (
            "scroll animations",
            reveal::init_scroll_animations(&window, &document, &config.reveal),
        ),
        ("smooth scroll", anchors::init_smooth_scroll(&window, &document)),
        (
            "contact form",
            contact::init_contact_form(&window, &document, &config.contact),
        ),
        ("contact buttons", tracking::init_contact_buttons(&document)),
        (
            "lazy loading",
            lazy::init_lazy_loading(&window, &document, &config.lazy),
        ),
    ];

    for (name, outcome) in outcomes {
        report(name, &outcome);
    }
    log::info!("{LOADED_MESSAGE}");
}

fn report(name: &str, outcome: &Result<Setup, WebError>) {
    match outcome {
        Ok(Setup::Installed) => log::debug!("{name}: installed"),
        Ok(Setup::Skipped(reason)) => log::debug!("{name}: skipped ({reason})"),
        Ok(Setup::Fallback(reason)) => log::info!("{name}: fallback ({reason})"),
        Err(err) => log::error!("{name}: setup failed: {err}"),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn loading_defers_initialisation() {
        assert!(!ReadyState::parse("loading").structure_ready());
    }

    #[test]
    fn parsed_states_initialise_immediately() {
        assert_eq!(ReadyState::parse("interactive"), ReadyState::Interactive);
        assert!(ReadyState::parse("interactive").structure_ready());
        assert!(ReadyState::parse("complete").structure_ready());
        assert!(ReadyState::parse("").structure_ready());
    }
}
