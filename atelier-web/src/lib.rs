#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod logging;

pub use error::WebError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let config = atelier_core::SiteConfig::shared();
    logging::init(&config.log_level);

    // Reduced motion must apply before any reveal or transition runs.
    if let Err(err) = bootstrap::apply_motion_preference(config) {
        log::warn!("Reduced-motion check failed: {err}");
    }
    if let Err(err) = bootstrap::run(config) {
        log::error!("Site scripts failed to start: {err}");
    }
}
