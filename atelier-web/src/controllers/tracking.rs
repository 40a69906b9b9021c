use super::Setup;
use crate::dom;
use crate::error::WebError;
use web_sys::Document;

const MAIL_LINKS: &str = "a[href^=\"mailto:\"]";

/// Message logged when a visitor opens a quote request by mail.
pub const QUOTE_CLICK_MESSAGE: &str = "Demande de devis cliquée";

/// Hook every mail link. Navigation is left untouched.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn init_contact_buttons(document: &Document) -> Result<Setup, WebError> {
    let links = dom::query_all(document, MAIL_LINKS)?;
    for link in &links {
        // Analytics would hook in here.
        dom::listen(link, "click", |_event| {
            log::info!("{QUOTE_CLICK_MESSAGE}");
        })?;
    }
    log::debug!("Tracking {} mail links", links.len());
    Ok(Setup::Installed)
}
