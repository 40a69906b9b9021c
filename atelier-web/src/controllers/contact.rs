//! Contact form: turns a submission into a prefilled email draft.

use super::Setup;
use crate::dom;
use crate::error::WebError;
use atelier_core::{ContactConfig, ContactSubmission, MailDraft, SubmissionChannel, SubmitError};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, Window};

const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";

/// Opens the visitor's mail client on a prefilled draft.
pub struct MailtoChannel {
    window: Window,
    config: ContactConfig,
}

impl MailtoChannel {
    #[must_use]
    pub const fn new(window: Window, config: ContactConfig) -> Self {
        Self { window, config }
    }
}

impl SubmissionChannel for MailtoChannel {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let uri = MailDraft::from_submission(submission, &self.config).to_uri();
        self.window
            .location()
            .set_href(&uri)
            .map_err(|err| SubmitError::Channel(dom::js_error_message(&err)))
    }
}

/// Puts the submit button in its sending state and restores it on drop.
struct SendingGuard {
    button: Option<HtmlButtonElement>,
    label: Option<String>,
}

impl SendingGuard {
    fn engage(form: &HtmlFormElement, sending_label: &str) -> Self {
        let button = form
            .query_selector(SUBMIT_BUTTON)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let label = button.as_ref().and_then(|b| b.text_content());
        if let Some(button) = &button {
            button.set_text_content(Some(sending_label));
            button.set_disabled(true);
        }
        Self { button, label }
    }
}

impl Drop for SendingGuard {
    fn drop(&mut self) {
        if let Some(button) = &self.button {
            button.set_text_content(self.label.as_deref());
            button.set_disabled(false);
        }
    }
}

/// Contact form wired to a submission channel.
pub struct ContactForm<C> {
    window: Window,
    form: HtmlFormElement,
    success: Option<HtmlElement>,
    channel: C,
    config: ContactConfig,
}

impl<C: SubmissionChannel> ContactForm<C> {
    #[must_use]
    pub fn new(
        window: Window,
        form: HtmlFormElement,
        success: Option<HtmlElement>,
        channel: C,
        config: ContactConfig,
    ) -> Self {
        Self {
            window,
            form,
            success,
            channel,
            config,
        }
    }

    /// Read the declared fields from the form.
    ///
    /// # Errors
    /// Returns an error if the browser cannot snapshot the form data.
    pub fn read_submission(&self) -> Result<ContactSubmission, WebError> {
        let data = FormData::new_with_form(&self.form)?;
        Ok(ContactSubmission::from_lookup(
            |key| data.get(key).as_string(),
            &self.config.phone_placeholder,
        ))
    }

    /// Run one submission. Failures are logged and shown in a blocking
    /// alert; the submit button is restored on every path.
    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    pub async fn handle_submit(&self) {
        let _sending = SendingGuard::engage(&self.form, &self.config.sending_label);
        if let Err(err) = self.send().await {
            log::error!("Contact form submission failed: {err}");
            if let Err(alert_err) = self.window.alert_with_message(&self.config.failure_alert) {
                log::error!("Failed to show alert: {}", dom::js_error_message(&alert_err));
            }
        }
    }

    #[allow(clippy::future_not_send)]
    async fn send(&self) -> Result<(), WebError> {
        let submission = self.read_submission()?;
        self.channel.submit(&submission).await?;
        dom::sleep_ms(self.config.success_delay_ms).await?;
        self.show_success()
    }

    fn show_success(&self) -> Result<(), WebError> {
        self.form.style().set_property("display", "none")?;
        if let Some(success) = &self.success {
            success.style().set_property("display", "block")?;
        }
        self.form.reset();
        Ok(())
    }
}

/// Attach `channel` to the contact form, if the page has one.
///
/// # Errors
/// Returns an error if the form id names something other than a form or
/// the submit listener cannot be attached.
pub fn install_contact_form<C>(
    window: &Window,
    document: &Document,
    config: &ContactConfig,
    channel: C,
) -> Result<Setup, WebError>
where
    C: SubmissionChannel + 'static,
{
    let Some(form) = document.get_element_by_id(&config.form_id) else {
        return Ok(Setup::Skipped("contact form not found"));
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| WebError::UnexpectedElement("contact form"))?;
    let success = document
        .get_element_by_id(&config.success_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if success.is_none() {
        log::warn!("Contact success region #{} not found", config.success_id);
    }

    let controller = Rc::new(ContactForm::new(
        window.clone(),
        form.clone(),
        success,
        channel,
        config.clone(),
    ));
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            controller.handle_submit().await;
        });
    })?;
    Ok(Setup::Installed)
}

/// Wire the contact form to the mail-draft channel.
///
/// # Errors
/// See [`install_contact_form`].
pub fn init_contact_form(
    window: &Window,
    document: &Document,
    config: &ContactConfig,
) -> Result<Setup, WebError> {
    let channel = MailtoChannel::new(window.clone(), config.clone());
    install_contact_form(window, document, config, channel)
}
