//! Contact form submission model and the mail draft built from it.

use crate::config::ContactConfig;
use crate::error::SubmitError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt::Write as _;

/// Form field names read on submission.
pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const PHONE_FIELD: &str = "phone";
pub const SERVICE_FIELD: &str = "service";
pub const MESSAGE_FIELD: &str = "message";

// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component the way browsers' `encodeURIComponent` does.
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Values collected from the contact form, assembled once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission by looking up each declared field.
    ///
    /// Values are trimmed; a blank phone becomes `phone_placeholder`.
    pub fn from_lookup<F>(mut lookup: F, phone_placeholder: &str) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut field = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };
        let name = field(NAME_FIELD);
        let email = field(EMAIL_FIELD);
        let phone = field(PHONE_FIELD);
        let service = field(SERVICE_FIELD);
        let message = field(MESSAGE_FIELD);
        Self {
            name,
            email,
            phone: if phone.is_empty() {
                phone_placeholder.to_string()
            } else {
                phone
            },
            service,
            message,
        }
    }
}

/// A prefilled email handed to the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    #[must_use]
    pub fn from_submission(submission: &ContactSubmission, config: &ContactConfig) -> Self {
        let subject = if submission.service.is_empty() {
            config.subject_prefix.clone()
        } else {
            format!("{} - {}", config.subject_prefix, submission.service)
        };

        let mut body = String::new();
        let _ = writeln!(body, "Name: {}", submission.name);
        let _ = writeln!(body, "Email: {}", submission.email);
        let _ = writeln!(body, "Phone: {}", submission.phone);
        let _ = writeln!(body, "Service: {}", submission.service);
        body.push('\n');
        let _ = write!(body, "Message:\n{}", submission.message);

        Self {
            recipient: config.recipient.trim().to_string(),
            subject,
            body,
        }
    }

    /// `mailto:` URI carrying the encoded subject and body.
    #[must_use]
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// Destination for contact submissions.
///
/// The mail draft is the always-available implementation; an HTTP form
/// endpoint would be another.
#[allow(async_fn_in_trait)] // Channels run on the single browser thread.
pub trait SubmissionChannel {
    /// Hand the submission over.
    ///
    /// # Errors
    /// Returns an error if the channel could not accept the submission.
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn jane() -> ContactSubmission {
        let fields: HashMap<&str, &str> = HashMap::from([
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("phone", "   "),
            ("service", "Scan 3D"),
            ("message", "Bonjour"),
        ]);
        ContactSubmission::from_lookup(|key| fields.get(key).map(ToString::to_string), "Non renseigné")
    }

    #[test]
    fn blank_phone_uses_placeholder() {
        let submission = jane();
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.phone, "Non renseigné");
        assert_eq!(submission.service, "Scan 3D");
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let submission = ContactSubmission::from_lookup(|_| None, "n/a");
        assert_eq!(submission.name, "");
        assert_eq!(submission.phone, "n/a");
    }

    #[test]
    fn field_values_are_trimmed() {
        let submission = ContactSubmission::from_lookup(
            |key| (key == "name" || key == "phone").then(|| "  Jane \n".to_string()),
            "n/a",
        );
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.phone, "Jane");
    }

    #[test]
    fn draft_body_lists_every_field() {
        let draft = MailDraft::from_submission(&jane(), &ContactConfig::default());
        assert_eq!(
            draft.body,
            "Name: Jane\nEmail: jane@x.com\nPhone: Non renseigné\nService: Scan 3D\n\nMessage:\nBonjour"
        );
        assert_eq!(draft.subject, "Demande de devis - Scan 3D");
        assert_eq!(draft.recipient, "contact@atelier-scan-print3d.fr");
    }

    #[test]
    fn subject_without_service_is_prefix_only() {
        let mut submission = jane();
        submission.service.clear();
        let draft = MailDraft::from_submission(&submission, &ContactConfig::default());
        assert_eq!(draft.subject, "Demande de devis");
    }

    #[test]
    fn uri_encodes_like_encode_uri_component() {
        assert_eq!(encode_component("Scan 3D & co"), "Scan%203D%20%26%20co");
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("renseigné\n"), "renseign%C3%A9%0A");

        let draft = MailDraft::from_submission(&jane(), &ContactConfig::default());
        let uri = draft.to_uri();
        assert!(uri.starts_with("mailto:contact@atelier-scan-print3d.fr?subject=Demande%20de%20devis%20-%20Scan%203D&body="));
        assert!(uri.contains("Phone%3A%20Non%20renseign%C3%A9"));
        assert!(!uri.contains(' '));
    }

    struct RecordingChannel {
        seen: RefCell<Vec<ContactSubmission>>,
        fail: bool,
    }

    impl SubmissionChannel for RecordingChannel {
        async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
            if self.fail {
                return Err(SubmitError::Channel("offline".to_string()));
            }
            self.seen.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    #[test]
    fn channel_receives_submission() {
        let channel = RecordingChannel {
            seen: RefCell::new(Vec::new()),
            fail: false,
        };
        block_on(channel.submit(&jane())).expect("submit");
        assert_eq!(channel.seen.borrow().as_slice(), &[jane()]);
    }

    #[test]
    fn channel_failure_is_reported() {
        let channel = RecordingChannel {
            seen: RefCell::new(Vec::new()),
            fail: true,
        };
        let err = block_on(channel.submit(&jane())).unwrap_err();
        assert_eq!(err.to_string(), "submission channel failed: offline");
        assert!(channel.seen.borrow().is_empty());
    }
}
