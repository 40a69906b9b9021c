//! Site configuration: selectors, thresholds, delays and contact wording.
//!
//! Every section carries serde defaults matching the markup and stylesheet
//! shipped with the site, so a partial JSON document only needs to name the
//! values it changes.

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const DEFAULT_SITE_DATA: &str = include_str!("../static/site.json");

static SHARED: Lazy<SiteConfig> = Lazy::new(SiteConfig::load_from_static);

/// Scroll-triggered reveal of content cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Comma-separated selector list of the elements to animate.
    pub selectors: String,
    /// Fraction of the element that must be visible (0.0..=1.0).
    pub threshold: f64,
    pub root_margin: String,
    /// Delay between the intersection and the `visible` class being applied.
    pub reveal_delay_ms: i32,
    /// Transition delay added per element index.
    pub stagger_step_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: ".service-card, .trust-item, .process-step, .portfolio-item".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            reveal_delay_ms: 100,
            stagger_step_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    /// Vertical offset above which the navbar is considered scrolled.
    pub scrolled_threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            selector: ".navbar".to_string(),
            scrolled_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub link_selector: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".navbar-toggle".to_string(),
            menu_selector: ".navbar-menu".to_string(),
            link_selector: ".navbar-link".to_string(),
        }
    }
}

/// Contact form wording and the address the mail draft is sent to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub success_id: String,
    pub recipient: String,
    pub subject_prefix: String,
    /// Substituted for a blank phone field.
    pub phone_placeholder: String,
    pub sending_label: String,
    pub failure_alert: String,
    /// Delay before the form is swapped for the success region.
    pub success_delay_ms: i32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            success_id: "formSuccess".to_string(),
            recipient: "contact@atelier-scan-print3d.fr".to_string(),
            subject_prefix: "Demande de devis".to_string(),
            phone_placeholder: "Non renseigné".to_string(),
            sending_label: "Envoi en cours...".to_string(),
            failure_alert: "Une erreur est survenue. Merci de nous contacter directement par email."
                .to_string(),
            success_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyConfig {
    pub selector: String,
    /// Attribute holding the real image source until the image is shown.
    pub staged_attribute: String,
}

impl Default for LazyConfig {
    fn default() -> Self {
        Self {
            selector: "img[loading=\"lazy\"]".to_string(),
            staged_attribute: "data-src".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub reduced_motion_query: String,
    /// Custom property on the root element that drives every transition.
    pub transition_property: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion_query: "(prefers-reduced-motion: reduce)".to_string(),
            transition_property: "--transition".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub navbar: NavbarConfig,
    pub menu: MenuConfig,
    pub contact: ContactConfig,
    pub lazy: LazyConfig,
    pub motion: MotionConfig,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            navbar: NavbarConfig::default(),
            menu: MenuConfig::default(),
            contact: ContactConfig::default(),
            lazy: LazyConfig::default(),
            motion: MotionConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a value breaks an invariant.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration embedded at build time, or defaults if it is unusable.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_SITE_DATA).unwrap_or_default()
    }

    /// Process-wide configuration, parsed once on first access.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Check the invariants serde cannot express.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::RangeViolation {
                field: "reveal.threshold",
                min: 0.0,
                max: 1.0,
                value: threshold,
            });
        }
        if self.navbar.scrolled_threshold_px < 0.0 {
            return Err(ConfigError::RangeViolation {
                field: "navbar.scrolled_threshold_px",
                min: 0.0,
                max: f64::MAX,
                value: self.navbar.scrolled_threshold_px,
            });
        }

        let required = [
            ("reveal.selectors", &self.reveal.selectors),
            ("navbar.selector", &self.navbar.selector),
            ("menu.toggle_selector", &self.menu.toggle_selector),
            ("menu.menu_selector", &self.menu.menu_selector),
            ("menu.link_selector", &self.menu.link_selector),
            ("contact.form_id", &self.contact.form_id),
            ("contact.success_id", &self.contact.success_id),
            ("lazy.selector", &self.lazy.selector),
            ("lazy.staged_attribute", &self.lazy.staged_attribute),
            ("motion.reduced_motion_query", &self.motion.reduced_motion_query),
            ("motion.transition_property", &self.motion.transition_property),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Empty { field });
        }

        let recipient = self.contact.recipient.trim();
        if recipient.is_empty() || !recipient.contains('@') {
            return Err(ConfigError::Recipient(self.contact.recipient.clone()));
        }
        Ok(())
    }
}
