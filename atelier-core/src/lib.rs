//! Atelier Scan & Print 3D site behavior
//!
//! Platform-agnostic core for the marketing site scripts. Everything here is
//! pure state and text handling so it can be tested without a browser; the
//! `atelier-web` crate wires it to the DOM.

pub mod anchor;
pub mod config;
pub mod contact;
pub mod error;
pub mod menu;
pub mod navbar;
pub mod reveal;

// Re-export commonly used types
pub use anchor::{AnchorTarget, anchor_target};
pub use config::{
    ContactConfig, LazyConfig, MenuConfig, MotionConfig, NavbarConfig, RevealConfig, SiteConfig,
};
pub use contact::{ContactSubmission, MailDraft, SubmissionChannel, encode_component};
pub use error::{ConfigError, SubmitError};
pub use menu::{MenuEvent, MenuState};
pub use navbar::NavbarState;
pub use reveal::{RevealLedger, stagger_delay};
