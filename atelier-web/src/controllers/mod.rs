//! Page behaviors, each installed once at startup.
//!
//! Controllers are independent: none calls another, and a failure in one
//! leaves the rest untouched.

pub mod anchors;
pub mod contact;
pub mod lazy;
pub mod menu;
pub mod motion;
pub mod navbar;
pub mod reveal;
pub mod tracking;

use crate::error::WebError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Outcome of installing a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    Installed,
    /// Required markup is absent; nothing was attached.
    Skipped(&'static str),
    /// A platform capability is missing and a degraded path was taken.
    Fallback(&'static str),
}

/// Inline style of one document-level element, owned by a single controller.
#[derive(Debug, Clone)]
pub struct StyleSurface {
    element: HtmlElement,
}

impl StyleSurface {
    #[must_use]
    pub const fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// The `<body>` element, whose overflow the mobile menu locks.
    ///
    /// # Errors
    /// Returns [`WebError::MissingBody`] before the body is parsed.
    pub fn body(document: &Document) -> Result<Self, WebError> {
        document.body().map(Self::new).ok_or(WebError::MissingBody)
    }

    /// The root `<html>` element, which carries the site's custom properties.
    ///
    /// # Errors
    /// Returns an error if the document has no root or it is not an HTML element.
    pub fn root(document: &Document) -> Result<Self, WebError> {
        document
            .document_element()
            .ok_or(WebError::MissingDocument)?
            .dyn_into::<HtmlElement>()
            .map(Self::new)
            .map_err(|_| WebError::UnexpectedElement("document element"))
    }

    /// Set an inline property; an empty value removes the declaration.
    ///
    /// # Errors
    /// Returns an error if the style declaration rejects the property.
    pub fn set(&self, property: &str, value: &str) -> Result<(), WebError> {
        self.element.style().set_property(property, value)?;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, property: &str) -> String {
        self.element
            .style()
            .get_property_value(property)
            .unwrap_or_default()
    }
}
