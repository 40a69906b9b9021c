use atelier_core::SubmitError;
use wasm_bindgen::JsValue;

/// Errors raised while wiring controllers to the page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("window unavailable")]
    MissingWindow,
    #[error("document unavailable")]
    MissingDocument,
    #[error("document body unavailable")]
    MissingBody,
    #[error("{0} is not the expected element type")]
    UnexpectedElement(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(crate::dom::js_error_message(&value))
    }
}
