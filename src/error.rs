//! Error taxonomy for constructing and wiring a pane.
//!
//! Runtime gesture irregularities (stray moves, multi-touch) are not errors;
//! the state machine ignores them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Error returned when a pane cannot be created or bound.
#[derive(Debug, thiserror::Error)]
pub enum PaneError {
    /// The viewport has no movable child element to pan.
    #[error("swipe pane requires a movable child element")]
    MissingContent,
    /// Options JSON supplied by the host could not be parsed.
    #[error("invalid pane options: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    /// The host asked to listen for an event the pane never emits.
    #[error("unknown pane event: {0}")]
    UnknownEvent(String),
    /// The browser environment is unavailable or a DOM call failed.
    #[error("dom error: {0}")]
    Dom(String),
}

impl From<PaneError> for JsValue {
    fn from(err: PaneError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
