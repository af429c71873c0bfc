//! Error types for the browser glue
//!
//! The simulation itself never fails; only wiring it to a page can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("No canvas element with id `{0}`")]
    CanvasMissing(String),

    #[error("Canvas 2D context unavailable")]
    ContextUnavailable,

    #[error("JS error: {0}")]
    Js(String),
}

/// Result type alias for platform setup
pub type Result<T> = std::result::Result<T, RunnerError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for RunnerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        RunnerError::Js(format!("{:?}", value))
    }
}
