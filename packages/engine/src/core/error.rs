use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised at the edges of the engine.
///
/// The physics itself is total: every error here comes from configuration input
/// or from the browser environment.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid settings json: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("unknown collision policy `{0}` (expected `elastic_normal` or `naive_reflect`)")]
    UnknownCollisionPolicy(String),

    #[error("no global window available")]
    NoWindow,

    #[error("canvas element `{0}` not found")]
    CanvasNotFound(String),

    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    #[error("javascript error: {0}")]
    Js(String),
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidSetting { field, reason: reason.into() }
    }

    /// Wrap a thrown JS value, keeping whatever text it carries.
    pub(crate) fn from_js(value: JsValue) -> Self {
        EngineError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
