use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Invalid configuration field '{field}': {reason}")]
    Configuration { field: &'static str, reason: String },

    #[error("No element with id '{id}'")]
    TargetNotFound { id: String },

    #[error("Resolved range [{low}, {high}] has zero width")]
    DegenerateRange { low: f64, high: f64 },

    #[error("Style update failed: {0}")]
    Style(String),

    #[error("Invalid params: {0}")]
    Params(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MapperError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        MapperError::Configuration { field, reason: reason.into() }
    }

    /// Stable machine-readable code, used in the wasm error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            MapperError::Configuration { .. } => "config",
            MapperError::TargetNotFound { .. } => "target_not_found",
            MapperError::DegenerateRange { .. } => "degenerate_range",
            MapperError::Style(_) => "dom",
            MapperError::Params(_) | MapperError::Json(_) => "invalid_params",
        }
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;
