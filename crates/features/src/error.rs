//! Error taxonomy for extractor construction and feature lookups.
//!
//! Path-search failures and budget exhaustion are not errors; both surface as
//! `false` features during evaluation.

use thiserror::Error;

pub type Result<T, E = FeatureError> = std::result::Result<T, E>;

/// Failure to build an extractor from a descriptor.
///
/// Construction is all-or-nothing: no partially decoded extractor is ever
/// handed back. `path` is a JSON-pointer-like location inside the descriptor
/// (`$` is the root, `$.base_f.qual_f` a nested child).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("descriptor at {path} is not an object")]
    NotAnObject { path: String },

    #[error("descriptor at {path} has no string `_type` tag")]
    MissingType { path: String },

    #[error("invalid feature extractor type `{tag}` at {path}")]
    UnknownType { path: String, tag: String },

    #[error("descriptor at {path} is missing field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("descriptor at {path} has an invalid `{field}` field")]
    InvalidField {
        path: String,
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("feature name `{name}` is declared more than once{}", composition_hint(.name))]
    DuplicateFeatureName { name: String },

    #[error("descriptor is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to read descriptor file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Stable identifier for the error variant, useful in logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotAnObject { .. } => "CONFIG_NOT_AN_OBJECT",
            Self::MissingType { .. } => "CONFIG_MISSING_TYPE",
            Self::UnknownType { .. } => "CONFIG_UNKNOWN_TYPE",
            Self::MissingField { .. } => "CONFIG_MISSING_FIELD",
            Self::InvalidField { .. } => "CONFIG_INVALID_FIELD",
            Self::DuplicateFeatureName { .. } => "CONFIG_DUPLICATE_FEATURE_NAME",
            Self::Json(_) => "CONFIG_JSON",
            Self::Io { .. } => "CONFIG_IO",
        }
    }
}

/// Derived names only collide when a nesting chain applies the same qualifier twice.
fn composition_hint(name: &str) -> &'static str {
    if name.contains(" AND ") {
        " (a qualifier is repeated along the composition chain)"
    } else {
        ""
    }
}

/// Out-of-range queries against an extractor's feature table.
///
/// These indicate programming errors in the caller and are never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("feature index {index} is out of range (extractor has {len} features)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no feature named `{name}`")]
    UnknownFeature { name: String },
}
