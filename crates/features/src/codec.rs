//! Extractor descriptors and their JSON form.
//!
//! A descriptor names a variant through its `_type` tag plus variant-specific
//! fields:
//!
//! ```json
//! {"_type": "Compositing",
//!  "base_f": {"_type": "MovingTowards"},
//!  "qual_f": {"_type": "Qualifying", "features": ["enemy_nearby", {"food_at_hill": 2}]}}
//! ```
//!
//! `features` is optional on the two leaf variants and is omitted on encode
//! when it equals the default declaration list. Unknown fields are ignored.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::extractor::{
    Compositing, FeatureExtractor, HeuristicMovement, MovementFeature, Qualifier,
    QualifierFeature,
};

const TYPE_KEY: &str = "_type";
const FEATURES_KEY: &str = "features";
const BASE_KEY: &str = "base_f";
const QUALIFIER_KEY: &str = "qual_f";
const ROOT: &str = "$";

/// Tagged, nested descriptor of a [`FeatureExtractor`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "_type")]
pub enum ExtractorConfig {
    MovingTowards {
        #[serde(skip_serializing_if = "Option::is_none")]
        features: Option<Vec<MovementFeature>>,
    },
    Qualifying {
        #[serde(skip_serializing_if = "Option::is_none")]
        features: Option<Vec<QualifierFeature>>,
    },
    Compositing {
        base_f: Box<ExtractorConfig>,
        qual_f: Box<ExtractorConfig>,
    },
}

impl ExtractorConfig {
    /// Parses a raw JSON descriptor, reporting failures with their location.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        Self::parse(value, ROOT)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn parse(value: &Value, path: &str) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or_else(|| ConfigError::NotAnObject {
            path: path.to_owned(),
        })?;
        let tag = object
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| ConfigError::MissingType {
                path: path.to_owned(),
            })?;

        match tag {
            HeuristicMovement::TYPE_NAME => Ok(Self::MovingTowards {
                features: features_field(object, path)?,
            }),
            Qualifier::TYPE_NAME => Ok(Self::Qualifying {
                features: features_field(object, path)?,
            }),
            Compositing::TYPE_NAME => {
                let base = child(object, path, BASE_KEY)?;
                let qualifier = child(object, path, QUALIFIER_KEY)?;
                Ok(Self::Compositing {
                    base_f: Box::new(base),
                    qual_f: Box::new(qualifier),
                })
            }
            other => Err(ConfigError::UnknownType {
                path: path.to_owned(),
                tag: other.to_owned(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for ExtractorConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

fn features_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    path: &str,
) -> Result<Option<Vec<T>>, ConfigError> {
    match object.get(FEATURES_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(list) => serde_json::from_value(list.clone())
            .map(Some)
            .map_err(|source| ConfigError::InvalidField {
                path: path.to_owned(),
                field: FEATURES_KEY,
                source,
            }),
    }
}

fn child(
    object: &Map<String, Value>,
    path: &str,
    field: &'static str,
) -> Result<ExtractorConfig, ConfigError> {
    let value = object.get(field).ok_or_else(|| ConfigError::MissingField {
        path: path.to_owned(),
        field,
    })?;
    ExtractorConfig::parse(value, &format!("{path}.{field}"))
}

/// Builds the extractor a descriptor describes.
///
/// Children of a `Compositing` descriptor are built first; the parent's names
/// are derived from theirs.
pub fn decode(config: &ExtractorConfig) -> Result<FeatureExtractor, ConfigError> {
    let extractor = match config {
        ExtractorConfig::MovingTowards { features: None } => FeatureExtractor::moving_towards(),
        ExtractorConfig::MovingTowards {
            features: Some(features),
        } => FeatureExtractor::HeuristicMovement(HeuristicMovement::with_features(
            features.clone(),
        )?),
        ExtractorConfig::Qualifying { features: None } => FeatureExtractor::qualifying(),
        ExtractorConfig::Qualifying {
            features: Some(features),
        } => FeatureExtractor::Qualifier(Qualifier::with_features(features.clone())?),
        ExtractorConfig::Compositing { base_f, qual_f } => {
            let base = decode(base_f)?;
            let qualifier = decode(qual_f)?;
            FeatureExtractor::compositing(base, qualifier)?
        }
    };
    tracing::trace!(
        extractor = extractor.type_name(),
        features = extractor.num_features(),
        "decoded extractor"
    );
    Ok(extractor)
}

/// Parses and builds in one step.
pub fn decode_value(value: &Value) -> Result<FeatureExtractor, ConfigError> {
    decode(&ExtractorConfig::from_value(value)?)
}

/// Describes an extractor so that [`decode`] rebuilds an equivalent one.
pub fn encode(extractor: &FeatureExtractor) -> ExtractorConfig {
    match extractor {
        FeatureExtractor::HeuristicMovement(movement) => ExtractorConfig::MovingTowards {
            features: (!movement.is_default()).then(|| movement.features().to_vec()),
        },
        FeatureExtractor::Qualifier(qualifier) => ExtractorConfig::Qualifying {
            features: (!qualifier.is_default()).then(|| qualifier.features().to_vec()),
        },
        FeatureExtractor::Compositing(composite) => ExtractorConfig::Compositing {
            base_f: Box::new(encode(composite.base())),
            qual_f: Box::new(encode(composite.qualifier())),
        },
    }
}

impl FeatureExtractor {
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        decode(config)
    }

    pub fn to_config(&self) -> ExtractorConfig {
        encode(self)
    }
}

/// Reads and decodes a JSON descriptor file.
pub fn load_extractor(path: &Path) -> Result<FeatureExtractor, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let extractor = decode(&ExtractorConfig::from_json_str(&content)?)?;
    tracing::debug!(
        path = %path.display(),
        extractor = %extractor,
        features = extractor.num_features(),
        "loaded extractor"
    );
    Ok(extractor)
}

/// Writes the extractor's descriptor as pretty-printed JSON.
pub fn save_extractor(extractor: &FeatureExtractor, path: &Path) -> Result<(), ConfigError> {
    let json = extractor.to_config().to_json_string_pretty()?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}
