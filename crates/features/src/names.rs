use std::collections::HashMap;

use crate::error::{ConfigError, FeatureError};

/// Ordered, unique feature names with reverse lookup.
///
/// Index `i` is the position of the `i`-th declared name; the table is built
/// once when an extractor is constructed and never changes afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureNames {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureNames {
    /// Builds the table in declaration order, rejecting duplicates.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for name in names {
            let name = name.into();
            if table.index.contains_key(&name) {
                return Err(ConfigError::DuplicateFeatureName { name });
            }
            table.index.insert(name.clone(), table.names.len());
            table.names.push(name);
        }
        Ok(table)
    }

    /// Builds the table from names known to be unique (built-in declaration lists).
    pub(crate) fn from_unique<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let index: HashMap<String, usize> = names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();
        debug_assert_eq!(index.len(), names.len(), "duplicate built-in feature name");
        Self { names, index }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> Result<&str, FeatureError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(FeatureError::IndexOutOfRange {
                index,
                len: self.names.len(),
            })
    }

    pub fn index_of(&self, name: &str) -> Result<usize, FeatureError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| FeatureError::UnknownFeature {
                name: name.to_owned(),
            })
    }
}
