//! Extractor configuration
//!
//! Fixed for the lifetime of a [`MessageExtractor`](super::MessageExtractor).

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse extractor config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("implicit attributes listed for an empty tag name")]
    EmptyTagName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorConfig {
    /// Tags whose content is a message even without an `i18n` attribute.
    pub implicit_tags: IndexSet<String>,
    /// Per tag, attributes translated even without an `i18n-*` marker.
    pub implicit_attrs: IndexMap<String, IndexSet<String>>,
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON such as
    /// `{"implicitTags": ["h1"], "implicitAttrs": {"img": ["alt"]}}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ExtractorConfig = serde_json::from_str(json)?;
        if config.implicit_attrs.keys().any(String::is_empty) {
            return Err(ConfigError::EmptyTagName);
        }
        Ok(config)
    }

    pub fn with_implicit_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implicit_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_implicit_attrs<I, S>(mut self, tag: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implicit_attrs
            .entry(tag.into())
            .or_default()
            .extend(attrs.into_iter().map(Into::into));
        self
    }

    pub fn is_implicit_tag(&self, tag_name: &str) -> bool {
        self.implicit_tags.contains(tag_name)
    }

    pub fn is_implicit_attr(&self, tag_name: &str, attr_name: &str) -> bool {
        self.implicit_attrs
            .get(tag_name)
            .is_some_and(|attrs| attrs.contains(attr_name))
    }
}
