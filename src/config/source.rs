use super::ConfigError;

/// A single `KEY = value` pair produced by a source.
///
/// Keys are matched against each field's `env` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A layer in the loading pipeline.
///
/// Sources are read in registration order; an entry from a later source
/// replaces an earlier entry with the same key.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError>;
}

/// A fixed set of entries, useful for programmatic overrides and tests.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    entries: Vec<ConfigEntry>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(ConfigEntry::new(key, value));
        self
    }
}

impl ConfigSource for MapSource {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        Ok(self.entries.clone())
    }
}
