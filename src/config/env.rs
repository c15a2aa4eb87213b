use super::source::{ConfigEntry, ConfigSource};
use super::ConfigError;

/// Reads the live process environment.
///
/// With a prefix, only variables starting with it are used and the prefix
/// is stripped, so `MYAPP_PORT` matches a field tagged `env = "PORT"`.
/// Variables whose name or value is not valid UTF-8 are skipped.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: Option<String>,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl ConfigSource for EnvSource {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        let mut entries = Vec::new();

        for (key, value) in std::env::vars_os() {
            let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) else {
                continue;
            };

            let key = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(rest) if !rest.is_empty() => rest.to_string(),
                    _ => continue,
                },
                None => key,
            };

            entries.push(ConfigEntry::new(key, value));
        }

        Ok(entries)
    }
}
