use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, trace, warn};

use super::env::EnvSource;
use super::env_file::EnvFileSource;
use super::file::FileSource;
use super::source::ConfigSource;
use crate::schema::{Schema, ENV_TAG};
use crate::validate::Registry;
use crate::Error;

/// Builder for loading a configuration struct from layered sources.
///
/// The struct starts from its defaults. Sources are applied in registration
/// order, with later sources overriding earlier ones; each value is written
/// into the field whose `env` tag matches its key. The populated struct is
/// then validated against its `validate` tags.
///
/// ## Example
///
/// ```no_run
/// use dragon_env::Config;
///
/// dragon_env::config_struct! {
///     #[derive(Debug, Default)]
///     struct MyConfig {
///         #[tag(env = "APP_NAME", validate = "required,min=3")]
///         name: String,
///         #[tag(env = "APP_PORT", validate = "min=1024,max=65535")]
///         port: u16,
///     }
/// }
///
/// // defaults -> config file -> .env -> process environment
/// let config: MyConfig = Config::builder()
///     .with_file("config/default.toml", false)
///     .with_env_file(".env")
///     .with_env()
///     .build()?;
/// # Ok::<(), dragon_env::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    sources: Vec<Box<dyn ConfigSource>>,
    registry: Option<Registry>,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a TOML file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds an environment-file (`KEY=VALUE` lines). A missing file is skipped.
    pub fn with_env_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(EnvFileSource::new(path))
    }

    /// Adds the process environment.
    pub fn with_env(self) -> Self {
        self.with_source(EnvSource::new())
    }

    /// Adds the process environment, restricted to variables starting with
    /// `prefix`. The prefix is stripped before matching `env` tags.
    pub fn with_env_prefixed(self, prefix: impl Into<String>) -> Self {
        self.with_source(EnvSource::prefixed(prefix))
    }

    /// Adds a custom source.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Validates with `registry` instead of the built-in rules.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Loads, assigns and validates a struct starting from `T::default()`.
    pub fn build<T: Schema + Default>(self) -> Result<T, Error> {
        self.build_from(T::default())
    }

    /// Loads, assigns and validates a struct starting from `initial`.
    ///
    /// Each source is applied on top of the previous ones, so a value a field
    /// rejects (an empty string, an unparseable number) keeps whatever the
    /// earlier layers assigned.
    pub fn build_from<T: Schema>(self, mut initial: T) -> Result<T, Error> {
        for source in &self.sources {
            let entries = source.entries()?;
            debug!(?source, entries = entries.len(), "loaded config source");
            let values: HashMap<String, String> = entries
                .into_iter()
                .map(|entry| (entry.key, entry.value))
                .collect();
            apply_values(&mut initial, &values);
        }

        let registry = self.registry.as_ref().unwrap_or_else(|| Registry::builtin());
        registry.validate(&initial)?;
        Ok(initial)
    }
}

/// Writes each value into the field tagged with its key.
///
/// Values that cannot be converted to the field's type are skipped, leaving
/// the earlier value in place.
fn apply_values<T: Schema>(target: &mut T, values: &HashMap<String, String>) {
    for mut field in target.fields_mut() {
        let Some(key) = field.tag(ENV_TAG) else {
            continue;
        };
        let Some(raw) = values.get(key) else {
            continue;
        };
        match field.assign(raw) {
            Ok(true) => trace!(field = field.name(), key, "assigned config value"),
            Ok(false) => trace!(field = field.name(), key, "skipped empty config value"),
            Err(e) => warn!(field = field.name(), key, error = %e, "ignoring config value"),
        }
    }
}

/// Loads `T` from its defaults, `.env` in the working directory and the
/// process environment, then validates it with the built-in rules.
pub fn load<T: Schema + Default>() -> Result<T, Error> {
    Config::builder().with_env_file(".env").with_env().build()
}
