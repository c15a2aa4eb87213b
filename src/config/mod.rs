//! Layered configuration loading.
//!
//! Sources produce `KEY = value` entries that are written into the fields
//! whose `env` tag matches the key.

mod builder;
mod env;
mod env_file;
mod error;
mod file;
mod source;

pub use builder::{load, Config};
pub use env::EnvSource;
pub use env_file::{parse_env_file, EnvFileSource};
pub use error::ConfigError;
pub use file::FileSource;
pub use source::{ConfigEntry, ConfigSource, MapSource};
