//! Typed configuration from defaults, files and the environment, checked
//! against declarative per-field rules.
//!
//! ```no_run
//! dragon_env::config_struct! {
//!     #[derive(Debug, Default)]
//!     pub struct AppConfig {
//!         #[tag(env = "APP_NAME", validate = "required,min=5,max=20")]
//!         pub name: String,
//!         #[tag(env = "APP_PORT", validate = "min=1024,max=65535")]
//!         pub port: u16,
//!         #[tag(env = "DATABASE_URL", validate = "required,url")]
//!         pub database_url: String,
//!     }
//! }
//!
//! let config: AppConfig = dragon_env::load()?;
//! # Ok::<(), dragon_env::Error>(())
//! ```

pub mod config;
mod error;
mod macros;
pub mod schema;
pub mod validate;

pub use config::{load, Config, ConfigError};
pub use error::Error;
pub use schema::{Field, FieldValue, Kind, Schema, Value};
pub use validate::{validate_struct, Evaluator, Registry, ValidationError};
