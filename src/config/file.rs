//! TOML file configuration source.

use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::source::{ConfigEntry, ConfigSource};
use super::ConfigError;

/// A configuration source that loads from a TOML file.
///
/// Scalar values are keyed by their table path, joined with `_` and
/// uppercased, so they line up with `env` tags:
///
/// ```toml
/// app_name = "demo"      # APP_NAME
///
/// [database]
/// url = "postgres://db"  # DATABASE_URL
/// ```
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist are silently skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, the build will fail if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl ConfigSource for FileSource {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        let Some(table) = load_config_file(&self.path, self.required)? else {
            return Ok(vec![]);
        };
        let mut entries = Vec::new();
        flatten(&self.path, "", table, &mut entries)?;
        Ok(entries)
    }
}

/// Loads and parses a TOML config file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn load_config_file(path: &Path, required: bool) -> Result<Option<Table>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(table))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn flatten(
    path: &Path,
    prefix: &str,
    table: Table,
    out: &mut Vec<ConfigEntry>,
) -> Result<(), ConfigError> {
    for (key, value) in table {
        let key = if prefix.is_empty() {
            key.to_uppercase()
        } else {
            format!("{prefix}_{}", key.to_uppercase())
        };
        let text = match value {
            Value::Table(nested) => {
                flatten(path, &key, nested, out)?;
                continue;
            }
            Value::Array(_) => {
                return Err(ConfigError::NonScalarValue {
                    path: path.to_path_buf(),
                    key,
                })
            }
            Value::String(s) => s,
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Datetime(dt) => dt.to_string(),
        };
        out.push(ConfigEntry::new(key, text));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup<'a>(entries: &'a [ConfigEntry], key: &str) -> Option<&'a str> {
        entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    #[test]
    fn test_file_source_loads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "app_name = \"value\"").unwrap();

        let source = FileSource::new(file.path(), true);
        let entries = source.entries().unwrap();

        assert_eq!(entries, vec![ConfigEntry::new("APP_NAME", "value")]);
    }

    #[test]
    fn test_file_source_flattens_tables() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            port = 8080
            debug = true

            [database]
            url = "postgres://localhost/db"
            ratio = 0.5
            "#
        )
        .unwrap();

        let entries = FileSource::new(file.path(), true).entries().unwrap();

        assert_eq!(lookup(&entries, "PORT"), Some("8080"));
        assert_eq!(lookup(&entries, "DEBUG"), Some("true"));
        assert_eq!(lookup(&entries, "DATABASE_URL"), Some("postgres://localhost/db"));
        assert_eq!(lookup(&entries, "DATABASE_RATIO"), Some("0.5"));
    }

    #[test]
    fn test_file_source_rejects_arrays() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hosts = [\"a\", \"b\"]").unwrap();

        let result = FileSource::new(file.path(), true).entries();

        assert!(matches!(
            result,
            Err(ConfigError::NonScalarValue { ref key, .. }) if key == "HOSTS"
        ));
    }

    #[test]
    fn test_file_source_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml").unwrap();

        let result = FileSource::new(file.path(), true).entries();

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_file_source_required_missing() {
        let source = FileSource::new("/nonexistent/path/config.toml", true);
        let result = source.entries();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_file_source_optional_missing() {
        let source = FileSource::new("/nonexistent/path/config.toml", false);
        let entries = source.entries().unwrap();

        assert!(entries.is_empty());
    }
}
