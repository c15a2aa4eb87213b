//! Environment-file (`.env`) configuration source.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::source::{ConfigEntry, ConfigSource};
use super::ConfigError;

/// A configuration source that reads `KEY=VALUE` lines from a file.
///
/// A missing file is not an error. The file never touches the process
/// environment; register [`EnvSource`](super::EnvSource) after it so live
/// variables take precedence.
#[derive(Debug, Clone)]
pub struct EnvFileSource {
    path: PathBuf,
}

impl EnvFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for EnvFileSource {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(parse_env_file(&contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(vec![]),
            Err(e) => Err(ConfigError::ReadError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

/// Parses environment-file contents.
///
/// - blank lines and lines starting with `#` are ignored
/// - lines without `=` or with an empty key are ignored
/// - the value is trimmed, then one pair of matching `"` or `'` quotes is stripped
/// - when a key repeats, its first definition wins
pub fn parse_env_file(contents: &str) -> Vec<ConfigEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }

        entries.push(ConfigEntry::new(key, unquote(value.trim())));
    }

    entries
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
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
    fn test_various_formats() {
        let entries = parse_env_file(
            r#"# Comment at the beginning
VAR1=simple_value
VAR2="quoted value"
VAR3='single quoted'
VAR4=value with spaces
VAR5=

# Comment in the middle

# Empty line above
VAR6=another_value
MALFORMED_LINE_NO_EQUALS
=VALUE_WITHOUT_KEY
"#,
        );

        assert_eq!(lookup(&entries, "VAR1"), Some("simple_value"));
        assert_eq!(lookup(&entries, "VAR2"), Some("quoted value"));
        assert_eq!(lookup(&entries, "VAR3"), Some("single quoted"));
        assert_eq!(lookup(&entries, "VAR4"), Some("value with spaces"));
        assert_eq!(lookup(&entries, "VAR5"), Some(""));
        assert_eq!(lookup(&entries, "VAR6"), Some("another_value"));
        assert_eq!(entries.len(), 6);
    }

    #[test]
    fn test_value_keeps_inner_equals() {
        let entries = parse_env_file("DATABASE_URL=postgres://host/db?sslmode=require");
        assert_eq!(
            lookup(&entries, "DATABASE_URL"),
            Some("postgres://host/db?sslmode=require")
        );
    }

    #[test]
    fn test_first_definition_wins() {
        let entries = parse_env_file("KEY=first\nKEY=second\n");
        assert_eq!(entries, vec![ConfigEntry::new("KEY", "first")]);
    }

    #[test]
    fn test_mismatched_quotes_are_kept() {
        let entries = parse_env_file("A=\"open\nB='x\"\nC=\"");
        assert_eq!(lookup(&entries, "A"), Some("\"open"));
        assert_eq!(lookup(&entries, "B"), Some("'x\""));
        assert_eq!(lookup(&entries, "C"), Some("\""));
    }

    #[test]
    fn test_crlf_line_endings() {
        let entries = parse_env_file("A=1\r\nB=2\r\n");
        assert_eq!(lookup(&entries, "A"), Some("1"));
        assert_eq!(lookup(&entries, "B"), Some("2"));
    }

    #[test]
    fn test_source_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# This is a comment\nAPP_NAME=TestApp\nPORT=3000").unwrap();

        let entries = EnvFileSource::new(file.path()).entries().unwrap();

        assert_eq!(
            entries,
            vec![
                ConfigEntry::new("APP_NAME", "TestApp"),
                ConfigEntry::new("PORT", "3000"),
            ]
        );
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let entries = EnvFileSource::new("/nonexistent/path/.env").entries().unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = EnvFileSource::new(dir.path()).entries();
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
