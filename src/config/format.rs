//! On-disk configuration formats

use crate::error::Result;
use std::path::Path;
use toml::{Table, Value};

/// How a configuration file is read and written, chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Structured TOML; read and write
    Toml,
    /// Flat `key=value` lines; read only
    KeyValue,
}

impl ConfigFormat {
    /// `.toml` (or no extension) is TOML, anything else is read as flat `key=value`
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => ConfigFormat::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            Some(_) => ConfigFormat::KeyValue,
        }
    }

    pub fn can_write(self) -> bool {
        matches!(self, ConfigFormat::Toml)
    }

    pub fn parse(self, text: &str) -> Result<Table> {
        match self {
            ConfigFormat::Toml => Ok(toml::from_str(text)?),
            ConfigFormat::KeyValue => Ok(parse_key_values(text)),
        }
    }
}

/// Flat `key=value` parser. Blank lines, `#` comments and lines without `=`
/// are skipped; values are coerced to booleans or integers where they look like one.
pub fn parse_key_values(text: &str) -> Table {
    let mut table = Table::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        table.insert(key.trim().to_string(), coerce(value.trim()));
    }
    table
}

fn coerce(value: &str) -> Value {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => return Value::Boolean(true),
        "false" | "no" | "0" => return Value::Boolean(false),
        _ => {}
    }
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = value.parse::<i64>() {
            return Value::Integer(n);
        }
    }
    Value::String(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::for_path(Path::new("a/config.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::for_path(Path::new("a/config.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::for_path(Path::new("a/config")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::for_path(Path::new("a/winfetch.conf")), ConfigFormat::KeyValue);
        assert!(!ConfigFormat::KeyValue.can_write());
    }

    #[test]
    fn key_values_are_coerced() {
        let table = parse_key_values(
            "# comment\n\
             colors_enabled = no\n\
             ascii_art=retro\n\
             width = 42\n\
             one = 1\n\
             verbose = YES\n\
             negative = -3\n\
             not a pair\n\
             \n",
        );
        assert_eq!(table["colors_enabled"], Value::Boolean(false));
        assert_eq!(table["ascii_art"], Value::String("retro".to_string()));
        assert_eq!(table["width"], Value::Integer(42));
        assert_eq!(table["one"], Value::Boolean(true));
        assert_eq!(table["verbose"], Value::Boolean(true));
        assert_eq!(table["negative"], Value::String("-3".to_string()));
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let table = parse_key_values("ascii_art = C:\\art\\a=b.txt\n");
        assert_eq!(table["ascii_art"].as_str(), Some("C:\\art\\a=b.txt"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(ConfigFormat::Toml.parse("colors_enabled = = true").is_err());
    }
}
