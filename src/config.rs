use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

use crate::{
    compare::{CaseRule, Comparator, Direction, Variant},
    input::DEFAULT_TOKENS,
    table::ColumnSpec,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default)]
    pub variant: Variant,

    /// Unset means both directions are printed.
    #[serde(default)]
    pub direction: Option<Direction>,

    #[serde(default)]
    pub case_rule: CaseRule,

    /// Tokens used when an input line is empty.
    #[serde(default = "default_tokens")]
    pub default_tokens: Vec<String>,

    /// Columns loaded from delimited files when none are named explicitly.
    #[serde(default = "default_columns")]
    pub columns: Vec<ColumnSpec>,

    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            direction: None,
            case_rule: CaseRule::default(),
            default_tokens: default_tokens(),
            columns: default_columns(),
            delimiter: default_delimiter(),
        }
    }
}

impl SortConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        from_file(path)
    }

    pub fn comparator(&self) -> Comparator {
        Comparator::new(self.variant, self.direction.unwrap_or_default())
            .with_case_rule(self.case_rule)
    }

    /// The delimiter as the single byte the record reader expects.
    pub fn delimiter_byte(&self) -> ConfigResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ConfigError::InvalidDelimiter(self.delimiter))
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> ConfigResult<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> ConfigResult<T> {
    let config = serde_json::from_str(s)?;
    Ok(config)
}

fn default_tokens() -> Vec<String> {
    DEFAULT_TOKENS.iter().map(|s| s.to_string()).collect()
}

fn default_columns() -> Vec<ColumnSpec> {
    vec![ColumnSpec::item_no(), ColumnSpec::po_no()]
}

fn default_delimiter() -> char {
    ','
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        let config: SortConfig = from_str("{}").unwrap();
        assert_eq!(config, SortConfig::default());
        assert_eq!(config.delimiter_byte().unwrap(), b',');
        assert_eq!(config.columns[0].name, "ITEM NO.");
        assert_eq!(config.direction, None);
        assert_eq!(config.comparator().direction, Direction::Ascending);
    }

    #[test]
    fn test_partial_config() {
        let config: SortConfig = from_str(
            r#"{
                "variant": "char-run",
                "direction": "desc",
                "case_rule": "ignore",
                "columns": [{"name": "SKU"}],
                "delimiter": ";"
            }"#,
        )
        .unwrap();
        assert_eq!(config.variant, Variant::CharRun);
        assert_eq!(config.direction, Some(Direction::Descending));
        assert_eq!(
            config.comparator(),
            Comparator::new(Variant::CharRun, Direction::Descending)
                .with_case_rule(CaseRule::Ignore)
        );
        assert_eq!(config.columns, vec![ColumnSpec::new("SKU")]);
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(config.default_tokens, default_tokens());
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = SortConfig {
            delimiter: '§',
            ..Default::default()
        };
        assert!(matches!(
            config.delimiter_byte(),
            Err(ConfigError::InvalidDelimiter('§'))
        ));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result: ConfigResult<SortConfig> = from_str(r#"{"variant": "random"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"variant": "lexical"}}"#).unwrap();
        let config = SortConfig::from_file(file.path()).unwrap();
        assert_eq!(config.variant, Variant::Lexical);
    }

    #[test]
    fn test_missing_file() {
        let result = SortConfig::from_file("/no/such/config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
