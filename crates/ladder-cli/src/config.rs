//! `ladder.json` configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Command-line flags override whatever the file says.

use ladder_core::DictionaryConfig;
use ladder_graph::BuildOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "ladder.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no dictionary given; pass --dict or set \"dictionary\" in ladder.json")]
    MissingDictionary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    pub version: String,
    /// Word list to load; `-` reads standard input.
    pub dictionary: Option<PathBuf>,
    /// Letters in rank order.
    pub alphabet: String,
    pub words: DictionaryConfig,
    pub build: BuildOptions,
    /// Source/target pairs for `ladder ladders`. Empty means the
    /// built-in pairs for the configured word length.
    pub pairs: Vec<(String, String)>,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            dictionary: None,
            alphabet: ladder_core::LOWERCASE.to_string(),
            words: DictionaryConfig::default(),
            build: BuildOptions::default(),
            pairs: Vec::new(),
        }
    }
}

impl LadderConfig {
    /// Loads the config file.
    ///
    /// An explicit path must exist. Without one, `ladder.json` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn dictionary(&self) -> Result<&Path, ConfigError> {
        self.dictionary
            .as_deref()
            .ok_or(ConfigError::MissingDictionary)
    }

    /// The pairs `ladder ladders` should run.
    pub fn ladder_pairs(&self) -> Vec<(String, String)> {
        if !self.pairs.is_empty() {
            return self.pairs.clone();
        }
        default_pairs(self.words.word_length)
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }
}

/// Classic ladders for the Stanford GraphBase word lists.
pub fn default_pairs(word_length: usize) -> &'static [(&'static str, &'static str)] {
    match word_length {
        4 => &[("cold", "warm"), ("love", "hate")],
        5 => &[
            ("chaos", "order"),
            ("nodes", "graph"),
            ("pound", "marks"),
            ("moron", "smart"),
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ladder.json");
        fs::write(
            &path,
            r#"{ "dictionary": "words4.dat", "words": { "word_length": 4 }, "build": { "parallel": true } }"#,
        )
        .unwrap();

        let config = LadderConfig::load(Some(&path)).unwrap();
        assert_eq!(config.dictionary().unwrap(), Path::new("words4.dat"));
        assert_eq!(config.words.word_length, 4);
        assert_eq!(config.words.comment_prefix, Some('*'));
        assert!(config.build.parallel);
        assert_eq!(config.alphabet, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(
            config.ladder_pairs(),
            vec![
                ("cold".to_string(), "warm".to_string()),
                ("love".to_string(), "hate".to_string())
            ]
        );
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = LadderConfig::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ladder.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            LadderConfig::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_custom_pairs_win() {
        let config = LadderConfig {
            pairs: vec![("cat".to_string(), "dog".to_string())],
            ..LadderConfig::default()
        };
        assert_eq!(
            config.ladder_pairs(),
            vec![("cat".to_string(), "dog".to_string())]
        );
    }

    #[test]
    fn test_missing_dictionary() {
        assert!(matches!(
            LadderConfig::default().dictionary(),
            Err(ConfigError::MissingDictionary)
        ));
        assert!(default_pairs(7).is_empty());
    }
}
