use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dataset::{CountryDataset, DatasetLoadError};
use crate::setup::{clamp_question_count, initial_question_count};

/// Game settings read from a TOML file and/or command-line flags.
///
/// ```toml
/// questions = 15
/// seed = 42
/// dataset = "countries.json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    /// Requested number of questions. Clamped to what the dataset allows.
    #[serde(default)]
    pub questions: Option<usize>,
    /// Seed for reproducible games. Omit for a fresh game each time.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Country dataset in JSON. The bundled dataset is used when absent.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ParseError {
        path: String,
        source: toml::de::Error,
    },
}

impl PartialEq for ConfigError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ReadError { path: left, .. }, Self::ReadError { path: right, .. }) => {
                left == right
            }
            (Self::ParseError { path: left, .. }, Self::ParseError { path: right, .. }) => {
                left == right
            }
            _ => false,
        }
    }
}

impl Eq for ConfigError {}

impl QuizConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&data, &path.display().to_string())
    }

    pub fn from_toml_str(data: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(data).map_err(|source| ConfigError::ParseError {
            path: origin.to_string(),
            source,
        })
    }

    /// Overlays the values set in `overrides` on top of `self`.
    pub fn merge(self, overrides: QuizConfig) -> Self {
        Self {
            questions: overrides.questions.or(self.questions),
            seed: overrides.seed.or(self.seed),
            dataset: overrides.dataset.or(self.dataset),
        }
    }

    pub fn load_dataset(&self) -> Result<CountryDataset, DatasetLoadError> {
        match &self.dataset {
            Some(path) => CountryDataset::from_path(path),
            None => Ok(CountryDataset::builtin()),
        }
    }

    /// Number of questions to ask given `available` countries.
    pub fn question_count(&self, available: usize) -> usize {
        match self.questions {
            Some(requested) => {
                let count = clamp_question_count(requested, available);
                if count != requested {
                    log::warn!("requested {requested} questions, using {count} instead");
                }
                count
            }
            None => initial_question_count(available),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
