use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::country::Country;

const BUILTIN_DATASET: &str = include_str!("../data/countries.json");

/// Immutable, validated list of countries the quiz draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDataset {
    countries: Vec<Country>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("country {code:?} has an empty {field}")]
    EmptyField { code: String, field: &'static str },
    #[error("country code {code} appears more than once")]
    DuplicateCode { code: String },
    #[error("country name {name} appears more than once")]
    DuplicateName { name: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    #[error("failed to read dataset file at {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse dataset file at {path}: {source}")]
    ParseError {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid dataset: {0}")]
    Invalid(#[from] DatasetError),
}

impl PartialEq for DatasetLoadError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ReadError { path: left, .. }, Self::ReadError { path: right, .. }) => {
                left == right
            }
            (Self::ParseError { path: left, .. }, Self::ParseError { path: right, .. }) => {
                left == right
            }
            (Self::Invalid(left), Self::Invalid(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for DatasetLoadError {}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
struct CountryList {
    countries: Vec<Country>,
}

impl CountryDataset {
    pub fn new(countries: Vec<Country>) -> Result<Self, DatasetError> {
        let mut codes = HashSet::new();
        let mut names = HashSet::new();

        for country in &countries {
            if country.code.trim().is_empty() {
                return Err(DatasetError::EmptyField {
                    code: country.code.clone(),
                    field: "code",
                });
            }
            if country.name_es.trim().is_empty() {
                return Err(DatasetError::EmptyField {
                    code: country.code.clone(),
                    field: "name_es",
                });
            }
            if country.name_en.trim().is_empty() {
                return Err(DatasetError::EmptyField {
                    code: country.code.clone(),
                    field: "name_en",
                });
            }
            if !codes.insert(country.code.to_uppercase()) {
                return Err(DatasetError::DuplicateCode {
                    code: country.code.clone(),
                });
            }
            if !names.insert(country.name_es.trim().to_string()) {
                return Err(DatasetError::DuplicateName {
                    name: country.name_es.clone(),
                });
            }
        }

        Ok(Self { countries })
    }

    /// The dataset bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_DATASET, "<builtin>")
            .expect("bundled country dataset must be valid")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetLoadError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| DatasetLoadError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        let dataset = Self::from_json_str(&data, &path.display().to_string())?;
        log::info!("loaded {} countries from {}", dataset.len(), path.display());

        Ok(dataset)
    }

    /// Parses a `{ "countries": [...] }` document. `origin` only labels errors.
    pub fn from_json_str(data: &str, origin: &str) -> Result<Self, DatasetLoadError> {
        let parsed: CountryList =
            serde_json::from_str(data).map_err(|source| DatasetLoadError::ParseError {
                path: origin.to_string(),
                source,
            })?;

        Ok(Self::new(parsed.countries)?)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|country| country.code.eq_ignore_ascii_case(code))
    }

    pub fn find_by_name(&self, name_es: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|country| country.name_es == name_es)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&CountryList {
            countries: self.countries.clone(),
        })
    }
}
