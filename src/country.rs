use std::fmt;

/// Base URL of the flag image provider. Images are addressed by lower-cased country code.
pub const FLAG_IMAGE_BASE_URL: &str = "https://flagpedia.net/data/flags/w580";

/// A country that can appear in the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Country {
    /// Short unique identifier, typically the ISO 3166-1 alpha-2 code.
    pub code: String,
    /// Spanish name. This is the label shown as an answer option.
    pub name_es: String,
    /// English name, used only for auxiliary text such as image descriptions.
    pub name_en: String,
}

impl Country {
    pub fn new(
        code: impl Into<String>,
        name_es: impl Into<String>,
        name_en: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name_es: name_es.into(),
            name_en: name_en.into(),
        }
    }

    pub fn flag_url(&self) -> String {
        flag_url(&self.code)
    }
}

/// Builds the flag image URL for a country code.
pub fn flag_url(code: &str) -> String {
    format!("{}/{}.png", FLAG_IMAGE_BASE_URL, code.to_lowercase())
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name_es, self.code)
    }
}
