//! Language codes accepted by the analysis pipelines.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Supported resume/JD languages.
///
/// Deserialization is lenient: any code other than `"ru"` maps to English.
/// The core is total over its inputs, and English rules are the defined
/// fallback for unsupported codes rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ru")]
    Ru,
}

impl Language {
    /// Maps a raw language code to a `Language`, defaulting to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Language::Ru,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code(&code))
    }
}
