use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported languages. English is the canonical anchor:
/// every concept carries an "en" term, and that term is the global dedup key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    Ar,
}

impl Language {
    /// All supported languages, canonical anchor first.
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    /// Two-letter language code used on the wire and in stored documents.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Human-readable name, used when prompting the generation provider.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
            Language::Ar => "Arabic",
        }
    }

    /// Whether this is the canonical anchor language.
    pub fn is_canonical(self) -> bool {
        self == Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "ar" => Ok(Language::Ar),
            other => Err(UnsupportedLanguage {
                code: other.to_string(),
            }),
        }
    }
}

/// Parse failure for language codes outside the supported set.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unsupported language code: {code}")]
pub struct UnsupportedLanguage {
    pub code: String,
}
