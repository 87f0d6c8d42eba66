use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Language tag written to merged output unless configured otherwise.
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "EN";

/// A single translatable string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub key: String,
    pub value: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub context: String,
}

impl TranslationEntry {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            context: context.into(),
        }
    }

    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }
}

/// Contents of one translation file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
    pub translations: Vec<TranslationEntry>,
}

impl TranslationDocument {
    pub fn new(language: impl Into<String>, translations: Vec<TranslationEntry>) -> Self {
        Self {
            language: language.into(),
            translations,
        }
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.translations.iter().map(|e| e.key.as_str())
    }
}

/// A loaded document together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub document: TranslationDocument,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, document: TranslationDocument) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
