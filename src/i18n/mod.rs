//! English and Arabic UI strings.
//!
//! Strings live in a nested JSON table whose leaves are
//! `{ "english": ..., "arabic": ... }` items. A leaf value may be a string or
//! an array of paragraphs.

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;

use crate::app::Result;

const EMBEDDED: &str = include_str!("translation.json");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    fn key(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Arabic
    }

    /// The other interface language.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }
}

enum Entry {
    Text(String),
    Paragraphs(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Translations {
    table: Value,
    language: Language,
}

impl Translations {
    pub fn embedded(language: Language) -> Self {
        let table = serde_json::from_str(EMBEDDED).unwrap_or_else(|e| {
            tracing::error!("Embedded translations are invalid: {}", e);
            Value::Null
        });
        Self { table, language }
    }

    pub fn from_json(json: &str, language: Language) -> Result<Self> {
        let table = serde_json::from_str(json)?;
        Ok(Self { table, language })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Look up a single string. Paragraph entries are joined with a space.
    pub fn text(&self, key_path: &str) -> String {
        match self.evaluate(key_path) {
            Entry::Text(s) => s,
            Entry::Paragraphs(p) => {
                tracing::warn!("Expected string but got paragraphs: {}", key_path);
                p.join(" ")
            }
        }
    }

    pub fn paragraphs(&self, key_path: &str, separator: &str) -> String {
        match self.evaluate(key_path) {
            Entry::Text(s) => s,
            Entry::Paragraphs(p) => p.join(separator),
        }
    }

    fn evaluate(&self, key_path: &str) -> Entry {
        let mut current = &self.table;
        for key in key_path.split('.') {
            match current.get(key) {
                Some(next) => current = next,
                None => {
                    tracing::warn!("Translation key not found: {}", key_path);
                    return Entry::Text(key_path.to_string());
                }
            }
        }

        let value = current
            .get(self.language.key())
            .filter(|v| !is_empty(v))
            .or_else(|| current.get(Language::English.key()));

        match value {
            Some(Value::String(s)) => Entry::Text(s.clone()),
            Some(Value::Array(items)) => Entry::Paragraphs(
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect(),
            ),
            _ => Entry::Text(String::new()),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}
