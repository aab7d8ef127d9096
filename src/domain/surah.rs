use serde::{Deserialize, Serialize};

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Revelation {
    Meccan,
    Medinan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub number: u16,
    pub arabic: String,
    pub english: String,
    pub english_translation: String,
    pub ayah_count: u16,
    pub revelation: Option<Revelation>,
}

impl Surah {
    /// Canonical label used when echoing a resolved search back to the user.
    pub fn display(&self) -> String {
        format!("{}. {}", self.number, self.english)
    }

    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Arabic => &self.arabic,
        }
    }

    /// Clamp an ayah number into `1..=ayah_count`.
    pub fn clamp_ayah(&self, ayah: u16) -> u16 {
        ayah.clamp(1, self.ayah_count.max(1))
    }
}
