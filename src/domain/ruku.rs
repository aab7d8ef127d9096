use serde::{Deserialize, Serialize};

use crate::domain::{Ayah, Surah};

/// Highest ruku number the API serves.
pub const RUKU_COUNT: u16 = 558;

/// A group of consecutive ayaat. Rukus never cross a surah boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruku {
    pub id: u16,
    pub surah: Surah,
    pub ayaat: Vec<Ayah>,
    /// Index of the last ayah revealed when a quiz question starts.
    pub start_index: usize,
}

impl Ruku {
    pub fn first(&self) -> Option<&Ayah> {
        self.ayaat.first()
    }

    pub fn last(&self) -> Option<&Ayah> {
        self.ayaat.last()
    }

    /// Text of ayaat `0..=upto`, joined by single spaces.
    pub fn concatenate(&self, upto: usize) -> String {
        let end = (upto + 1).min(self.ayaat.len());
        self.ayaat[..end]
            .iter()
            .map(|a| a.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Drop ayaat that fall outside `[first_id, last_id]` (global ids).
    pub fn retain_between(&mut self, first_id: u32, last_id: u32) {
        self.ayaat.retain(|a| a.id >= first_id && a.id <= last_id);
        self.start_index = self.start_index.min(self.ayaat.len().saturating_sub(1));
    }
}

/// The opening verse of a ruku, as printed by `ruku random`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub text: String,
    pub verse_number: u32,
    pub chapter_name: String,
}
