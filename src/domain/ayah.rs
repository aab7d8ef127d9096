use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ayah {
    /// Position in the whole text, 1..=6236.
    pub id: u32,
    pub surah: u16,
    pub number_in_surah: u16,
    pub text: String,
    pub ruku: u16,
    pub hizb_quarter: u16,
    pub juz: u8,
}

/// A `surah:ayah` pair, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AyahRef {
    pub surah: u16,
    pub ayah: u16,
}

impl AyahRef {
    pub fn new(surah: u16, ayah: u16) -> Self {
        Self { surah, ayah }
    }
}

impl fmt::Display for AyahRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}
