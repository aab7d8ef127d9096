//! Surah lookup: free-text search, `surah:ayah` resolution and global ayah ids.

use crate::app::{Result, RukuError};
use crate::domain::{AyahRef, Surah};

#[derive(Debug, Clone, Default)]
pub struct SurahCatalogue {
    suwar: Vec<Surah>,
}

impl SurahCatalogue {
    /// `suwar` must be ordered by surah number, as the API returns them.
    pub fn new(suwar: Vec<Surah>) -> Self {
        Self { suwar }
    }

    pub fn len(&self) -> usize {
        self.suwar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suwar.is_empty()
    }

    pub fn all(&self) -> &[Surah] {
        &self.suwar
    }

    pub fn get(&self, number: u16) -> Option<&Surah> {
        self.suwar.iter().find(|s| s.number == number)
    }

    /// Search by display label, number, English name or Arabic name.
    ///
    /// English names also match loosely: punctuation, spaces and a trailing
    /// "h" are ignored, so `baqarah` finds "Al-Baqara". With `all` set every
    /// surah is returned; a blank query matches nothing.
    pub fn find(&self, input: &str, all: bool) -> Vec<&Surah> {
        if all {
            return self.suwar.iter().collect();
        }

        let query = input.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let loose_query = loose_spelling(&query);

        self.suwar
            .iter()
            .filter(|s| {
                s.display().to_lowercase() == query
                    || s.number.to_string().contains(&query)
                    || s.english.to_lowercase().contains(&query)
                    || s.arabic.contains(&query)
                    || (!loose_query.is_empty()
                        && loose_spelling(&s.english).contains(&loose_query))
            })
            .collect()
    }

    /// Resolve `"2:255"` or `"baqarah:255"`. The ayah is clamped into the
    /// surah's range, however many digits it has.
    pub fn resolve(&self, input: &str) -> Result<AyahRef> {
        let invalid = || RukuError::InvalidReference(input.to_string());
        let (surah_part, ayah_part) = input.trim().split_once(':').ok_or_else(invalid)?;

        let surah = match surah_part.trim().parse::<u16>() {
            Ok(number) => self.get(number),
            Err(_) => self.find(surah_part, false).into_iter().next(),
        }
        .ok_or_else(|| RukuError::SurahNotFound(surah_part.trim().to_string()))?;

        let digits: String = ayah_part.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(invalid());
        }
        // Only overflow can fail here, so saturate
        let requested: u32 = digits.parse().unwrap_or(u32::MAX);
        let ayah = surah.clamp_ayah(u16::try_from(requested).unwrap_or(u16::MAX));
        if u32::from(ayah) != requested {
            tracing::warn!(
                "Ayah {} is outside 1..={} for {}, using {}",
                requested,
                surah.ayah_count,
                surah.english,
                ayah
            );
        }

        Ok(AyahRef::new(surah.number, ayah))
    }

    /// Position of `surah:ayah` in the whole text, counting from 1.
    pub fn global_id(&self, reference: AyahRef) -> Result<u32> {
        let surah = self
            .get(reference.surah)
            .ok_or_else(|| RukuError::SurahNotFound(reference.surah.to_string()))?;
        if reference.ayah == 0 || reference.ayah > surah.ayah_count {
            return Err(RukuError::InvalidReference(reference.to_string()));
        }

        let preceding: u32 = self
            .suwar
            .iter()
            .take_while(|s| s.number < reference.surah)
            .map(|s| u32::from(s.ayah_count))
            .sum();

        Ok(preceding + u32::from(reference.ayah))
    }
}

/// Lowercase alphanumerics only, without a trailing "h".
fn loose_spelling(name: &str) -> String {
    let mut folded: String = name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if folded.len() > 1 && folded.ends_with('h') {
        folded.pop();
    }
    folded
}
