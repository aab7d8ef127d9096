use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::{AppContext, Result};
use crate::domain::{AyahRef, Passage, Surah};
use crate::i18n::Translations;

/// Two-line rendering of a passage.
pub fn format_passage(passage: &Passage, t: &Translations) -> String {
    format!(
        "{} {} {} {}:\n'{}...'",
        t.text("context.startsAt"),
        passage.chapter_name,
        t.text("dynamic.ayahPrefix"),
        passage.verse_number,
        passage.text
    )
}

/// Catalogue line: `2. سُورَةُ البَقَرَةِ (Al-Baqara)`.
pub fn format_surah(surah: &Surah) -> String {
    format!("{}. {} ({})", surah.number, surah.arabic, surah.english)
}

pub async fn random(ctx: &AppContext) -> Result<()> {
    let mut rng = StdRng::from_entropy();
    let passage = ctx.picker.random_passage(&mut rng).await?;
    println!("{}", format_passage(&passage, &ctx.translations));
    Ok(())
}

pub async fn search_surah(ctx: &AppContext, query: &str, all: bool) -> Result<()> {
    let catalogue = ctx.picker.catalogue().await?;
    let matches = catalogue.find(query, all);

    if matches.is_empty() {
        println!("No surah matches {:?}", query);
        return Ok(());
    }

    for surah in matches {
        println!("{}", format_surah(surah));
    }
    Ok(())
}

pub async fn locate(ctx: &AppContext, reference: &str) -> Result<()> {
    let catalogue = ctx.picker.catalogue().await?;
    let reference = catalogue.resolve(reference)?;
    let global_id = catalogue.global_id(reference)?;
    let (ayah, surah) = ctx.picker.ayah(reference).await?;

    if ayah.id != 0 && ayah.id != global_id {
        tracing::warn!(
            "API reports global id {} for {}, computed {}",
            ayah.id,
            reference,
            global_id
        );
    }

    println!(
        "{} {}: ayah {} of 6236, ruku {}, juz {}",
        surah.english, reference, global_id, ayah.ruku, ayah.juz
    );
    println!("{}", ayah.text);
    Ok(())
}

pub async fn quiz(ctx: &AppContext, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let range = match (from, to) {
        (Some(from), Some(to)) => Some(resolve_range(ctx, from, to).await?),
        _ => None,
    };

    let outcome = crate::tui::run(ctx, range).await?;
    for line in outcome.report.lines(&ctx.translations) {
        println!("{}", line);
    }

    if !outcome.copied.is_empty() {
        println!();
        println!("{}", ctx.translations.text("report.copied"));
        for text in &outcome.copied {
            println!("{}", text);
        }
    }
    Ok(())
}

async fn resolve_range(ctx: &AppContext, from: &str, to: &str) -> Result<(AyahRef, AyahRef)> {
    let catalogue = ctx.picker.catalogue().await?;
    let start = catalogue.resolve(from)?;
    let end = catalogue.resolve(to)?;
    tracing::debug!("Quiz range {}..={}", start, end);
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Revelation;
    use crate::i18n::Language;

    fn passage() -> Passage {
        Passage {
            text: "إِنَّا أَعۡطَيۡنَٰكَ ٱلۡكَوۡثَرَ".into(),
            verse_number: 1,
            chapter_name: "Al-Kawthar".into(),
        }
    }

    #[test]
    fn test_format_passage_english() {
        let out = format_passage(&passage(), &Translations::embedded(Language::English));
        assert_eq!(
            out,
            "Context starts at Al-Kawthar Ayah 1:\n'إِنَّا أَعۡطَيۡنَٰكَ ٱلۡكَوۡثَرَ...'"
        );
    }

    #[test]
    fn test_format_passage_arabic_labels() {
        let out = format_passage(&passage(), &Translations::embedded(Language::Arabic));
        assert!(out.starts_with("يبدأ السياق عند Al-Kawthar آية 1:"));
    }

    #[test]
    fn test_format_surah() {
        let surah = Surah {
            number: 108,
            arabic: "سُورَةُ الكَوۡثَرِ".into(),
            english: "Al-Kawthar".into(),
            english_translation: "Abundance".into(),
            ayah_count: 3,
            revelation: Some(Revelation::Meccan),
        };
        assert_eq!(format_surah(&surah), "108. سُورَةُ الكَوۡثَرِ (Al-Kawthar)");
    }
}
