use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Ruku, Surah};
use crate::i18n::Translations;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionReport {
    pub surah: Surah,
    pub ruku: u16,
    pub first_ayah: u16,
    pub last_ayah: u16,
    pub mistakes: u16,
    pub answered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub started_at: DateTime<Utc>,
    pub questions: Vec<QuestionReport>,
}

impl Default for QuizReport {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            questions: Vec::new(),
        }
    }

    pub fn add_question(&mut self, ruku: &Ruku, mistakes: u16) {
        let (Some(first), Some(last)) = (ruku.first(), ruku.last()) else {
            tracing::warn!("Not recording empty ruku {}", ruku.id);
            return;
        };

        self.questions.push(QuestionReport {
            surah: ruku.surah.clone(),
            ruku: ruku.id,
            first_ayah: first.number_in_surah,
            last_ayah: last.number_in_surah,
            mistakes,
            answered_at: Utc::now(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn total_mistakes(&self) -> u32 {
        self.questions.iter().map(|q| u32::from(q.mistakes)).sum()
    }

    pub fn clear(&mut self) {
        self.questions.clear();
        self.started_at = Utc::now();
    }

    /// One line per row of the report, in the translator's language.
    pub fn lines(&self, t: &Translations) -> Vec<String> {
        let mut lines = vec![t.text("report.title"), String::new()];

        if self.questions.is_empty() {
            lines.push(t.text("report.empty"));
            return lines;
        }

        for (i, q) in self.questions.iter().enumerate() {
            lines.push(format!("{} {}", t.text("report.question"), i + 1));
            lines.push(format!(
                "{} {}",
                t.text("report.surah"),
                q.surah.name(t.language())
            ));
            lines.push(format!(
                "{} {} {} {}",
                t.text("report.fromAyah"),
                q.first_ayah,
                t.text("dynamic.to"),
                q.last_ayah
            ));
            lines.push(format!("{} {}", t.text("report.mistakes"), q.mistakes));
            lines.push(String::new());
        }

        lines.push(format!(
            "{} {}",
            t.text("report.totalMistakes"),
            self.total_mistakes()
        ));
        lines
    }
}
