use crate::domain::Ruku;
use crate::i18n::Translations;
use crate::quiz::report::QuizReport;

pub const MAX_MISTAKES: u16 = 999;

/// State of one recall quiz: the current ruku, how much of it is revealed,
/// the hint toggle and the mistake counter.
#[derive(Debug, Default)]
pub struct QuizSession {
    ruku: Option<Ruku>,
    index: usize,
    hint_revealed: bool,
    mistakes: u16,
    report: QuizReport,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh quiz with an empty report.
    pub fn start(&mut self) {
        self.report.clear();
    }

    pub fn ruku(&self) -> Option<&Ruku> {
        self.ruku.as_ref()
    }

    pub fn set_ruku(&mut self, ruku: Ruku) {
        self.index = ruku.start_index.min(ruku.ayaat.len().saturating_sub(1));
        self.ruku = Some(ruku);
    }

    pub fn clear(&mut self) {
        self.ruku = None;
        self.index = 0;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Last valid reveal index, 0 when no ruku is loaded.
    pub fn max_index(&self) -> usize {
        self.ruku
            .as_ref()
            .map_or(0, |r| r.ayaat.len().saturating_sub(1))
    }

    pub fn can_show_more(&self) -> bool {
        self.ruku.is_some() && self.index < self.max_index()
    }

    pub fn can_show_less(&self) -> bool {
        self.ruku.is_some() && self.index > 0
    }

    pub fn show_more(&mut self) {
        if self.ruku.is_some() {
            self.index = (self.index + 1).min(self.max_index());
        }
    }

    pub fn show_less(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Revealed ayaat, joined.
    pub fn text(&self) -> String {
        self.ruku
            .as_ref()
            .map(|r| r.concatenate(self.index))
            .unwrap_or_default()
    }

    pub fn toggle_hint(&mut self) -> bool {
        self.hint_revealed = !self.hint_revealed;
        self.hint_revealed
    }

    /// `"{surah}, Ayah {n}"` while the hint is revealed.
    pub fn hint(&self, t: &Translations) -> Option<String> {
        if !self.hint_revealed {
            return None;
        }
        let ruku = self.ruku.as_ref()?;
        let first = ruku.first()?;
        Some(format!(
            "{}, {} {}",
            ruku.surah.name(t.language()),
            t.text("dynamic.ayahPrefix"),
            first.number_in_surah
        ))
    }

    pub fn mistakes(&self) -> u16 {
        self.mistakes
    }

    pub fn add_mistake(&mut self) {
        self.mistakes = (self.mistakes + 1).min(MAX_MISTAKES);
    }

    pub fn subtract_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_sub(1);
    }

    pub fn report(&self) -> &QuizReport {
        &self.report
    }

    /// Record the current question and clear per-question state. The caller
    /// loads the next ruku.
    pub fn next_question(&mut self) {
        if let Some(ruku) = &self.ruku {
            self.report.add_question(ruku, self.mistakes);
        }
        self.reset();
    }

    /// Move on without recording the current question.
    pub fn skip_question(&mut self) {
        self.reset();
    }

    /// Stop the quiz, record the question in progress and hand back the
    /// report. The session is left empty and ready to start again.
    pub fn finish(&mut self) -> QuizReport {
        if let Some(ruku) = &self.ruku {
            self.report.add_question(ruku, self.mistakes);
        }
        self.reset();
        self.clear();
        std::mem::take(&mut self.report)
    }

    fn reset(&mut self) {
        self.hint_revealed = false;
        self.mistakes = 0;
    }
}
