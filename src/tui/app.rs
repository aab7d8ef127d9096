use crate::i18n::Translations;
use crate::quiz::QuizSession;
use crate::tui::event::Action;

pub struct QuizApp {
    pub session: QuizSession,
    pub translations: Translations,
    pub should_quit: bool,
    pub is_loading: bool,
    pub status_message: Option<String>,
    /// Revealed texts the user copied, printed after the quiz.
    pub copied: Vec<String>,
}

impl QuizApp {
    pub fn new(translations: Translations) -> Self {
        let mut session = QuizSession::new();
        session.start();
        Self {
            session,
            translations,
            should_quit: false,
            is_loading: false,
            status_message: None,
            copied: Vec::new(),
        }
    }

    /// Apply an action to the session. Returns true when a new ruku must be
    /// loaded.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Finish => {
                self.should_quit = true;
                false
            }
            Action::ShowMore => {
                self.session.show_more();
                false
            }
            Action::ShowLess => {
                self.session.show_less();
                false
            }
            Action::Hint => {
                self.session.toggle_hint();
                false
            }
            Action::AddMistake => {
                self.session.add_mistake();
                false
            }
            Action::SubtractMistake => {
                self.session.subtract_mistake();
                false
            }
            Action::CopyAyah => {
                if self.session.ruku().is_some() {
                    self.copied.push(self.session.text());
                    self.set_status(self.translations.text("buttons.copied"));
                }
                false
            }
            Action::ToggleLanguage => {
                let language = self.translations.language().toggled();
                self.translations.set_language(language);
                false
            }
            Action::NextQuestion => {
                self.session.next_question();
                self.clear_status();
                true
            }
            Action::SkipQuestion => {
                self.session.skip_question();
                self.clear_status();
                true
            }
            Action::None => false,
        }
    }

    pub fn hint_label(&self) -> String {
        self.session
            .hint(&self.translations)
            .unwrap_or_else(|| self.translations.text("buttons.hint"))
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ruku::tests::sample_ruku;
    use crate::i18n::Language;

    fn app() -> QuizApp {
        let mut app = QuizApp::new(Translations::embedded(Language::English));
        app.session.set_ruku(sample_ruku());
        app
    }

    #[test]
    fn test_navigation_does_not_reload() {
        let mut app = app();
        assert!(!app.apply(Action::ShowMore));
        assert!(!app.apply(Action::AddMistake));
        assert_eq!(app.session.index(), 1);
        assert_eq!(app.session.mistakes(), 1);
    }

    #[test]
    fn test_next_and_skip_request_reload() {
        let mut app = app();
        app.set_status("boom".into());
        assert!(app.apply(Action::NextQuestion));
        assert!(app.status_message.is_none());
        assert_eq!(app.session.report().questions.len(), 1);

        assert!(app.apply(Action::SkipQuestion));
        assert_eq!(app.session.report().questions.len(), 1);
    }

    #[test]
    fn test_hint_label() {
        let mut app = app();
        assert_eq!(app.hint_label(), "Hint");
        app.apply(Action::Hint);
        assert_eq!(app.hint_label(), "Al-Kahf, Ayah 1");
    }

    #[test]
    fn test_copy_keeps_revealed_text() {
        let mut app = app();
        app.apply(Action::ShowMore);
        assert!(!app.apply(Action::CopyAyah));
        assert_eq!(app.copied, vec!["first second".to_string()]);
        assert_eq!(app.status_message.as_deref(), Some("Copied"));
    }

    #[test]
    fn test_copy_without_ruku_does_nothing() {
        let mut app = QuizApp::new(Translations::embedded(Language::English));
        app.apply(Action::CopyAyah);
        assert!(app.copied.is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_toggle_language() {
        let mut app = app();
        app.apply(Action::ToggleLanguage);
        assert_eq!(app.translations.language(), Language::Arabic);
        assert_eq!(app.hint_label(), app.translations.text("buttons.hint"));
        app.apply(Action::ToggleLanguage);
        assert_eq!(app.translations.language(), Language::English);
    }

    #[test]
    fn test_finish_sets_quit() {
        let mut app = app();
        assert!(!app.apply(Action::Finish));
        assert!(app.should_quit);
    }
}
