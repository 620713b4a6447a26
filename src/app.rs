use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::celebration::Confetti;
use crate::flow::Page;
use crate::i18n::{DisplayLanguage, LearningLevel};
use crate::phrase::Phrase;
use crate::preferences::{PreferenceStore, Preferences};
use crate::quiz::{authoring_collisions, build_and_shuffle_quiz, QuizState, Verdict};
use crate::source::{LoadedPhrases, PhraseLoader};
use crate::welcome::{Welcome, WelcomeOutcome};

/// Run-only overrides coming from the command line
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub language: Option<DisplayLanguage>,
    pub level: Option<LearningLevel>,
    pub force_welcome: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

pub struct App {
    pub prefs: Preferences,
    pub phrases: Option<LoadedPhrases>,
    pub load_error: Option<String>,
    pub page: Page,
    pub welcome: Option<Welcome>,
    pub quiz: Option<QuizState>,
    /// Question the quiz screen has focused
    pub quiz_cursor: usize,
    pub show_offline_notice: bool,
    pub confetti: Confetti,
    pub today: NaiveDate,
    store: Box<dyn PreferenceStore>,
    loader: PhraseLoader,
}

impl App {
    pub fn new(
        store: Box<dyn PreferenceStore>,
        loader: PhraseLoader,
        options: AppOptions,
        today: NaiveDate,
    ) -> Self {
        let mut prefs = store.load();
        if let Some(lang) = options.language {
            prefs.language = lang;
        }
        if let Some(level) = options.level {
            prefs.learning_level = level;
        }

        let welcome = if options.force_welcome {
            Welcome::first_time()
        } else {
            Welcome::for_visit(&prefs, today)
        };

        let mut app = Self {
            prefs,
            phrases: None,
            load_error: None,
            page: Page::Home,
            welcome: Some(welcome),
            quiz: None,
            quiz_cursor: 0,
            show_offline_notice: false,
            confetti: Confetti::default(),
            today,
            store,
            loader,
        };
        app.reload();
        app
    }

    pub fn language(&self) -> DisplayLanguage {
        self.prefs.language
    }

    pub fn phrase(&self) -> Option<&Phrase> {
        self.phrases
            .as_ref()
            .and_then(|loaded| loaded.data.phrase_of_the_day())
    }

    /// Fetch phrases for the current level and start the lesson over
    pub fn reload(&mut self) {
        match self.loader.load(self.prefs.learning_level) {
            Ok(loaded) => {
                self.show_offline_notice = loaded.offline;
                self.phrases = Some(loaded);
                self.load_error = None;
            }
            Err(e) => {
                log::error!("unable to load phrase data: {e}");
                self.phrases = None;
                self.load_error = Some(e.to_string());
            }
        }
        self.restart();
    }

    pub fn restart(&mut self) {
        self.page = self.page.restart();
        self.quiz = None;
        self.quiz_cursor = 0;
        self.confetti.stop();
    }

    /// Animation frame
    pub fn on_tick(&mut self) {
        self.confetti.tick();
    }

    pub fn advance(&mut self) {
        if self.page == Page::Quiz {
            self.quiz = None;
            self.confetti.stop();
        }
        let from = self.page;
        self.page = self.page.next();
        log::info!("navigate {from:?} -> {:?}", self.page);
        if self.page == Page::Quiz {
            self.new_quiz();
        }
    }

    /// A fresh quiz for the current phrase and display language
    fn new_quiz(&mut self) {
        self.confetti.stop();
        let lang = self.language();
        self.quiz = self.phrase().map(|phrase| {
            for topic in authoring_collisions(phrase, lang) {
                log::warn!(
                    "{topic:?} answer for \"{}\" is blank or matches a distractor",
                    phrase.phrase
                );
            }
            build_and_shuffle_quiz(phrase, lang)
        });
        self.quiz_cursor = 0;
    }

    pub fn set_language(&mut self, lang: DisplayLanguage) {
        if self.prefs.language == lang {
            return;
        }
        self.prefs.language = lang;
        self.save_prefs();
        if self.page == Page::Quiz {
            self.new_quiz();
        }
    }

    pub fn set_level(&mut self, level: LearningLevel) {
        if self.prefs.learning_level == level {
            return;
        }
        self.prefs.learning_level = level;
        self.save_prefs();
        self.reload();
    }

    fn save_prefs(&self) {
        if let Err(e) = self.store.save(&self.prefs) {
            log::error!("failed to save preferences: {e}");
        }
    }

    fn finish_welcome(&mut self, welcome: Welcome) {
        let level_before = self.prefs.learning_level;
        self.prefs = welcome.finish(&self.prefs, self.today);
        self.save_prefs();
        self.welcome = None;
        if self.prefs.learning_level != level_before || self.phrases.is_none() {
            self.reload();
        }
    }

    pub fn select_option(&mut self, option: usize) {
        let question = self.quiz_cursor;
        self.quiz = self
            .quiz
            .take()
            .map(|quiz| quiz.select_answer(question, option));
    }

    fn shift_option(&mut self, forward: bool) {
        let Some(quiz) = self.quiz.as_ref() else {
            return;
        };
        let Some(count) = quiz.questions().get(self.quiz_cursor).map(|q| q.options.len()) else {
            return;
        };
        let next = match (quiz.selected(self.quiz_cursor), forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(current), true) => (current + 1) % count,
            (Some(current), false) => (current + count - 1) % count,
        };
        self.select_option(next);
    }

    fn move_quiz_cursor(&mut self, down: bool) {
        let total = self.quiz.as_ref().map_or(0, QuizState::total);
        if total == 0 {
            return;
        }
        self.quiz_cursor = if down {
            (self.quiz_cursor + 1).min(total - 1)
        } else {
            self.quiz_cursor.saturating_sub(1)
        };
    }

    /// Enter on the quiz screen: submit once everything is answered, then
    /// move on.
    fn confirm_quiz(&mut self) {
        match self.quiz.take() {
            Some(quiz) if quiz.is_submitted() => {
                self.quiz = Some(quiz);
                self.advance();
            }
            Some(quiz) if quiz.all_answered() => {
                let quiz = quiz.submit();
                log::info!("quiz submitted: {}/{}", quiz.score(), quiz.total());
                if quiz.verdict() == Verdict::Perfect {
                    self.confetti.burst();
                }
                self.quiz = Some(quiz);
            }
            Some(quiz) => self.quiz = Some(quiz),
            None => self.advance(),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> AppAction {
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            return AppAction::Quit;
        }

        if let Some(mut welcome) = self.welcome.take() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => welcome.move_cursor(false),
                KeyCode::Down | KeyCode::Char('j') => welcome.move_cursor(true),
                KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => welcome.back(),
                KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
                    if welcome.confirm() == WelcomeOutcome::Finished {
                        self.finish_welcome(welcome);
                        return AppAction::Continue;
                    }
                }
                _ => {}
            }
            self.welcome = Some(welcome);
            return AppAction::Continue;
        }

        if self.phrases.is_none() {
            if let KeyCode::Enter | KeyCode::Char('r') = key.code {
                self.reload();
            }
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('l') => self.set_language(self.language().toggled()),
            KeyCode::Char('v') => self.set_level(self.prefs.learning_level.next()),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('x') if self.page == Page::Home => self.show_offline_notice = false,
            _ if self.page == Page::Quiz => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_quiz_cursor(false),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.move_quiz_cursor(true),
                KeyCode::Left | KeyCode::Char('h') => self.shift_option(false),
                KeyCode::Right => self.shift_option(true),
                KeyCode::Char(c @ '1'..='4') => {
                    let option = c as usize - '1' as usize;
                    self.select_option(option);
                }
                KeyCode::Enter => self.confirm_quiz(),
                _ => {}
            },
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
                if !self.page.is_terminal() {
                    self.advance();
                }
            }
            _ => {}
        }
        AppAction::Continue
    }
}
