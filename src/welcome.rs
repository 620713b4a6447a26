use chrono::NaiveDate;

use crate::i18n::{DisplayLanguage, LearningLevel, Text};
use crate::preferences::Preferences;

const LANGUAGES: [DisplayLanguage; 2] = [DisplayLanguage::En, DisplayLanguage::Es];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeStep {
    Intro,
    Language,
    Level,
    Ready,
}

impl WelcomeStep {
    pub fn number(self) -> u16 {
        match self {
            WelcomeStep::Intro => 1,
            WelcomeStep::Language => 2,
            WelcomeStep::Level => 3,
            WelcomeStep::Ready => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    FirstTime,
    Returning { days_since_last_visit: Option<i64> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeOutcome {
    Continue,
    Finished,
}

/// Onboarding for first-time visitors and the greeting for returning ones
#[derive(Debug, Clone, PartialEq)]
pub struct Welcome {
    pub visit: Visit,
    pub step: WelcomeStep,
    pub cursor: usize,
    pub selected_language: Option<DisplayLanguage>,
    pub selected_level: Option<LearningLevel>,
}

impl Welcome {
    pub fn for_visit(prefs: &Preferences, today: NaiveDate) -> Self {
        let visit = if prefs.has_visited {
            Visit::Returning {
                days_since_last_visit: prefs.days_since_last_visit(today),
            }
        } else {
            Visit::FirstTime
        };
        Self::with_visit(visit)
    }

    pub fn first_time() -> Self {
        Self::with_visit(Visit::FirstTime)
    }

    fn with_visit(visit: Visit) -> Self {
        Self {
            visit,
            step: WelcomeStep::Intro,
            cursor: 0,
            selected_language: None,
            selected_level: None,
        }
    }

    pub fn is_first_time(&self) -> bool {
        self.visit == Visit::FirstTime
    }

    pub fn get_started(&mut self) {
        if self.step == WelcomeStep::Intro {
            self.step = WelcomeStep::Language;
            self.cursor = 0;
        }
    }

    pub fn choose_language(&mut self, lang: DisplayLanguage) {
        self.selected_language = Some(lang);
        self.step = WelcomeStep::Level;
        self.cursor = 0;
        log::debug!("welcome: language {lang} selected");
    }

    pub fn choose_level(&mut self, level: LearningLevel) {
        self.selected_level = Some(level);
        self.step = WelcomeStep::Ready;
        self.cursor = 0;
        log::debug!("welcome: level {level} selected");
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            WelcomeStep::Intro | WelcomeStep::Language => WelcomeStep::Intro,
            WelcomeStep::Level => WelcomeStep::Language,
            WelcomeStep::Ready => WelcomeStep::Level,
        };
        self.cursor = 0;
    }

    /// Number of choices on the current step
    pub fn choice_count(&self) -> usize {
        match (self.visit, self.step) {
            (Visit::FirstTime, WelcomeStep::Language) => LANGUAGES.len(),
            (Visit::FirstTime, WelcomeStep::Level) => LearningLevel::ALL.len(),
            _ => 0,
        }
    }

    pub fn move_cursor(&mut self, down: bool) {
        let count = self.choice_count();
        if count == 0 {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }

    pub fn languages() -> &'static [DisplayLanguage] {
        &LANGUAGES
    }

    /// Act on the highlighted choice of the current step
    pub fn confirm(&mut self) -> WelcomeOutcome {
        if let Visit::Returning { .. } = self.visit {
            return WelcomeOutcome::Finished;
        }
        match self.step {
            WelcomeStep::Intro => self.get_started(),
            WelcomeStep::Language => self.choose_language(LANGUAGES[self.cursor % LANGUAGES.len()]),
            WelcomeStep::Level => {
                self.choose_level(LearningLevel::ALL[self.cursor % LearningLevel::ALL.len()])
            }
            WelcomeStep::Ready => {
                if self.selected_language.is_some() && self.selected_level.is_some() {
                    return WelcomeOutcome::Finished;
                }
            }
        }
        WelcomeOutcome::Continue
    }

    /// Preferences to persist once the welcome is done
    pub fn finish(&self, prefs: &Preferences, today: NaiveDate) -> Preferences {
        let mut updated = prefs.clone();
        if let Some(lang) = self.selected_language {
            updated.language = lang;
        }
        if let Some(level) = self.selected_level {
            updated.learning_level = level;
        }
        updated.record_visit(today);
        updated
    }
}

pub fn greeting(hour: u32) -> Text {
    if hour < 12 {
        Text::GoodMorning
    } else if hour < 17 {
        Text::GoodAfternoon
    } else {
        Text::GoodEvening
    }
}
