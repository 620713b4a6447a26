use chrono::{Days, NaiveDate};

/// Lesson screens, in the order they are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Examples,
    Quiz,
    Regions,
    Completion,
}

pub const TOTAL_STEPS: u16 = 4;

impl Page {
    pub fn next(self) -> Self {
        match self {
            Page::Home => Page::Examples,
            Page::Examples => Page::Quiz,
            Page::Quiz => Page::Regions,
            Page::Regions | Page::Completion => Page::Completion,
        }
    }

    pub fn restart(self) -> Self {
        Page::Home
    }

    pub fn step(self) -> u16 {
        match self {
            Page::Home => 0,
            Page::Examples => 1,
            Page::Quiz => 2,
            Page::Regions => 3,
            Page::Completion => 4,
        }
    }

    /// Fraction of the lesson done, for the progress gauge
    pub fn progress(self) -> f64 {
        f64::from(self.step()) / f64::from(TOTAL_STEPS)
    }

    pub fn is_terminal(self) -> bool {
        self == Page::Completion
    }
}

/// Day the next phrase shows up
pub fn next_phrase_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}
