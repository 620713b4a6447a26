use std::sync::mpsc;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use frase::flow::Page;
use frase::i18n::{DisplayLanguage, LearningLevel};
use frase::preferences::{FilePreferenceStore, PreferenceStore};
use frase::quiz::QuizStage;
use frase::runtime::{AppEvent, Outcome, Pace, Runner};
use frase::source::{BundledPhraseSource, HttpPhraseSource, PhraseLoader};
use frase::{App, AppOptions};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn quick() -> Pace {
    Pace {
        animating: Duration::from_millis(1),
        idle: Duration::from_millis(1),
    }
}

/// Feed events through the runtime into the app until it quits or the
/// events run out.
fn drive(app: &mut App, events: Vec<AppEvent>) -> bool {
    let (tx, rx) = mpsc::channel();
    let count = events.len();
    for event in events {
        tx.send(event).unwrap();
    }
    drop(tx);

    let runner = Runner::with_pace(rx, quick());
    (0..count).any(|_| runner.dispatch(app) == Outcome::Quit)
}

// Headless walk through onboarding and the whole lesson without a TTY,
// with preferences written to a real file.
#[test]
fn headless_first_visit_through_completion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut app = App::new(
        Box::new(FilePreferenceStore::with_path(&path)),
        PhraseLoader::offline(),
        AppOptions::default(),
        today(),
    );
    assert!(app.welcome.as_ref().unwrap().is_first_time());

    // intro, spanish, intermediate, ready
    let quit = drive(
        &mut app,
        vec![
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Enter),
            key(KeyCode::Enter),
        ],
    );
    assert!(!quit);
    assert!(app.welcome.is_none());
    assert_eq!(app.language(), DisplayLanguage::Es);
    assert_eq!(app.phrase().unwrap().phrase, "Me da igual");

    let saved = FilePreferenceStore::with_path(&path).load();
    assert!(saved.has_visited);
    assert_eq!(saved.language, DisplayLanguage::Es);
    assert_eq!(saved.learning_level, LearningLevel::Intermediate);
    assert_eq!(saved.last_visit, Some(today()));

    drive(&mut app, vec![key(KeyCode::Enter), key(KeyCode::Enter)]);
    assert_eq!(app.page, Page::Quiz);

    let answers: Vec<AppEvent> = app
        .quiz
        .as_ref()
        .unwrap()
        .questions()
        .iter()
        .flat_map(|q| {
            let digit = char::from_digit(q.correct_index as u32 + 1, 10).unwrap();
            [key(KeyCode::Char(digit)), key(KeyCode::Down)]
        })
        .collect();
    drive(&mut app, answers);
    assert_eq!(app.quiz.as_ref().unwrap().stage(), QuizStage::FullyAnswered);

    drive(&mut app, vec![key(KeyCode::Enter)]);
    let quiz = app.quiz.as_ref().unwrap();
    assert_eq!(quiz.stage(), QuizStage::Submitted);
    assert_eq!(quiz.score(), quiz.total());
    assert!(app.confetti.is_active());

    drive(&mut app, vec![key(KeyCode::Enter), key(KeyCode::Enter)]);
    assert_eq!(app.page, Page::Completion);
    assert!(app.quiz.is_none());
    assert!(!app.confetti.is_active());

    assert!(drive(&mut app, vec![key(KeyCode::Esc)]));
}

#[test]
fn headless_returning_visit_skips_onboarding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let store = FilePreferenceStore::with_path(&path);
    let mut prefs = store.load();
    prefs.record_visit(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    store.save(&prefs).unwrap();

    let mut app = App::new(
        Box::new(store),
        PhraseLoader::offline(),
        AppOptions::default(),
        today(),
    );
    assert!(!app.welcome.as_ref().unwrap().is_first_time());

    drive(&mut app, vec![key(KeyCode::Enter)]);
    assert!(app.welcome.is_none());
    assert_eq!(app.page, Page::Home);
    assert_eq!(
        FilePreferenceStore::with_path(&path).load().last_visit,
        Some(today())
    );
}

#[test]
fn headless_unreachable_service_falls_back_to_bundled() {
    // nothing listens on the discard port
    let service = HttpPhraseSource::new("http://127.0.0.1:9/api/v1/phrases").unwrap();
    let loader = PhraseLoader::new(Some(Box::new(service)), Box::new(BundledPhraseSource));

    let app = App::new(
        Box::new(frase::preferences::MemoryPreferenceStore::default()),
        loader,
        AppOptions {
            level: Some(LearningLevel::Advanced),
            ..AppOptions::default()
        },
        today(),
    );
    assert!(app.show_offline_notice);
    assert!(app.load_error.is_none());
    assert_eq!(
        app.phrase().unwrap().phrase,
        "No hay mal que por bien no venga"
    );
}

#[test]
fn headless_ticks_run_the_confetti_out() {
    let mut app = App::new(
        Box::new(frase::preferences::MemoryPreferenceStore::default()),
        PhraseLoader::offline(),
        AppOptions::default(),
        today(),
    );
    let (_tx, rx) = mpsc::channel::<AppEvent>();
    let runner = Runner::with_pace(rx, quick());
    assert_eq!(runner.dispatch(&mut app), Outcome::Idle);

    app.confetti.burst();
    let redraws = std::iter::from_fn(|| Some(runner.dispatch(&mut app)))
        .take_while(|outcome| *outcome == Outcome::Redraw)
        .count();
    assert_eq!(redraws, usize::from(frase::celebration::Confetti::TICKS));
    assert!(!app.confetti.is_active());
}
