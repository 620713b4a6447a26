pub mod builder;
pub mod question;
pub mod shuffle;
pub mod state;

pub use builder::{authoring_collisions, build_questions, QuestionTopic, UnshuffledQuestion};
pub use question::{shuffle_question, Question};
pub use shuffle::{shuffle, shuffle_with};
pub use state::{QuizStage, QuizState, Verdict};

use rand::Rng;

use crate::i18n::DisplayLanguage;
use crate::phrase::Phrase;

/// Build the three questions for a phrase, shuffle each one's options and
/// the question order, and start an unanswered quiz.
pub fn build_and_shuffle_quiz(item: &Phrase, lang: DisplayLanguage) -> QuizState {
    build_and_shuffle_quiz_with(item, lang, &mut rand::thread_rng())
}

pub fn build_and_shuffle_quiz_with<R: Rng + ?Sized>(
    item: &Phrase,
    lang: DisplayLanguage,
    rng: &mut R,
) -> QuizState {
    let shuffled: Vec<Question> = build_questions(item, lang)
        .into_iter()
        .map(|q| shuffle_question(q, rng))
        .collect();
    QuizState::new(shuffle_with(&shuffled, rng))
}
