use rand::Rng;

use super::builder::{QuestionTopic, UnshuffledQuestion};
use super::shuffle::shuffle_with;

/// A multiple-choice question ready to be shown
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub topic: QuestionTopic,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Shuffle the options and find where the canonical answer ended up.
///
/// The answer is re-located by text, so if two options read the same the
/// first one is treated as correct.
pub fn shuffle_question<R: Rng + ?Sized>(question: UnshuffledQuestion, rng: &mut R) -> Question {
    let correct_answer = question.correct_answer().to_string();
    let options = shuffle_with(&question.options, rng);
    let correct_index = options
        .iter()
        .position(|option| *option == correct_answer)
        .unwrap_or(question.correct_index);

    Question {
        topic: question.topic,
        prompt: question.prompt,
        options,
        correct_index,
    }
}
