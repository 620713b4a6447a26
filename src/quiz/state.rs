use std::collections::BTreeMap;

use super::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStage {
    Unanswered,
    PartiallyAnswered,
    FullyAnswered,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Great,
    KeepPracticing,
}

/// Questions, the answers picked so far, and whether they were handed in.
///
/// Transitions consume the state and hand back the next one; a new phrase or
/// display language means building a fresh instance.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizState {
    questions: Vec<Question>,
    selected_answers: BTreeMap<usize, usize>,
    submitted: bool,
}

impl QuizState {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            selected_answers: BTreeMap::new(),
            submitted: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selected_answers.get(&question).copied()
    }

    pub fn selected_answers(&self) -> &BTreeMap<usize, usize> {
        &self.selected_answers
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Record (or overwrite) the option picked for a question. Ignored once
    /// the quiz has been submitted.
    pub fn select_answer(mut self, question: usize, option: usize) -> Self {
        if self.submitted {
            return self;
        }
        self.selected_answers.insert(question, option);
        self
    }

    pub fn all_answered(&self) -> bool {
        (0..self.questions.len()).all(|i| self.selected_answers.contains_key(&i))
    }

    /// Callers gate this on `all_answered`; it is not re-checked here.
    pub fn submit(mut self) -> Self {
        if !self.all_answered() {
            log::debug!(
                "quiz submitted with {}/{} answers",
                self.selected_answers.len(),
                self.questions.len()
            );
        }
        self.submitted = true;
        self
    }

    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.selected(*i) == Some(q.correct_index))
            .count()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn stage(&self) -> QuizStage {
        if self.submitted {
            QuizStage::Submitted
        } else if self.selected_answers.is_empty() {
            QuizStage::Unanswered
        } else if self.all_answered() {
            QuizStage::FullyAnswered
        } else {
            QuizStage::PartiallyAnswered
        }
    }

    pub fn verdict(&self) -> Verdict {
        let (score, total) = (self.score(), self.total());
        if score == total {
            Verdict::Perfect
        } else if score * 2 >= total {
            Verdict::Great
        } else {
            Verdict::KeepPracticing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::builder::QuestionTopic;

    fn question(correct_index: usize) -> Question {
        Question {
            topic: QuestionTopic::Context,
            prompt: "?".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index,
        }
    }

    fn three() -> QuizState {
        QuizState::new(vec![question(0), question(2), question(3)])
    }

    #[test]
    fn test_fresh_state() {
        let state = three();
        assert_eq!(state.stage(), QuizStage::Unanswered);
        assert!(!state.all_answered());
        assert!(!state.is_submitted());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_select_overwrites_previous_choice() {
        let state = three().select_answer(1, 0).select_answer(1, 2);
        assert_eq!(state.selected(1), Some(2));
        assert_eq!(state.selected_answers().len(), 1);
        assert_eq!(state.stage(), QuizStage::PartiallyAnswered);
    }

    #[test]
    fn test_two_of_three_is_not_all_answered() {
        let state = three().select_answer(0, 0).select_answer(2, 1);
        assert!(!state.all_answered());
        assert_eq!(state.stage(), QuizStage::PartiallyAnswered);
    }

    #[test]
    fn test_score_counts_matches() {
        let state = three()
            .select_answer(0, 0)
            .select_answer(1, 1)
            .select_answer(2, 3);
        assert!(state.all_answered());
        assert_eq!(state.stage(), QuizStage::FullyAnswered);
        assert_eq!(state.score(), 2);
        assert_eq!(state.score(), state.score());
    }

    #[test]
    fn test_score_unchanged_by_submit() {
        let state = three()
            .select_answer(0, 1)
            .select_answer(1, 2)
            .select_answer(2, 3);
        let before = state.score();
        let state = state.submit();
        assert_eq!(state.stage(), QuizStage::Submitted);
        assert_eq!(state.score(), before);
    }

    #[test]
    fn test_select_after_submit_is_noop() {
        let submitted = three()
            .select_answer(0, 0)
            .select_answer(1, 2)
            .select_answer(2, 3)
            .submit();
        let snapshot = submitted.clone();
        let after = submitted.select_answer(0, 3);
        assert_eq!(after, snapshot);
        assert_eq!(after.score(), 3);
    }

    #[test]
    fn test_score_bounds() {
        let none = three().submit();
        assert_eq!(none.score(), 0);

        let all = three()
            .select_answer(0, 0)
            .select_answer(1, 2)
            .select_answer(2, 3);
        assert!(all.score() <= all.total());
        assert_eq!(all.score(), 3);
    }

    #[test]
    fn test_verdicts() {
        let perfect = three()
            .select_answer(0, 0)
            .select_answer(1, 2)
            .select_answer(2, 3);
        assert_eq!(perfect.verdict(), Verdict::Perfect);

        let great = three()
            .select_answer(0, 0)
            .select_answer(1, 2)
            .select_answer(2, 0);
        assert_eq!(great.verdict(), Verdict::Great);

        let practice = three()
            .select_answer(0, 0)
            .select_answer(1, 0)
            .select_answer(2, 0);
        assert_eq!(practice.verdict(), Verdict::KeepPracticing);
    }
}
