use crate::i18n::{tr_phrase, DisplayLanguage, Text};
use crate::phrase::Phrase;

pub const OPTIONS_PER_QUESTION: usize = 4;
pub const QUESTIONS_PER_QUIZ: usize = 3;

/// Slot holding the canonical answer before options are shuffled
pub const CANONICAL_POSITION: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionTopic {
    Meaning,
    Context,
    Formality,
}

impl QuestionTopic {
    pub const ALL: [QuestionTopic; QUESTIONS_PER_QUIZ] = [
        QuestionTopic::Meaning,
        QuestionTopic::Context,
        QuestionTopic::Formality,
    ];

    fn prompt_key(self) -> Text {
        match self {
            QuestionTopic::Meaning => Text::QuizQuestionMeaning,
            QuestionTopic::Context => Text::QuizQuestionContext,
            QuestionTopic::Formality => Text::QuizQuestionFormality,
        }
    }

    /// Generic wrong answers, authored per display language
    pub fn distractors(self, lang: DisplayLanguage) -> [&'static str; 3] {
        match self {
            QuestionTopic::Meaning => [
                lang.pick("Good morning!", "¡Buenos días!"),
                lang.pick("How are you?", "¿Cómo estás?"),
                lang.pick("See you later!", "¡Hasta luego!"),
            ],
            QuestionTopic::Context => [
                lang.pick("Greeting friends", "Saludar amigos"),
                lang.pick("Ordering food", "Ordenar comida"),
                lang.pick("Asking for directions", "Pedir direcciones"),
            ],
            QuestionTopic::Formality => [
                lang.pick("very formal", "muy formal"),
                lang.pick("ceremonial", "ceremonial"),
                lang.pick("academic", "académico"),
            ],
        }
    }

    pub fn canonical_answer(self, item: &Phrase, lang: DisplayLanguage) -> String {
        match self {
            QuestionTopic::Meaning => item.meaning.get(lang).to_string(),
            QuestionTopic::Context => item.context.get(lang).to_string(),
            QuestionTopic::Formality => item.formality.label(lang).to_string(),
        }
    }
}

/// A question whose canonical answer still sits at `CANONICAL_POSITION`
#[derive(Debug, Clone, PartialEq)]
pub struct UnshuffledQuestion {
    pub topic: QuestionTopic,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl UnshuffledQuestion {
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }
}

pub fn build_questions(item: &Phrase, lang: DisplayLanguage) -> Vec<UnshuffledQuestion> {
    QuestionTopic::ALL
        .iter()
        .map(|&topic| {
            let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
            options.push(topic.canonical_answer(item, lang));
            options.extend(topic.distractors(lang).iter().map(|d| d.to_string()));

            UnshuffledQuestion {
                topic,
                prompt: tr_phrase(lang, topic.prompt_key(), &item.phrase),
                options,
                correct_index: CANONICAL_POSITION,
            }
        })
        .collect()
}

/// Topics whose canonical answer is blank or collides with one of the
/// authored distractors. With a collision the shuffled question may mark the
/// wrong duplicate as correct.
pub fn authoring_collisions(item: &Phrase, lang: DisplayLanguage) -> Vec<QuestionTopic> {
    QuestionTopic::ALL
        .iter()
        .copied()
        .filter(|&topic| {
            let answer = topic.canonical_answer(item, lang);
            answer.trim().is_empty()
                || topic
                    .distractors(lang)
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(&answer))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::{Formality, Localized};
    use std::collections::HashSet;

    fn up_to_you() -> Phrase {
        serde_json::from_value(serde_json::json!({
            "phrase": "Tú decides",
            "meaning": { "en": "It's up to you", "es": "Tú eliges" },
            "context": { "en": "Used when giving someone a choice", "es": "Se usa al dar una opción" },
            "formality": "informal"
        }))
        .unwrap()
    }

    #[test]
    fn test_builds_three_questions_of_four_options() {
        for lang in [DisplayLanguage::En, DisplayLanguage::Es] {
            let questions = build_questions(&up_to_you(), lang);
            assert_eq!(questions.len(), QUESTIONS_PER_QUIZ);
            for q in &questions {
                assert_eq!(q.options.len(), OPTIONS_PER_QUESTION);
                let unique: HashSet<&String> = q.options.iter().collect();
                assert_eq!(unique.len(), OPTIONS_PER_QUESTION);
                assert_eq!(q.correct_index, CANONICAL_POSITION);
            }
        }
    }

    #[test]
    fn test_canonical_answers_in_order() {
        let questions = build_questions(&up_to_you(), DisplayLanguage::En);
        let answers: Vec<&str> = questions.iter().map(|q| q.options[0].as_str()).collect();
        assert_eq!(
            answers,
            vec![
                "It's up to you",
                "Used when giving someone a choice",
                "Informal"
            ]
        );
        assert_eq!(
            questions.iter().map(|q| q.topic).collect::<Vec<_>>(),
            QuestionTopic::ALL.to_vec()
        );
    }

    #[test]
    fn test_prompts_are_templated_with_phrase() {
        let questions = build_questions(&up_to_you(), DisplayLanguage::Es);
        assert_eq!(questions[0].prompt, "¿Qué significa \"Tú decides\" en inglés?");
        assert!(questions.iter().all(|q| q.prompt.contains("Tú decides")));
    }

    #[test]
    fn test_spanish_distractors() {
        let questions = build_questions(&up_to_you(), DisplayLanguage::Es);
        assert_eq!(questions[0].options[0], "Tú eliges");
        assert_eq!(
            &questions[1].options[1..],
            &["Saludar amigos", "Ordenar comida", "Pedir direcciones"]
        );
    }

    #[test]
    fn test_missing_localized_field_degrades_to_empty_answer() {
        let mut item = up_to_you();
        item.meaning = Localized {
            en: "Okay".into(),
            es: String::new(),
        };
        let questions = build_questions(&item, DisplayLanguage::Es);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].correct_answer(), "");
    }

    #[test]
    fn test_authoring_collisions() {
        assert!(authoring_collisions(&up_to_you(), DisplayLanguage::En).is_empty());

        let mut item = up_to_you();
        item.meaning.en = "See you later!".into();
        item.formality = Formality::Neutral;
        assert_eq!(
            authoring_collisions(&item, DisplayLanguage::En),
            vec![QuestionTopic::Meaning]
        );

        item.context.es = String::new();
        assert_eq!(
            authoring_collisions(&item, DisplayLanguage::Es),
            vec![QuestionTopic::Context]
        );
    }
}
