use serde::Deserialize;

use crate::error::Error;
use crate::i18n::{tr, DisplayLanguage, LearningLevel, Text};

/// A string authored once per display language. Missing fields come through
/// as empty strings rather than failing the whole dataset.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Localized {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub es: String,
}

impl Localized {
    pub fn get(&self, lang: DisplayLanguage) -> &str {
        match lang {
            DisplayLanguage::En => &self.en,
            DisplayLanguage::Es => &self.es,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Formality {
    Formal,
    Informal,
    #[default]
    Neutral,
}

impl Formality {
    pub fn label(self, lang: DisplayLanguage) -> &'static str {
        match self {
            Formality::Formal => tr(lang, Text::Formal),
            Formality::Informal => tr(lang, Text::Informal),
            Formality::Neutral => tr(lang, Text::Neutral),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhraseDate {
    #[serde(default)]
    pub spanish: String,
    #[serde(default)]
    pub day_name: String,
    #[serde(default)]
    pub month_name: String,
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub year: i32,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Region {
    #[serde(default)]
    pub usage: Localized,
    #[serde(default)]
    pub notes: Localized,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Regions {
    #[serde(default)]
    pub spain: Region,
    #[serde(default)]
    pub latin_america: Region,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Example {
    pub spanish: String,
    pub english: String,
    #[serde(default)]
    pub context: Localized,
}

/// The learning item: one phrase with everything the lesson screens show
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    #[serde(default)]
    pub id: u64,
    pub phrase: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub date: PhraseDate,
    #[serde(default)]
    pub meaning: Localized,
    #[serde(default)]
    pub context: Localized,
    #[serde(default)]
    pub formality: Formality,
    #[serde(default)]
    pub regions: Regions,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub similar_phrases: Vec<String>,
    #[serde(default)]
    pub difficulty: LearningLevel,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A dataset as served by the phrase endpoint or bundled with the binary
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PhraseData {
    #[serde(default)]
    pub phrases: Vec<Phrase>,
}

impl PhraseData {
    pub fn validate(self) -> Result<Self, Error> {
        if self.phrases.is_empty() {
            return Err(Error::InvalidData("dataset contains no phrases".into()));
        }
        Ok(self)
    }

    /// Today's phrase is the first one the source hands out
    pub fn phrase_of_the_day(&self) -> Option<&Phrase> {
        self.phrases.first()
    }
}
