use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language the lesson prose is rendered in (not the phrase being learned)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayLanguage {
    #[default]
    En,
    Es,
}

impl DisplayLanguage {
    pub fn toggled(self) -> Self {
        match self {
            DisplayLanguage::En => DisplayLanguage::Es,
            DisplayLanguage::Es => DisplayLanguage::En,
        }
    }

    /// Pick the variant of a literal authored for this language
    pub fn pick<'a>(self, en: &'a str, es: &'a str) -> &'a str {
        match self {
            DisplayLanguage::En => en,
            DisplayLanguage::Es => es,
        }
    }

    pub fn name(self, lang: DisplayLanguage) -> &'static str {
        match self {
            DisplayLanguage::En => tr(lang, Text::MenuEnglish),
            DisplayLanguage::Es => tr(lang, Text::MenuSpanish),
        }
    }
}

#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LearningLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl LearningLevel {
    pub const ALL: [LearningLevel; 3] = [
        LearningLevel::Beginner,
        LearningLevel::Intermediate,
        LearningLevel::Advanced,
    ];

    pub fn next(self) -> Self {
        match self {
            LearningLevel::Beginner => LearningLevel::Intermediate,
            LearningLevel::Intermediate => LearningLevel::Advanced,
            LearningLevel::Advanced => LearningLevel::Beginner,
        }
    }

    pub fn label(self, lang: DisplayLanguage) -> &'static str {
        match self {
            LearningLevel::Beginner => tr(lang, Text::Beginner),
            LearningLevel::Intermediate => tr(lang, Text::Intermediate),
            LearningLevel::Advanced => tr(lang, Text::Advanced),
        }
    }
}

/// Every user-facing string. The table below matches exhaustively, so a key
/// without a translation does not compile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Text {
    MenuLanguage,
    MenuEnglish,
    MenuSpanish,
    MenuLevel,

    HomeTodaysPhrase,
    HomeLetsLearn,
    HomeMasterPhrase,
    HomeOffline,

    RegionsTitle,
    RegionsSubtitle,
    RegionsSpain,
    RegionsLatinAmerica,
    RegionsTip,
    RegionsTipText,
    RegionsContinue,

    ExamplesTitle,
    ExamplesSubtitle,
    ExamplesExample,
    ExamplesContext,
    ExamplesSimilarPhrases,
    ExamplesTestKnowledge,

    QuizTitle,
    QuizSubtitle,
    QuizQuestionMeaning,
    QuizQuestionContext,
    QuizQuestionFormality,
    QuizSubmit,
    QuizAnswerAll,
    QuizComplete,
    QuizPerfect,
    QuizGreat,
    QuizKeepPracticing,
    QuizFinish,

    CompletionCongratulations,
    CompletionMastered,
    CompletionWhatYouLearned,
    CompletionLearned1,
    CompletionLearned2,
    CompletionLearned3,
    CompletionLearned4,
    CompletionComeBack,
    CompletionNextPhrase,
    CompletionProTip,
    CompletionReview,
    CompletionBuilding,

    WelcomeTitle,
    WelcomeIntro,
    WelcomeGetStarted,
    WelcomeChooseLanguage,
    WelcomeChooseLevel,
    WelcomeReady,
    WelcomeStart,
    WelcomeBack,
    WelcomeDaysSince,
    WelcomeReadyToday,
    WelcomeStartToday,
    GoodMorning,
    GoodAfternoon,
    GoodEvening,

    Difficulty,
    Formality,
    Step,
    Total,
    Loading,
    LoadFailed,

    Formal,
    Informal,
    Neutral,

    Beginner,
    Intermediate,
    Advanced,

    HintNext,
    HintQuiz,
    HintQuizDone,
    HintWelcome,
    HintCompletion,
    HintRetry,
    HintDismiss,
}

pub fn tr(lang: DisplayLanguage, key: Text) -> &'static str {
    use Text::*;
    let (en, es) = match key {
        MenuLanguage => ("Language", "Idioma"),
        MenuEnglish => ("English", "Inglés"),
        MenuSpanish => ("Spanish", "Español"),
        MenuLevel => ("Level", "Nivel"),

        HomeTodaysPhrase => ("Today's Phrase", "Frase del Día"),
        HomeLetsLearn => ("Let's Learn This!", "¡Vamos a Aprender!"),
        HomeMasterPhrase => (
            "Master this phrase in just a few minutes",
            "Domina esta frase en solo unos minutos",
        ),
        HomeOffline => ("Using offline content", "Usando contenido sin conexión"),

        RegionsTitle => ("Regional Differences", "Diferencias Regionales"),
        RegionsSubtitle => (
            "\"{phrase}\" is used differently across Spanish-speaking regions",
            "\"{phrase}\" se usa de manera diferente en las regiones de habla hispana",
        ),
        RegionsSpain => ("Spain", "España"),
        RegionsLatinAmerica => ("Latin America", "América Latina"),
        RegionsTip => ("Learning Tip", "Consejo de Aprendizaje"),
        RegionsTipText => (
            "While regional variations exist, both forms are understood across the Spanish-speaking world. Choose the version that matches your target audience or learning goals. When in doubt, the more formal or widely understood version is often safer in international contexts.",
            "Aunque existen variaciones regionales, ambas formas se entienden en todo el mundo hispano. Elige la versión que coincida con tu audiencia objetivo o metas de aprendizaje. En caso de duda, la versión más formal o ampliamente entendida suele ser más segura en contextos internacionales.",
        ),
        RegionsContinue => ("Continue", "Continuar"),

        ExamplesTitle => ("Real-Life Examples", "Ejemplos de la Vida Real"),
        ExamplesSubtitle => (
            "\"{phrase}\" is used in everyday conversations",
            "\"{phrase}\" se usa en conversaciones cotidianas",
        ),
        ExamplesExample => ("Example", "Ejemplo"),
        ExamplesContext => ("Context", "Contexto"),
        ExamplesSimilarPhrases => ("Similar Phrases", "Frases Similares"),
        ExamplesTestKnowledge => ("Test Your Knowledge", "Pon a Prueba tu Conocimiento"),

        QuizTitle => ("Quick Quiz", "Prueba Rápida"),
        QuizSubtitle => ("Test your understanding of", "Pon a prueba tu comprensión de"),
        QuizQuestionMeaning => (
            "What does \"{phrase}\" mean in English?",
            "¿Qué significa \"{phrase}\" en inglés?",
        ),
        QuizQuestionContext => (
            "In what context is \"{phrase}\" typically used?",
            "¿En qué contexto se usa típicamente \"{phrase}\"?",
        ),
        QuizQuestionFormality => (
            "What is the formality level of \"{phrase}\"?",
            "¿Cuál es el nivel de formalidad de \"{phrase}\"?",
        ),
        QuizSubmit => ("Submit Answers", "Enviar Respuestas"),
        QuizAnswerAll => (
            "Answer every question to submit",
            "Responde todas las preguntas para enviar",
        ),
        QuizComplete => ("Quiz Complete!", "¡Prueba Completada!"),
        QuizPerfect => (
            "Perfect! You've mastered this phrase!",
            "¡Perfecto! ¡Has dominado esta frase!",
        ),
        QuizGreat => (
            "Great job! You're getting there!",
            "¡Buen trabajo! ¡Vas por buen camino!",
        ),
        QuizKeepPracticing => (
            "Keep practicing! You'll get it next time!",
            "¡Sigue practicando! ¡Lo lograrás la próxima vez!",
        ),
        QuizFinish => ("Finish Learning", "Finalizar Aprendizaje"),

        CompletionCongratulations => ("Congratulations!", "¡Felicitaciones!"),
        CompletionMastered => (
            "You've Mastered Today's Phrase!",
            "¡Has Dominado la Frase de Hoy!",
        ),
        CompletionWhatYouLearned => ("What You Learned", "Lo Que Aprendiste"),
        CompletionLearned1 => (
            "✓ The meaning and pronunciation",
            "✓ El significado y la pronunciación",
        ),
        CompletionLearned2 => ("✓ Regional usage differences", "✓ Diferencias de uso regional"),
        CompletionLearned3 => (
            "✓ Real-world conversation examples",
            "✓ Ejemplos de conversaciones del mundo real",
        ),
        CompletionLearned4 => (
            "✓ Similar phrases and alternatives",
            "✓ Frases similares y alternativas",
        ),
        CompletionComeBack => ("Come Back Tomorrow!", "¡Vuelve Mañana!"),
        CompletionNextPhrase => (
            "Your next Spanish phrase will be ready on",
            "Tu próxima frase en español estará lista el",
        ),
        CompletionProTip => (
            "Pro Tip: Try using \"{phrase}\" in a conversation today to reinforce your learning!",
            "Consejo: ¡Trata de usar \"{phrase}\" en una conversación hoy para reforzar tu aprendizaje!",
        ),
        CompletionReview => ("Review This Phrase", "Revisar Esta Frase"),
        CompletionBuilding => (
            "Building fluency one phrase at a time",
            "Construyendo fluidez una frase a la vez",
        ),

        WelcomeTitle => ("Welcome to Phrase of the Day!", "¡Bienvenido a la Frase del Día!"),
        WelcomeIntro => (
            "Learn one useful Spanish phrase every day: what it means, where it is used, and how to say it.",
            "Aprende una frase útil en español cada día: qué significa, dónde se usa y cómo decirla.",
        ),
        WelcomeGetStarted => ("Get Started", "Comenzar"),
        WelcomeChooseLanguage => (
            "Which language should lessons be explained in?",
            "¿En qué idioma quieres las explicaciones?",
        ),
        WelcomeChooseLevel => ("What is your Spanish level?", "¿Cuál es tu nivel de español?"),
        WelcomeReady => ("You're all set!", "¡Todo listo!"),
        WelcomeStart => ("Start Learning", "Empezar a Aprender"),
        WelcomeBack => ("Welcome Back!", "¡Bienvenido de Nuevo!"),
        WelcomeDaysSince => (
            "It's been {days} days since your last visit.",
            "Han pasado {days} días desde tu última visita.",
        ),
        WelcomeReadyToday => (
            "Ready to learn today's Spanish phrase?",
            "¿Listo para aprender la frase de hoy?",
        ),
        WelcomeStartToday => ("Start Today's Lesson", "Empezar la Lección de Hoy"),
        GoodMorning => ("Good Morning!", "¡Buenos Días!"),
        GoodAfternoon => ("Good Afternoon!", "¡Buenas Tardes!"),
        GoodEvening => ("Good Evening!", "¡Buenas Noches!"),

        Difficulty => ("Difficulty", "Dificultad"),
        Formality => ("Formality", "Formalidad"),
        Step => ("Step", "Paso"),
        Total => ("total", "total"),
        Loading => ("Loading today's phrase...", "Cargando la frase de hoy..."),
        LoadFailed => (
            "We couldn't load today's phrase. Please check your internet connection and try again.",
            "No pudimos cargar la frase de hoy. Revisa tu conexión a internet e inténtalo de nuevo.",
        ),

        Formal => ("Formal", "Formal"),
        Informal => ("Informal", "Informal"),
        Neutral => ("Neutral", "Neutral"),

        Beginner => ("Beginner", "Principiante"),
        Intermediate => ("Intermediate", "Intermedio"),
        Advanced => ("Advanced", "Avanzado"),

        HintNext => (
            "(enter) continue (r)estart (l)anguage le(v)el (esc)ape",
            "(enter) continuar (r)einiciar (l)idioma ni(v)el (esc)salir",
        ),
        HintQuiz => (
            "↑/↓ question  1-4 or ←/→ answer  (enter) submit  (esc)ape",
            "↑/↓ pregunta  1-4 o ←/→ respuesta  (enter) enviar  (esc)salir",
        ),
        HintQuizDone => (
            "(enter) continue (r)estart (esc)ape",
            "(enter) continuar (r)einiciar (esc)salir",
        ),
        HintWelcome => (
            "↑/↓ choose  (enter) next  (b)ack  (esc)ape",
            "↑/↓ elegir  (enter) siguiente  (b) atrás  (esc)salir",
        ),
        HintCompletion => (
            "(r)eview this phrase (esc)ape",
            "(r)evisar esta frase (esc)salir",
        ),
        HintRetry => ("(enter) try again (esc)ape", "(enter) reintentar (esc)salir"),
        HintDismiss => ("(x) dismiss", "(x) cerrar"),
    };
    lang.pick(en, es)
}

/// Translate and fill `{name}` placeholders
pub fn tr_with(lang: DisplayLanguage, key: Text, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(tr(lang, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

pub fn tr_phrase(lang: DisplayLanguage, key: Text, phrase: &str) -> String {
    tr_with(lang, key, &[("phrase", phrase)])
}
