use chrono::{Datelike, Timelike};
use itertools::Itertools;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    flow::{next_phrase_date, Page},
    i18n::{tr, tr_phrase, tr_with, DisplayLanguage, LearningLevel, Text},
    quiz::Verdict,
    welcome::{greeting, Visit, Welcome, WelcomeStep},
    App,
};

use super::{
    accent_style, bold_style, button, dim_style, italic_style, render_confetti, render_header,
    render_hint, render_progress, render_title, wrap_words, Chrome,
};

/// A UI Screen boundary: renders one view of the app
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Draws the chrome every lesson page shares and returns the body area
fn lesson_chrome(app: &App, hint: &str, f: &mut Frame) -> ratatui::layout::Rect {
    let chrome = Chrome::split(f.area());
    let buf = f.buffer_mut();
    render_header(app, chrome.header, buf);
    render_progress(app.page, app.language(), chrome.progress, buf);
    render_hint(hint, chrome.hint, buf);
    chrome.body
}

pub struct WelcomeScreen;

impl WelcomeScreen {
    fn lines(welcome: &Welcome, lang: DisplayLanguage) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Visit::Returning {
            days_since_last_visit,
        } = welcome.visit
        {
            let hour = chrono::Local::now().hour();
            lines.push(centered(tr(lang, greeting(hour)).to_string(), dim_style()));
            lines.push(centered(tr(lang, Text::WelcomeBack).to_string(), accent_style()));
            lines.push(centered(String::new(), Style::default()));
            if let Some(days) = days_since_last_visit.filter(|d| *d > 1) {
                lines.push(centered(
                    tr_with(lang, Text::WelcomeDaysSince, &[("days", &days.to_string())]),
                    Style::default(),
                ));
            }
            lines.push(centered(tr(lang, Text::WelcomeReadyToday).to_string(), Style::default()));
            lines.push(centered(String::new(), Style::default()));
            lines.push(button(tr(lang, Text::WelcomeStartToday), true));
            return lines;
        }

        lines.push(centered(
            format!("{} {} / 4", tr(lang, Text::Step), welcome.step.number()),
            dim_style(),
        ));
        lines.push(centered(String::new(), Style::default()));
        match welcome.step {
            WelcomeStep::Intro => {
                lines.push(centered(tr(lang, Text::WelcomeTitle).to_string(), accent_style()));
                lines.push(centered(String::new(), Style::default()));
                lines.push(centered(tr(lang, Text::WelcomeIntro).to_string(), Style::default()));
                lines.push(centered(String::new(), Style::default()));
                lines.push(button(tr(lang, Text::WelcomeGetStarted), true));
            }
            WelcomeStep::Language => {
                lines.push(centered(
                    tr(lang, Text::WelcomeChooseLanguage).to_string(),
                    bold_style(),
                ));
                lines.push(centered(String::new(), Style::default()));
                let names = Welcome::languages().iter().map(|l| l.name(lang));
                lines.extend(choice_lines(names, welcome.cursor));
            }
            WelcomeStep::Level => {
                lines.push(centered(tr(lang, Text::WelcomeChooseLevel).to_string(), bold_style()));
                lines.push(centered(String::new(), Style::default()));
                let labels = LearningLevel::ALL.into_iter().map(|l| l.label(lang));
                lines.extend(choice_lines(labels, welcome.cursor));
            }
            WelcomeStep::Ready => {
                lines.push(centered(tr(lang, Text::WelcomeReady).to_string(), accent_style()));
                lines.push(centered(String::new(), Style::default()));
                if let Some(chosen) = welcome.selected_language {
                    lines.push(centered(
                        format!("{}: {}", tr(lang, Text::MenuLanguage), chosen.name(lang)),
                        Style::default(),
                    ));
                }
                if let Some(level) = welcome.selected_level {
                    lines.push(centered(
                        format!("{}: {}", tr(lang, Text::MenuLevel), level.label(lang)),
                        Style::default(),
                    ));
                }
                lines.push(centered(String::new(), Style::default()));
                lines.push(button(tr(lang, Text::WelcomeStart), true));
            }
        }
        lines
    }
}

fn centered(text: String, style: Style) -> Line<'static> {
    Line::from(Span::styled(text, style)).alignment(Alignment::Center)
}

fn choice_lines<'a>(labels: impl Iterator<Item = &'a str>, cursor: usize) -> Vec<Line<'static>> {
    labels
        .enumerate()
        .map(|(i, label)| {
            let (marker, style) = if i == cursor {
                ("> ", accent_style())
            } else {
                ("  ", Style::default())
            };
            Line::from(Span::styled(format!("{marker}{label}"), style)).alignment(Alignment::Center)
        })
        .collect()
}

impl Screen for WelcomeScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let Some(welcome) = app.welcome.as_ref() else {
            return;
        };
        // the language picked during onboarding applies right away
        let lang = welcome.selected_language.unwrap_or(app.language());

        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(5)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Self::lines(welcome, lang)).wrap(Wrap { trim: true }),
            chunks[1],
        );
        render_hint(tr(lang, Text::HintWelcome), chunks[2], f.buffer_mut());
    }
}

/// Nothing could be loaded, not even the bundled data
pub struct LoadErrorScreen;

impl Screen for LoadErrorScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let lang = app.language();
        let mut lines = vec![Line::from(Span::styled(
            tr(lang, Text::LoadFailed),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))];
        if let Some(error) = app.load_error.as_deref() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(error.to_string(), dim_style())));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(5)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(f.area());
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[1],
        );
        render_hint(tr(lang, Text::HintRetry), chunks[2], f.buffer_mut());
    }
}

pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let lang = app.language();
        let body = lesson_chrome(app, tr(lang, Text::HintNext), f);
        let Some(phrase) = app.phrase() else {
            return;
        };

        let mut lines = Vec::new();
        if app.show_offline_notice {
            lines.push(Line::from(vec![
                Span::styled(
                    tr(lang, Text::HomeOffline),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("  {}", tr(lang, Text::HintDismiss)), dim_style()),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            tr(lang, Text::HomeTodaysPhrase),
            dim_style(),
        )));
        if !phrase.date.spanish.is_empty() {
            lines.push(Line::from(Span::styled(
                phrase.date.spanish.clone(),
                italic_style(),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            phrase.phrase.clone(),
            accent_style(),
        )));
        if !phrase.pronunciation.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("/{}/", phrase.pronunciation),
                italic_style(),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            phrase.meaning.get(lang).to_string(),
            bold_style(),
        )));
        lines.push(Line::from(phrase.context.get(lang).to_string()));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", tr(lang, Text::Formality)), dim_style()),
            Span::raw(phrase.formality.label(lang)),
            Span::styled(format!("   {}: ", tr(lang, Text::Difficulty)), dim_style()),
            Span::raw(phrase.difficulty.label(lang)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            tr(lang, Text::HomeMasterPhrase),
            italic_style(),
        )));
        lines.push(Line::from(""));
        lines.push(button(tr(lang, Text::HomeLetsLearn), true));

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
    }
}

pub struct ExamplesScreen;

impl Screen for ExamplesScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let lang = app.language();
        let body = lesson_chrome(app, tr(lang, Text::HintNext), f);
        let Some(phrase) = app.phrase() else {
            return;
        };
        let body = render_title(
            tr(lang, Text::ExamplesTitle),
            &tr_phrase(lang, Text::ExamplesSubtitle, &phrase.phrase),
            body,
            f.buffer_mut(),
        );

        let mut lines = Vec::new();
        for (i, example) in phrase.examples.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("{} {}", tr(lang, Text::ExamplesExample), i + 1),
                dim_style(),
            )));
            lines.push(Line::from(Span::styled(
                example.spanish.clone(),
                bold_style(),
            )));
            lines.push(Line::from(Span::styled(
                example.english.clone(),
                italic_style(),
            )));
            let context = example.context.get(lang);
            if !context.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", tr(lang, Text::ExamplesContext)), dim_style()),
                    Span::raw(context.to_string()),
                ]));
            }
            lines.push(Line::from(""));
        }

        if !phrase.similar_phrases.is_empty() {
            lines.push(Line::from(Span::styled(
                tr(lang, Text::ExamplesSimilarPhrases),
                dim_style(),
            )));
            lines.push(Line::from(phrase.similar_phrases.iter().join(" · ")));
            lines.push(Line::from(""));
        }
        lines.push(button(tr(lang, Text::ExamplesTestKnowledge), true));

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
    }
}

/// Pushes `text` wrapped to `width`, with `lead` before the first row and
/// continuation rows indented under it
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    lead: &str,
    text: &str,
    width: usize,
    style: Style,
) {
    let indent = lead.width();
    for (i, row) in wrap_words(text, width.saturating_sub(indent))
        .into_iter()
        .enumerate()
    {
        let lead = if i == 0 {
            lead.to_string()
        } else {
            " ".repeat(indent)
        };
        lines.push(Line::from(Span::styled(format!("{lead}{row}"), style)));
    }
}

pub struct QuizScreen;

impl Screen for QuizScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let lang = app.language();
        let submitted = app.quiz.as_ref().is_some_and(|q| q.is_submitted());
        let hint = if submitted {
            Text::HintQuizDone
        } else {
            Text::HintQuiz
        };
        let body = lesson_chrome(app, tr(lang, hint), f);
        let (Some(phrase), Some(quiz)) = (app.phrase(), app.quiz.as_ref()) else {
            return;
        };
        let body = render_title(
            tr(lang, Text::QuizTitle),
            &format!("{} \"{}\"", tr(lang, Text::QuizSubtitle), phrase.phrase),
            body,
            f.buffer_mut(),
        );

        let correct_style = bold_style().fg(Color::Green);
        let wrong_style = bold_style().fg(Color::Red);
        let width = usize::from(body.width);

        let mut lines = Vec::new();
        let mut focus = 0..0;
        for (qi, question) in quiz.questions().iter().enumerate() {
            let start = lines.len();
            let focused = qi == app.quiz_cursor && !submitted;
            let prompt_style = if focused { accent_style() } else { bold_style() };
            let marker = if focused { "> " } else { "  " };
            push_wrapped(
                &mut lines,
                &format!("{marker}{}. ", qi + 1),
                &question.prompt,
                width,
                prompt_style,
            );

            let selected = quiz.selected(qi);
            for (oi, option) in question.options.iter().enumerate() {
                let chosen = selected == Some(oi);
                let (mark, style) = match (submitted, chosen, oi == question.correct_index) {
                    (true, _, true) => ("✓", correct_style),
                    (true, true, false) => ("✗", wrong_style),
                    (false, true, _) => ("●", accent_style()),
                    _ => ("○", Style::default()),
                };
                push_wrapped(
                    &mut lines,
                    &format!("     {mark} {}. ", oi + 1),
                    option,
                    width,
                    style,
                );
            }
            lines.push(Line::from(""));
            if qi == app.quiz_cursor {
                focus = start..lines.len();
            }
        }

        let footer = lines.len();
        if submitted {
            let verdict = match quiz.verdict() {
                Verdict::Perfect => Text::QuizPerfect,
                Verdict::Great => Text::QuizGreat,
                Verdict::KeepPracticing => Text::QuizKeepPracticing,
            };
            lines.push(
                Line::from(Span::styled(
                    format!(
                        "{} {}/{}",
                        tr(lang, Text::QuizComplete),
                        quiz.score(),
                        quiz.total()
                    ),
                    accent_style(),
                ))
                .alignment(Alignment::Center),
            );
            lines.push(Line::from(tr(lang, verdict)).alignment(Alignment::Center));
            lines.push(Line::from(""));
            lines.push(button(tr(lang, Text::QuizFinish), true));
        } else if quiz.all_answered() {
            lines.push(button(tr(lang, Text::QuizSubmit), true));
        } else {
            lines.push(
                Line::from(Span::styled(tr(lang, Text::QuizAnswerAll), dim_style()))
                    .alignment(Alignment::Center),
            );
        }

        // results after submitting, otherwise the focused question and,
        // once everything is answered or on the last one, the footer too
        let last = quiz.questions().len().saturating_sub(1);
        let (top, bottom) = if submitted {
            (footer, lines.len())
        } else if app.quiz_cursor >= last || quiz.all_answered() {
            (focus.start, lines.len())
        } else {
            (focus.start, focus.end)
        };
        let scroll = bottom.saturating_sub(usize::from(body.height)).min(top);
        let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

        f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);
        render_confetti(&app.confetti, body, f.buffer_mut());
    }
}

pub struct RegionsScreen;

impl Screen for RegionsScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let lang = app.language();
        let body = lesson_chrome(app, tr(lang, Text::HintNext), f);
        let Some(phrase) = app.phrase() else {
            return;
        };
        let body = render_title(
            tr(lang, Text::RegionsTitle),
            &tr_phrase(lang, Text::RegionsSubtitle, &phrase.phrase),
            body,
            f.buffer_mut(),
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(body);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let regions = [
            (Text::RegionsSpain, &phrase.regions.spain),
            (Text::RegionsLatinAmerica, &phrase.regions.latin_america),
        ];
        for ((title, region), area) in regions.into_iter().zip(columns.iter()) {
            let lines = vec![
                Line::from(Span::styled(region.usage.get(lang).to_string(), bold_style())),
                Line::from(""),
                Line::from(region.notes.get(lang).to_string()),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .block(Block::bordered().title(Span::styled(tr(lang, title), accent_style())))
                    .wrap(Wrap { trim: true }),
                *area,
            );
        }

        f.render_widget(
            Paragraph::new(tr(lang, Text::RegionsTipText))
                .style(italic_style())
                .block(Block::bordered().title(tr(lang, Text::RegionsTip)))
                .wrap(Wrap { trim: true }),
            rows[1],
        );
        f.render_widget(
            Paragraph::new(button(tr(lang, Text::RegionsContinue), true)),
            rows[2],
        );
    }
}

pub struct CompletionScreen;

impl CompletionScreen {
    fn tomorrow(app: &App) -> String {
        let date = next_phrase_date(app.today);
        match app.language() {
            DisplayLanguage::En => date.format("%B %-d, %Y").to_string(),
            DisplayLanguage::Es => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        }
    }
}

impl Screen for CompletionScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let lang = app.language();
        let body = lesson_chrome(app, tr(lang, Text::HintCompletion), f);
        let Some(phrase) = app.phrase() else {
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                tr(lang, Text::CompletionCongratulations),
                accent_style(),
            )),
            Line::from(Span::styled(tr(lang, Text::CompletionMastered), bold_style())),
            Line::from(Span::styled(phrase.phrase.clone(), italic_style())),
            Line::from(""),
            Line::from(Span::styled(
                tr(lang, Text::CompletionWhatYouLearned),
                dim_style(),
            )),
        ];
        lines.extend(
            [
                Text::CompletionLearned1,
                Text::CompletionLearned2,
                Text::CompletionLearned3,
                Text::CompletionLearned4,
            ]
            .into_iter()
            .map(|key| Line::from(tr(lang, key))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            tr(lang, Text::CompletionComeBack),
            bold_style(),
        )));
        lines.push(Line::from(format!(
            "{} {}",
            tr(lang, Text::CompletionNextPhrase),
            Self::tomorrow(app)
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            tr_phrase(lang, Text::CompletionProTip, &phrase.phrase),
            italic_style(),
        )));
        lines.push(Line::from(""));
        lines.push(button(tr(lang, Text::CompletionReview), false));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            tr(lang, Text::CompletionBuilding),
            dim_style(),
        )));

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(app: &App) -> Box<dyn Screen> {
    if app.welcome.is_some() {
        return Box::new(WelcomeScreen);
    }
    if app.phrase().is_none() {
        return Box::new(LoadErrorScreen);
    }
    match app.page {
        Page::Home => Box::new(HomeScreen),
        Page::Examples => Box::new(ExamplesScreen),
        Page::Quiz => Box::new(QuizScreen),
        Page::Regions => Box::new(RegionsScreen),
        Page::Completion => Box::new(CompletionScreen),
    }
}
