pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    celebration::Confetti,
    flow::{Page, TOTAL_STEPS},
    i18n::{tr, DisplayLanguage, Text},
    App,
};

use screen::current_screen;

const APP_NAME: &str = "Frase del Día";
const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

const CONFETTI_COLORS: [Color; 7] = [
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::LightYellow,
];

pub fn draw(app: &App, f: &mut Frame) {
    current_screen(app).render(app, f);
}

/// Shown while the first dataset is being fetched
pub fn draw_loading(lang: DisplayLanguage, f: &mut Frame) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    f.render_widget(
        Paragraph::new(Span::styled(tr(lang, Text::Loading), dim_style()))
            .alignment(Alignment::Center),
        chunks[1],
    );
}

pub(crate) fn bold_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub(crate) fn dim_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub(crate) fn italic_style() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

pub(crate) fn accent_style() -> Style {
    bold_style().fg(Color::Yellow)
}

/// Header, body and footer rows shared by every lesson screen
pub(crate) struct Chrome {
    pub header: Rect,
    pub progress: Rect,
    pub body: Rect,
    pub hint: Rect,
}

impl Chrome {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(1), // progress
                Constraint::Length(1), // padding
                Constraint::Min(1),    // body
                Constraint::Length(1), // hint
            ])
            .split(area);
        Self {
            header: chunks[0],
            progress: chunks[1],
            body: chunks[3],
            hint: chunks[4],
        }
    }
}

/// App name on the left, the active language and level on the right
pub(crate) fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let lang = app.language();
    let settings = format!(
        "{}: {}  {}: {}",
        tr(lang, Text::MenuLanguage),
        lang.name(lang),
        tr(lang, Text::MenuLevel),
        app.prefs.learning_level.label(lang),
    );
    Paragraph::new(Span::styled(APP_NAME, accent_style())).render(area, buf);
    Paragraph::new(Span::styled(settings, dim_style()))
        .alignment(Alignment::Right)
        .render(area, buf);
}

pub(crate) fn render_progress(page: Page, lang: DisplayLanguage, area: Rect, buf: &mut Buffer) {
    let label = format!(
        "{} {} / {} {}",
        tr(lang, Text::Step),
        page.step(),
        TOTAL_STEPS,
        tr(lang, Text::Total)
    );
    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(page.progress())
        .label(label)
        .render(area, buf);
}

pub(crate) fn render_hint(text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Span::styled(text.to_string(), italic_style())).render(area, buf);
}

/// Title over a one-line subtitle, returning what is left of `area`
pub(crate) fn render_title(title: &str, subtitle: &str, area: Rect, buf: &mut Buffer) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    Paragraph::new(Span::styled(title.to_string(), bold_style()))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);
    Paragraph::new(Span::styled(subtitle.to_string(), italic_style()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);
    chunks[3]
}

/// Greedy word wrap by display width. Words wider than `width` are split
/// between characters. Always returns at least one row.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();

    for word in text.split_whitespace() {
        let needed = if row.is_empty() {
            word.width()
        } else {
            row.width() + 1 + word.width()
        };
        if needed <= width {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(word);
            continue;
        }
        if !row.is_empty() {
            rows.push(std::mem::take(&mut row));
        }
        for c in word.chars() {
            if !row.is_empty() && row.width() + c.width().unwrap_or(0) > width {
                rows.push(std::mem::take(&mut row));
            }
            row.push(c);
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Button-like label, highlighted when it is what enter will do
pub(crate) fn button(label: &str, active: bool) -> Line<'static> {
    let style = if active {
        accent_style().add_modifier(Modifier::REVERSED)
    } else {
        dim_style()
    };
    Line::from(Span::styled(format!("[ {label} ]"), style)).alignment(Alignment::Center)
}

/// Paint the confetti and its word straight into the buffer
pub(crate) fn render_confetti(confetti: &Confetti, area: Rect, buf: &mut Buffer) {
    if !confetti.is_active() || area.width == 0 || area.height == 0 {
        return;
    }

    for particle in &confetti.particles {
        if !(0.0..1.0).contains(&particle.x) || !(0.0..1.0).contains(&particle.y) {
            continue;
        }
        let x = area.x + (particle.x * f64::from(area.width)) as u16;
        let y = area.y + (particle.y * f64::from(area.height)) as u16;
        let color = CONFETTI_COLORS[particle.color_index % CONFETTI_COLORS.len()];
        let style = match particle.alpha() {
            a if a > 0.7 => Style::default().fg(color).add_modifier(Modifier::BOLD),
            a if a > 0.3 => Style::default().fg(color),
            _ => Style::default().fg(color).add_modifier(Modifier::DIM),
        };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(&particle.symbol.to_string());
            cell.set_style(style);
        }
    }

    if let Some(word) = confetti.word {
        let width = word.width() as u16;
        if width <= area.width {
            let x = area.x + (area.width - width) / 2;
            let y = area.y + area.height / 2;
            buf.set_string(x, y, word, accent_style());
        }
    }
}
