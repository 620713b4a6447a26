use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use frase::{
    app_dirs::AppDirs,
    i18n::{DisplayLanguage, LearningLevel},
    preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore},
    runtime::{CrosstermEventSource, EventSource, Outcome, Runner},
    source::{BundledPhraseSource, HttpPhraseSource, PhraseLoader, PhraseSource, DEFAULT_ENDPOINT},
    ui, App, AppOptions,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::{self, stdin},
    path::{Path, PathBuf},
};

/// one spanish phrase a day: meaning, real examples, regional usage and a quick quiz
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Learn one useful Spanish phrase every day from your terminal: what it means, how it is used across Spain and Latin America, and a short quiz to check you got it."
)]
pub struct Cli {
    /// language lessons are explained in (saved for next time)
    #[clap(short = 'l', long, value_enum)]
    language: Option<DisplayLanguage>,

    /// learning level to pick today's phrase for (saved for next time)
    #[clap(short = 'v', long, value_enum)]
    level: Option<LearningLevel>,

    /// skip the phrase service and use the phrases bundled with the binary
    #[clap(long)]
    offline: bool,

    /// phrase service to fetch today's phrase from
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// show the first-visit onboarding even if it was completed before
    #[clap(long)]
    welcome: bool,

    /// write logs here instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// do not write preference changes to disk
    #[clap(long)]
    no_save: bool,
}

impl Cli {
    fn to_options(&self) -> AppOptions {
        AppOptions {
            language: self.language,
            level: self.level,
            force_welcome: self.welcome,
        }
    }

    fn preference_store(&self) -> Box<dyn PreferenceStore> {
        let file = FilePreferenceStore::new();
        if self.no_save {
            Box::new(MemoryPreferenceStore::new(file.load()))
        } else {
            Box::new(file)
        }
    }

    fn phrase_loader(&self) -> PhraseLoader {
        if self.offline {
            return PhraseLoader::offline();
        }
        let primary: Option<Box<dyn PhraseSource>> = match HttpPhraseSource::new(&self.endpoint) {
            Ok(source) => Some(Box::new(source)),
            Err(e) => {
                log::warn!("phrase service unavailable, staying offline: {e}");
                None
            }
        };
        PhraseLoader::new(primary, Box::new(BundledPhraseSource))
    }

    fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(AppDirs::log_path)
    }
}

/// The terminal belongs to the TUI, so logs go to a file. `RUST_LOG`
/// overrides the default `info` filter.
fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_path() {
        if let Err(e) = init_logging(&path) {
            eprintln!("logging disabled, cannot open {}: {e}", path.display());
        }
    }
    log::info!("starting frase {}", env!("CARGO_PKG_VERSION"));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let store = cli.preference_store();
    let lang = cli.language.unwrap_or(store.load().language);
    terminal.draw(|f| ui::draw_loading(lang, f))?;

    let today = chrono::Local::now().date_naive();
    let mut app = App::new(store, cli.phrase_loader(), cli.to_options(), today);

    let runner = Runner::new(CrosstermEventSource::new());
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("bye");
    result.map_err(Into::into)
}

/// Redraw after every key and resize, and on ticks while confetti is flying
fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> io::Result<()> {
    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        match runner.dispatch(app) {
            Outcome::Quit => break,
            Outcome::Redraw => {
                terminal.draw(|f| ui::draw(app, f))?;
            }
            Outcome::Idle => {}
        }
    }
    Ok(())
}
