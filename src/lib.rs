// Library surface for the binary and the headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod celebration;
pub mod error;
pub mod flow;
pub mod i18n;
pub mod phrase;
pub mod preferences;
pub mod quiz;
pub mod runtime;
pub mod source;
pub mod ui;
pub mod welcome;

pub use app::{App, AppAction, AppOptions};
pub use error::{Error, Result};
