use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::Result;
use crate::i18n::{DisplayLanguage, LearningLevel};

/// What the app remembers between runs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub language: DisplayLanguage,
    pub learning_level: LearningLevel,
    pub has_visited: bool,
    pub last_visit: Option<NaiveDate>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: DisplayLanguage::En,
            learning_level: LearningLevel::Beginner,
            has_visited: false,
            last_visit: None,
        }
    }
}

impl Preferences {
    /// Whole days since the previous visit, if there was one
    pub fn days_since_last_visit(&self, today: NaiveDate) -> Option<i64> {
        self.last_visit
            .map(|last| (today - last).num_days().abs())
    }

    pub fn record_visit(&mut self, today: NaiveDate) {
        self.has_visited = true;
        self.last_visit = Some(today);
    }
}

pub trait PreferenceStore {
    fn load(&self) -> Preferences;
    fn save(&self, prefs: &Preferences) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::preferences_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Preferences {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice::<Preferences>(&bytes).unwrap_or_else(|e| {
                log::warn!("ignoring unreadable preferences at {:?}: {e}", self.path);
                Preferences::default()
            }),
            Err(_) => Preferences::default(),
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(prefs)?;
        fs::write(&self.path, data)?;
        log::debug!("saved preferences to {:?}", self.path);
        Ok(())
    }
}

/// Keeps preferences in memory only, for `--no-save` runs and tests
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    prefs: std::cell::RefCell<Preferences>,
}

impl MemoryPreferenceStore {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            prefs: std::cell::RefCell::new(prefs),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Preferences {
        self.prefs.borrow().clone()
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        *self.prefs.borrow_mut() = prefs.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_preferences() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::with_path(dir.path().join("preferences.json"));
        let prefs = Preferences::default();
        store.save(&prefs).unwrap();
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn save_and_load_custom_preferences() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::with_path(dir.path().join("nested/preferences.json"));
        let prefs = Preferences {
            language: DisplayLanguage::Es,
            learning_level: LearningLevel::Intermediate,
            has_visited: true,
            last_visit: NaiveDate::from_ymd_opt(2025, 3, 1),
        };
        store.save(&prefs).unwrap();
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn garbage_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FilePreferenceStore::with_path(&path).load(), Preferences::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, br#"{ "language": "es" }"#).unwrap();
        let prefs = FilePreferenceStore::with_path(&path).load();
        assert_eq!(prefs.language, DisplayLanguage::Es);
        assert_eq!(prefs.learning_level, LearningLevel::Beginner);
        assert!(!prefs.has_visited);
    }

    #[test]
    fn days_since_last_visit() {
        let mut prefs = Preferences::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(prefs.days_since_last_visit(today), None);

        prefs.record_visit(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert!(prefs.has_visited);
        assert_eq!(prefs.days_since_last_visit(today), Some(3));
    }

    #[test]
    fn memory_store_keeps_last_save() {
        let store = MemoryPreferenceStore::default();
        let mut prefs = store.load();
        prefs.language = DisplayLanguage::Es;
        store.save(&prefs).unwrap();
        assert_eq!(store.load().language, DisplayLanguage::Es);
    }
}
