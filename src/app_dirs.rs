use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "frase";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn preferences_path() -> PathBuf {
        match ProjectDirs::from("", "", APP_NAME) {
            Some(pd) => pd.config_dir().join("preferences.json"),
            None => PathBuf::from("frase_preferences.json"),
        }
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join("frase.log"))
        } else {
            ProjectDirs::from("", "", APP_NAME)
                .map(|proj_dirs| proj_dirs.data_local_dir().join("frase.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_path_is_json() {
        let path = AppDirs::preferences_path();
        assert_eq!(path.file_name().unwrap(), "preferences.json");
    }

    #[test]
    fn test_log_path_names_the_app() {
        if let Some(path) = AppDirs::log_path() {
            assert_eq!(path.file_name().unwrap(), "frase.log");
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }
}
