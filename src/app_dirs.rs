use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "melotype")
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project().map(|pd| pd.config_dir().join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("melotype");
            Some(state_dir.join("melotype.log"))
        } else {
            Self::project().map(|pd| pd.data_local_dir().join("melotype.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_end_with_expected_files() {
        if let Some(path) = AppDirs::config_path() {
            assert!(path.ends_with("config.json"));
        }
        if let Some(path) = AppDirs::log_path() {
            assert!(path.ends_with("melotype.log"));
        }
    }
}
