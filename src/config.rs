// Launcher configuration.
//
// The third-party file-manager allowlist tracks the installed-app ecosystem,
// so it is loadable from `file_managers.json` in the app config directory
// rather than baked in. Missing or malformed files fall back to the
// built-in defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const CONFIG_FILE: &str = "file_managers.json";

/// Known file-manager applications, tried in order by the launcher's
/// package strategy. The defaults cover the AOSP and Google document
/// browsers plus two common third-party explorers.
#[derive(Debug, Clone, Deserialize)]
pub struct LauncherConfig {
    pub file_manager_packages: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            file_manager_packages: vec![
                "com.google.android.documentsui".to_string(),
                "com.android.documentsui".to_string(),
                "com.mi.android.globalFileexplorer".to_string(),
                "com.es.fileexplorer".to_string(),
            ],
        }
    }
}

impl LauncherConfig {
    /// Load the allowlist from `file_managers.json` under `config_dir`,
    /// falling back to the defaults when the file is absent or unreadable.
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<LauncherConfig>(&content) {
                Ok(config) if !config.file_manager_packages.is_empty() => {
                    log::info!(
                        "[Config] Loaded {} file manager package(s) from {:?}",
                        config.file_manager_packages.len(),
                        path
                    );
                    config
                }
                Ok(_) => {
                    log::warn!("[Config] {:?} lists no packages, using defaults", path);
                    Self::default()
                }
                Err(e) => {
                    log::warn!("[Config] Failed to parse {:?}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("[Config] Failed to read {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn setup_test_dir() -> PathBuf {
        let tmp = std::env::temp_dir().join(format!("upflow_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&tmp).unwrap();
        tmp
    }

    fn cleanup(path: &Path) {
        let _ = fs::remove_dir_all(path);
    }

    #[test]
    fn test_default_allowlist() {
        let config = LauncherConfig::default();
        assert_eq!(config.file_manager_packages.len(), 4);
        assert_eq!(
            config.file_manager_packages[0],
            "com.google.android.documentsui"
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let tmp = setup_test_dir();
        let config = LauncherConfig::load(&tmp);
        assert_eq!(
            config.file_manager_packages,
            LauncherConfig::default().file_manager_packages
        );
        cleanup(&tmp);
    }

    #[test]
    fn test_load_custom_allowlist() {
        let tmp = setup_test_dir();
        fs::write(
            tmp.join(CONFIG_FILE),
            r#"{"file_manager_packages": ["org.example.files"]}"#,
        )
        .unwrap();

        let config = LauncherConfig::load(&tmp);
        assert_eq!(config.file_manager_packages, vec!["org.example.files"]);
        cleanup(&tmp);
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let tmp = setup_test_dir();
        fs::write(tmp.join(CONFIG_FILE), "not json at all").unwrap();

        let config = LauncherConfig::load(&tmp);
        assert_eq!(config.file_manager_packages.len(), 4);
        cleanup(&tmp);
    }
}
