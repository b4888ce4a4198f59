//! Configuration loading and root folder resolution
//!
//! The root folder holds everything Chromaview writes at runtime: the
//! credential database and the staging area for uploaded files.

use crate::{Error, Result};
use std::path::PathBuf;

/// Resolve the Chromaview root folder, in priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`root_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>, env_var_name: &str) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Locate the platform configuration file, if any
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("chromaview").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/chromaview/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("chromaview"))
        .unwrap_or_else(|| PathBuf::from("./chromaview_data"))
}

/// Prepares the resolved root folder for use: creates the directory tree
/// and derives the well-known paths inside it.
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the root folder and staging subdirectory if missing
    pub fn ensure_directories_exist(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.staging_dir())?;
        Ok(())
    }

    /// Path of the credential database inside the root folder
    pub fn database_path(&self) -> PathBuf {
        self.root.join("chromaview.db")
    }

    /// Staging area for uploaded artifacts
    pub fn staging_dir(&self) -> PathBuf {
        self.root.join("staging")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins_over_environment() {
        let root = resolve_root_folder(Some("/tmp/from-cli"), "CHROMAVIEW_TEST_UNSET_VAR");
        assert_eq!(root, PathBuf::from("/tmp/from-cli"));
    }

    #[test]
    fn initializer_creates_root_and_staging() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("chromaview-root");

        let initializer = RootFolderInitializer::new(root.clone());
        initializer.ensure_directories_exist().unwrap();

        assert!(root.is_dir());
        assert!(root.join("staging").is_dir());
        assert_eq!(initializer.database_path(), root.join("chromaview.db"));
    }

    #[test]
    fn ensure_directories_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let initializer = RootFolderInitializer::new(dir.path().join("root"));

        initializer.ensure_directories_exist().unwrap();
        initializer.ensure_directories_exist().unwrap();
    }
}
