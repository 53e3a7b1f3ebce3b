//! Runtime settings for the job board.
//!
//! Loads and merges:
//! - System defaults: `<PRJ_ROOT>/packages/conf/settings.yaml`
//! - User overrides:  `<PRJ_CONFIG_HOME>/job-board/settings.yaml`
//!
//! Merge precedence is user over system, field by field. Missing files are
//! skipped; unreadable or malformed ones are logged and skipped.

use std::path::{Path, PathBuf};

use job_io::PrjDirs;
use serde::Deserialize;

const DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH: &str = "packages/conf/settings.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "job-board/settings.yaml";

/// Store file used when no setting names one.
pub const DEFAULT_STORE_PATH: &str = "jobs.txt";

/// Top-level settings document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobBoardSettings {
    /// `store:` section.
    #[serde(default)]
    pub store: StoreSettings,
}

/// `store:` section of the settings document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    /// Backing file; relative paths are anchored to the project root.
    pub path: Option<String>,
    /// Largest store file that will be read. Unset means no limit.
    pub max_bytes: Option<u64>,
}

impl JobBoardSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            store: self.store.merge(overlay.store),
        }
    }
}

impl StoreSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            path: overlay.path.or(self.path),
            max_bytes: overlay.max_bytes.or(self.max_bytes),
        }
    }
}

/// Concrete configuration for a file-backed store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backing file.
    pub path: PathBuf,
    /// Largest store file that will be read, inclusive. `None` reads any size.
    ///
    /// A store past the limit refuses every operation, `add` included, until
    /// the limit is raised.
    pub max_bytes: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
            max_bytes: None,
        }
    }
}

impl StoreConfig {
    /// Config for `path` with no read limit.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Resolve settings into a config, anchoring relative paths to `root`.
    #[must_use]
    pub fn from_settings_in(settings: &JobBoardSettings, root: &Path) -> Self {
        let path = settings
            .store
            .path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_STORE_PATH);
        Self {
            path: root.join(path),
            max_bytes: settings.store.max_bytes,
        }
    }

    /// Resolve settings into a config relative to [`PrjDirs::project_root`].
    #[must_use]
    pub fn from_settings(settings: &JobBoardSettings) -> Self {
        Self::from_settings_in(settings, &PrjDirs::project_root())
    }
}

/// Load settings from the standard system and user locations.
#[must_use]
pub fn load_settings() -> JobBoardSettings {
    let (system_path, user_path) = settings_paths();
    load_settings_from_paths(&system_path, &user_path)
}

/// System and user settings file locations.
#[must_use]
pub fn settings_paths() -> (PathBuf, PathBuf) {
    let system_path = PrjDirs::project_root().join(DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH);
    let user_path = PrjDirs::config_home().join(DEFAULT_USER_SETTINGS_RELATIVE_PATH);
    (system_path, user_path)
}

/// Load and merge two explicit settings files (user wins).
#[must_use]
pub fn load_settings_from_paths(system: &Path, user: &Path) -> JobBoardSettings {
    load_one(system).merge(load_one(user))
}

fn load_one(path: &Path) -> JobBoardSettings {
    if !path.exists() {
        return JobBoardSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return JobBoardSettings::default();
        }
    };
    match serde_yaml::from_str::<Option<JobBoardSettings>>(&raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            JobBoardSettings::default()
        }
    }
}
