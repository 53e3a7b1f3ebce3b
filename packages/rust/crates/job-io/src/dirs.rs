//! Project directory resolution.
//!
//! The job store and its settings live relative to a project root taken from
//! the environment, so a deployment can relocate both without code changes.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static PROJECT_ROOT: OnceLock<PathBuf> = OnceLock::new();
static CONFIG_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Resolver for project-standard directories.
///
/// Each directory is resolved once per process and cached.
#[derive(Debug, Clone, Copy)]
pub struct PrjDirs;

impl PrjDirs {
    /// `PRJ_ROOT`, falling back to the current working directory.
    pub fn project_root() -> PathBuf {
        PROJECT_ROOT
            .get_or_init(|| {
                non_empty_var("PRJ_ROOT").map_or_else(
                    || env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
                    PathBuf::from,
                )
            })
            .clone()
    }

    /// `PRJ_CONFIG_HOME`, default `.config` under the project root.
    pub fn config_home() -> PathBuf {
        CONFIG_HOME
            .get_or_init(|| resolve_dir("PRJ_CONFIG_HOME", ".config"))
            .clone()
    }

    /// Anchor `path` to the project root unless it is already absolute.
    pub fn anchor(path: impl AsRef<Path>) -> PathBuf {
        anchor_to(&Self::project_root(), path.as_ref())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn resolve_dir(env_key: &str, default: &str) -> PathBuf {
    let value = non_empty_var(env_key).unwrap_or_else(|| default.to_string());
    PrjDirs::anchor(value)
}

fn anchor_to(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
