//! Platform-specific directories.
//!
//! - macOS: `~/Library/Caches/ore-compass`, `~/Library/Application Support/ore-compass`
//! - Linux: `~/.cache/ore-compass`, `~/.local/share/ore-compass`
//! - Windows: `%LOCALAPPDATA%\ore-compass`, `%APPDATA%\ore-compass`
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

const APP_NAME: &str = "ore-compass";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME))
        .join("logs")
}

/// Log directory of one run, named after the session.
pub struct SessionLogDir {
    pub id: String,
    pub path: PathBuf,
}

/// Creates `<log_dir>/<session>`; unnamed runs get `session_<unix secs>`.
pub fn session_log_dir(session_id: Option<&str>) -> Result<SessionLogDir> {
    let id = match session_id {
        Some(id) => id.to_owned(),
        None => {
            let started = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{started}")
        }
    };
    let path = log_dir().join(&id);
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create log directory {}", path.display()))?;
    Ok(SessionLogDir { id, path })
}

/// Default location of saved tool records.
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}
