use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, RsyncBackupError};

const APP_DIR: &str = ".rsync-backup";
const CONFIG_FILE: &str = "config.yaml";
const STATE_FILE: &str = "state.yaml";

pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| RsyncBackupError::message("cannot determine home directory"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(APP_DIR).join(CONFIG_FILE))
}

pub fn default_state_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(APP_DIR).join(STATE_FILE))
}

/// Expands a leading `~` to `home`. Paths without one, or with no known home,
/// are returned as given.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if path == "~" => home.to_path_buf(),
        Some(home) => match path.strip_prefix("~/") {
            Some(rest) => home.join(rest.trim_start_matches('/')),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

pub fn path_has_parent_dir(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

/// Renders `path` with exactly one trailing separator so rsync copies the
/// directory's contents rather than nesting the directory itself.
pub fn as_dir_arg(path: &Path) -> OsString {
    let mut arg = path.as_os_str().to_os_string();
    if !arg.to_string_lossy().ends_with('/') {
        arg.push("/");
    }
    arg
}
