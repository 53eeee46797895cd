use crate::args::GlobalFlags;
use std::env;
use std::path::PathBuf;

pub const APP_NAME: &str = "workspace";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Process-wide settings, computed once in `entry` and handed to each
/// component that needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub workspace_root: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub app_name: String,
    pub use_color: bool,
    pub use_fzf: bool,
    pub log_level: String,
}

impl Config {
    pub fn new(workspace_root: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            workspace_root,
            home,
            app_name: APP_NAME.to_string(),
            use_color: false,
            use_fzf: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn from_env(flags: &GlobalFlags) -> Self {
        let workspace_root = flags
            .workspace
            .clone()
            .or_else(|| env::var_os("WORKSPACE_NOTES_ROOT").map(PathBuf::from))
            .filter(|p| !p.as_os_str().is_empty());
        let home = env::var_os("HOME")
            .map(PathBuf::from)
            .filter(|p| !p.as_os_str().is_empty());
        let log_level = env::var("WORKSPACE_NOTES_LOG")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Self {
            workspace_root,
            home,
            app_name: APP_NAME.to_string(),
            use_color: !flags.plain && env::var_os("NO_COLOR").is_none(),
            use_fzf: env::var_os("WORKSPACE_NOTES_NO_FZF").is_none(),
            log_level,
        }
    }

    /// Name of the per-user fallback folder, e.g. `.workspace-notes`.
    pub fn fallback_folder_name(&self) -> String {
        format!(".{}-notes", self.app_name)
    }
}
