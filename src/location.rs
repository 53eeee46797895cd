use crate::config::Config;
use log::info;
use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

pub const WORKSPACE_NOTES_DIR: &str = "Notes";

/// Pick the notes folder for this session. The result is always absolute.
///
/// With a workspace open this is `<root>/Notes`, returned even when it
/// does not exist yet. Otherwise it is `<home>/.<app>-notes`, created (one
/// level, not recursively) on first use and left untouched afterwards.
pub fn resolve(config: &Config) -> io::Result<PathBuf> {
    if let Some(root) = &config.workspace_root {
        let folder = absolute_dir(root)?.join(WORKSPACE_NOTES_DIR);
        info!(
            "event=notes_folder_resolved source=workspace folder={}",
            folder.display()
        );
        return Ok(folder);
    }

    let home = config.home.as_ref().ok_or_else(|| {
        io::Error::other(
            "HOME not set; pass --workspace or set WORKSPACE_NOTES_ROOT",
        )
    })?;
    let folder = absolute_dir(home)?.join(config.fallback_folder_name());
    if !folder.exists() {
        fs::create_dir(&folder)?;
        info!("event=notes_folder_created folder={}", folder.display());
    }
    info!(
        "event=notes_folder_resolved source=home folder={}",
        folder.display()
    );
    Ok(folder)
}

/// Anchor a relative path at the current directory, dropping `.` parts.
fn absolute_dir(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let mut out = env::current_dir()?;
    for part in path.components() {
        if part != Component::CurDir {
            out.push(part);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn workspace_folder_is_not_created() {
        let tmp = tempdir().unwrap();
        let config = Config::new(Some(tmp.path().to_path_buf()), None);
        let folder = resolve(&config).unwrap();
        assert_eq!(folder, tmp.path().join("Notes"));
        assert!(!folder.exists());
    }

    #[test]
    fn fallback_folder_created_once_and_kept() {
        let home = tempdir().unwrap();
        let config = Config::new(None, Some(home.path().to_path_buf()));

        let folder = resolve(&config).unwrap();
        assert_eq!(folder, home.path().join(".workspace-notes"));
        assert!(folder.is_dir());

        fs::write(folder.join("keep.txt"), "still here").unwrap();
        let again = resolve(&config).unwrap();
        assert_eq!(again, folder);
        assert_eq!(
            fs::read_to_string(folder.join("keep.txt")).unwrap(),
            "still here"
        );
    }

    #[test]
    fn missing_home_without_workspace_is_an_error() {
        let config = Config::new(None, None);
        let err = resolve(&config).unwrap_err();
        assert!(err.to_string().contains("HOME not set"));
    }

    #[test]
    fn relative_workspace_resolves_against_current_dir() {
        let cwd = env::current_dir().unwrap();
        let config = Config::new(Some(PathBuf::from(".")), None);
        let folder = resolve(&config).unwrap();
        assert!(folder.is_absolute());
        assert_eq!(folder, cwd.join("Notes"));

        let config = Config::new(Some(PathBuf::from("./ws/sub")), None);
        assert_eq!(
            resolve(&config).unwrap(),
            cwd.join("ws").join("sub").join("Notes")
        );
    }

    #[test]
    fn fallback_creation_is_not_recursive() {
        let tmp = tempdir().unwrap();
        let config =
            Config::new(None, Some(tmp.path().join("missing").join("home")));
        assert!(resolve(&config).is_err());
    }
}
