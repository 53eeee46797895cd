use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

/// Storage-level failure raised by the note store.
#[derive(Debug)]
pub enum NoteError {
    /// Writing a note file failed (missing folder, permissions, disk).
    Write { path: PathBuf, source: io::Error },
    /// Reading the notes folder failed.
    Read { path: PathBuf, source: io::Error },
    /// Failure with no usable detail.
    Unknown,
}

impl NoteError {
    /// Wrap a failed write. A bare `io::Error` built from a kind alone
    /// carries no detail and becomes [`NoteError::Unknown`].
    pub fn from_write(path: PathBuf, source: io::Error) -> Self {
        let bare = source.raw_os_error().is_none()
            && source.get_ref().is_none()
            && source.to_string() == source.kind().to_string();
        if bare { Self::Unknown } else { Self::Write { path, source } }
    }

    /// Human-readable reason, when one is available.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Write { source, .. } | Self::Read { source, .. } => {
                Some(source.to_string())
            }
            Self::Unknown => None,
        }
    }
}

impl Display for NoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Unknown => write!(f, "unknown error"),
        }
    }
}

impl Error for NoteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Write { source, .. } | Self::Read { source, .. } => {
                Some(source)
            }
            Self::Unknown => None,
        }
    }
}
