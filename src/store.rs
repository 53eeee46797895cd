use crate::error::NoteError;
use chrono::Utc;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const NOTE_EXT: &str = "txt";
pub const QUICK_NOTE_PREFIX: &str = "quick-note-";

/// One folder entry. `name` is lossy for display; `path` is the real one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Plain-text note storage rooted at the resolved notes folder.
#[derive(Debug, Clone)]
pub struct NoteStore {
    folder: PathBuf,
}

impl NoteStore {
    pub fn new(folder: PathBuf) -> Self {
        Self { folder }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn note_path(&self, filename: &str) -> PathBuf {
        self.folder.join(filename)
    }

    /// Create or overwrite `folder/filename` with `content`.
    ///
    /// The folder is never created here; a missing folder surfaces as
    /// [`NoteError::Write`].
    pub fn write_note(
        &self,
        filename: &str,
        content: &str,
    ) -> Result<PathBuf, NoteError> {
        let path = self.note_path(filename);
        fs::write(&path, content)
            .map_err(|source| NoteError::from_write(path.clone(), source))?;
        info!(
            "event=note_written path={} bytes={}",
            path.display(),
            content.len()
        );
        Ok(path)
    }

    /// Every entry in the folder, in directory order. A missing folder
    /// lists as empty.
    pub fn list_entries(&self) -> Result<Vec<NoteEntry>, NoteError> {
        if !self.folder.exists() {
            debug!(
                "event=notes_listed folder={} missing=true",
                self.folder.display()
            );
            return Ok(Vec::new());
        }
        let entries = read_entries(&self.folder).map_err(|source| {
            NoteError::Read { path: self.folder.clone(), source }
        })?;
        debug!(
            "event=notes_listed folder={} count={}",
            self.folder.display(),
            entries.len()
        );
        Ok(entries)
    }

    pub fn list_notes(&self) -> Result<Vec<String>, NoteError> {
        Ok(self.list_entries()?.into_iter().map(|e| e.name).collect())
    }

    /// Entry names containing `term` as a literal, case-sensitive substring.
    ///
    /// Unlike [`NoteStore::list_notes`], a missing folder is an error here.
    pub fn search_notes(&self, term: &str) -> Result<Vec<String>, NoteError> {
        let entries = read_entries(&self.folder).map_err(|source| {
            NoteError::Read { path: self.folder.clone(), source }
        })?;
        let matches: Vec<String> = entries
            .into_iter()
            .map(|e| e.name)
            .filter(|name| name.contains(term))
            .collect();
        debug!(
            "event=notes_searched term_len={} matches={}",
            term.len(),
            matches.len()
        );
        Ok(matches)
    }
}

pub fn note_filename(title: &str) -> String {
    format!("{title}.{NOTE_EXT}")
}

pub fn quick_note_filename(epoch_millis: i64) -> String {
    format!("{QUICK_NOTE_PREFIX}{epoch_millis}.{NOTE_EXT}")
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn read_entries(dir: &Path) -> io::Result<Vec<NoteEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(NoteEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }
    Ok(entries)
}
