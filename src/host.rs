use std::error::Error;
use std::path::Path;

/// A single labeled entry offered by [`Host::quick_pick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
}

impl PickItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// The UI surface the note commands are written against.
pub trait Host {
    /// Ask for one line of text. `None` means the prompt was dismissed.
    fn input_box(&mut self, prompt: &str, placeholder: &str) -> Option<String>;

    fn show_info(&mut self, message: &str);

    fn show_warning(&mut self, message: &str);

    fn show_error(&mut self, message: &str);

    /// Offer `items` for selection; returns the picked label, or `None` when
    /// the picker was dismissed.
    fn quick_pick(
        &mut self,
        items: &[PickItem],
        placeholder: &str,
    ) -> Option<String>;

    /// Open a file with the host's own viewer/editor.
    fn open_file(&mut self, path: &Path) -> Result<(), Box<dyn Error>>;
}
