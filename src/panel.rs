use crate::error::NoteError;
use crate::formatting::FormatContext;
use crate::host::Host;
use crate::shared::table::truncate_with_ellipsis;
use crate::store::NoteStore;
use std::error::Error;
use std::path::PathBuf;

pub const PANEL_TITLE: &str = "NOTES";
pub const OPEN_COMMAND_TITLE: &str = "Open Note";

/// Action bound to a panel item: ask the host to open `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCommand {
    pub title: &'static str,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem {
    pub label: String,
    /// Always false; the list is one level deep.
    pub collapsible: bool,
    pub command: OpenCommand,
}

pub struct NotesPanel {
    store: NoteStore,
}

impl NotesPanel {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    /// Current snapshot, one item per folder entry, in listing order.
    /// Never cached; every call re-reads the folder.
    pub fn items(&self) -> Result<Vec<PanelItem>, NoteError> {
        let entries = self.store.list_entries()?;
        Ok(entries
            .into_iter()
            .map(|entry| PanelItem {
                label: entry.name,
                collapsible: false,
                command: OpenCommand {
                    title: OPEN_COMMAND_TITLE,
                    path: entry.path,
                },
            })
            .collect())
    }

    pub fn find(&self, label: &str) -> Result<Option<PanelItem>, NoteError> {
        Ok(self.items()?.into_iter().find(|item| item.label == label))
    }

    pub fn activate(
        &self,
        item: &PanelItem,
        host: &mut dyn Host,
    ) -> Result<(), Box<dyn Error>> {
        host.open_file(&item.command.path)
    }
}

pub type SubscriptionId = usize;

/// Refresh channel between writers and whatever renders the panel. Anything
/// that writes a note calls [`ChangeNotifier::notify_changed`].
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut()>)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut() + 'static,
    ) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn notify_changed(&mut self) {
        log::debug!(
            "event=notes_changed subscribers={}",
            self.subscribers.len()
        );
        for (_, callback) in self.subscribers.iter_mut() {
            callback();
        }
    }
}

/// Render the panel as a titled block, one label per line.
pub fn render_panel(
    items: &[PanelItem],
    ctx: &FormatContext,
    width: usize,
) -> String {
    let mut out = ctx.format_header(PANEL_TITLE);
    if items.is_empty() {
        out.push('\n');
        out.push_str(&ctx.format_muted("No notes yet."));
        return out;
    }
    for item in items {
        out.push('\n');
        out.push_str("  ");
        let room = width.saturating_sub(2);
        out.push_str(&truncate_with_ellipsis(&item.label, room));
    }
    out
}
