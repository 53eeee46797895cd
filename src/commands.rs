use crate::error::NoteError;
use crate::host::{Host, PickItem};
use crate::panel::ChangeNotifier;
use crate::store::{NoteStore, note_filename, quick_note_filename};
use log::{info, warn};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Command ids exposed to the command palette / CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteCommand {
    CreateNote,
    QuickNote,
    SearchNotes,
}

impl NoteCommand {
    pub const ALL: [NoteCommand; 3] = [
        NoteCommand::CreateNote,
        NoteCommand::QuickNote,
        NoteCommand::SearchNotes,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NoteCommand::CreateNote => "create-note",
            NoteCommand::QuickNote => "quick-note",
            NoteCommand::SearchNotes => "search-notes",
        }
    }
}

impl fmt::Display for NoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NoteCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteCommand::ALL
            .into_iter()
            .find(|cmd| cmd.id() == s)
            .ok_or_else(|| format!("Unknown command: {s}"))
    }
}

/// How a single command invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved(PathBuf),
    Aborted,
    Failed,
    NoMatches,
    Matches { names: Vec<String>, picked: Option<String> },
}

pub fn run(
    command: NoteCommand,
    host: &mut dyn Host,
    store: &NoteStore,
    notifier: &mut ChangeNotifier,
    clock: &dyn Fn() -> i64,
) -> Outcome {
    info!("event=command_started command={command}");
    let outcome = match command {
        NoteCommand::CreateNote => create_note(host, store, notifier),
        NoteCommand::QuickNote => quick_note(host, store, notifier, clock),
        NoteCommand::SearchNotes => search_notes(host, store),
    };
    info!("event=command_finished command={command} outcome={outcome:?}");
    outcome
}

/// Prompt for a title, then content, and save `<title>.txt`. A dismissed or
/// empty answer aborts with a warning and nothing is written.
pub fn create_note(
    host: &mut dyn Host,
    store: &NoteStore,
    notifier: &mut ChangeNotifier,
) -> Outcome {
    let Some(title) = prompt_required(
        host,
        "Enter the title of your note:",
        "Note title...",
        "Note creation canceled. No title provided.",
    ) else {
        return Outcome::Aborted;
    };

    let Some(content) = prompt_required(
        host,
        "Enter your note content:",
        "Type your note here...",
        "Note creation canceled. No content provided.",
    ) else {
        return Outcome::Aborted;
    };

    match store.write_note(&note_filename(&title), &content) {
        Ok(path) => {
            host.show_info(&format!("Note saved to: {}", path.display()));
            notifier.notify_changed();
            Outcome::Saved(path)
        }
        Err(err) => {
            warn!("event=note_write_failed command=create-note error={err}");
            host.show_error(&save_failure_message(&err));
            Outcome::Failed
        }
    }
}

/// Save content under `quick-note-<epoch-ms>.txt`. `clock` is read after
/// the prompt returns.
pub fn quick_note(
    host: &mut dyn Host,
    store: &NoteStore,
    notifier: &mut ChangeNotifier,
    clock: &dyn Fn() -> i64,
) -> Outcome {
    let Some(content) = prompt_required(
        host,
        "Enter quick note content:",
        "Quick note...",
        "Quick note canceled. No content provided.",
    ) else {
        return Outcome::Aborted;
    };

    match store.write_note(&quick_note_filename(clock()), &content) {
        Ok(path) => {
            let shown = path.display();
            host.show_info(&format!("Quick note saved to: {shown}"));
            notifier.notify_changed();
            Outcome::Saved(path)
        }
        Err(err) => {
            // Users only see the generic message; detail stays in the log.
            warn!("event=note_write_failed command=quick-note error={err}");
            host.show_error("Failed to save quick note.");
            Outcome::Failed
        }
    }
}

pub fn search_notes(host: &mut dyn Host, store: &NoteStore) -> Outcome {
    let Some(term) = prompt_required(
        host,
        "Enter search term:",
        "Search notes...",
        "Search canceled. No term provided.",
    ) else {
        return Outcome::Aborted;
    };

    let names = match store.search_notes(&term) {
        Ok(names) => names,
        Err(err) => {
            warn!("event=notes_search_failed error={err}");
            let reason = err
                .reason()
                .unwrap_or_else(|| "unknown error".to_string());
            host.show_error(&format!("Failed to search notes: {reason}"));
            return Outcome::Failed;
        }
    };

    if names.is_empty() {
        host.show_info("No matching notes found.");
        return Outcome::NoMatches;
    }

    let items: Vec<PickItem> =
        names.iter().map(|name| PickItem::new(name.as_str())).collect();
    let picked = host.quick_pick(&items, "Matching notes:");
    Outcome::Matches { names, picked }
}

fn save_failure_message(err: &NoteError) -> String {
    match err.reason() {
        Some(reason) => format!("Failed to save note: {reason}"),
        None => "An unknown error occurred while saving the note.".to_string(),
    }
}

/// Prompt once; a dismissed or empty answer shows `abort_warning` and
/// yields `None`.
fn prompt_required(
    host: &mut dyn Host,
    prompt: &str,
    placeholder: &str,
    abort_warning: &str,
) -> Option<String> {
    match host.input_box(prompt, placeholder) {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            info!("event=command_aborted prompt={prompt:?}");
            host.show_warning(abort_warning);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::error::Error;
    use std::fs;
    use std::path::Path;
    use std::rc::Rc;
    use tempfile::tempdir;

    /// Host that answers prompts from a script and records notifications.
    #[derive(Default)]
    struct ScriptedHost {
        answers: VecDeque<Option<String>>,
        pick: Option<String>,
        prompts: Vec<String>,
        infos: Vec<String>,
        warnings: Vec<String>,
        errors: Vec<String>,
        offered: Vec<String>,
    }

    impl ScriptedHost {
        fn answering(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|a| a.map(str::to_string))
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl Host for ScriptedHost {
        fn input_box(&mut self, prompt: &str, _: &str) -> Option<String> {
            self.prompts.push(prompt.to_string());
            self.answers.pop_front().flatten()
        }
        fn show_info(&mut self, message: &str) {
            self.infos.push(message.to_string());
        }
        fn show_warning(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
        fn quick_pick(
            &mut self,
            items: &[PickItem],
            _: &str,
        ) -> Option<String> {
            self.offered = items.iter().map(|i| i.label.clone()).collect();
            self.pick.clone()
        }
        fn open_file(&mut self, _: &Path) -> Result<(), Box<dyn Error>> {
            Ok(())
        }
    }

    fn counting_notifier() -> (ChangeNotifier, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0));
        let mut notifier = ChangeNotifier::new();
        let counter = Rc::clone(&hits);
        notifier.subscribe(move || counter.set(counter.get() + 1));
        (notifier, hits)
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn create_note_writes_title_txt_and_refreshes() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path().to_path_buf());
        let (mut notifier, hits) = counting_notifier();
        let mut host =
            ScriptedHost::answering(&[Some("Plan"), Some("ship it\tnow ✓")]);

        let outcome = create_note(&mut host, &store, &mut notifier);

        let path = tmp.path().join("Plan.txt");
        assert_eq!(outcome, Outcome::Saved(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "ship it\tnow ✓");
        let saved = format!("Note saved to: {}", path.display());
        assert_eq!(host.infos, vec![saved]);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn create_note_aborts_on_missing_title_without_asking_content() {
        for answer in [None, Some("")] {
            let tmp = tempdir().unwrap();
            let store = NoteStore::new(tmp.path().to_path_buf());
            let (mut notifier, hits) = counting_notifier();
            let mut host = ScriptedHost::answering(&[answer, Some("body")]);

            let outcome = create_note(&mut host, &store, &mut notifier);
            assert_eq!(outcome, Outcome::Aborted);
            assert_eq!(host.prompts.len(), 1);
            assert_eq!(
                host.warnings,
                vec!["Note creation canceled. No title provided."]
            );
            assert!(entries(tmp.path()).is_empty());
            assert_eq!(hits.get(), 0);
        }
    }

    #[test]
    fn create_note_aborts_on_missing_content() {
        for answer in [None, Some("")] {
            let tmp = tempdir().unwrap();
            let store = NoteStore::new(tmp.path().to_path_buf());
            let (mut notifier, hits) = counting_notifier();
            let mut host = ScriptedHost::answering(&[Some("Title"), answer]);

            let outcome = create_note(&mut host, &store, &mut notifier);
            assert_eq!(outcome, Outcome::Aborted);
            assert_eq!(
                host.warnings,
                vec!["Note creation canceled. No content provided."]
            );
            assert!(entries(tmp.path()).is_empty());
            assert_eq!(hits.get(), 0);
        }
    }

    #[test]
    fn create_note_failure_surfaces_reason() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path().join("Notes"));
        let (mut notifier, hits) = counting_notifier();
        let mut host = ScriptedHost::answering(&[Some("T"), Some("c")]);

        let outcome = create_note(&mut host, &store, &mut notifier);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(host.errors.len(), 1);
        assert!(host.errors[0].starts_with("Failed to save note: "));
        assert!(host.errors[0].len() > "Failed to save note: ".len());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn create_note_failure_without_reason_is_unknown() {
        assert_eq!(
            save_failure_message(&NoteError::Unknown),
            "An unknown error occurred while saving the note."
        );
        let err = NoteError::from_write(
            PathBuf::from("/n/T.txt"),
            std::io::Error::from(std::io::ErrorKind::Other),
        );
        assert_eq!(
            save_failure_message(&err),
            "An unknown error occurred while saving the note."
        );
    }

    #[test]
    fn quick_note_uses_clock_for_filename() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path().to_path_buf());
        let (mut notifier, hits) = counting_notifier();

        let ticks = Cell::new(1_700_000_000_000_i64);
        let clock = || {
            let now = ticks.get();
            ticks.set(now + 1);
            now
        };

        let mut host =
            ScriptedHost::answering(&[Some("first"), Some("second")]);
        let a = quick_note(&mut host, &store, &mut notifier, &clock);
        let b = quick_note(&mut host, &store, &mut notifier, &clock);

        let first = tmp.path().join("quick-note-1700000000000.txt");
        let second = tmp.path().join("quick-note-1700000000001.txt");
        assert_eq!(a, Outcome::Saved(first));
        assert_eq!(b, Outcome::Saved(second.clone()));
        assert_ne!(a, b);
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");
        assert_eq!(hits.get(), 2);
        assert!(host.infos[0].starts_with("Quick note saved to: "));
    }

    #[test]
    fn quick_note_aborts_on_empty_content() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path().to_path_buf());
        let (mut notifier, hits) = counting_notifier();
        let mut host = ScriptedHost::answering(&[Some("")]);

        assert_eq!(
            quick_note(&mut host, &store, &mut notifier, &|| 1),
            Outcome::Aborted
        );
        assert_eq!(
            host.warnings,
            vec!["Quick note canceled. No content provided."]
        );
        assert!(entries(tmp.path()).is_empty());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn quick_note_failure_is_generic() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path().join("Notes"));
        let (mut notifier, hits) = counting_notifier();
        let mut host = ScriptedHost::answering(&[Some("c")]);

        assert_eq!(
            quick_note(&mut host, &store, &mut notifier, &|| 5),
            Outcome::Failed
        );
        assert_eq!(host.errors, vec!["Failed to save quick note."]);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn search_offers_matches_and_reports_none() {
        let tmp = tempdir().unwrap();
        for name in ["alpha.txt", "beta.txt", "alphabeta.txt"] {
            fs::write(tmp.path().join(name), "x").unwrap();
        }
        let store = NoteStore::new(tmp.path().to_path_buf());

        let mut host = ScriptedHost::answering(&[Some("alpha")]);
        host.pick = Some("alpha.txt".to_string());
        let outcome = search_notes(&mut host, &store);
        let Outcome::Matches { mut names, picked } = outcome else {
            panic!("expected matches");
        };
        names.sort();
        assert_eq!(names, vec!["alpha.txt", "alphabeta.txt"]);
        assert_eq!(picked.as_deref(), Some("alpha.txt"));
        assert_eq!(host.offered.len(), 2);

        let mut host = ScriptedHost::answering(&[Some("gamma")]);
        assert_eq!(search_notes(&mut host, &store), Outcome::NoMatches);
        assert_eq!(host.infos, vec!["No matching notes found."]);
    }

    #[test]
    fn search_aborts_and_fails_on_missing_folder() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path().join("Notes"));

        let mut host = ScriptedHost::answering(&[None]);
        assert_eq!(search_notes(&mut host, &store), Outcome::Aborted);
        assert_eq!(host.warnings, vec!["Search canceled. No term provided."]);

        let mut host = ScriptedHost::answering(&[Some("x")]);
        assert_eq!(search_notes(&mut host, &store), Outcome::Failed);
        assert!(host.errors[0].starts_with("Failed to search notes: "));
    }

    #[test]
    fn command_ids_round_trip_through_from_str() {
        assert_eq!(
            "quick-note".parse::<NoteCommand>(),
            Ok(NoteCommand::QuickNote)
        );
        assert!("delete-note".parse::<NoteCommand>().is_err());
        assert_eq!(NoteCommand::SearchNotes.to_string(), "search-notes");
    }

    #[test]
    fn run_dispatches_by_command() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path().to_path_buf());
        let (mut notifier, _) = counting_notifier();
        let mut host = ScriptedHost::answering(&[Some("quick body")]);

        let command = NoteCommand::QuickNote;
        let outcome = run(command, &mut host, &store, &mut notifier, &|| 42);
        let saved = tmp.path().join("quick-note-42.txt");
        assert_eq!(outcome, Outcome::Saved(saved));
    }
}
