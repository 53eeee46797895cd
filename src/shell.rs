use crate::commands::{self, NoteCommand};
use crate::formatting::FormatContext;
use crate::host::Host;
use crate::panel::{ChangeNotifier, NotesPanel, render_panel};
use crate::store::{NoteStore, now_millis};
use crate::terminal::TerminalHost;
use crate::{resolve_command_alias, terminal_columns};
use std::error::Error;
use std::io::{self, Write};

const SHELL_COMMANDS: &str = "commands: create-note, quick-note, \
    search-notes, list, open <name>, help, quit";

#[derive(Debug, PartialEq, Eq)]
enum ShellLine {
    Empty,
    Quit,
    Help,
    List,
    Open(String),
    Run(NoteCommand),
    Unknown(String),
}

fn parse_line(line: &str) -> ShellLine {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match resolve_command_alias(head) {
        "" => ShellLine::Empty,
        "quit" | "exit" | "q" => ShellLine::Quit,
        "help" | "?" => ShellLine::Help,
        "list" => ShellLine::List,
        "open" if !rest.is_empty() => ShellLine::Open(rest.to_string()),
        other => match other.parse::<NoteCommand>() {
            Ok(cmd) => ShellLine::Run(cmd),
            Err(_) => ShellLine::Unknown(line.to_string()),
        },
    }
}

/// Interactive session: a live notes panel plus a one-command-at-a-time
/// prompt loop.
pub struct Shell {
    store: NoteStore,
    panel: NotesPanel,
    notifier: ChangeNotifier,
    host: TerminalHost,
    use_color: bool,
}

impl Shell {
    pub fn new(store: NoteStore, host: TerminalHost, use_color: bool) -> Self {
        let panel = NotesPanel::new(store.clone());
        let mut notifier = ChangeNotifier::new();

        // The panel re-reads the folder on every change; nothing is cached.
        let live = NotesPanel::new(store.clone());
        notifier.subscribe(move || print_panel(&live, use_color));

        Self { store, panel, notifier, host, use_color }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        print_panel(&self.panel, self.use_color);
        eprintln!("{SHELL_COMMANDS}");
        loop {
            eprint!("notes> ");
            io::stderr().flush()?;
            let Some(line) = self.host.read_line() else {
                break;
            };
            match parse_line(&line) {
                ShellLine::Empty => {}
                ShellLine::Quit => break,
                ShellLine::Help => eprintln!("{SHELL_COMMANDS}"),
                ShellLine::List => print_panel(&self.panel, self.use_color),
                ShellLine::Open(name) => self.open(&name),
                ShellLine::Run(cmd) => {
                    commands::run(
                        cmd,
                        &mut self.host,
                        &self.store,
                        &mut self.notifier,
                        &now_millis,
                    );
                }
                ShellLine::Unknown(text) => {
                    self.host.show_warning(&format!("Unknown command: {text}"))
                }
            }
        }
        Ok(())
    }

    fn open(&mut self, name: &str) {
        let result = match self.panel.find(name) {
            Ok(Some(item)) => self.panel.activate(&item, &mut self.host),
            Ok(None) => Err(format!("Note {name} not found").into()),
            Err(err) => Err(err.into()),
        };
        if let Err(err) = result {
            self.host.show_error(&err.to_string());
        }
    }
}

fn print_panel(panel: &NotesPanel, use_color: bool) {
    let ctx = FormatContext::new(use_color);
    let width = terminal_columns().unwrap_or(80);
    match panel.items() {
        Ok(items) => println!("{}", render_panel(&items, &ctx, width)),
        Err(err) => eprintln!("{}", ctx.format_muted(&err.to_string())),
    }
}
