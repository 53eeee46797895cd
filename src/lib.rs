pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod fzf;
mod help;
pub mod host;
pub mod location;
pub mod logging;
pub mod panel;
mod shared;
pub mod shell;
pub mod store;
pub mod terminal;

use crate::args::parse_global_flags;
use crate::commands::{NoteCommand, Outcome};
use crate::config::Config;
use crate::formatting::FormatContext;
use crate::panel::{ChangeNotifier, NotesPanel, render_panel};
use crate::store::{NoteStore, now_millis};
use crate::terminal::TerminalHost;
use std::env;
use std::error::Error;

pub fn entry() -> Result<(), Box<dyn Error>> {
    let raw: Vec<String> = env::args().skip(1).collect();
    let (flags, mut args) = parse_global_flags(raw, "wn")?;
    if args.is_empty() {
        return help::run(Vec::new());
    }

    let config = Config::from_env(&flags);
    if let Err(err) = logging::init_logging(&config.log_level) {
        eprintln!("{err}");
    }

    let cmd = args.remove(0);
    let cmd = resolve_command_alias(&cmd);
    if cmd == "help" || cmd == "--help" || cmd == "-h" {
        return help::run(args);
    }

    let store = NoteStore::new(location::resolve(&config)?);

    match cmd {
        "list" => list_panel(&store, &config),
        "open" => open_note(args, &store, &config)?,
        "path" => println!("{}", store.folder().display()),
        "shell" => {
            let host = TerminalHost::stdin(config.use_color, config.use_fzf);
            shell::Shell::new(store, host, config.use_color).run()?;
        }
        other => match other.parse::<NoteCommand>() {
            Ok(command) => run_once(command, &store, &config)?,
            Err(msg) => {
                help::run(Vec::new())?;
                return Err(msg.into());
            }
        },
    }

    Ok(())
}

/// Map short command aliases to their canonical ids.
pub fn resolve_command_alias(cmd: &str) -> &str {
    match cmd {
        "create" | "new" => "create-note",
        "quick" | "jot" => "quick-note",
        "search" => "search-notes",
        "ls" => "list",
        other => other,
    }
}

pub(crate) fn terminal_columns() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

fn run_once(
    command: NoteCommand,
    store: &NoteStore,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let mut host = TerminalHost::stdin(config.use_color, config.use_fzf);
    let mut notifier = ChangeNotifier::new();
    let outcome =
        commands::run(command, &mut host, store, &mut notifier, &now_millis);
    match outcome {
        Outcome::Failed => Err(format!("{command} failed").into()),
        Outcome::Matches { picked: Some(name), .. } => {
            println!("{name}");
            Ok(())
        }
        _ => Ok(()),
    }
}

fn list_panel(store: &NoteStore, config: &Config) {
    let panel = NotesPanel::new(store.clone());
    let ctx = FormatContext::new(config.use_color);
    let width = terminal_columns().unwrap_or(80);
    match panel.items() {
        Ok(items) => println!("{}", render_panel(&items, &ctx, width)),
        Err(err) => eprintln!("{err}"),
    }
}

fn open_note(
    args: Vec<String>,
    store: &NoteStore,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let name = args.join(" ");
    if name.is_empty() {
        return Err("Usage: wn open <filename>".into());
    }
    let panel = NotesPanel::new(store.clone());
    let item = panel
        .find(&name)?
        .ok_or_else(|| format!("Note {name} not found"))?;
    let mut host = TerminalHost::stdin(config.use_color, config.use_fzf);
    panel.activate(&item, &mut host)
}
