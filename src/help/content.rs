use super::{HelpBook, HelpFlag, HelpTopic, Section};

pub(crate) fn book() -> HelpBook<'static> {
    HelpBook {
        title: "Workspace Notes",
        usage: "wn <command> [--workspace <dir>] [--plain]",
        topics: ALL_TOPICS,
        footer: &[
            "Use `wn help <topic>` for focused docs, e.g. `wn help quick-note` or `wn help shell`.",
        ],
    }
}

const WORKSPACE_FLAG: HelpFlag<'static> = HelpFlag {
    name: "-w, --workspace <dir>",
    desc: "Use <dir>/Notes as the notes folder instead of the home fallback.",
};

const ALL_TOPICS: &[HelpTopic<'static>] = &[
    HelpTopic {
        name: "create-note",
        summary: "Prompt for a title and content, then save <title>.txt.",
        usage: "wn create-note",
        details: &[
            "The title is used as the filename verbatim; no characters are escaped.",
            "An empty or dismissed title or content aborts without writing anything.",
            "An existing note with the same title is overwritten.",
        ],
        flags: &[WORKSPACE_FLAG],
        aliases: &["create", "new"],
        section: Section::Command,
        examples: &["printf 'Standup\\nmove the demo to friday\\n' | wn create-note"],
    },
    HelpTopic {
        name: "quick-note",
        summary: "Prompt for content only and save quick-note-<epoch-ms>.txt.",
        usage: "wn quick-note",
        details: &[
            "The filename comes from the current time in milliseconds.",
            "Failures are reported with a generic message; run with WORKSPACE_NOTES_LOG=warn to see the cause.",
        ],
        flags: &[WORKSPACE_FLAG],
        aliases: &["quick", "jot"],
        section: Section::Command,
        examples: &["echo 'call the bank' | wn quick-note"],
    },
    HelpTopic {
        name: "search-notes",
        summary: "Find notes whose filename contains a term (case-sensitive).",
        usage: "wn search-notes",
        details: &[
            "Matches filenames only, never note content.",
            "Matches are offered in a picker (fzf when available, otherwise a numbered list).",
            "Unlike list, searching fails when the notes folder does not exist yet.",
        ],
        flags: &[WORKSPACE_FLAG],
        aliases: &["search"],
        section: Section::Command,
        examples: &["echo standup | wn search-notes"],
    },
    HelpTopic {
        name: "list",
        summary: "Show the notes panel: every entry in the notes folder.",
        usage: "wn list",
        details: &[
            "Entries are shown in directory order without filtering or sorting.",
            "A missing notes folder shows as an empty panel.",
        ],
        flags: &[
            WORKSPACE_FLAG,
            HelpFlag { name: "--plain", desc: "Disable colors." },
        ],
        aliases: &["ls"],
        section: Section::Command,
        examples: &["wn list --plain"],
    },
    HelpTopic {
        name: "open",
        summary: "Open a note from the panel in $VISUAL / $EDITOR.",
        usage: "wn open <filename>",
        details: &["The name must match a panel entry exactly, including .txt."],
        flags: &[WORKSPACE_FLAG],
        aliases: &[],
        section: Section::Command,
        examples: &["wn open Standup.txt"],
    },
    HelpTopic {
        name: "shell",
        summary: "Interactive session with a live notes panel.",
        usage: "wn shell",
        details: &[
            "Reads one command per line: create-note, quick-note, search-notes, list, open <name>, help, quit.",
            "The panel is redrawn after every note that is saved.",
        ],
        flags: &[WORKSPACE_FLAG],
        aliases: &[],
        section: Section::Command,
        examples: &["wn shell -w ~/src/project"],
    },
    HelpTopic {
        name: "path",
        summary: "Print the resolved notes folder.",
        usage: "wn path",
        details: &[],
        flags: &[WORKSPACE_FLAG],
        aliases: &[],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "help",
        summary: "Show this overview or a single topic.",
        usage: "wn help [topic]",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &["wn help search-notes"],
    },
    HelpTopic {
        name: "WORKSPACE_NOTES_ROOT",
        summary: "Workspace root used when --workspace is not given.",
        usage: "WORKSPACE_NOTES_ROOT=/path wn list",
        details: &[
            "Notes live in <root>/Notes. The folder is not created automatically.",
            "Without a workspace, notes go to ~/.workspace-notes, created on first use.",
        ],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "WORKSPACE_NOTES_LOG",
        summary: "Log level written to stderr (default warn).",
        usage: "WORKSPACE_NOTES_LOG=debug wn quick-note",
        details: &["Accepts trace, debug, info, warn, error or off."],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "WORKSPACE_NOTES_NO_FZF",
        summary: "Disable fzf for the search picker.",
        usage: "WORKSPACE_NOTES_NO_FZF=1 wn search-notes",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "NO_COLOR",
        summary: "Disable colored output (same as --plain).",
        usage: "NO_COLOR=1 wn list",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
];
