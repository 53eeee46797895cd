use crate::terminal_columns;
use std::error::Error;

mod content;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Command,
    Environment,
}

impl Section {
    fn label(self) -> &'static str {
        match self {
            Section::Command => "Commands",
            Section::Environment => "Environment",
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct HelpFlag<'a> {
    pub name: &'a str,
    pub desc: &'a str,
}

#[derive(Clone, Copy)]
pub(crate) struct HelpTopic<'a> {
    pub name: &'a str,
    pub summary: &'a str,
    pub usage: &'a str,
    pub details: &'a [&'a str],
    pub flags: &'a [HelpFlag<'a>],
    pub aliases: &'a [&'a str],
    pub section: Section,
    pub examples: &'a [&'a str],
}

#[derive(Clone, Copy)]
pub(crate) struct HelpBook<'a> {
    pub title: &'a str,
    pub usage: &'a str,
    pub topics: &'a [HelpTopic<'a>],
    pub footer: &'a [&'a str],
}

impl<'a> HelpBook<'a> {
    fn find(&self, name: &str) -> Option<&HelpTopic<'a>> {
        let needle = name.to_ascii_lowercase();
        self.topics.iter().find(|topic| {
            topic.name.eq_ignore_ascii_case(&needle)
                || topic.aliases.iter().any(|a| a.eq_ignore_ascii_case(&needle))
        })
    }

    fn in_section(
        &self,
        section: Section,
    ) -> impl Iterator<Item = &HelpTopic<'a>> {
        self.topics.iter().filter(move |t| t.section == section)
    }
}

pub(crate) fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let book = content::book();
    let width = terminal_columns().unwrap_or(96).clamp(64, 120);
    let printer = HelpPrinter::new(width);

    let lines = match args.first() {
        None => printer.render_overview(&book),
        Some(topic) => match book.find(topic) {
            Some(entry) => printer.render_topic(&book, entry),
            None => {
                eprintln!("Unknown help topic: {topic}");
                printer.render_overview(&book)
            }
        },
    };

    println!("{}", lines.join("\n").trim_end());
    Ok(())
}

const LABEL_CAP: usize = 28;

struct HelpPrinter {
    width: usize,
}

impl HelpPrinter {
    fn new(width: usize) -> Self {
        Self { width }
    }

    fn render_overview(&self, book: &HelpBook<'_>) -> Vec<String> {
        let mut out = vec![
            book.title.to_string(),
            format!("usage: {}", book.usage),
            String::new(),
        ];
        for section in [Section::Command, Section::Environment] {
            let rows: Vec<(&str, &str)> = book
                .in_section(section)
                .map(|t| (t.usage, t.summary))
                .collect();
            self.render_block(&mut out, section.label(), &rows);
        }
        self.push_footer(&mut out, book);
        out
    }

    fn render_topic(
        &self,
        book: &HelpBook<'_>,
        topic: &HelpTopic<'_>,
    ) -> Vec<String> {
        let mut out = vec![
            format!("{}: {}", topic.name, topic.summary),
            format!("usage: {}", topic.usage),
        ];
        if !topic.aliases.is_empty() {
            out.push(format!("aliases: {}", topic.aliases.join(", ")));
        }
        out.push(String::new());

        for line in topic.details {
            push_wrapped(&mut out, line, self.width, "");
        }
        if !topic.details.is_empty() {
            out.push(String::new());
        }

        let flags: Vec<(&str, &str)> =
            topic.flags.iter().map(|f| (f.name, f.desc)).collect();
        self.render_block(&mut out, "Options", &flags);

        if !topic.examples.is_empty() {
            out.push("Examples:".to_string());
            for ex in topic.examples {
                push_wrapped(&mut out, ex, self.width, "  ");
            }
            out.push(String::new());
        }
        self.push_footer(&mut out, book);
        out
    }

    /// Two-column block. Labels are never wrapped; one wider than the
    /// column sits on its own line with the description indented below.
    fn render_block(
        &self,
        out: &mut Vec<String>,
        title: &str,
        rows: &[(&str, &str)],
    ) {
        if rows.is_empty() {
            return;
        }
        let column = rows
            .iter()
            .map(|(label, _)| label.len())
            .filter(|len| *len <= LABEL_CAP)
            .max()
            .unwrap_or(0);
        let indent = " ".repeat(4 + column);
        let desc_width = self.width.saturating_sub(indent.len()).max(20);

        out.push(format!("{title}:"));
        for (label, desc) in rows {
            let mut lines = wrap(desc, desc_width).into_iter();
            if label.len() > column {
                out.push(format!("  {label}"));
            } else {
                let first = lines.next().unwrap_or_default();
                out.push(format!("  {label:column$}  {first}"));
            }
            out.extend(lines.map(|l| format!("{indent}{l}")));
        }
        out.push(String::new());
    }

    fn push_footer(&self, out: &mut Vec<String>, book: &HelpBook<'_>) {
        for line in book.footer {
            push_wrapped(out, line, self.width, "");
        }
    }
}

fn push_wrapped(out: &mut Vec<String>, text: &str, width: usize, lead: &str) {
    let room = width.saturating_sub(lead.len());
    out.extend(wrap(text, room).into_iter().map(|l| format!("{lead}{l}")));
}

/// Greedy word wrap. Always yields at least one (possibly empty) line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || out.is_empty() {
        out.push(line);
    }
    out
}
