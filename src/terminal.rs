use crate::formatting::{FormatContext, Level};
use crate::fzf::{FzfSelector, is_fzf_installed};
use crate::host::{Host, PickItem};
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// [`Host`] for a plain terminal session. Prompts read lines from `input`;
/// end of input counts as a dismissed prompt.
pub struct TerminalHost {
    input: Box<dyn BufRead>,
    ctx: FormatContext,
    use_fzf: bool,
}

impl TerminalHost {
    pub fn new(
        input: Box<dyn BufRead>,
        use_color: bool,
        use_fzf: bool,
    ) -> Self {
        Self { input, ctx: FormatContext::new(use_color), use_fzf }
    }

    pub fn stdin(use_color: bool, use_fzf: bool) -> Self {
        Self::new(Box::new(io::stdin().lock()), use_color, use_fzf)
    }

    pub fn format(&self) -> &FormatContext {
        &self.ctx
    }

    /// Read one line without its terminator. `None` on EOF or read failure.
    pub fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                Some(buf)
            }
        }
    }

    fn pick_numbered(
        &mut self,
        items: &[PickItem],
        placeholder: &str,
    ) -> Option<String> {
        eprintln!("{}", self.ctx.format_header(placeholder));
        for (idx, item) in items.iter().enumerate() {
            eprintln!("  {:>2}) {}", idx + 1, item.label);
        }
        eprint!("Pick [1-{}, empty to dismiss]: ", items.len());
        let _ = io::stderr().flush();

        let answer = self.read_line()?;
        let idx: usize = answer.trim().parse().ok()?;
        items.get(idx.checked_sub(1)?).map(|item| item.label.clone())
    }
}

impl Host for TerminalHost {
    fn input_box(&mut self, prompt: &str, placeholder: &str) -> Option<String> {
        let hint = self.ctx.format_muted(&format!("({placeholder})"));
        eprint!("{prompt} {hint} ");
        let _ = io::stderr().flush();
        self.read_line()
    }

    fn show_info(&mut self, message: &str) {
        println!("{}", self.ctx.format_notification(Level::Info, message));
    }

    fn show_warning(&mut self, message: &str) {
        eprintln!("{}", self.ctx.format_notification(Level::Warning, message));
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{}", self.ctx.format_notification(Level::Error, message));
    }

    fn quick_pick(
        &mut self,
        items: &[PickItem],
        placeholder: &str,
    ) -> Option<String> {
        if items.is_empty() {
            return None;
        }
        if self.use_fzf && is_fzf_installed() {
            let lines: Vec<String> =
                items.iter().map(|i| i.label.clone()).collect();
            let selector = FzfSelector::for_note_names(placeholder);
            match selector.select_from_lines(&lines) {
                Ok(picked) => return picked.into_iter().next(),
                Err(err) => {
                    log::warn!("event=fzf_failed error={err}");
                }
            }
        }
        self.pick_numbered(items, placeholder)
    }

    fn open_file(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        let editor = env::var("VISUAL")
            .or_else(|_| env::var("EDITOR"))
            .unwrap_or_else(|_| "vi".to_string());
        log::info!("event=open_file editor={editor} path={}", path.display());
        let status = Command::new(&editor)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        if !status.success() {
            return Err("Editor exited with non-zero status".into());
        }
        Ok(())
    }
}
