use std::error::Error;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

pub struct FzfSelector {
    prompt: Option<String>,
    height: Option<String>,
    layout: Option<String>,
}

impl FzfSelector {
    pub fn new() -> Self {
        Self { prompt: None, height: None, layout: None }
    }

    /// Single-choice picker sized for a short list of note names.
    pub fn for_note_names(placeholder: &str) -> Self {
        Self::new()
            .prompt(&format!("{placeholder} "))
            .height("40%")
            .layout("reverse")
    }

    pub fn prompt(mut self, prompt: &str) -> Self {
        self.prompt = Some(prompt.to_string());
        self
    }

    pub fn height(mut self, height: &str) -> Self {
        self.height = Some(height.to_string());
        self
    }

    pub fn layout(mut self, layout: &str) -> Self {
        self.layout = Some(layout.to_string());
        self
    }

    /// Select from raw lines. An empty result means the user cancelled.
    pub fn select_from_lines(
        &self,
        lines: &[String],
    ) -> Result<Vec<String>, Box<dyn Error>> {
        if !is_fzf_installed() {
            return Err("fzf is not installed".into());
        }

        let mut cmd = Command::new("fzf");

        if let Some(ref prompt) = self.prompt {
            cmd.arg("--prompt").arg(prompt);
        }

        if let Some(ref height) = self.height {
            cmd.arg("--height").arg(height);
        }

        if let Some(ref layout) = self.layout {
            cmd.arg("--layout").arg(layout);
        }

        let mut child =
            cmd.stdin(Stdio::piped()).stdout(Stdio::piped()).spawn()?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(lines.join("\n").as_bytes())?;
        }

        let output = child.wait_with_output()?;

        if !output.status.success() || output.stdout.is_empty() {
            return Ok(Vec::new()); // User cancelled
        }

        let selected = String::from_utf8_lossy(&output.stdout);
        Ok(selected.lines().map(|s| s.to_string()).collect())
    }
}

impl Default for FzfSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if fzf is on PATH (cached for the process)
pub fn is_fzf_installed() -> bool {
    static FZF_AVAILABLE: OnceLock<bool> = OnceLock::new();
    *FZF_AVAILABLE.get_or_init(|| {
        Command::new("fzf")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    })
}
