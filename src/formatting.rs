use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub primary: (u8, u8, u8),   // labels, muted text
    pub secondary: (u8, u8, u8), // headers
    pub info: (u8, u8, u8),
    pub warning: (u8, u8, u8),
    pub error: (u8, u8, u8),
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        primary: (108, 112, 134),   // Gray
        secondary: (148, 226, 213), // Teal
        info: (137, 180, 250),      // Blue
        warning: (249, 226, 175),   // Yellow
        error: (243, 139, 168),     // Pink
    };
}

/// Notification severity, mirrored by the label printed before a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// Formatting context passed through rendering pipeline
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    pub fn format_header(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.secondary;
            Paint::rgb(text, r, g, b).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_muted(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.primary;
            Paint::rgb(text, r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    /// `"<level>: <message>"` with the level label colored.
    pub fn format_notification(&self, level: Level, message: &str) -> String {
        let label = format!("{}:", level.label());
        if !self.use_color {
            return format!("{label} {message}");
        }
        let (r, g, b) = match level {
            Level::Info => self.palette.info,
            Level::Warning => self.palette.warning,
            Level::Error => self.palette.error,
        };
        format!("{} {message}", Paint::rgb(&label, r, g, b).bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_context_no_color() {
        let ctx = FormatContext::new(false);
        assert_eq!(ctx.format_header("NOTES"), "NOTES");
        assert_eq!(ctx.format_muted("a.txt"), "a.txt");
        assert_eq!(
            ctx.format_notification(Level::Warning, "canceled"),
            "warning: canceled"
        );
    }

    #[test]
    fn test_format_context_with_color() {
        let ctx = FormatContext::new(true);
        let header = ctx.format_header("NOTES");
        assert!(header.contains("NOTES"));
        assert!(header.len() > "NOTES".len()); // Has ANSI codes
        let note = ctx.format_notification(Level::Error, "boom");
        assert!(note.ends_with(" boom"));
    }

    #[test]
    fn test_colored_notification_labels() {
        let ctx = FormatContext::new(true);
        for level in [Level::Info, Level::Warning, Level::Error] {
            let line = ctx.format_notification(level, "saved");
            assert!(line.starts_with('\x1b'));
            assert!(line.contains(&format!("{}:", level.label())));
            assert!(line.ends_with(" saved"));
        }
    }
}
