use std::error::Error;
use std::path::PathBuf;

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self { iter: args.into_iter(), command_name: command_name.to_string() }
    }

    /// Extract a string value for a flag
    pub fn extract_value(
        &mut self,
        flag: &str,
    ) -> Result<String, Box<dyn Error>> {
        self.iter.next().ok_or_else(|| {
            format!("Provide a value after {} for {}", flag, self.command_name)
                .into()
        })
    }

    /// Get next positional argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }
}

/// Flags accepted before or after any command.
#[derive(Default, Debug)]
pub struct GlobalFlags {
    pub workspace: Option<PathBuf>,
    pub plain: bool,
}

/// Split global flags out of `args`, returning them with the remaining
/// positional arguments in order.
pub fn parse_global_flags(
    args: Vec<String>,
    command_name: &str,
) -> Result<(GlobalFlags, Vec<String>), Box<dyn Error>> {
    let mut flags = GlobalFlags::default();
    let mut positional = Vec::new();
    let mut parser = ArgParser::new(args, command_name);
    while let Some(arg) = parser.next() {
        match arg.as_str() {
            "-w" | "--workspace" => {
                let value = parser.extract_value(&arg)?;
                flags.workspace = Some(PathBuf::from(value));
            }
            "--plain" => flags.plain = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--workspace=") {
                    flags.workspace = Some(PathBuf::from(value));
                } else {
                    positional.push(arg);
                }
            }
        }
    }
    Ok((flags, positional))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_arg_parser_extract_value() {
        let args = strings(&["--workspace", "/tmp/ws"]);
        let mut parser = ArgParser::new(args, "test");
        let flag = parser.next().unwrap();
        assert_eq!(flag, "--workspace");
        let value = parser.extract_value("--workspace").unwrap();
        assert_eq!(value, "/tmp/ws");
        assert!(parser.extract_value("--workspace").is_err());
    }

    #[test]
    fn test_global_flags_anywhere() {
        let (flags, rest) = parse_global_flags(
            strings(&["open", "--plain", "a.txt", "-w", "/ws"]),
            "wn",
        )
        .unwrap();
        assert!(flags.plain);
        assert_eq!(flags.workspace, Some(PathBuf::from("/ws")));
        assert_eq!(rest, vec!["open", "a.txt"]);
    }

    #[test]
    fn test_workspace_equals_form_and_missing_value() {
        let (flags, rest) =
            parse_global_flags(strings(&["--workspace=/ws", "list"]), "wn")
                .unwrap();
        assert_eq!(flags.workspace, Some(PathBuf::from("/ws")));
        assert_eq!(rest, vec!["list"]);

        let err = parse_global_flags(strings(&["list", "--workspace"]), "wn")
            .unwrap_err();
        assert!(err.to_string().contains("Provide a value after --workspace"));
    }
}
